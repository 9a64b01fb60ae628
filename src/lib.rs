//! `graphql_duration`
//! =========
//!
//! _Strict, pattern-driven Duration scalar handling for GraphQL._
//!
//! The **`graphql_duration`** library exposes fixed, calendar-independent lengths of time to
//! GraphQL as a custom `Duration` scalar. It follows two goals:
//!
//! - To convert durations to and from text exactly, with a single explicit pattern per scalar
//! - To reject malformed or ambiguous text, such as an explicit `+` sign, with a precise error
//!
//! The crate is split into a few modules that build on one another:
//!
//! - [`duration`] contains the [Duration](duration::Duration) value itself, a sign and a
//!   nanosecond magnitude, and its arithmetic.
//! - [`text`] contains [DurationPattern](text::DurationPattern), which formats and parses the
//!   text forms of durations, for instance `-2959:53:10.019`.
//! - [`scalar`] contains the [DurationType](scalar::DurationType) GraphQL scalar, which coerces
//!   literals and variables with one pattern.
//! - [`schema`] contains a small schema model and the
//!   [validation rules](schema::validate::SchemaValidationRule) that check it when it's built.
//!
//! ```
//! use graphql_duration::{duration::Duration, scalar::*, text::DurationPattern};
//!
//! let scalar = DurationType::new(DurationPattern::JSON_ROUNDTRIP);
//! let input = scalar.parse_literal(&Literal::string("238:01:00.019")).unwrap().unwrap();
//! let output = input + Duration::from_minutes(10);
//! assert_eq!(scalar.serialize(&output), "238:11:00.019");
//! ```
//!
//! [A good place to start learning more about this crate is the `text` module...](text)

pub mod duration;
pub mod error;
pub mod scalar;
pub mod schema;
pub mod text;

pub use bumpalo;
