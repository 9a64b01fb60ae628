//! # GraphQL Scalar Types
//!
//! The `graphql_duration::scalar` module exposes durations to GraphQL as a custom scalar. A
//! [ScalarType] coerces input values, which arrive either as a [Literal] in a document or as a
//! variable, and serializes its runtime values into the text a response carries.
//!
//! [DurationType] is the scalar for [Durations](crate::duration::Duration) and is configured with
//! exactly one [DurationPattern](crate::text::DurationPattern):
//!
//! ```
//! use graphql_duration::scalar::{DurationType, Literal, ScalarType};
//! use graphql_duration::text::DurationPattern;
//!
//! let scalar = DurationType::new(DurationPattern::JSON_ROUNDTRIP);
//! let duration = scalar.parse_literal(&Literal::string("-238:01:00")).unwrap().unwrap();
//! assert_eq!(scalar.serialize(&duration), "-238:01:00");
//!
//! let error = scalar.parse_literal(&Literal::string("+09:22:01:00")).unwrap_err();
//! assert_eq!(
//!     error.message(),
//!     "Invalid Duration value, positive durations must not have a `+` sign"
//! );
//! ```
//! [Reference](https://spec.graphql.org/October2021/#sec-Scalars)

mod duration_type;
mod literal;

#[cfg(feature = "json")]
mod json;

pub use duration_type::DurationType;
pub use literal::{Literal, LiteralKind};

use crate::error::Result;

/// Trait for GraphQL scalars that coerce input values into a runtime type and serialize it back.
///
/// Implementations must be pure, as a scalar is shared between all requests against a schema.
pub trait ScalarType: Send + Sync {
    /// The value a scalar coerces its inputs into.
    type Runtime;

    /// Returns the name of the scalar as it's exposed in a schema.
    fn name(&self) -> &str;

    fn description(&self) -> Option<&str> {
        None
    }

    /// Returns a URL pointing at the scalar's specification, if it has one.
    fn specified_by_url(&self) -> Option<&str> {
        None
    }

    /// Checks whether a literal is of a kind the scalar accepts. This doesn't check its contents.
    fn is_instance_of(&self, literal: &Literal) -> bool;

    /// Coerces an input literal into the scalar's runtime value. `null` coerces to `None`.
    fn parse_literal(&self, literal: &Literal) -> Result<Option<Self::Runtime>>;

    /// Converts a runtime value back into a literal that [Self::parse_literal] accepts.
    fn parse_value(&self, value: &Self::Runtime) -> Literal<'static>;

    /// Serializes a runtime value into its text form. This never fails.
    fn serialize(&self, value: &Self::Runtime) -> String;

    /// Coerces a text form, as it's received in a variable, into the scalar's runtime value.
    fn deserialize(&self, text: &str) -> Result<Self::Runtime>;
}
