//! # Duration Text Patterns
//!
//! The `graphql_duration::text` module converts [Durations](crate::duration::Duration) to and
//! from text. A [DurationPattern] describes one text format and is compiled once, either as one
//! of the named patterns or from pattern text, and then used for both directions:
//!
//! ```
//! use graphql_duration::{duration::Duration, text::DurationPattern};
//!
//! let pattern = DurationPattern::JSON_ROUNDTRIP;
//! let duration = pattern.parse("238:01:00.019").unwrap();
//! let duration = duration + Duration::from_minutes(10);
//! assert_eq!(pattern.format(&duration), "238:11:00.019");
//!
//! assert!(pattern.parse("+238:01:00").is_err());
//! ```
//!
//! Serialization never fails. Parsing fails with a single [Error](crate::error::Error) of type
//! [`ErrorType::Syntax`](crate::error::ErrorType::Syntax), which points at the offending part of
//! the input.

mod lexer;
mod parser;
mod pattern;
mod printer;


pub use pattern::*;
pub use printer::PrintSegment;
