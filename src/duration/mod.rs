//! # Duration Values
//!
//! The `graphql_duration::duration` module contains the [Duration] value that the `Duration`
//! scalar coerces inputs into and serializes outputs from.
//!
//! A [Duration] is stored as an unsigned magnitude of nanoseconds and a separate [Sign]. Negative
//! durations are never represented with negated fields, which keeps carry arithmetic simple and
//! matches how they're written, with a single leading `-` in front of the whole text.
//!
//! [DurationFields] is the unnormalized, field-by-field view of a duration. Any combination of
//! field values may be normalized into a [Duration] as long as the total stays within range:
//!
//! ```
//! use graphql_duration::duration::*;
//!
//! let fields = DurationFields {
//!     hours: 26,
//!     seconds: 70,
//!     ..DurationFields::default()
//! };
//!
//! let duration = Duration::from_fields(fields).unwrap();
//! assert_eq!((duration.days(), duration.hours()), (1, 2));
//! assert_eq!((duration.minutes(), duration.seconds()), (1, 10));
//! ```

#[allow(clippy::module_inception)]
mod duration;
mod fields;

pub use duration::*;
pub use fields::*;
