use super::{Literal, ScalarType};
use crate::duration::Duration;
use crate::error::{Error, ErrorType, Result};
use crate::text::DurationPattern;
use std::borrow::Cow;
use tracing::debug;

/// The `Duration` scalar, which exposes [Duration] values as text in one [DurationPattern].
///
/// The scalar is immutable once it's created and can be shared freely, for instance across a
/// schema and all requests executed against it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DurationType {
    name: Cow<'static, str>,
    description: Option<Cow<'static, str>>,
    pattern: DurationPattern,
}

impl DurationType {
    pub const NAME: &'static str = "Duration";
    pub const DESCRIPTION: &'static str =
        "Represents a fixed (and calendar-independent) length of time.";

    /// Creates the `Duration` scalar with the default description, using the given pattern for
    /// parsing and serializing.
    pub fn new(pattern: DurationPattern) -> Self {
        DurationType {
            name: Cow::Borrowed(Self::NAME),
            description: Some(Cow::Borrowed(Self::DESCRIPTION)),
            pattern,
        }
    }

    /// Renames the scalar.
    pub fn with_name<S: Into<Cow<'static, str>>>(mut self, name: S) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_description<S: Into<Cow<'static, str>>>(mut self, description: Option<S>) -> Self {
        self.description = description.map(Into::into);
        self
    }

    /// Returns the pattern this scalar is configured with.
    #[inline]
    pub fn pattern(&self) -> &DurationPattern {
        &self.pattern
    }

    /// Re-wraps a codec failure so that it's reported as a coercion error of this scalar.
    fn coercion_error(&self, error: Error) -> Error {
        debug!(scalar = %self.name, reason = %error.message(), "rejected duration text");
        Error {
            error_type: ErrorType::GraphQL,
            ..error
        }
    }
}

impl Default for DurationType {
    fn default() -> Self {
        DurationType::new(DurationPattern::default())
    }
}

impl ScalarType for DurationType {
    type Runtime = Duration;

    #[inline]
    fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    #[inline]
    fn is_instance_of(&self, literal: &Literal) -> bool {
        matches!(literal, Literal::String(_))
    }

    fn parse_literal(&self, literal: &Literal) -> Result<Option<Duration>> {
        match literal {
            Literal::Null => Ok(None),
            Literal::String(text) => self.deserialize(text).map(Some),
            literal => {
                debug!(scalar = %self.name, kind = %literal.kind(), "rejected literal");
                Err(Error::new(
                    format!(
                        "{} cannot parse the given literal of type `{}`",
                        self.name,
                        literal.kind()
                    ),
                    Some(ErrorType::GraphQL),
                ))
            }
        }
    }

    #[inline]
    fn parse_value(&self, value: &Duration) -> Literal<'static> {
        Literal::String(Cow::Owned(self.serialize(value)))
    }

    #[inline]
    fn serialize(&self, value: &Duration) -> String {
        self.pattern.format(value)
    }

    #[inline]
    fn deserialize(&self, text: &str) -> Result<Duration> {
        self.pattern
            .parse(text)
            .map_err(|error| self.coercion_error(error))
    }
}
