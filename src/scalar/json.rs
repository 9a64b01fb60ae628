use super::{DurationType, Literal, ScalarType};
use crate::duration::Duration;
use crate::error::{Error, ErrorType, Result};
use serde_json::Value as JSValue;
use std::borrow::Cow;
use tracing::debug;

impl<'a> From<&'a JSValue> for Literal<'a> {
    /// Convert a [serde_json::Value] to a [Literal] without casting it to a type.
    fn from(value: &'a JSValue) -> Self {
        match value {
            JSValue::Null => Literal::Null,
            JSValue::Bool(value) => Literal::Boolean(*value),
            JSValue::Number(num) => match num.as_i64() {
                Some(int) => Literal::Int(Cow::Owned(int.to_string())),
                None => {
                    let float = num.as_f64().filter(|x| x.is_finite()).unwrap_or(0.0);
                    Literal::Float(Cow::Owned(float.to_string()))
                }
            },
            JSValue::String(value) => Literal::String(Cow::Borrowed(value.as_str())),
            JSValue::Array(list) => Literal::List(list.iter().map(Literal::from).collect()),
            JSValue::Object(map) => Literal::Object(
                map.iter()
                    .map(|(key, value)| (Cow::Borrowed(key.as_str()), Literal::from(value)))
                    .collect(),
            ),
        }
    }
}

impl DurationType {
    /// Coerce a variable value, as it's received in a request's JSON variables, to a [Duration].
    ///
    /// `null` coerces to `None`; any value that isn't a string or `null` is rejected.
    pub fn coerce_variable(&self, value: &JSValue) -> Result<Option<Duration>> {
        match value {
            JSValue::Null => Ok(None),
            JSValue::String(text) => self.deserialize(text).map(Some),
            value => {
                let kind = Literal::from(value).kind();
                debug!(scalar = %self.name(), %kind, "rejected variable value");
                Err(Error::new(
                    format!(
                        "{} cannot deserialize the given value of type `{}`",
                        self.name(),
                        kind
                    ),
                    Some(ErrorType::GraphQL),
                ))
            }
        }
    }

    /// Serialize a [Duration] into a JSON string value for a response payload.
    #[inline]
    pub fn serialize_json(&self, value: &Duration) -> JSValue {
        JSValue::String(self.serialize(value))
    }
}
