use crate::error::{Error, ErrorType, Result};
use std::fmt;

/// Options that control how a [Schema](crate::schema::Schema) is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaOptions {
    /// Whether validation rules run when the schema is built. When this is disabled, a schema is
    /// built as-is even if it's invalid.
    pub strict_validation: bool,
    /// The prefix that names which are defined by the schema itself may not start with.
    pub reserved_prefix: String,
}

impl Default for SchemaOptions {
    fn default() -> Self {
        SchemaOptions {
            strict_validation: true,
            reserved_prefix: String::from("__"),
        }
    }
}

/// The `DescriptorContext` gives validation rules read access to how the schema is configured.
#[derive(Debug, Clone, Copy)]
pub struct DescriptorContext<'o> {
    options: &'o SchemaOptions,
}

impl<'o> DescriptorContext<'o> {
    pub fn new(options: &'o SchemaOptions) -> Self {
        DescriptorContext { options }
    }

    #[inline]
    pub fn options(&self) -> &'o SchemaOptions {
        self.options
    }

    /// Checks whether a name starts with the reserved prefix.
    #[inline]
    pub fn is_reserved(&self, name: &str) -> bool {
        let prefix = self.options.reserved_prefix.as_str();
        !prefix.is_empty() && name.starts_with(prefix)
    }
}

/// A single problem that a validation rule found in a schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaError {
    message: String,
}

impl SchemaError {
    pub fn new<S: Into<String>>(message: S) -> Self {
        SchemaError {
            message: message.into(),
        }
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Convert a list of schema errors into a result which carries an error if validation has failed.
///
/// All messages are listed in the error's context, one per line, in the order they were found.
pub fn errors_to_result(errors: &[SchemaError]) -> Result<()> {
    if errors.is_empty() {
        Ok(())
    } else {
        let mut context = String::new();
        let mut is_first = true;
        for error in errors {
            if is_first {
                is_first = false;
            } else {
                context.push('\n');
            }
            context.push_str("- ");
            context.push_str(error.message());
        }
        Err(Error::new_with_context(
            "Schema failed validation",
            None,
            &context,
            Some(ErrorType::Schema),
        ))
    }
}
