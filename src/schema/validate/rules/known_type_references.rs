use super::{DescriptorContext, SchemaError, SchemaValidationRule};
use crate::schema::Schema;

/// Validates that all fields and arguments reference types that the schema knows and that
/// arguments only accept input types.
///
/// See [`SchemaValidationRule`]
/// [Reference](https://spec.graphql.org/October2021/#sec-Input-and-Output-Types)
#[derive(Debug, Default, Clone, Copy)]
pub struct KnownTypeReferences;

impl SchemaValidationRule for KnownTypeReferences {
    fn validate(&self, _ctx: &DescriptorContext, schema: &Schema, errors: &mut Vec<SchemaError>) {
        for object in schema.objects() {
            for field in object.fields() {
                if field.output_type.of_type(schema).is_none() {
                    errors.push(SchemaError::new(format!(
                        "Unknown type \"{}\" referenced by field {}.{}.",
                        field.output_type.named_type(),
                        object.name,
                        field.name
                    )));
                }

                for arg in field.arguments() {
                    match arg.input_type.of_type(schema) {
                        None => errors.push(SchemaError::new(format!(
                            "Unknown type \"{}\" referenced by argument {}.{}({}:).",
                            arg.input_type.named_type(),
                            object.name,
                            field.name,
                            arg.name
                        ))),
                        Some(arg_type) if !arg_type.is_input_type() => {
                            errors.push(SchemaError::new(format!(
                                "The type of {}.{}({}:) must be Input Type but got: {}.",
                                object.name, field.name, arg.name, arg.input_type
                            )))
                        }
                        Some(_) => {}
                    }
                }
            }
        }
    }
}
