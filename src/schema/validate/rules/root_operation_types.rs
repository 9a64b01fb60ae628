use super::{DescriptorContext, SchemaError, SchemaValidationRule};
use crate::schema::Schema;

/// Validates that a schema has a query root type and that every configured root type exists and
/// is an object type.
///
/// See [`SchemaValidationRule`]
/// [Reference](https://spec.graphql.org/October2021/#sec-Root-Operation-Types)
#[derive(Debug, Default, Clone, Copy)]
pub struct RootOperationTypes;

fn check_root(
    schema: &Schema,
    operation: &str,
    name: Option<&str>,
    errors: &mut Vec<SchemaError>,
) {
    let Some(name) = name else {
        return;
    };
    match schema.get_type(name) {
        None => errors.push(SchemaError::new(format!(
            "Unknown type \"{}\" set as the {} root type.",
            name,
            operation.to_lowercase()
        ))),
        Some(schema_type) if schema_type.object().is_none() => {
            errors.push(SchemaError::new(format!(
                "{} root type must be Object type, it cannot be {}.",
                operation, name
            )))
        }
        Some(_) => {}
    }
}

impl SchemaValidationRule for RootOperationTypes {
    fn validate(&self, _ctx: &DescriptorContext, schema: &Schema, errors: &mut Vec<SchemaError>) {
        if schema.query_type_name().is_none() {
            errors.push(SchemaError::new("Query root type must be provided."));
        }
        check_root(schema, "Query", schema.query_type_name(), errors);
        check_root(schema, "Mutation", schema.mutation_type_name(), errors);
    }
}
