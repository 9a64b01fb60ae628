use super::{DescriptorContext, SchemaError, SchemaValidationRule};
use crate::schema::Schema;

/// Validates that every object type defines one or more fields.
///
/// See [`SchemaValidationRule`]
/// [Reference](https://spec.graphql.org/October2021/#sec-Objects.Type-Validation)
#[derive(Debug, Default, Clone, Copy)]
pub struct ObjectsDefineFields;

impl SchemaValidationRule for ObjectsDefineFields {
    fn validate(&self, _ctx: &DescriptorContext, schema: &Schema, errors: &mut Vec<SchemaError>) {
        for object in schema.objects() {
            if object.fields().is_empty() {
                errors.push(SchemaError::new(format!(
                    "Type {} must define one or more fields.",
                    object.name
                )));
            }
        }
    }
}
