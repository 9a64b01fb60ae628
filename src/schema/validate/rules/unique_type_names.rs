use super::{DescriptorContext, SchemaError, SchemaValidationRule};
use crate::schema::Schema;
use hashbrown::HashSet;

/// Validates that no two types of a schema share the same name.
///
/// This catches a second scalar being registered next to one that's already known by its name,
/// for instance a custom `Duration` scalar next to the default one.
///
/// See [`SchemaValidationRule`]
/// [Reference](https://spec.graphql.org/October2021/#sec-Schema)
#[derive(Debug, Default, Clone, Copy)]
pub struct UniqueTypeNames;

impl SchemaValidationRule for UniqueTypeNames {
    fn validate(&self, _ctx: &DescriptorContext, schema: &Schema, errors: &mut Vec<SchemaError>) {
        let mut seen = HashSet::new();
        let mut reported = HashSet::new();
        for schema_type in schema.types() {
            let name = schema_type.name();
            if !seen.insert(name) && reported.insert(name) {
                errors.push(SchemaError::new(format!(
                    "There can be only one type named \"{}\".",
                    name
                )));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_utils::{object, run};
    use super::*;
    use crate::scalar::DurationType;
    use crate::schema::{SchemaContext, SchemaScalar, SchemaType};
    use crate::text::DurationPattern;

    #[test]
    fn unique_names() {
        let ctx = SchemaContext::new();
        let mut schema = Schema::new(&ctx);
        schema.register(object(&ctx, "Query", &[("field", "Duration")]));
        schema.register(SchemaType::Scalar(
            ctx.alloc(SchemaScalar::duration(&ctx, DurationType::default())),
        ));
        assert!(run(UniqueTypeNames, &schema).is_empty());
    }

    #[test]
    fn duplicate_duration_scalars() {
        let ctx = SchemaContext::new();
        let mut schema = Schema::new(&ctx);
        for pattern in [
            DurationPattern::ROUNDTRIP,
            DurationPattern::JSON_ROUNDTRIP,
            DurationPattern::JSON_ROUNDTRIP,
        ] {
            let scalar = SchemaScalar::duration(&ctx, DurationType::new(pattern));
            schema.register(SchemaType::Scalar(ctx.alloc(scalar)));
        }
        assert_eq!(
            run(UniqueTypeNames, &schema),
            vec!["There can be only one type named \"Duration\"."]
        );
    }
}
