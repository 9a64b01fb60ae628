use super::{DescriptorContext, SchemaError, SchemaValidationRule};
use crate::schema::{Schema, SchemaType};

/// Validates that every type, field, and argument name is a valid GraphQL name and that none of
/// them start with the reserved prefix, which is `__` by default.
///
/// See [`SchemaValidationRule`]
/// [Reference](https://spec.graphql.org/October2021/#sec-Names)
#[derive(Debug, Default, Clone, Copy)]
pub struct ValidTypeNames;

#[inline]
fn is_name(name: &str) -> bool {
    let mut bytes = name.bytes();
    match bytes.next() {
        Some(first) if first == b'_' || first.is_ascii_alphabetic() => {
            bytes.all(|byte| byte == b'_' || byte.is_ascii_alphanumeric())
        }
        _ => false,
    }
}

fn check_name(ctx: &DescriptorContext, name: &str, errors: &mut Vec<SchemaError>) {
    if !is_name(name) {
        errors.push(SchemaError::new(format!(
            "Names must only contain [_a-zA-Z0-9] and start with [_a-zA-Z] but \"{}\" does not.",
            name
        )));
    } else if ctx.is_reserved(name) {
        errors.push(SchemaError::new(format!(
            "Name \"{}\" must not begin with \"{}\", which is reserved by GraphQL introspection.",
            name,
            ctx.options().reserved_prefix
        )));
    }
}

impl SchemaValidationRule for ValidTypeNames {
    fn validate(&self, ctx: &DescriptorContext, schema: &Schema, errors: &mut Vec<SchemaError>) {
        for schema_type in schema.types() {
            check_name(ctx, schema_type.name(), errors);
            if let SchemaType::Object(object) = schema_type {
                for field in object.fields() {
                    check_name(ctx, field.name, errors);
                    for arg in field.arguments() {
                        check_name(ctx, arg.name, errors);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_utils::{object, run};
    use super::*;
    use crate::schema::{SchemaContext, SchemaScalar};

    #[test]
    fn valid_names() {
        let ctx = SchemaContext::new();
        let mut schema = Schema::new(&ctx);
        schema.register(object(&ctx, "Query", &[("_private", "Int"), ("field2", "Int")]));
        schema.register(SchemaType::Scalar(ctx.alloc(SchemaScalar::new("Duration"))));
        assert!(run(ValidTypeNames, &schema).is_empty());
    }

    #[test]
    fn invalid_names() {
        let ctx = SchemaContext::new();
        let mut schema = Schema::new(&ctx);
        schema.register(object(&ctx, "Query", &[("2field", "Int"), ("__field", "Int")]));
        schema.register(SchemaType::Scalar(ctx.alloc(SchemaScalar::new("Dur-ation"))));
        assert_eq!(
            run(ValidTypeNames, &schema),
            vec![
                "Names must only contain [_a-zA-Z0-9] and start with [_a-zA-Z] but \"2field\" does not.",
                "Name \"__field\" must not begin with \"__\", which is reserved by GraphQL introspection.",
                "Names must only contain [_a-zA-Z0-9] and start with [_a-zA-Z] but \"Dur-ation\" does not.",
            ]
        );
    }

    #[test]
    fn empty_name() {
        assert!(!is_name(""));
        assert!(is_name("_"));
        assert!(!is_name("Durée"));
    }
}
