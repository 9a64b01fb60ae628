use super::validate::{errors_to_result, SchemaOptions, SchemaValidationRule, SchemaValidator};
use super::{Schema, SchemaContext, SchemaObject, SchemaScalar, SchemaType};
use crate::error::Result;
use crate::scalar::DurationType;
use tracing::debug;

/// The names of GraphQL's built-in scalars, which every schema contains.
/// [Reference](https://spec.graphql.org/October2021/#sec-Scalars.Built-in-Scalars)
pub const BUILT_IN_SCALARS: [&str; 5] = ["String", "Int", "Float", "Boolean", "ID"];

/// A builder that collects types and root types and validates them into a [Schema].
///
/// All types are allocated onto the [SchemaContext] the builder is created with. Types are kept
/// in the order they're added and registering two types with the same name is only caught once
/// the schema is built:
///
/// ```
/// use graphql_duration::{scalar::DurationType, schema::*, text::DurationPattern};
///
/// let ctx = SchemaContext::new();
/// let mut builder = SchemaBuilder::new(&ctx);
///
/// let duration = ctx.alloc(TypeRef::Type("Duration"));
/// let mut query = SchemaObject::new(&ctx, "Query");
/// query.add_field(&ctx, SchemaField::new(&ctx, "elapsed", duration));
///
/// builder
///     .add_duration_type(DurationType::new(DurationPattern::JSON_ROUNDTRIP))
///     .add_object(query)
///     .set_query_type("Query");
///
/// let schema = builder.build().unwrap();
/// let scalar = schema.duration_type("Duration").unwrap();
/// assert_eq!(scalar.pattern(), &DurationPattern::JSON_ROUNDTRIP);
/// ```
pub struct SchemaBuilder<'a> {
    ctx: &'a SchemaContext,
    schema: Schema<'a>,
    validator: SchemaValidator,
    options: SchemaOptions,
}

impl<'a> SchemaBuilder<'a> {
    /// Create a builder containing the built-in scalars and the default validation rules.
    pub fn new(ctx: &'a SchemaContext) -> Self {
        let mut schema = Schema::new(ctx);
        for name in BUILT_IN_SCALARS {
            schema.register(SchemaType::Scalar(ctx.alloc(SchemaScalar::new(name))));
        }
        SchemaBuilder {
            ctx,
            schema,
            validator: SchemaValidator::default(),
            options: SchemaOptions::default(),
        }
    }

    /// Replace the builder's options.
    pub fn with_options(&mut self, options: SchemaOptions) -> &mut Self {
        self.options = options;
        self
    }

    #[inline]
    pub fn options(&self) -> &SchemaOptions {
        &self.options
    }

    /// Register a Duration scalar. Its name is taken from the scalar.
    pub fn add_duration_type(&mut self, scalar: DurationType) -> &mut Self {
        let scalar = SchemaScalar::duration(self.ctx, scalar);
        debug!(
            scalar = scalar.name,
            pattern = %scalar.duration_type().map_or("", |x| x.pattern().text()),
            "registered duration scalar"
        );
        self.schema.register(SchemaType::Scalar(self.ctx.alloc(scalar)));
        self
    }

    /// Register the default `Duration` scalar, unless a type named `Duration` is already known.
    ///
    /// This allows a `Duration` scalar with a custom pattern to be added before the defaults,
    /// which the defaults then won't clash with.
    pub fn add_default_duration_type(&mut self) -> &mut Self {
        if self.schema.get_type(DurationType::NAME).is_none() {
            self.add_duration_type(DurationType::default());
        }
        self
    }

    /// Register an object type.
    pub fn add_object(&mut self, object: SchemaObject<'a>) -> &mut Self {
        self.schema.register(SchemaType::Object(self.ctx.alloc(object)));
        self
    }

    /// Set the name of the query root type. The type may be added before or after this call.
    pub fn set_query_type(&mut self, name: &'a str) -> &mut Self {
        self.schema.query_type = Some(name);
        self
    }

    /// Set the name of the mutation root type. The type may be added before or after this call.
    pub fn set_mutation_type(&mut self, name: &'a str) -> &mut Self {
        self.schema.mutation_type = Some(name);
        self
    }

    /// Add a validation rule that runs after the default rules.
    pub fn add_rule<R: SchemaValidationRule + 'static>(&mut self, rule: R) -> &mut Self {
        self.validator.add_rule(rule);
        self
    }

    /// Validate the collected types and return the finished [Schema].
    ///
    /// When strict validation is enabled and any rule finds a problem, a single
    /// [`ErrorType::Schema`](crate::error::ErrorType::Schema) error is returned that lists all of
    /// them.
    pub fn build(self) -> Result<Schema<'a>> {
        if !self.options.strict_validation {
            debug!("skipped schema validation");
            return Ok(self.schema);
        }

        let errors = self.validator.validate(&self.options, &self.schema);
        if !errors.is_empty() {
            debug!(errors = errors.len(), "schema failed validation");
        }
        errors_to_result(&errors)?;
        Ok(self.schema)
    }
}
