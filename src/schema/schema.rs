use super::SchemaContext;
use crate::scalar::DurationType;
use bumpalo::collections::Vec;
use bumpalo::Bump;
use hashbrown::hash_map::DefaultHashBuilder;
use hashbrown::HashMap;

/// Schema Definition
///
/// A schema is created from root types for each kind of operation and the named types that these
/// reference. In this library the schema is never executable and serves to carry type
/// information, in particular which scalars coerce [Durations](crate::duration::Duration).
///
/// All registrations are kept in order, including ones that share a name, so that validation
/// rules may inspect them. Looking a type up by name returns the first registration.
/// [Reference](https://spec.graphql.org/October2021/#sec-Schema)
#[derive(Debug, Clone, PartialEq)]
pub struct Schema<'a> {
    pub(crate) query_type: Option<&'a str>,
    pub(crate) mutation_type: Option<&'a str>,
    pub(crate) types: Vec<'a, SchemaType<'a>>,
    pub(crate) lookup: HashMap<&'a str, SchemaType<'a>, DefaultHashBuilder, &'a Bump>,
}

impl<'a> Schema<'a> {
    /// Create an empty schema without any types.
    pub fn new(ctx: &'a SchemaContext) -> Self {
        Schema {
            query_type: None,
            mutation_type: None,
            types: Vec::new_in(&ctx.arena),
            lookup: HashMap::new_in(&ctx.arena),
        }
    }

    /// Returns whether the schema is a default, empty schema
    pub fn is_empty(&self) -> bool {
        self.types.is_empty() && self.query_type.is_none() && self.mutation_type.is_none()
    }

    /// Adds a type to the registrations. A type whose name is already known isn't reachable by
    /// name, but is still listed in [Self::types].
    pub(crate) fn register(&mut self, schema_type: SchemaType<'a>) {
        self.types.push(schema_type);
        self.lookup.entry(schema_type.name()).or_insert(schema_type);
    }

    /// Returns the configured name of the query root type.
    #[inline]
    pub fn query_type_name(&self) -> Option<&'a str> {
        self.query_type
    }

    /// Returns the configured name of the mutation root type.
    #[inline]
    pub fn mutation_type_name(&self) -> Option<&'a str> {
        self.mutation_type
    }

    /// Returns the root object type for query operations
    #[inline]
    pub fn query_type(&self) -> Option<&'a SchemaObject<'a>> {
        self.query_type
            .and_then(|name| self.get_type(name))
            .and_then(|schema_type| schema_type.object())
    }

    /// Returns the root object type for mutation operations
    #[inline]
    pub fn mutation_type(&self) -> Option<&'a SchemaObject<'a>> {
        self.mutation_type
            .and_then(|name| self.get_type(name))
            .and_then(|schema_type| schema_type.object())
    }

    /// Retrieves a kind by name from known schema types.
    #[inline]
    pub fn get_type(&self, name: &str) -> Option<SchemaType<'a>> {
        self.lookup.get(name).copied()
    }

    /// Returns all type registrations in the order they were added.
    #[inline]
    pub fn types(&self) -> impl Iterator<Item = SchemaType<'a>> + '_ {
        self.types.iter().copied()
    }

    /// Returns all object types of the schema in the order they were added.
    pub fn objects(&self) -> impl Iterator<Item = &'a SchemaObject<'a>> + '_ {
        self.types().filter_map(|schema_type| schema_type.object())
    }

    /// Returns the [DurationType] a scalar is bound to, if the named type is a Duration scalar.
    #[inline]
    pub fn duration_type(&self, name: &str) -> Option<&'a DurationType> {
        self.get_type(name)
            .and_then(|schema_type| schema_type.scalar())
            .and_then(|scalar| scalar.duration_type())
    }
}

/// An Object type definition.
///
/// Objects define a list of fields, each of which return a named type.
/// [Reference](https://spec.graphql.org/October2021/#sec-Objects)
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaObject<'a> {
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub(crate) fields: Vec<'a, &'a SchemaField<'a>>,
}

impl<'a> SchemaObject<'a> {
    #[inline]
    pub fn new(ctx: &'a SchemaContext, name: &'a str) -> Self {
        SchemaObject {
            name,
            description: None,
            fields: Vec::new_in(&ctx.arena),
        }
    }

    /// Add a new [SchemaField] to the list of fields
    pub fn add_field(&mut self, ctx: &'a SchemaContext, field: SchemaField<'a>) {
        self.fields.push(ctx.alloc(field));
    }

    /// Get all fields in the order they were added
    #[inline]
    pub fn fields(&self) -> &[&'a SchemaField<'a>] {
        &self.fields
    }

    /// Get a known field by name
    #[inline]
    pub fn get_field(&self, name: &str) -> Option<&'a SchemaField<'a>> {
        self.fields.iter().find(|field| field.name == name).copied()
    }
}

/// An object Field type definition.
///
/// A field is like a function that given its arguments as input values produces an output value.
/// [Reference](https://spec.graphql.org/October2021/#FieldsDefinition)
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaField<'a> {
    pub name: &'a str,
    pub(crate) arguments: Vec<'a, SchemaInputField<'a>>,
    pub output_type: &'a TypeRef<'a>,
}

impl<'a> SchemaField<'a> {
    #[inline]
    pub fn new(ctx: &'a SchemaContext, name: &'a str, output_type: &'a TypeRef<'a>) -> Self {
        SchemaField {
            name,
            arguments: Vec::new_in(&ctx.arena),
            output_type,
        }
    }

    pub fn add_argument(&mut self, arg: SchemaInputField<'a>) {
        self.arguments.push(arg);
    }

    #[inline]
    pub fn arguments(&self) -> &[SchemaInputField<'a>] {
        &self.arguments
    }

    #[inline]
    pub fn get_argument(&self, name: &str) -> Option<&SchemaInputField<'a>> {
        self.arguments.iter().find(|arg| arg.name == name)
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub struct SchemaInputField<'a> {
    pub name: &'a str,
    pub input_type: &'a TypeRef<'a>,
}

impl<'a> SchemaInputField<'a> {
    #[inline]
    pub fn new(name: &'a str, input_type: &'a TypeRef<'a>) -> Self {
        SchemaInputField { name, input_type }
    }
}

/// What a scalar coerces its values with.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum ScalarBinding<'a> {
    /// One of GraphQL's built-in scalars, `String`, `Int`, `Float`, `Boolean`, or `ID`.
    BuiltIn,
    /// A custom scalar coercing [Durations](crate::duration::Duration).
    Duration(&'a DurationType),
}

/// A Scalar type definition.
///
/// Scalars represent primitive leaf values in GraphQL that are represented with a specific
/// serializer and deserializer, which makes the values returnable to a GraphQL client or readable
/// by a GraphQL API.
/// [Reference](https://spec.graphql.org/October2021/#sec-Scalars)
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaScalar<'a> {
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub binding: ScalarBinding<'a>,
}

impl<'a> SchemaScalar<'a> {
    #[inline]
    pub fn new(name: &'a str) -> Self {
        SchemaScalar {
            name,
            description: None,
            binding: ScalarBinding::BuiltIn,
        }
    }

    /// Create a scalar for a [DurationType], named and described the way the scalar is.
    pub fn duration(ctx: &'a SchemaContext, scalar: DurationType) -> Self {
        use crate::scalar::ScalarType;
        let scalar = ctx.alloc(scalar);
        SchemaScalar {
            name: scalar.name(),
            description: scalar.description(),
            binding: ScalarBinding::Duration(scalar),
        }
    }

    #[inline]
    pub fn duration_type(&self) -> Option<&'a DurationType> {
        match self.binding {
            ScalarBinding::Duration(scalar) => Some(scalar),
            ScalarBinding::BuiltIn => None,
        }
    }
}

/// A named type enum that represents all GraphQL definition types this schema supports.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Types)
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum SchemaType<'a> {
    Object(&'a SchemaObject<'a>),
    Scalar(&'a SchemaScalar<'a>),
}

impl<'a> SchemaType<'a> {
    #[inline]
    pub fn name(&self) -> &'a str {
        match self {
            SchemaType::Object(x) => x.name,
            SchemaType::Scalar(x) => x.name,
        }
    }

    #[inline]
    pub fn description(&self) -> Option<&'a str> {
        match self {
            SchemaType::Object(x) => x.description,
            SchemaType::Scalar(x) => x.description,
        }
    }

    pub fn object(&self) -> Option<&'a SchemaObject<'a>> {
        match self {
            SchemaType::Object(x) => Some(x),
            _ => None,
        }
    }

    pub fn scalar(&self) -> Option<&'a SchemaScalar<'a>> {
        match self {
            SchemaType::Scalar(x) => Some(x),
            _ => None,
        }
    }

    /// Returns whether arguments may accept this type.
    #[inline]
    pub fn is_input_type(&self) -> bool {
        matches!(self, SchemaType::Scalar(_))
    }

    /// Returns the kind of the type as it's named in introspection.
    #[inline]
    pub fn kind(&self) -> &'static str {
        match self {
            SchemaType::Object(_) => "OBJECT",
            SchemaType::Scalar(_) => "SCALAR",
        }
    }
}

impl<'a> From<&'a SchemaObject<'a>> for SchemaType<'a> {
    #[inline]
    fn from(schema_object: &'a SchemaObject<'a>) -> Self {
        SchemaType::Object(schema_object)
    }
}

impl<'a> From<&'a SchemaScalar<'a>> for SchemaType<'a> {
    #[inline]
    fn from(schema_scalar: &'a SchemaScalar<'a>) -> Self {
        SchemaType::Scalar(schema_scalar)
    }
}

/// A reference to a named type, possibly wrapped in lists and non-null markers.
#[derive(Clone, Copy, PartialEq)]
pub enum TypeRef<'a> {
    Type(&'a str),
    ListType(&'a TypeRef<'a>),
    NonNullType(&'a TypeRef<'a>),
}

impl<'a> TypeRef<'a> {
    /// Returns the name of the innermost named type.
    #[inline]
    pub fn named_type(&self) -> &'a str {
        match self {
            TypeRef::Type(name) => name,
            TypeRef::ListType(of_type) => of_type.named_type(),
            TypeRef::NonNullType(of_type) => of_type.named_type(),
        }
    }

    /// Resolves the innermost named type against a schema.
    #[inline]
    pub fn of_type(&self, schema: &Schema<'a>) -> Option<SchemaType<'a>> {
        schema.get_type(self.named_type())
    }

    #[inline]
    pub fn is_non_null(&self) -> bool {
        matches!(self, TypeRef::NonNullType(_))
    }
}

impl<'a> std::fmt::Debug for TypeRef<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Type(arg0) => f.debug_tuple("TypeRef").field(&arg0).finish(),
            Self::ListType(arg0) => f.debug_tuple("ListType").field(arg0).finish(),
            Self::NonNullType(arg0) => f.debug_tuple("NonNullType").field(arg0).finish(),
        }
    }
}

/// Prints the type reference the way it's written in a GraphQL document, e.g. `[Duration!]`.
impl<'a> std::fmt::Display for TypeRef<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TypeRef::Type(name) => f.write_str(name),
            TypeRef::ListType(of_type) => write!(f, "[{}]", of_type),
            TypeRef::NonNullType(of_type) => write!(f, "{}!", of_type),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::DurationPattern;

    #[test]
    fn type_refs() {
        let ctx = SchemaContext::new();
        let named = ctx.alloc(TypeRef::Type("Duration"));
        let non_null = ctx.alloc(TypeRef::NonNullType(named));
        let list = TypeRef::ListType(non_null);
        assert_eq!(list.named_type(), "Duration");
        assert_eq!(list.to_string(), "[Duration!]");
        assert!(non_null.is_non_null());
        assert!(!list.is_non_null());
    }

    #[test]
    fn first_registration_wins() {
        let ctx = SchemaContext::new();
        let mut schema = Schema::new(&ctx);
        assert!(schema.is_empty());

        let json = ctx.alloc(SchemaScalar::duration(
            &ctx,
            DurationType::new(DurationPattern::JSON_ROUNDTRIP),
        ));
        let roundtrip = ctx.alloc(SchemaScalar::duration(&ctx, DurationType::default()));
        schema.register(SchemaType::Scalar(json));
        schema.register(SchemaType::Scalar(roundtrip));

        assert_eq!(schema.types().count(), 2);
        assert_eq!(
            schema.duration_type("Duration").unwrap().pattern(),
            &DurationPattern::JSON_ROUNDTRIP
        );
        assert_eq!(schema.get_type("Duration").unwrap().kind(), "SCALAR");
        assert_eq!(schema.get_type("Query"), None);
    }

    #[test]
    fn fields_and_arguments() {
        let ctx = SchemaContext::new();
        let duration = ctx.alloc(TypeRef::Type("Duration"));
        let mut field = SchemaField::new(&ctx, "test", duration);
        field.add_argument(SchemaInputField::new("arg", duration));
        let mut object = SchemaObject::new(&ctx, "Mutation");
        object.add_field(&ctx, field);

        let field = object.get_field("test").unwrap();
        assert_eq!(field.arguments().len(), 1);
        assert_eq!(field.get_argument("arg").unwrap().input_type, duration);
        assert_eq!(object.get_field("missing"), None);
    }
}
