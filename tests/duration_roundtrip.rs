use graphql_duration::duration::Duration;
use graphql_duration::error::{Error, ErrorType};
use graphql_duration::scalar::{DurationType, Literal, ScalarType};
use graphql_duration::schema::*;
use graphql_duration::text::DurationPattern;
use graphql_parser::query::{
    parse_query, Definition, Field, OperationDefinition, Selection, SelectionSet, Value,
};
use indoc::indoc;
use serde_json::{json, Map, Value as JSValue};

const QUERY_FIELDS: [&str; 6] = [
    "positiveWithDecimals",
    "negativeWithDecimals",
    "positiveWithoutDecimals",
    "positiveWithoutSeconds",
    "positiveWithoutMinutes",
    "positiveWithRoundtrip",
];

struct Response {
    data: Option<JSValue>,
    errors: Vec<Error>,
}

fn build_schema(ctx: &SchemaContext) -> Schema<'_> {
    let duration = ctx.alloc(TypeRef::NonNullType(ctx.alloc(TypeRef::Type("Duration"))));

    let mut query = SchemaObject::new(ctx, "Query");
    for name in QUERY_FIELDS {
        query.add_field(ctx, SchemaField::new(ctx, name, duration));
    }

    let mut test = SchemaField::new(ctx, "test", duration);
    test.add_argument(SchemaInputField::new("arg", duration));
    let mut mutation = SchemaObject::new(ctx, "Mutation");
    mutation.add_field(ctx, test);

    let mut builder = SchemaBuilder::new(ctx);
    builder
        .add_object(query)
        .add_object(mutation)
        .set_query_type("Query")
        .set_mutation_type("Mutation")
        .add_duration_type(DurationType::new(DurationPattern::JSON_ROUNDTRIP))
        .add_default_duration_type();
    builder.build().unwrap()
}

fn resolve_query(name: &str) -> Option<Duration> {
    match name {
        "positiveWithDecimals" => Duration::from_parts(123, 7, 53, 10, 19),
        "negativeWithDecimals" => Duration::from_parts(123, 7, 53, 10, 19).map(|x| -x),
        "positiveWithoutDecimals" => Duration::from_parts(123, 7, 53, 10, 0),
        "positiveWithoutSeconds" => Duration::from_parts(123, 7, 53, 0, 0),
        "positiveWithoutMinutes" => Duration::from_parts(123, 7, 0, 0, 0),
        "positiveWithRoundtrip" => Duration::from_parts(123, 26, 0, 70, 0),
        _ => None,
    }
}

/// Coerces a field's `arg` argument, which is either a literal or a variable.
fn coerce_argument<'a>(
    schema: &Schema,
    field: &SchemaField,
    value: &Value<'a, &'a str>,
    variables: &Map<String, JSValue>,
) -> Result<Option<Duration>, Error> {
    let input = field.get_argument("arg").expect("known argument");
    let scalar = schema
        .duration_type(input.input_type.named_type())
        .expect("Duration argument");
    match value {
        Value::Variable(name) => {
            scalar.coerce_variable(variables.get(*name).unwrap_or(&JSValue::Null))
        }
        Value::String(text) => scalar.parse_literal(&Literal::string(text.as_str())),
        Value::Null => scalar.parse_literal(&Literal::Null),
        Value::Int(num) => {
            let text = num.as_i64().expect("small integer").to_string();
            scalar.parse_literal(&Literal::Int(text.into()))
        }
        Value::Boolean(value) => scalar.parse_literal(&Literal::Boolean(*value)),
        _ => panic!("unsupported argument in test document"),
    }
}

fn resolve_field<'a>(
    schema: &Schema,
    root: &SchemaObject,
    field: &Field<'a, &'a str>,
    variables: &Map<String, JSValue>,
) -> Result<JSValue, Error> {
    let schema_field = root.get_field(field.name).expect("known field");
    let result = if root.name == "Mutation" {
        let (_, value) = field
            .arguments
            .iter()
            .find(|(name, _)| *name == "arg")
            .expect("arg argument");
        coerce_argument(schema, schema_field, value, variables)?
            .map(|arg| arg + Duration::from_minutes(10))
    } else {
        resolve_query(field.name)
    };

    let scalar = schema
        .duration_type(schema_field.output_type.named_type())
        .expect("Duration output");
    Ok(result.map_or(JSValue::Null, |duration| scalar.serialize_json(&duration)))
}

fn execute_selection_set<'a>(
    schema: &Schema,
    root: &SchemaObject,
    selection_set: &SelectionSet<'a, &'a str>,
    variables: &Map<String, JSValue>,
) -> Response {
    let mut data = Map::new();
    let mut errors = Vec::new();
    for selection in &selection_set.items {
        if let Selection::Field(field) = selection {
            match resolve_field(schema, root, field, variables) {
                Ok(value) => {
                    data.insert(field.alias.unwrap_or(field.name).to_string(), value);
                }
                Err(error) => errors.push(error),
            }
        }
    }
    Response {
        data: errors.is_empty().then(|| JSValue::Object(data)),
        errors,
    }
}

fn execute(schema: &Schema, query: &str, variables: JSValue) -> Response {
    let document = parse_query::<&str>(query).expect("valid document");
    let variables = match variables {
        JSValue::Object(map) => map,
        _ => Map::new(),
    };
    let operation = document
        .definitions
        .iter()
        .find_map(|definition| match definition {
            Definition::Operation(operation) => Some(operation),
            _ => None,
        })
        .expect("an operation");

    match operation {
        OperationDefinition::SelectionSet(selection_set) => {
            let root = schema.query_type().expect("query root");
            execute_selection_set(schema, root, selection_set, &variables)
        }
        OperationDefinition::Query(query) => {
            let root = schema.query_type().expect("query root");
            execute_selection_set(schema, root, &query.selection_set, &variables)
        }
        OperationDefinition::Mutation(mutation) => {
            let root = schema.mutation_type().expect("mutation root");
            execute_selection_set(schema, root, &mutation.selection_set, &variables)
        }
        OperationDefinition::Subscription(_) => panic!("subscriptions aren't supported"),
    }
}

fn assert_data(response: Response, expected: &str) {
    assert!(response.errors.is_empty(), "{:?}", response.errors);
    assert_eq!(response.data, Some(json!({ "test": expected })));
}

fn assert_single_error(response: Response) {
    assert_eq!(response.data, None);
    assert_eq!(response.errors.len(), 1);
    assert_eq!(response.errors[0].error_type(), ErrorType::GraphQL);
}

const MUTATION_WITH_VARIABLE: &str = indoc! {"
    mutation($arg: Duration!) {
      test(arg: $arg)
    }
"};

fn query_field(field: &str) -> Response {
    let ctx = SchemaContext::new();
    let schema = build_schema(&ctx);
    execute(&schema, &format!("query {{ test: {} }}", field), JSValue::Null)
}

fn mutate_variable(arg: &str) -> Response {
    let ctx = SchemaContext::new();
    let schema = build_schema(&ctx);
    execute(&schema, MUTATION_WITH_VARIABLE, json!({ "arg": arg }))
}

fn mutate_literal(arg: &str) -> Response {
    let ctx = SchemaContext::new();
    let schema = build_schema(&ctx);
    let query = format!("mutation {{ test(arg: \"{}\") }}", arg);
    execute(&schema, &query, JSValue::Null)
}

#[test]
fn query_returns_serialized_data_with_decimals() {
    assert_data(query_field("positiveWithDecimals"), "2959:53:10.019");
}

#[test]
fn query_returns_serialized_data_with_negative_value() {
    assert_data(query_field("negativeWithDecimals"), "-2959:53:10.019");
}

#[test]
fn query_returns_serialized_data_without_decimals() {
    assert_data(query_field("positiveWithoutDecimals"), "2959:53:10");
}

#[test]
fn query_returns_serialized_data_without_seconds() {
    assert_data(query_field("positiveWithoutSeconds"), "2959:53:00");
}

#[test]
fn query_returns_serialized_data_without_minutes() {
    assert_data(query_field("positiveWithoutMinutes"), "2959:00:00");
}

#[test]
fn query_returns_serialized_data_with_roundtrip() {
    assert_data(query_field("positiveWithRoundtrip"), "2978:01:10");
}

#[test]
fn mutation_parses_input_with_decimals() {
    assert_data(mutate_variable("238:01:00.019"), "238:11:00.019");
}

#[test]
fn mutation_parses_input_without_decimals() {
    assert_data(mutate_variable("238:01:00"), "238:11:00");
}

#[test]
fn mutation_parses_input_without_leading_zero() {
    assert_data(mutate_variable("238:01:00"), "238:11:00");
}

#[test]
fn mutation_parses_input_with_negative_value() {
    assert_data(mutate_variable("-238:01:00"), "-237:51:00");
}

#[test]
fn mutation_doesnt_parse_input_with_plus_sign() {
    assert_single_error(mutate_variable("+09:22:01:00"));
}

#[test]
fn mutation_parses_literal_with_decimals() {
    assert_data(mutate_literal("238:01:00.019"), "238:11:00.019");
}

#[test]
fn mutation_parses_literal_without_decimals() {
    assert_data(mutate_literal("238:01:00"), "238:11:00");
}

#[test]
fn mutation_parses_literal_without_leading_zero() {
    assert_data(mutate_literal("238:01:00"), "238:11:00");
}

#[test]
fn mutation_parses_literal_with_negative_value() {
    assert_data(mutate_literal("-238:01:00"), "-237:51:00");
}

#[test]
fn mutation_doesnt_parse_literal_with_plus_sign() {
    assert_single_error(mutate_literal("+238:01:00"));
}

#[test]
fn mutation_rejects_non_string_input() {
    let ctx = SchemaContext::new();
    let schema = build_schema(&ctx);

    let response = execute(&schema, MUTATION_WITH_VARIABLE, json!({ "arg": 10 }));
    assert_single_error(response);

    let response = execute(&schema, "mutation { test(arg: 10) }", JSValue::Null);
    assert_eq!(response.data, None);
    assert_eq!(
        response.errors[0].message(),
        "Duration cannot parse the given literal of type `IntValue`"
    );
}

#[test]
fn shorthand_query_with_aliases() {
    let ctx = SchemaContext::new();
    let schema = build_schema(&ctx);
    let query = indoc! {"
        {
          a: positiveWithoutMinutes
          negativeWithDecimals
        }
    "};
    let response = execute(&schema, query, JSValue::Null);
    assert_eq!(
        response.data,
        Some(json!({
            "a": "2959:00:00",
            "negativeWithDecimals": "-2959:53:10.019",
        }))
    );
}

#[test]
fn plus_sign_error_points_at_the_sign() {
    let response = mutate_variable("+09:22:01:00");
    let error = &response.errors[0];
    assert_eq!(
        error.print(true),
        "GraphQL Error: Invalid Duration value, positive durations must not have a `+` sign\n 1 | +09:22:01:00\n   | ^"
    );
}

#[test]
fn default_pattern_is_kept_apart() {
    let ctx = SchemaContext::new();
    let schema = build_schema(&ctx);
    let scalar = schema.duration_type("Duration").unwrap();
    assert_eq!(scalar.pattern(), &DurationPattern::JSON_ROUNDTRIP);
    assert_eq!(scalar.name(), "Duration");
    assert_eq!(
        schema.types().filter(|schema_type| schema_type.name() == "Duration").count(),
        1
    );
}
