use std::{borrow::Cow, fmt};

/// An input value as a scalar receives it, either from a literal in a GraphQL document or from a
/// variable.
///
/// The textual values keep their source text, which may be borrowed from a parsed document or a
/// JSON value.
/// [Reference](https://spec.graphql.org/October2021/#sec-Input-Values)
#[derive(Debug, PartialEq, Clone)]
pub enum Literal<'a> {
    Null,
    Boolean(bool),
    Int(Cow<'a, str>),
    Float(Cow<'a, str>),
    String(Cow<'a, str>),
    Enum(Cow<'a, str>),
    Variable(Cow<'a, str>),
    List(Vec<Literal<'a>>),
    Object(Vec<(Cow<'a, str>, Literal<'a>)>),
}

/// An enum of identifiers representing kinds of [Literal]s.
///
/// This enum can be printed using the [`fmt::Display`] trait and is used to name the kind of
/// value a scalar rejected.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum LiteralKind {
    Null,
    Boolean,
    Int,
    Float,
    String,
    Enum,
    Variable,
    List,
    Object,
}

impl<'a> Literal<'a> {
    /// Create a string literal.
    #[inline]
    pub fn string<S: Into<Cow<'a, str>>>(value: S) -> Self {
        Literal::String(value.into())
    }

    #[inline]
    pub fn kind(&self) -> LiteralKind {
        match self {
            Literal::Null => LiteralKind::Null,
            Literal::Boolean(_) => LiteralKind::Boolean,
            Literal::Int(_) => LiteralKind::Int,
            Literal::Float(_) => LiteralKind::Float,
            Literal::String(_) => LiteralKind::String,
            Literal::Enum(_) => LiteralKind::Enum,
            Literal::Variable(_) => LiteralKind::Variable,
            Literal::List(_) => LiteralKind::List,
            Literal::Object(_) => LiteralKind::Object,
        }
    }

    /// Returns the text of a string literal.
    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Literal::String(value) => Some(value.as_ref()),
            _ => None,
        }
    }

    /// Copies all borrowed text so the literal outlives its source.
    pub fn into_owned(self) -> Literal<'static> {
        let owned = |value: Cow<'a, str>| Cow::Owned(value.into_owned());
        match self {
            Literal::Null => Literal::Null,
            Literal::Boolean(value) => Literal::Boolean(value),
            Literal::Int(value) => Literal::Int(owned(value)),
            Literal::Float(value) => Literal::Float(owned(value)),
            Literal::String(value) => Literal::String(owned(value)),
            Literal::Enum(value) => Literal::Enum(owned(value)),
            Literal::Variable(value) => Literal::Variable(owned(value)),
            Literal::List(list) => {
                Literal::List(list.into_iter().map(Literal::into_owned).collect())
            }
            Literal::Object(fields) => Literal::Object(
                fields
                    .into_iter()
                    .map(|(name, value)| (owned(name), value.into_owned()))
                    .collect(),
            ),
        }
    }
}

impl fmt::Display for LiteralKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LiteralKind::Null => "NullValue",
            LiteralKind::Boolean => "BooleanValue",
            LiteralKind::Int => "IntValue",
            LiteralKind::Float => "FloatValue",
            LiteralKind::String => "StringValue",
            LiteralKind::Enum => "EnumValue",
            LiteralKind::Variable => "Variable",
            LiteralKind::List => "ListValue",
            LiteralKind::Object => "ObjectValue",
        })
    }
}
