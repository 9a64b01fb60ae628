//! # Using Schema Definitions
//!
//! The `graphql_duration::schema` module contains utilities to describe a GraphQL Schema that
//! exposes Duration scalars. A [SchemaBuilder] collects object types and scalars, such as a
//! [DurationType](crate::scalar::DurationType) configured with one pattern, and validates them
//! with [validation rules](validate) into a [Schema]:
//!
//! ```
//! use graphql_duration::{schema::*, text::DurationPattern};
//!
//! let ctx = SchemaContext::new();
//! let mut builder = SchemaBuilder::new(&ctx);
//!
//! let duration = ctx.alloc(TypeRef::Type("Duration"));
//! let mut query = SchemaObject::new(&ctx, "Query");
//! query.add_field(&ctx, SchemaField::new(&ctx, "elapsed", duration));
//!
//! builder.add_default_duration_type().add_object(query).set_query_type("Query");
//!
//! let schema = builder.build().unwrap();
//! assert_eq!(
//!     schema.duration_type("Duration").unwrap().pattern(),
//!     &DurationPattern::ROUNDTRIP
//! );
//! ```
//!
//! [More information on the Schema struct.](Schema)

mod builder;
mod context;
#[allow(clippy::module_inception)]
mod schema;

pub mod validate;

pub use builder::{SchemaBuilder, BUILT_IN_SCALARS};
pub use context::SchemaContext;
pub use schema::*;
