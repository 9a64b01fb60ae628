//! # Validation Rules for Schemas
//!
//! This module contains logic to run validation rules on a [Schema] before it's used. Each rule
//! implements [`SchemaValidationRule`] and appends a [`SchemaError`] for every problem it finds to
//! a shared list of errors. A rule never aborts validation, so that all problems of a schema are
//! reported at once.
//!
//! The rules this module already comes with, run in this order by default, are:
//!
//! - [`rules::ValidTypeNames`]: checks that all type, field, and argument names are valid names
//!   and don't use the reserved prefix
//! - [`rules::UniqueTypeNames`]: checks that no two types share the same name
//! - [`rules::RootOperationTypes`]: checks that a query root type is set and that all root types
//!   are object types
//! - [`rules::ObjectsDefineFields`]: checks that every object type defines at least one field
//! - [`rules::KnownTypeReferences`]: checks that fields and arguments only reference known types
//!   and that arguments accept input types
//!
//! Custom rules are added to a [`SchemaValidator`] and run in the order they're added:
//!
//! ```
//! use graphql_duration::schema::{validate::*, Schema, SchemaContext};
//!
//! struct NoMutations;
//!
//! impl SchemaValidationRule for NoMutations {
//!     fn validate(
//!         &self,
//!         _ctx: &DescriptorContext,
//!         schema: &Schema,
//!         errors: &mut Vec<SchemaError>,
//!     ) {
//!         if schema.mutation_type_name().is_some() {
//!             errors.push(SchemaError::new("Mutations aren't supported."));
//!         }
//!     }
//! }
//!
//! let ctx = SchemaContext::new();
//! let schema = Schema::new(&ctx);
//! let mut validator = SchemaValidator::new();
//! validator.add_rule(NoMutations);
//! assert!(validator.validate(&SchemaOptions::default(), &schema).is_empty());
//! ```

mod context;

pub mod rules;

pub use context::{errors_to_result, DescriptorContext, SchemaError, SchemaOptions};

use super::Schema;
use tracing::trace;

/// Trait for a rule that checks a [Schema] for a single kind of problem.
///
/// Rules must not stop on the first problem they find but add an error for each. They're run
/// through dynamic dispatch and must hence stay object-safe.
pub trait SchemaValidationRule: Send + Sync {
    /// Appends an error to `errors` for each problem found in `schema`.
    fn validate(&self, ctx: &DescriptorContext, schema: &Schema, errors: &mut Vec<SchemaError>);

    /// Returns a name for the rule, used to trace which rules have been run.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// An ordered list of [`SchemaValidationRule`]s that are all run against the same schema.
pub struct SchemaValidator {
    rules: Vec<Box<dyn SchemaValidationRule>>,
}

impl SchemaValidator {
    /// Create a validator without any rules.
    pub fn new() -> Self {
        SchemaValidator { rules: Vec::new() }
    }

    /// Add a rule that runs after all rules that have been added before it.
    pub fn add_rule<R: SchemaValidationRule + 'static>(&mut self, rule: R) {
        self.rules.push(Box::new(rule));
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Runs all rules in order and returns all errors they've found.
    pub fn validate(&self, options: &SchemaOptions, schema: &Schema) -> Vec<SchemaError> {
        let ctx = DescriptorContext::new(options);
        let mut errors = Vec::new();
        for rule in &self.rules {
            let before = errors.len();
            rule.validate(&ctx, schema, &mut errors);
            trace!(
                rule = rule.name(),
                errors = errors.len() - before,
                "ran schema validation rule"
            );
        }
        errors
    }
}

/// The default validator runs all of this module's rules in the order they're listed in.
impl Default for SchemaValidator {
    fn default() -> Self {
        let mut validator = SchemaValidator::new();
        validator.add_rule(rules::ValidTypeNames);
        validator.add_rule(rules::UniqueTypeNames);
        validator.add_rule(rules::RootOperationTypes);
        validator.add_rule(rules::ObjectsDefineFields);
        validator.add_rule(rules::KnownTypeReferences);
        validator
    }
}

impl std::fmt::Debug for SchemaValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.rules.iter().map(|rule| rule.name()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::SchemaContext;
    use std::sync::{Arc, Mutex};

    struct Recorder {
        label: &'static str,
        seen: Arc<Mutex<Vec<&'static str>>>,
    }

    impl SchemaValidationRule for Recorder {
        fn validate(
            &self,
            _ctx: &DescriptorContext,
            _schema: &Schema,
            errors: &mut Vec<SchemaError>,
        ) {
            self.seen.lock().unwrap().push(self.label);
            errors.push(SchemaError::new(format!("{} after {}", self.label, errors.len())));
        }
    }

    #[test]
    fn runs_rules_in_order() {
        let ctx = SchemaContext::new();
        let schema = Schema::new(&ctx);
        let seen = Arc::new(Mutex::new(Vec::new()));

        let mut validator = SchemaValidator::new();
        assert!(validator.is_empty());
        for label in ["first", "second", "third"] {
            validator.add_rule(Recorder {
                label,
                seen: seen.clone(),
            });
        }
        assert_eq!(validator.len(), 3);

        let errors = validator.validate(&SchemaOptions::default(), &schema);
        assert_eq!(*seen.lock().unwrap(), vec!["first", "second", "third"]);
        assert_eq!(
            errors,
            vec![
                SchemaError::new("first after 0"),
                SchemaError::new("second after 1"),
                SchemaError::new("third after 2"),
            ]
        );
    }

    #[test]
    fn default_rules() {
        let validator = SchemaValidator::default();
        assert_eq!(validator.len(), 5);
        assert!(format!("{:?}", validator).contains("ValidTypeNames"));
    }
}
