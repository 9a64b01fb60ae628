mod known_type_references;
mod objects_define_fields;
mod root_operation_types;
mod unique_type_names;
mod valid_type_names;

pub use super::{DescriptorContext, SchemaError, SchemaValidationRule};
pub use known_type_references::*;
pub use objects_define_fields::*;
pub use root_operation_types::*;
pub use unique_type_names::*;
pub use valid_type_names::*;
