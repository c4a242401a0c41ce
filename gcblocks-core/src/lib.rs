#![forbid(unsafe_code)]

pub mod catalog;
pub mod config;
pub mod error;
pub mod registry;
pub mod types;
pub mod validate;

pub use crate::config::{parse_config_str, ConfigFormat, InvocationConfig};
pub use crate::error::{CoreError, ParseError, ValidationError, Violation};
pub use crate::registry::Registry;
pub use crate::types::{
    BodyKind, FieldLocation, FieldSpec, FieldType, HttpMethod, OperationDescriptor, Service,
};
pub use crate::validate::validate_config;
