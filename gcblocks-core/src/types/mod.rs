mod descriptor;
mod field;
mod service;

pub use descriptor::{BodyKind, HttpMethod, OperationDescriptor, PROJECT_PLACEHOLDER};
pub use field::{FieldLocation, FieldSpec, FieldType};
pub use service::Service;
