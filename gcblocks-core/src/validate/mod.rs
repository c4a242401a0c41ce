use crate::config::InvocationConfig;
use crate::error::{ValidationError, Violation};
use crate::types::OperationDescriptor;

pub struct Validator {
    violations: Vec<Violation>,
}

impl Validator {
    pub fn new() -> Self {
        Self {
            violations: Vec::new(),
        }
    }

    pub fn finish(self) -> Result<(), ValidationError> {
        if self.violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::new(self.violations))
        }
    }

    pub(crate) fn push(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.violations.push(Violation::new(path, message));
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

/// Check one invocation config against an operation's declared schema:
/// every required field present, every supplied value of the declared type,
/// no fields the operation does not declare.
pub fn validate_config(
    op: &OperationDescriptor,
    config: &InvocationConfig,
) -> Result<(), ValidationError> {
    let mut v = Validator::new();

    for field in &op.fields {
        match config.get(field.name) {
            None | Some(serde_json::Value::Null) => {
                if field.required {
                    v.push(field.name, "required field is missing");
                }
            }
            Some(value) => {
                if !field.ty.matches(value) {
                    v.push(
                        field.name,
                        format!("expected a value of type {}", field.ty.as_str()),
                    );
                }
            }
        }
    }

    for key in config.keys() {
        if op.field(key).is_none() {
            v.push(key, format!("unknown field for operation {}", op.name));
        }
    }

    v.finish()
}
