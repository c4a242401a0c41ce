use serde_json::Value as JsonValue;

/// Value type accepted for an input field, mirroring the platform's config
/// schema primitives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    String,
    Number,
    Boolean,
    Object,
    Array,
}

impl FieldType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Number => "number",
            FieldType::Boolean => "boolean",
            FieldType::Object => "object",
            FieldType::Array => "array",
        }
    }

    /// Whether a supplied JSON value is acceptable for this field type.
    pub fn matches(&self, value: &JsonValue) -> bool {
        match self {
            FieldType::String => value.is_string(),
            FieldType::Number => value.is_number(),
            FieldType::Boolean => value.is_boolean(),
            FieldType::Object => value.is_object(),
            FieldType::Array => value.is_array(),
        }
    }
}

/// Where a field's value ends up in the outbound request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldLocation {
    Path,
    Query,
    Body,
}

/// One declared input field of an operation.
#[derive(Debug, Clone, serde::Serialize)]
pub struct FieldSpec {
    pub name: &'static str,
    pub description: &'static str,
    #[serde(rename = "type")]
    pub ty: FieldType,
    #[serde(rename = "in")]
    pub location: FieldLocation,
    pub required: bool,
}

impl FieldSpec {
    pub const fn required(
        name: &'static str,
        ty: FieldType,
        location: FieldLocation,
        description: &'static str,
    ) -> Self {
        Self {
            name,
            description,
            ty,
            location,
            required: true,
        }
    }

    pub const fn optional(
        name: &'static str,
        ty: FieldType,
        location: FieldLocation,
        description: &'static str,
    ) -> Self {
        Self {
            name,
            description,
            ty,
            location,
            required: false,
        }
    }
}
