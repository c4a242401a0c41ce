use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value as JsonValue;

use crate::types::{FieldLocation, FieldSpec, Service};

static PLACEHOLDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([A-Za-z][A-Za-z0-9]*)\}").expect("valid"));

/// Placeholder reserved for the app-configured project id. Never declared as
/// an input field.
pub const PROJECT_PLACEHOLDER: &str = "project";

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }

    /// Whether this verb ever carries a request body.
    pub fn takes_body(&self) -> bool {
        matches!(self, HttpMethod::Post | HttpMethod::Patch)
    }
}

/// How the request body is assembled from the invocation config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub enum BodyKind {
    /// The operation never sends a body.
    None,
    /// Declared Body-located fields are collected into one JSON object;
    /// unset fields are omitted, and zero set fields means no body at all.
    Fields,
    /// The single `requestBody` object field is forwarded unmodified.
    PassThrough,
}

/// Static definition of one REST call: the declarative half of a block.
///
/// Descriptors are built once at registration time and never mutated.
/// Differences between operations are pure data (verb, template, fields,
/// scopes); the execution pipeline is shared.
#[derive(Debug, Clone, serde::Serialize)]
pub struct OperationDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    pub service: Service,
    pub method: HttpMethod,
    /// Path template relative to the service's versioned prefix, with
    /// `{param}` placeholders. `{project}` is reserved for the configured
    /// project id; every other placeholder must match a Path field.
    pub path: &'static str,
    pub scopes: &'static [&'static str],
    pub fields: Vec<FieldSpec>,
    pub body: BodyKind,
    #[serde(rename = "outputShape")]
    pub output_shape: JsonValue,
}

impl OperationDescriptor {
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Placeholder names appearing in the path template, in order.
    pub fn path_placeholders(&self) -> Vec<&str> {
        PLACEHOLDER_RE
            .captures_iter(self.path)
            .map(|c| c.get(1).expect("group").as_str())
            .collect()
    }

    pub fn path_fields(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields
            .iter()
            .filter(|f| f.location == FieldLocation::Path)
    }

    pub fn query_fields(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields
            .iter()
            .filter(|f| f.location == FieldLocation::Query)
    }

    pub fn body_fields(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields
            .iter()
            .filter(|f| f.location == FieldLocation::Body)
    }
}
