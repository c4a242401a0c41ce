//! Static descriptor definitions for every supported operation.
//!
//! Paths, verbs, and field names mirror the published discovery documents of
//! Compute Engine v1, GKE v1, and Cloud Run v2.

use serde_json::{json, Map, Value as JsonValue};

use crate::types::{
    BodyKind, FieldLocation, FieldSpec, FieldType, HttpMethod, OperationDescriptor, Service,
};

pub mod compute;
pub mod gke;
pub mod run;

pub const SCOPE_CLOUD_PLATFORM: &str = "https://www.googleapis.com/auth/cloud-platform";
pub const SCOPE_COMPUTE: &str = "https://www.googleapis.com/auth/compute";
pub const SCOPE_COMPUTE_READONLY: &str = "https://www.googleapis.com/auth/compute.readonly";

/// Every catalogue entry across all services, in registration order.
pub fn all() -> Vec<OperationDescriptor> {
    let mut ops = compute::operations();
    ops.extend(gke::operations());
    ops.extend(run::operations());
    ops
}

pub(crate) struct OpBuilder {
    name: &'static str,
    description: &'static str,
    service: Service,
    method: HttpMethod,
    path: &'static str,
    scopes: &'static [&'static str],
    fields: Vec<FieldSpec>,
    body: BodyKind,
    output_shape: Option<JsonValue>,
}

pub(crate) fn op(
    service: Service,
    method: HttpMethod,
    name: &'static str,
    path: &'static str,
    description: &'static str,
) -> OpBuilder {
    OpBuilder {
        name,
        description,
        service,
        method,
        path,
        scopes: &[SCOPE_CLOUD_PLATFORM],
        fields: Vec::new(),
        body: BodyKind::None,
        output_shape: None,
    }
}

impl OpBuilder {
    pub fn scopes(mut self, scopes: &'static [&'static str]) -> Self {
        self.scopes = scopes;
        self
    }

    /// Required string field substituted into the path template.
    pub fn path_param(mut self, name: &'static str, description: &'static str) -> Self {
        self.fields.push(FieldSpec::required(
            name,
            FieldType::String,
            FieldLocation::Path,
            description,
        ));
        self
    }

    pub fn query(mut self, name: &'static str, ty: FieldType, description: &'static str) -> Self {
        self.fields
            .push(FieldSpec::optional(name, ty, FieldLocation::Query, description));
        self
    }

    pub fn required_query(
        mut self,
        name: &'static str,
        ty: FieldType,
        description: &'static str,
    ) -> Self {
        self.fields
            .push(FieldSpec::required(name, ty, FieldLocation::Query, description));
        self
    }

    pub fn body_field(
        mut self,
        name: &'static str,
        ty: FieldType,
        description: &'static str,
    ) -> Self {
        self.body = BodyKind::Fields;
        self.fields
            .push(FieldSpec::optional(name, ty, FieldLocation::Body, description));
        self
    }

    pub fn required_body_field(
        mut self,
        name: &'static str,
        ty: FieldType,
        description: &'static str,
    ) -> Self {
        self.body = BodyKind::Fields;
        self.fields
            .push(FieldSpec::required(name, ty, FieldLocation::Body, description));
        self
    }

    /// The operation takes one pre-built resource object, forwarded as-is.
    pub fn request_body(mut self, description: &'static str) -> Self {
        self.body = BodyKind::PassThrough;
        self.fields.push(FieldSpec::required(
            "requestBody",
            FieldType::Object,
            FieldLocation::Body,
            description,
        ));
        self
    }

    pub fn output(mut self, shape: JsonValue) -> Self {
        self.output_shape = Some(shape);
        self
    }

    pub fn build(self) -> OperationDescriptor {
        OperationDescriptor {
            name: self.name,
            description: self.description,
            service: self.service,
            method: self.method,
            path: self.path,
            scopes: self.scopes,
            fields: self.fields,
            body: self.body,
            output_shape: self
                .output_shape
                .unwrap_or_else(|| json!({ "type": "object" })),
        }
    }
}

/// Loose object shape listing the response's top-level property names.
pub(crate) fn object_shape(props: &[&str]) -> JsonValue {
    let mut properties = Map::new();
    for p in props {
        properties.insert((*p).to_string(), json!({}));
    }
    json!({ "type": "object", "properties": properties })
}

/// Compute Engine mutating calls all resolve to a zonal/regional/global
/// Operation resource.
pub(crate) fn compute_operation_shape() -> JsonValue {
    object_shape(&[
        "id",
        "name",
        "operationType",
        "targetLink",
        "status",
        "progress",
        "insertTime",
        "selfLink",
    ])
}

pub(crate) fn compute_list_shape() -> JsonValue {
    object_shape(&["kind", "id", "items", "nextPageToken", "selfLink"])
}

/// Cloud Run v2 mutating calls resolve to a long-running operation envelope.
pub(crate) fn run_operation_shape() -> JsonValue {
    object_shape(&["name", "metadata", "done", "response", "error"])
}

pub(crate) fn run_list_shape(items_field: &str) -> JsonValue {
    object_shape(&[items_field, "nextPageToken"])
}
