use std::collections::BTreeMap;

use serde_json::Value as JsonValue;

use gcblocks_core::types::{BodyKind, PROJECT_PLACEHOLDER};
use gcblocks_core::{InvocationConfig, OperationDescriptor};

use crate::auth::SecretValue;
use crate::error::BlockError;
use crate::executor::http::HttpRequestParts;

/// Assemble the single outbound request for one invocation: substituted URL,
/// auth header, and (for mutating operations) the JSON body.
pub fn build_request(
    op: &OperationDescriptor,
    project_id: &str,
    config: &InvocationConfig,
    token: &SecretValue,
) -> Result<HttpRequestParts, BlockError> {
    let url = build_url(op, project_id, config)?;
    let body = build_body(op, config)?;

    let mut headers = BTreeMap::new();
    headers.insert(
        "Authorization".to_string(),
        format!("Bearer {}", token.expose()),
    );
    if body.is_some() {
        headers.insert("Content-Type".to_string(), "application/json".to_string());
    }

    Ok(HttpRequestParts {
        method: op.method.as_str().to_string(),
        url,
        headers,
        body,
    })
}

/// Plain string substitution into the path template. Values are trusted URL
/// path segments; query values go through the standard pair encoder.
fn build_url(
    op: &OperationDescriptor,
    project_id: &str,
    config: &InvocationConfig,
) -> Result<url::Url, BlockError> {
    if project_id.is_empty() {
        return Err(BlockError::Configuration(
            "project id is not configured".to_string(),
        ));
    }

    let mut path = op
        .path
        .replace(&format!("{{{PROJECT_PLACEHOLDER}}}"), project_id);
    for field in op.path_fields() {
        let value = set_value(config, field.name).ok_or_else(|| {
            BlockError::Configuration(format!("missing path field {}", field.name))
        })?;
        path = path.replace(&format!("{{{}}}", field.name), &value_to_string(value));
    }
    if path.contains('{') {
        return Err(BlockError::Configuration(format!(
            "unresolved placeholder in path {path}"
        )));
    }

    let full = format!("{}{}{}", op.service.base_url(), op.service.path_prefix(), path);
    let mut url = url::Url::parse(&full).map_err(|e| BlockError::Configuration(e.to_string()))?;

    let query: Vec<(&str, String)> = op
        .query_fields()
        .filter_map(|f| set_value(config, f.name).map(|v| (f.name, value_to_string(v))))
        .collect();
    if !query.is_empty() {
        let mut qp = url.query_pairs_mut();
        for (k, v) in &query {
            qp.append_pair(k, v);
        }
    }

    Ok(url)
}

/// Collect the request body per the descriptor's body kind. Zero set fields
/// means no body at all, never `{}`.
fn build_body(
    op: &OperationDescriptor,
    config: &InvocationConfig,
) -> Result<Option<Vec<u8>>, BlockError> {
    match op.body {
        BodyKind::None => Ok(None),
        BodyKind::PassThrough => {
            let value = set_value(config, "requestBody").ok_or_else(|| {
                BlockError::Configuration("missing requestBody object".to_string())
            })?;
            serialize_body(value).map(Some)
        }
        BodyKind::Fields => {
            let mut map = serde_json::Map::new();
            for field in op.body_fields() {
                if let Some(value) = set_value(config, field.name) {
                    map.insert(field.name.to_string(), value.clone());
                }
            }
            if map.is_empty() {
                Ok(None)
            } else {
                serialize_body(&JsonValue::Object(map)).map(Some)
            }
        }
    }
}

/// A config entry counts as set only when present and non-null.
fn set_value<'a>(config: &'a InvocationConfig, name: &str) -> Option<&'a JsonValue> {
    config.get(name).filter(|v| !v.is_null())
}

fn serialize_body(value: &JsonValue) -> Result<Vec<u8>, BlockError> {
    serde_json::to_vec(value)
        .map_err(|e| BlockError::Configuration(format!("failed to serialize request body: {e}")))
}

fn value_to_string(v: &JsonValue) -> String {
    match v {
        JsonValue::String(s) => s.clone(),
        JsonValue::Number(n) => n.to_string(),
        JsonValue::Bool(b) => b.to_string(),
        JsonValue::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_value_to_string_strips_quotes_from_strings() {
        assert_eq!(value_to_string(&json!("us-central1")), "us-central1");
        assert_eq!(value_to_string(&json!(50)), "50");
        assert_eq!(value_to_string(&json!(true)), "true");
    }

    #[test]
    fn test_set_value_treats_null_as_unset() {
        let mut config = InvocationConfig::new();
        config.set("etag", json!(null));
        config.set("pageToken", json!("abc"));
        assert!(set_value(&config, "etag").is_none());
        assert!(set_value(&config, "missing").is_none());
        assert_eq!(set_value(&config, "pageToken"), Some(&json!("abc")));
    }
}
