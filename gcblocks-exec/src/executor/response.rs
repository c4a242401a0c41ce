use serde_json::Value as JsonValue;

use crate::error::BlockError;
use crate::executor::http::HttpResponseParts;

/// Gate the status and parse the body. Any 2xx with an empty body yields
/// `{}`; the payload is otherwise forwarded verbatim.
pub fn parse_output(resp: &HttpResponseParts) -> Result<JsonValue, BlockError> {
    if !(200..300).contains(&resp.status) {
        return Err(BlockError::UpstreamApi {
            status: resp.status,
            status_text: resp.status_text.clone(),
        });
    }

    let text = std::str::from_utf8(&resp.body)
        .map_err(|e| BlockError::MalformedResponse(e.to_string()))?;
    if text.trim().is_empty() {
        return Ok(JsonValue::Object(serde_json::Map::new()));
    }
    serde_json::from_str(text).map_err(|e| BlockError::MalformedResponse(e.to_string()))
}
