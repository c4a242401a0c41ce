use thiserror::Error;

/// Terminal failure of one block invocation. No variant is retried at this
/// layer; the hosting platform owns retry policy.
#[derive(Debug, Clone, Error)]
pub enum BlockError {
    /// Bad or incomplete app/input configuration; surfaced before any
    /// network call.
    #[error("configuration error: {0}")]
    Configuration(String),
    /// Key parsing, JWT signing, or token exchange failed.
    #[error("authentication error: {0}")]
    Authentication(String),
    /// The API answered outside the ok range. The body is not attached.
    #[error("upstream api error: {status} {status_text}")]
    UpstreamApi { status: u16, status_text: String },
    /// The response body was not valid JSON where one was expected.
    #[error("malformed response: {0}")]
    MalformedResponse(String),
    /// Connect/DNS/TLS failure surfaced by the HTTP client.
    #[error("transport error: {0}")]
    Transport(String),
}
