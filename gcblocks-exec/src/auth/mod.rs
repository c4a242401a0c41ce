mod key;
mod secret;
mod token;

pub use key::ServiceAccountKey;
pub use secret::SecretValue;
pub use token::{ServiceAccountTokenProvider, StaticTokenProvider, TokenProvider};

use crate::error::BlockError;

/// App-level credential configuration: the two mutually-exclusive
/// authentication paths every operation consumes identically.
#[derive(Debug, Clone, Default)]
pub struct AppCredentials {
    /// A literal bearer token, used verbatim when present.
    pub access_token: Option<SecretValue>,
    /// Raw service-account key JSON, parsed only when no literal token is
    /// configured.
    pub service_account_key: Option<SecretValue>,
}

impl AppCredentials {
    pub fn from_access_token(token: impl Into<String>) -> Self {
        Self {
            access_token: Some(SecretValue::from_string(token)),
            service_account_key: None,
        }
    }

    pub fn from_service_account_key(json: impl Into<String>) -> Self {
        Self {
            access_token: None,
            service_account_key: Some(SecretValue::from_string(json)),
        }
    }

    /// Pick the token source for one invocation. A literal access token wins
    /// outright; the key JSON is not even parsed then.
    pub fn resolve(&self) -> Result<Box<dyn TokenProvider>, BlockError> {
        if let Some(token) = &self.access_token {
            return Ok(Box::new(StaticTokenProvider::from_value(token.clone())));
        }
        match &self.service_account_key {
            Some(json) => {
                let key = ServiceAccountKey::from_json(json.expose())?;
                key.validate()?;
                Ok(Box::new(ServiceAccountTokenProvider::new(key)))
            }
            None => Err(BlockError::Configuration(
                "neither accessToken nor serviceAccountKey is configured".to_string(),
            )),
        }
    }
}
