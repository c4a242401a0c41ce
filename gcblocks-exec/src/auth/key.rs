use crate::auth::SecretValue;
use crate::error::BlockError;

/// Parsed service-account key file, as downloaded from the Cloud Console.
/// Only the fields the token flow needs are retained.
#[derive(Debug, Clone)]
pub struct ServiceAccountKey {
    pub key_type: String,
    pub project_id: String,
    pub private_key_id: String,
    pub private_key: SecretValue,
    pub client_email: String,
    pub token_uri: String,
}

impl ServiceAccountKey {
    pub fn from_json(json: &str) -> Result<Self, BlockError> {
        #[derive(serde::Deserialize)]
        struct RawKey {
            r#type: String,
            project_id: String,
            private_key_id: String,
            private_key: String,
            client_email: String,
            token_uri: String,
        }

        let raw: RawKey = serde_json::from_str(json).map_err(|e| {
            BlockError::Authentication(format!("invalid service account key JSON: {e}"))
        })?;
        Ok(Self {
            key_type: raw.r#type,
            project_id: raw.project_id,
            private_key_id: raw.private_key_id,
            private_key: SecretValue::from_string(raw.private_key),
            client_email: raw.client_email,
            token_uri: raw.token_uri,
        })
    }

    pub fn validate(&self) -> Result<(), BlockError> {
        if self.key_type != "service_account" {
            return Err(BlockError::Authentication(format!(
                "expected key type 'service_account', got '{}'",
                self.key_type
            )));
        }
        if self.project_id.is_empty() {
            return Err(BlockError::Authentication("project_id is empty".to_string()));
        }
        if self.private_key.expose().is_empty() {
            return Err(BlockError::Authentication("private_key is empty".to_string()));
        }
        if self.client_email.is_empty() {
            return Err(BlockError::Authentication("client_email is empty".to_string()));
        }
        if self.token_uri.is_empty() {
            return Err(BlockError::Authentication("token_uri is empty".to_string()));
        }
        Ok(())
    }
}
