//! OAuth2 bearer-token acquisition.
//!
//! The service-account flow is the documented JWT assertion exchange: sign a
//! claim set with the key's RSA private key, POST it to the key's
//! `token_uri`, and use the returned access token. Tokens are fetched per
//! invocation; nothing is cached here.

use async_trait::async_trait;
use chrono::Utc;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};

use crate::auth::{SecretValue, ServiceAccountKey};
use crate::error::BlockError;

const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";

#[derive(serde::Serialize)]
struct JwtClaims {
    /// Issuer, the service account email.
    iss: String,
    /// Requested scopes, space-separated.
    scope: String,
    /// Audience, the token endpoint.
    aud: String,
    exp: i64,
    iat: i64,
}

#[async_trait]
pub trait TokenProvider: Send + Sync + std::fmt::Debug {
    async fn token(&self, scopes: &[&str]) -> Result<SecretValue, BlockError>;
}

/// Uses a pre-supplied bearer token verbatim, whatever the scopes.
#[derive(Debug)]
pub struct StaticTokenProvider {
    token: SecretValue,
}

impl StaticTokenProvider {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: SecretValue::from_string(token),
        }
    }

    pub fn from_value(token: SecretValue) -> Self {
        Self { token }
    }
}

#[async_trait]
impl TokenProvider for StaticTokenProvider {
    async fn token(&self, _scopes: &[&str]) -> Result<SecretValue, BlockError> {
        Ok(self.token.clone())
    }
}

/// Exchanges a signed JWT assertion for an access token on every call.
#[derive(Debug)]
pub struct ServiceAccountTokenProvider {
    key: ServiceAccountKey,
    http: reqwest::Client,
}

impl ServiceAccountTokenProvider {
    pub fn new(key: ServiceAccountKey) -> Self {
        Self {
            key,
            http: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl TokenProvider for ServiceAccountTokenProvider {
    async fn token(&self, scopes: &[&str]) -> Result<SecretValue, BlockError> {
        let now = Utc::now().timestamp();
        let claims = JwtClaims {
            iss: self.key.client_email.clone(),
            scope: scopes.join(" "),
            aud: self.key.token_uri.clone(),
            exp: now + 3600,
            iat: now,
        };

        let header = Header {
            alg: Algorithm::RS256,
            kid: Some(self.key.private_key_id.clone()),
            ..Default::default()
        };

        // Key files exported with escaped line breaks are normalised first.
        let pem = self.key.private_key.expose().replace("\\n", "\n");
        let encoding_key = EncodingKey::from_rsa_pem(pem.as_bytes())
            .map_err(|e| BlockError::Authentication(format!("failed to load private key: {e}")))?;
        let assertion = encode(&header, &claims, &encoding_key)
            .map_err(|e| BlockError::Authentication(format!("failed to sign JWT assertion: {e}")))?;

        let params = [("grant_type", JWT_BEARER_GRANT), ("assertion", assertion.as_str())];
        let resp = self
            .http
            .post(&self.key.token_uri)
            .form(&params)
            .send()
            .await
            .map_err(|e| {
                BlockError::Authentication(format!("token exchange request failed: {e}"))
            })?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(BlockError::Authentication(format!(
                "token exchange failed (HTTP {status}): {body}"
            )));
        }

        #[derive(serde::Deserialize)]
        struct TokenResponse {
            access_token: String,
        }

        let token: TokenResponse = resp.json().await.map_err(|e| {
            BlockError::Authentication(format!("failed to parse token response: {e}"))
        })?;

        Ok(SecretValue::from_string(token.access_token))
    }
}
