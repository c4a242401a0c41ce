pub mod events;
pub mod http;
pub mod request;
pub mod response;

use std::sync::Arc;

use serde_json::Value as JsonValue;
use uuid::Uuid;

use gcblocks_core::{validate_config, InvocationConfig, OperationDescriptor};

use crate::auth::AppCredentials;
use crate::error::BlockError;
use crate::executor::events::{Event, EventSink, DEFAULT_CHANNEL};
use crate::executor::http::{HttpClient, HttpError};

/// App-level configuration shared by every block of an installation: the
/// target project plus one of the two credential forms.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub project_id: String,
    pub credentials: AppCredentials,
}

/// Runs block invocations: one authenticated HTTP call per triggering event,
/// one output event on success. Stateless across invocations.
pub struct Invoker {
    http: Arc<dyn HttpClient>,
    event_sink: Arc<dyn EventSink>,
}

impl Invoker {
    pub fn new(http: Arc<dyn HttpClient>, event_sink: Arc<dyn EventSink>) -> Self {
        Self { http, event_sink }
    }

    /// Run one invocation end to end. Returns the emitted payload; on any
    /// failure nothing is published on the output channel.
    pub async fn invoke(
        &self,
        op: &OperationDescriptor,
        app: &AppConfig,
        config: &InvocationConfig,
    ) -> Result<JsonValue, BlockError> {
        let invocation_id = Uuid::new_v4();
        self.event_sink
            .emit(Event::InvocationStarted {
                invocation_id,
                operation: op.name.to_string(),
            })
            .await;

        match self.run(op, app, config).await {
            Ok(payload) => {
                self.event_sink
                    .emit(Event::OutputEmitted {
                        invocation_id,
                        operation: op.name.to_string(),
                        channel: DEFAULT_CHANNEL,
                        payload: payload.clone(),
                    })
                    .await;
                Ok(payload)
            }
            Err(err) => {
                self.event_sink
                    .emit(Event::InvocationFailed {
                        invocation_id,
                        operation: op.name.to_string(),
                        error: err.to_string(),
                    })
                    .await;
                Err(err)
            }
        }
    }

    // Linear and terminal on first completion: resolve credentials, acquire
    // the token, build the request, send, gate the status, parse.
    async fn run(
        &self,
        op: &OperationDescriptor,
        app: &AppConfig,
        config: &InvocationConfig,
    ) -> Result<JsonValue, BlockError> {
        validate_config(op, config).map_err(|e| {
            let detail = e
                .violations
                .iter()
                .map(|v| format!("{}: {}", v.path, v.message))
                .collect::<Vec<_>>()
                .join("; ");
            BlockError::Configuration(format!("invalid input config: {detail}"))
        })?;

        let provider = app.credentials.resolve()?;
        let token = provider.token(op.scopes).await?;
        let req = request::build_request(op, &app.project_id, config, &token)?;

        let resp = self.http.send(req).await.map_err(|e| match e {
            HttpError::Network(m) | HttpError::Other(m) => BlockError::Transport(m),
        })?;

        response::parse_output(&resp)
    }
}
