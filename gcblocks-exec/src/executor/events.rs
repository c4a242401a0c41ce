use async_trait::async_trait;
use serde_json::{json, Value as JsonValue};
use uuid::Uuid;

/// The single output channel every block publishes on.
pub const DEFAULT_CHANNEL: &str = "default";

#[derive(Debug, Clone)]
pub enum Event {
    InvocationStarted {
        invocation_id: Uuid,
        operation: String,
    },
    OutputEmitted {
        invocation_id: Uuid,
        operation: String,
        channel: &'static str,
        payload: JsonValue,
    },
    InvocationFailed {
        invocation_id: Uuid,
        operation: String,
        error: String,
    },
}

#[async_trait]
pub trait EventSink: Send + Sync {
    async fn emit(&self, event: Event);
}

pub struct StdoutEventSink;

#[async_trait]
impl EventSink for StdoutEventSink {
    async fn emit(&self, event: Event) {
        let json = match event {
            Event::InvocationStarted {
                invocation_id,
                operation,
            } => {
                json!({ "type": "invocation.started", "invocation_id": invocation_id.to_string(), "operation": operation })
            }
            Event::OutputEmitted {
                invocation_id,
                operation,
                channel,
                payload,
            } => {
                json!({ "type": "output", "invocation_id": invocation_id.to_string(), "operation": operation, "channel": channel, "payload": payload })
            }
            Event::InvocationFailed {
                invocation_id,
                operation,
                error,
            } => {
                json!({ "type": "invocation.failed", "invocation_id": invocation_id.to_string(), "operation": operation, "error": error })
            }
        };
        println!("{}", serde_json::to_string(&json).unwrap_or_default());
    }
}

pub struct NoOpEventSink;

#[async_trait]
impl EventSink for NoOpEventSink {
    async fn emit(&self, _event: Event) {}
}
