use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::json;

use gcblocks_core::{InvocationConfig, Registry};
use gcblocks_exec::auth::AppCredentials;
use gcblocks_exec::error::BlockError;
use gcblocks_exec::executor::events::{Event, EventSink};
use gcblocks_exec::executor::http::{HttpClient, HttpError, HttpRequestParts, HttpResponseParts};
use gcblocks_exec::{AppConfig, Invoker};

struct MockHttpClient {
    response: HttpResponseParts,
    requests: Mutex<Vec<HttpRequestParts>>,
}

impl MockHttpClient {
    fn returning(status: u16, status_text: &str, body: &[u8]) -> Arc<Self> {
        Arc::new(Self {
            response: HttpResponseParts {
                status,
                status_text: status_text.to_string(),
                body: body.to_vec(),
            },
            requests: Mutex::new(Vec::new()),
        })
    }

    fn requests(&self) -> Vec<HttpRequestParts> {
        self.requests.lock().expect("lock").clone()
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn send(&self, req: HttpRequestParts) -> Result<HttpResponseParts, HttpError> {
        self.requests.lock().expect("lock").push(req);
        Ok(self.response.clone())
    }
}

#[derive(Default)]
struct CollectingSink {
    events: Mutex<Vec<Event>>,
}

impl CollectingSink {
    fn events(&self) -> Vec<Event> {
        self.events.lock().expect("lock").clone()
    }

    fn outputs(&self) -> Vec<(String, serde_json::Value)> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::OutputEmitted {
                    channel, payload, ..
                } => Some((channel.to_string(), payload)),
                _ => None,
            })
            .collect()
    }
}

#[async_trait]
impl EventSink for CollectingSink {
    async fn emit(&self, event: Event) {
        self.events.lock().expect("lock").push(event);
    }
}

fn app_with_token(token: &str) -> AppConfig {
    AppConfig {
        project_id: "p1".to_string(),
        credentials: AppCredentials::from_access_token(token),
    }
}

fn config(pairs: &[(&str, serde_json::Value)]) -> InvocationConfig {
    let mut c = InvocationConfig::new();
    for (k, v) in pairs {
        c.set(*k, v.clone());
    }
    c
}

#[tokio::test]
async fn success_emits_the_payload_on_the_default_channel() {
    let http = MockHttpClient::returning(200, "OK", b"{\"name\":\"x\"}");
    let sink = Arc::new(CollectingSink::default());
    let invoker = Invoker::new(http.clone(), sink.clone());

    let op = Registry::builtin()
        .get("compute.backendServices.get")
        .expect("present");
    let out = invoker
        .invoke(op, &app_with_token("tok"), &config(&[("backendService", json!("r1"))]))
        .await
        .expect("invoke");

    assert_eq!(out, json!({ "name": "x" }));
    let outputs = sink.outputs();
    assert_eq!(outputs.len(), 1);
    assert_eq!(outputs[0].0, "default");
    assert_eq!(outputs[0].1, json!({ "name": "x" }));
}

#[tokio::test]
async fn empty_ok_body_emits_an_empty_object() {
    let http = MockHttpClient::returning(200, "OK", b"");
    let sink = Arc::new(CollectingSink::default());
    let invoker = Invoker::new(http.clone(), sink.clone());

    let op = Registry::builtin()
        .get("compute.backendServices.get")
        .expect("present");
    let out = invoker
        .invoke(op, &app_with_token("tok"), &config(&[("backendService", json!("r1"))]))
        .await
        .expect("invoke");

    assert_eq!(out, json!({}));
    assert_eq!(sink.outputs()[0].1, json!({}));
}

#[tokio::test]
async fn upstream_404_fails_without_emitting_output() {
    let http = MockHttpClient::returning(404, "Not Found", b"{\"error\":{\"code\":404}}");
    let sink = Arc::new(CollectingSink::default());
    let invoker = Invoker::new(http.clone(), sink.clone());

    let op = Registry::builtin()
        .get("compute.backendServices.get")
        .expect("present");
    let err = invoker
        .invoke(op, &app_with_token("tok"), &config(&[("backendService", json!("gone"))]))
        .await
        .unwrap_err();

    let msg = err.to_string();
    assert!(msg.contains("404"));
    assert!(msg.contains("Not Found"));
    assert!(sink.outputs().is_empty());
    assert!(sink
        .events()
        .iter()
        .any(|e| matches!(e, Event::InvocationFailed { .. })));
}

#[tokio::test]
async fn literal_access_token_skips_key_parsing_and_is_used_verbatim() {
    let http = MockHttpClient::returning(200, "OK", b"{}");
    let sink = Arc::new(CollectingSink::default());
    let invoker = Invoker::new(http.clone(), sink);

    // The key JSON is not even valid; resolution must never look at it.
    let app = AppConfig {
        project_id: "p1".to_string(),
        credentials: gcblocks_exec::auth::AppCredentials {
            access_token: Some(gcblocks_exec::auth::SecretValue::from_string("ya29.literal")),
            service_account_key: Some(gcblocks_exec::auth::SecretValue::from_string("not json")),
        },
    };

    let op = Registry::builtin().get("gke.clusters.list").expect("present");
    invoker
        .invoke(op, &app, &config(&[("location", json!("-"))]))
        .await
        .expect("invoke");

    let requests = http.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(
        requests[0].headers.get("Authorization").map(String::as_str),
        Some("Bearer ya29.literal")
    );
}

#[tokio::test]
async fn missing_credentials_abort_before_any_network_call() {
    let http = MockHttpClient::returning(200, "OK", b"{}");
    let sink = Arc::new(CollectingSink::default());
    let invoker = Invoker::new(http.clone(), sink.clone());

    let app = AppConfig {
        project_id: "p1".to_string(),
        credentials: AppCredentials::default(),
    };
    let op = Registry::builtin().get("gke.clusters.list").expect("present");
    let err = invoker
        .invoke(op, &app, &config(&[("location", json!("-"))]))
        .await
        .unwrap_err();

    assert!(matches!(err, BlockError::Configuration(_)));
    assert!(http.requests().is_empty());
    assert!(sink.outputs().is_empty());
}

#[tokio::test]
async fn invalid_input_config_aborts_before_any_network_call() {
    let http = MockHttpClient::returning(200, "OK", b"{}");
    let sink = Arc::new(CollectingSink::default());
    let invoker = Invoker::new(http.clone(), sink);

    let op = Registry::builtin()
        .get("compute.backendServices.get")
        .expect("present");
    let err = invoker
        .invoke(op, &app_with_token("tok"), &InvocationConfig::new())
        .await
        .unwrap_err();

    match err {
        BlockError::Configuration(msg) => assert!(msg.contains("backendService")),
        other => panic!("expected configuration error, got {other:?}"),
    }
    assert!(http.requests().is_empty());
}

#[tokio::test]
async fn all_unset_patch_sends_no_payload() {
    let http = MockHttpClient::returning(200, "OK", b"{\"status\":\"RUNNING\"}");
    let sink = Arc::new(CollectingSink::default());
    let invoker = Invoker::new(http.clone(), sink);

    let op = Registry::builtin()
        .get("compute.backendServices.patch")
        .expect("present");
    invoker
        .invoke(
            op,
            &app_with_token("tok"),
            &config(&[("backendService", json!("web-backend"))]),
        )
        .await
        .expect("invoke");

    let requests = http.requests();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].body.is_none());
}
