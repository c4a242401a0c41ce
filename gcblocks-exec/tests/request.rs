use serde_json::json;

use gcblocks_core::{InvocationConfig, Registry};
use gcblocks_exec::auth::SecretValue;
use gcblocks_exec::error::BlockError;
use gcblocks_exec::executor::request::build_request;

fn token() -> SecretValue {
    SecretValue::from_string("test-token")
}

fn config(pairs: &[(&str, serde_json::Value)]) -> InvocationConfig {
    let mut c = InvocationConfig::new();
    for (k, v) in pairs {
        c.set(*k, v.clone());
    }
    c
}

#[test]
fn substitutes_project_and_resource_literally() {
    let op = Registry::builtin()
        .get("compute.backendServices.get")
        .expect("present");
    let c = config(&[("backendService", json!("r1"))]);
    let req = build_request(op, "p1", &c, &token()).expect("build");

    assert_eq!(
        req.url.as_str(),
        "https://compute.googleapis.com/compute/v1/projects/p1/global/backendServices/r1"
    );
    assert!(!req.url.as_str().contains('{'));
    assert_eq!(req.method, "GET");
}

#[test]
fn substitutes_regional_paths() {
    let op = Registry::builtin()
        .get("compute.forwardingRules.get")
        .expect("present");
    let c = config(&[
        ("region", json!("us-central1")),
        ("forwardingRule", json!("fr-1")),
    ]);
    let req = build_request(op, "my-project", &c, &token()).expect("build");
    assert_eq!(
        req.url.path(),
        "/compute/v1/projects/my-project/regions/us-central1/forwardingRules/fr-1"
    );
}

#[test]
fn custom_verb_suffix_survives_substitution() {
    let op = Registry::builtin().get("run.jobs.run").expect("present");
    let c = config(&[("location", json!("europe-west1")), ("job", json!("nightly"))]);
    let req = build_request(op, "p1", &c, &token()).expect("build");
    assert_eq!(
        req.url.as_str(),
        "https://run.googleapis.com/v2/projects/p1/locations/europe-west1/jobs/nightly:run"
    );
    assert_eq!(req.method, "POST");
}

#[test]
fn missing_path_field_is_a_configuration_error() {
    let op = Registry::builtin()
        .get("compute.backendServices.get")
        .expect("present");
    let err = build_request(op, "p1", &InvocationConfig::new(), &token()).unwrap_err();
    match err {
        BlockError::Configuration(msg) => assert!(msg.contains("backendService")),
        other => panic!("expected configuration error, got {other:?}"),
    }
}

#[test]
fn missing_project_is_a_configuration_error() {
    let op = Registry::builtin()
        .get("compute.backendServices.list")
        .expect("present");
    let err = build_request(op, "", &InvocationConfig::new(), &token()).unwrap_err();
    assert!(matches!(err, BlockError::Configuration(_)));
}

#[test]
fn set_query_fields_are_appended() {
    let op = Registry::builtin()
        .get("compute.backendServices.list")
        .expect("present");
    let c = config(&[("filter", json!("name=web*")), ("maxResults", json!(50))]);
    let req = build_request(op, "p1", &c, &token()).expect("build");

    let pairs: Vec<(String, String)> = req
        .url
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    assert!(pairs.contains(&("filter".to_string(), "name=web*".to_string())));
    assert!(pairs.contains(&("maxResults".to_string(), "50".to_string())));
}

#[test]
fn unset_query_fields_leave_the_url_bare() {
    let op = Registry::builtin()
        .get("compute.backendServices.list")
        .expect("present");
    let req = build_request(op, "p1", &InvocationConfig::new(), &token()).expect("build");
    assert_eq!(req.url.query(), None);
}

#[test]
fn patch_with_no_fields_set_sends_no_body() {
    let op = Registry::builtin()
        .get("compute.backendServices.patch")
        .expect("present");
    let c = config(&[("backendService", json!("web-backend"))]);
    let req = build_request(op, "p1", &c, &token()).expect("build");

    assert!(req.body.is_none());
    assert!(!req.headers.contains_key("Content-Type"));
}

#[test]
fn patch_copies_only_the_set_fields() {
    let op = Registry::builtin()
        .get("compute.backendServices.patch")
        .expect("present");
    let c = config(&[
        ("backendService", json!("web-backend")),
        ("timeoutSec", json!(30)),
        ("description", json!(null)),
    ]);
    let req = build_request(op, "p1", &c, &token()).expect("build");

    let body: serde_json::Value =
        serde_json::from_slice(req.body.as_deref().expect("body")).expect("json");
    assert_eq!(body, json!({ "timeoutSec": 30 }));
    assert_eq!(
        req.headers.get("Content-Type").map(String::as_str),
        Some("application/json")
    );
}

#[test]
fn pass_through_body_is_forwarded_unmodified() {
    let op = Registry::builtin()
        .get("compute.healthChecks.insert")
        .expect("present");
    let resource = json!({
        "name": "hc-1",
        "type": "TCP",
        "tcpHealthCheck": { "port": 80 },
        "checkIntervalSec": 10
    });
    let c = config(&[("requestBody", resource.clone())]);
    let req = build_request(op, "p1", &c, &token()).expect("build");

    let body: serde_json::Value =
        serde_json::from_slice(req.body.as_deref().expect("body")).expect("json");
    assert_eq!(body, resource);
}

#[test]
fn authorization_header_carries_the_bearer_token() {
    let op = Registry::builtin().get("gke.clusters.list").expect("present");
    let c = config(&[("location", json!("-"))]);
    let req = build_request(op, "p1", &c, &SecretValue::from_string("ya29.literal")).expect("build");
    assert_eq!(
        req.headers.get("Authorization").map(String::as_str),
        Some("Bearer ya29.literal")
    );
}
