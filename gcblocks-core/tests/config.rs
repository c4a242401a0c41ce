use serde_json::json;

use gcblocks_core::error::ParseError;
use gcblocks_core::{parse_config_str, ConfigFormat};

#[test]
fn parses_json_config() {
    let c = parse_config_str(r#"{"region": "us-central1", "maxResults": 10}"#, ConfigFormat::Json)
        .expect("parse");
    assert_eq!(c.get("region"), Some(&json!("us-central1")));
    assert_eq!(c.get("maxResults"), Some(&json!(10)));
}

#[test]
fn parses_yaml_config() {
    let c = parse_config_str("region: us-central1\nmaxResults: 10\n", ConfigFormat::Yaml)
        .expect("parse");
    assert_eq!(c.get("region"), Some(&json!("us-central1")));
    assert_eq!(c.get("maxResults"), Some(&json!(10)));
}

#[test]
fn auto_detects_json() {
    let c = parse_config_str(r#"  {"location": "-"}"#, ConfigFormat::Auto).expect("parse");
    assert_eq!(c.get("location"), Some(&json!("-")));
}

#[test]
fn auto_detects_yaml() {
    let c = parse_config_str("location: europe-west1\n", ConfigFormat::Auto).expect("parse");
    assert_eq!(c.get("location"), Some(&json!("europe-west1")));
}

#[test]
fn nested_values_survive_parsing() {
    let c = parse_config_str(
        r#"{"requestBody": {"name": "hc", "tcpHealthCheck": {"port": 80}}}"#,
        ConfigFormat::Auto,
    )
    .expect("parse");
    assert_eq!(
        c.get("requestBody"),
        Some(&json!({"name": "hc", "tcpHealthCheck": {"port": 80}}))
    );
}

#[test]
fn top_level_scalar_is_rejected() {
    let err = parse_config_str("[1, 2, 3]", ConfigFormat::Json).unwrap_err();
    assert!(matches!(err, ParseError::NotAnObject));
}

#[test]
fn empty_input_yields_an_empty_config() {
    let c = parse_config_str("", ConfigFormat::Yaml).expect("parse");
    assert!(c.is_empty());
}
