use assert_cmd::Command;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_list_command() {
    let mut cmd = Command::cargo_bin("gcblocks").unwrap();
    let output = cmd.args(["list", "--format", "json"]).output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("compute.backendServices.list"));
    assert!(stdout.contains("run.jobs.run"));
}

#[test]
fn test_list_filters_by_service() {
    let mut cmd = Command::cargo_bin("gcblocks").unwrap();
    let output = cmd
        .args(["list", "--service", "gke", "--format", "json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("gke.clusters.get"));
    assert!(!stdout.contains("compute.backendServices.list"));
}

#[test]
fn test_list_rejects_unknown_service() {
    let mut cmd = Command::cargo_bin("gcblocks").unwrap();
    cmd.args(["list", "--service", "bigquery"])
        .assert()
        .failure()
        .code(4); // RUNTIME_ERROR
}

#[test]
fn test_describe_command() {
    let mut cmd = Command::cargo_bin("gcblocks").unwrap();
    let output = cmd
        .args(["describe", "run.jobs.run", "--format", "json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let descriptor: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(descriptor["method"], "POST");
    assert_eq!(descriptor["service"], "run");
    assert_eq!(
        descriptor["path"],
        "/projects/{project}/locations/{location}/jobs/{job}:run"
    );
}

#[test]
fn test_describe_unknown_operation() {
    let mut cmd = Command::cargo_bin("gcblocks").unwrap();
    cmd.args(["describe", "compute.instances.list"])
        .assert()
        .failure()
        .code(4); // RUNTIME_ERROR
}

#[test]
fn test_validate_command() {
    let tmp_dir = TempDir::new().unwrap();
    let config_path = tmp_dir.path().join("config.yaml");
    fs::write(&config_path, "backendService: web-backend\n").unwrap();

    let mut cmd = Command::cargo_bin("gcblocks").unwrap();
    cmd.args([
        "validate",
        "compute.backendServices.get",
        "--config",
        config_path.to_str().unwrap(),
    ])
    .assert()
    .success();
}

#[test]
fn test_validate_reports_violations() {
    let tmp_dir = TempDir::new().unwrap();
    let config_path = tmp_dir.path().join("config.json");
    fs::write(&config_path, "{\"unknownField\": 1}").unwrap();

    let mut cmd = Command::cargo_bin("gcblocks").unwrap();
    cmd.args([
        "validate",
        "compute.backendServices.get",
        "--config",
        config_path.to_str().unwrap(),
    ])
    .assert()
    .failure()
    .code(2); // VALIDATION_FAILED
}

#[test]
fn test_invoke_without_credentials_fails() {
    let tmp_dir = TempDir::new().unwrap();
    let config_path = tmp_dir.path().join("config.yaml");
    fs::write(&config_path, "location: \"-\"\n").unwrap();

    // Credential resolution fails before any network call is attempted.
    let mut cmd = Command::cargo_bin("gcblocks").unwrap();
    cmd.args([
        "invoke",
        "gke.clusters.list",
        "--config",
        config_path.to_str().unwrap(),
        "--project",
        "p1",
    ])
    .assert()
    .failure()
    .code(3); // INVOCATION_FAILED
}
