use std::path::Path;
use std::sync::Arc;

use gcblocks_core::{parse_config_str, ConfigFormat, InvocationConfig, Registry};
use gcblocks_exec::auth::AppCredentials;
use gcblocks_exec::executor::events::{EventSink, NoOpEventSink, StdoutEventSink};
use gcblocks_exec::executor::http::ReqwestHttpClient;
use gcblocks_exec::{AppConfig, Invoker};

use crate::args::{CredentialArgs, OutputArgs};
use crate::exit_codes;
use crate::output::{print_error, print_result};

pub async fn invoke_cmd(
    operation: &str,
    config_path: Option<&Path>,
    credentials: CredentialArgs,
    events: bool,
    output: OutputArgs,
) -> i32 {
    let Some(op) = Registry::builtin().get(operation) else {
        print_error(
            output.format,
            output.quiet,
            &format!("unknown operation: {operation}"),
        );
        return exit_codes::RUNTIME_ERROR;
    };

    let config = match config_path {
        None => InvocationConfig::new(),
        Some(path) => {
            let raw = match std::fs::read_to_string(path) {
                Ok(raw) => raw,
                Err(e) => {
                    print_error(
                        output.format,
                        output.quiet,
                        &format!("failed to read {}: {e}", path.display()),
                    );
                    return exit_codes::RUNTIME_ERROR;
                }
            };
            match parse_config_str(&raw, ConfigFormat::Auto) {
                Ok(config) => config,
                Err(e) => {
                    print_error(output.format, output.quiet, &e.to_string());
                    return exit_codes::VALIDATION_FAILED;
                }
            }
        }
    };

    let mut key_json = None;
    if let Some(path) = &credentials.service_account_key_file {
        match std::fs::read_to_string(path) {
            Ok(raw) => key_json = Some(raw),
            Err(e) => {
                print_error(
                    output.format,
                    output.quiet,
                    &format!("failed to read {}: {e}", path.display()),
                );
                return exit_codes::RUNTIME_ERROR;
            }
        }
    }

    let app = AppConfig {
        project_id: credentials
            .project
            .clone()
            .or_else(|| key_json.as_deref().and_then(project_from_key))
            .unwrap_or_default(),
        credentials: match (&credentials.access_token, key_json) {
            (Some(token), _) => AppCredentials::from_access_token(token.clone()),
            (None, Some(json)) => AppCredentials::from_service_account_key(json),
            (None, None) => AppCredentials::default(),
        },
    };

    let event_sink: Arc<dyn EventSink> = if events {
        Arc::new(StdoutEventSink)
    } else {
        Arc::new(NoOpEventSink)
    };
    let invoker = Invoker::new(Arc::new(ReqwestHttpClient::default()), event_sink);

    match invoker.invoke(op, &app, &config).await {
        Ok(payload) => {
            print_result(output.format, output.quiet, &payload);
            exit_codes::SUCCESS
        }
        Err(e) => {
            print_error(output.format, output.quiet, &e.to_string());
            exit_codes::INVOCATION_FAILED
        }
    }
}

/// Best-effort project id from the key file, for when --project is omitted.
fn project_from_key(key_json: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(key_json).ok()?;
    value
        .get("project_id")
        .and_then(|v| v.as_str())
        .map(str::to_string)
}
