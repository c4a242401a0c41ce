use std::path::Path;

use serde_json::json;

use gcblocks_core::{parse_config_str, validate_config, ConfigFormat, Registry};

use crate::args::OutputArgs;
use crate::exit_codes;
use crate::output::{print_error, print_result};

pub async fn validate_cmd(operation: &str, config_path: &Path, output: OutputArgs) -> i32 {
    let Some(op) = Registry::builtin().get(operation) else {
        print_error(
            output.format,
            output.quiet,
            &format!("unknown operation: {operation}"),
        );
        return exit_codes::RUNTIME_ERROR;
    };

    let raw = match std::fs::read_to_string(config_path) {
        Ok(raw) => raw,
        Err(e) => {
            print_error(
                output.format,
                output.quiet,
                &format!("failed to read {}: {e}", config_path.display()),
            );
            return exit_codes::RUNTIME_ERROR;
        }
    };

    let config = match parse_config_str(&raw, ConfigFormat::Auto) {
        Ok(config) => config,
        Err(e) => {
            print_error(output.format, output.quiet, &e.to_string());
            return exit_codes::VALIDATION_FAILED;
        }
    };

    match validate_config(op, &config) {
        Ok(()) => {
            print_result(output.format, output.quiet, &json!({ "valid": true }));
            exit_codes::SUCCESS
        }
        Err(e) => {
            let violations: Vec<_> = e
                .violations
                .iter()
                .map(|v| json!({ "path": v.path, "message": v.message }))
                .collect();
            print_result(
                output.format,
                output.quiet,
                &json!({ "valid": false, "violations": violations }),
            );
            exit_codes::VALIDATION_FAILED
        }
    }
}
