use gcblocks_core::Registry;

use crate::args::OutputArgs;
use crate::exit_codes;
use crate::output::{print_error, print_result};

pub async fn describe_cmd(operation: &str, output: OutputArgs) -> i32 {
    match Registry::builtin().get(operation) {
        Some(op) => {
            print_result(output.format, output.quiet, op);
            exit_codes::SUCCESS
        }
        None => {
            print_error(
                output.format,
                output.quiet,
                &format!("unknown operation: {operation}"),
            );
            exit_codes::RUNTIME_ERROR
        }
    }
}
