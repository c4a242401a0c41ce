use gcblocks_core::types::Service;
use gcblocks_core::Registry;

use crate::args::OutputArgs;
use crate::exit_codes;
use crate::output::{print_error, print_result};

#[derive(serde::Serialize)]
struct Row<'a> {
    name: &'a str,
    method: &'a str,
    path: &'a str,
    description: &'a str,
}

pub async fn list_cmd(service: Option<&str>, output: OutputArgs) -> i32 {
    let registry = Registry::builtin();

    let service = match service.map(str::parse::<Service>).transpose() {
        Ok(s) => s,
        Err(e) => {
            print_error(output.format, output.quiet, &e);
            return exit_codes::RUNTIME_ERROR;
        }
    };

    let rows: Vec<Row<'_>> = registry
        .iter()
        .filter(|op| service.map_or(true, |s| op.service == s))
        .map(|op| Row {
            name: op.name,
            method: op.method.as_str(),
            path: op.path,
            description: op.description,
        })
        .collect();

    print_result(output.format, output.quiet, &rows);
    exit_codes::SUCCESS
}
