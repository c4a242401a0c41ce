use clap::Parser;

mod args;
mod cmd;
mod commands;
mod exit_codes;
mod output;

pub use args::*;
use commands::Command;

#[derive(Debug, Parser)]
#[command(name = "gcblocks", version, about = "Google Cloud integration block catalogue")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

fn main() {
    let cli = Cli::parse();

    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("error: failed to create tokio runtime: {e}");
            std::process::exit(exit_codes::RUNTIME_ERROR);
        }
    };

    let exit_code = rt.block_on(run_command(cli.command));
    std::process::exit(exit_code);
}

async fn run_command(command: Command) -> i32 {
    match command {
        Command::List { service, output } => cmd::list::list_cmd(service.as_deref(), output).await,
        Command::Describe { operation, output } => {
            cmd::describe::describe_cmd(&operation, output).await
        }
        Command::Validate {
            operation,
            config,
            output,
        } => cmd::validate::validate_cmd(&operation, &config, output).await,
        Command::Invoke {
            operation,
            config,
            credentials,
            events,
            output,
        } => cmd::invoke::invoke_cmd(&operation, config.as_deref(), credentials, events, output).await,
    }
}
