use std::path::PathBuf;

use clap::Subcommand;

use crate::args::*;

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List catalogue operations.
    List {
        /// Restrict to one service: compute, gke, or run.
        #[arg(long)]
        service: Option<String>,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Show the full descriptor of one operation.
    Describe {
        operation: String,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Check an invocation config file against an operation's input schema.
    Validate {
        operation: String,
        #[arg(long)]
        config: PathBuf,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Invoke an operation and print the emitted payload.
    Invoke {
        operation: String,
        #[arg(long)]
        config: Option<PathBuf>,
        #[command(flatten)]
        credentials: CredentialArgs,
        /// Print lifecycle events as JSON lines.
        #[arg(long)]
        events: bool,
        #[command(flatten)]
        output: OutputArgs,
    },
}
