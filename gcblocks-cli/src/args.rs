use std::path::PathBuf;

use clap::Args;

use crate::output::OutputFormat;

#[derive(Debug, Args, Clone)]
pub struct OutputArgs {
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub format: OutputFormat,
    #[arg(long, short, global = true)]
    pub quiet: bool,
}

#[derive(Debug, Args, Clone)]
pub struct CredentialArgs {
    /// Target project id. Defaults to the key file's project_id when a
    /// service-account key is supplied.
    #[arg(long)]
    pub project: Option<String>,
    #[arg(long, value_name = "PATH", conflicts_with = "access_token")]
    pub service_account_key_file: Option<PathBuf>,
    /// A literal bearer token; skips the service-account flow entirely.
    #[arg(long)]
    pub access_token: Option<String>,
}
