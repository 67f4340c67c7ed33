//! CLI type definitions
//!
//! This module contains clap command structures that define the CLI interface.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::cli::commands::check::CheckArgs;
use crate::cli::commands::routes::RoutesArgs;
use crate::infrastructure::config::ConfigSource;
use crate::infrastructure::logging::LogFormat;

/// Environment variable read when no source flag is given
pub const DEFAULT_CONFIG_ENV: &str = "SQS_RELAY_CONFIG";

#[derive(Parser, Debug)]
#[command(name = "sqs-relay")]
#[command(about = "SQS Relay - inspect and validate relay configuration", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, env = "SQS_RELAY_LOG", default_value = "warn")]
    pub log_level: String,

    /// Log output format (json, pretty)
    #[arg(long, global = true, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load the configuration and print a summary
    Check(CheckArgs),

    /// Print the topic to handler routing table
    Routes(RoutesArgs),
}

/// Where to read the configuration from (at most one)
#[derive(Args, Debug, Clone, Default)]
#[group(multiple = false)]
pub struct SourceArgs {
    /// Environment variable holding the configuration JSON
    #[arg(long = "env", value_name = "NAME")]
    pub env: Option<String>,

    /// File holding the configuration JSON
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Configuration JSON given on the command line
    #[arg(long, value_name = "JSON")]
    pub inline: Option<String>,
}

impl SourceArgs {
    /// Resolve the selected source, falling back to [`DEFAULT_CONFIG_ENV`]
    pub fn source(&self) -> ConfigSource {
        if let Some(path) = &self.file {
            ConfigSource::File(path.clone())
        } else if let Some(text) = &self.inline {
            ConfigSource::Inline(text.clone())
        } else {
            ConfigSource::Environment(
                self.env
                    .clone()
                    .unwrap_or_else(|| DEFAULT_CONFIG_ENV.to_string()),
            )
        }
    }
}
