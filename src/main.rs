//! SQS Relay CLI entry point.

use clap::Parser;

use sqs_relay::cli::{commands, handle_error, Cli, Commands};
use sqs_relay::infrastructure::logging::{LogConfig, LoggerImpl};

fn main() {
    let cli = Cli::parse();

    let log_config = LogConfig {
        level: cli.log_level.clone(),
        format: cli.log_format,
    };
    if let Err(err) = LoggerImpl::init(&log_config) {
        handle_error(err, cli.json);
    }

    let result = match cli.command {
        Commands::Check(args) => commands::check::execute(args, cli.json),
        Commands::Routes(args) => commands::routes::execute(args, cli.json),
    };

    if let Err(err) = result {
        handle_error(err, cli.json);
    }
}
