//! Implementation of the `sqs-relay check` command.

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use tracing::{info, warn};

use crate::cli::output::{output, CommandOutput};
use crate::cli::types::SourceArgs;
use crate::domain::models::Config;
use crate::domain::ports::ConfigValidator;
use crate::infrastructure::config::{ConfigLoader, ConfigSource, RequiredFieldsValidator};

#[derive(Args, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Fail unless every field the relay needs is present
    #[arg(long)]
    pub strict: bool,
}

#[derive(Debug, Serialize)]
pub struct CheckOutput {
    pub success: bool,
    pub source: String,
    pub broker_host: String,
    pub broker_namespace: String,
    pub broker_queue: String,
    pub cloud_region: String,
    pub cloud_access_key: String,
    pub queue_name: String,
    pub topic_count: usize,
    pub validated: bool,
}

impl CheckOutput {
    fn new(source: &ConfigSource, config: &Config, validated: bool) -> Self {
        Self {
            success: true,
            source: source.to_string(),
            broker_host: config.broker.host.clone(),
            broker_namespace: config.broker.namespace.clone(),
            broker_queue: config.broker.queue.clone(),
            cloud_region: config.cloud.region.clone(),
            cloud_access_key: config.cloud.masked_access_key(),
            queue_name: config.queue.name.clone(),
            topic_count: config.queue.topics.len(),
            validated,
        }
    }
}

fn or_unset(value: &str) -> &str {
    if value.is_empty() {
        "(unset)"
    } else {
        value
    }
}

impl CommandOutput for CheckOutput {
    fn to_human(&self) -> String {
        let mut lines = vec![
            format!("Configuration loaded from {}", self.source),
            format!("  Broker host:      {}", or_unset(&self.broker_host)),
            format!("  Broker namespace: {}", or_unset(&self.broker_namespace)),
            format!("  Broker queue:     {}", or_unset(&self.broker_queue)),
            format!("  Cloud region:     {}", or_unset(&self.cloud_region)),
            format!("  Cloud access key: {}", or_unset(&self.cloud_access_key)),
            format!("  Queue name:       {}", or_unset(&self.queue_name)),
            format!("  Topics:           {}", self.topic_count),
        ];
        if self.validated {
            lines.push("\nAll required fields present".to_string());
        }
        lines.join("\n")
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

pub fn execute(args: CheckArgs, json_mode: bool) -> Result<()> {
    let source = args.source.source();
    let config = ConfigLoader::load(&source)
        .with_context(|| format!("Failed to load configuration from {source}"))?;

    info!(%source, topics = config.queue.topics.len(), "configuration loaded");

    if args.strict {
        RequiredFieldsValidator::new()
            .validate(&config)
            .context("Configuration is incomplete")?;
    } else if config.queue.topics.is_empty() {
        warn!(%source, "no topics configured; nothing would be routed");
    }

    output(&CheckOutput::new(&source, &config, args.strict), json_mode);
    Ok(())
}
