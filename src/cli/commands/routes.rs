//! Implementation of the `sqs-relay routes` command.

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use crate::cli::output::{output, CommandOutput};
use crate::cli::types::SourceArgs;
use crate::domain::models::QueueConfig;
use crate::infrastructure::config::ConfigLoader;

#[derive(Args, Debug)]
pub struct RoutesArgs {
    #[command(flatten)]
    pub source: SourceArgs,
}

#[derive(Debug, Serialize)]
pub struct RouteEntry {
    pub topic: String,
    pub handler: String,
}

#[derive(Debug, Serialize)]
pub struct RoutesOutput {
    pub queue: String,
    pub routes: Vec<RouteEntry>,
}

impl From<&QueueConfig> for RoutesOutput {
    fn from(queue: &QueueConfig) -> Self {
        Self {
            queue: queue.name.clone(),
            routes: queue
                .routes()
                .into_iter()
                .map(|(topic, handler)| RouteEntry {
                    topic: topic.to_string(),
                    handler: handler.to_string(),
                })
                .collect(),
        }
    }
}

impl CommandOutput for RoutesOutput {
    fn to_human(&self) -> String {
        if self.routes.is_empty() {
            return "No topics configured".to_string();
        }
        let width = self
            .routes
            .iter()
            .map(|route| route.topic.chars().count())
            .max()
            .unwrap_or(0);
        let mut lines = Vec::with_capacity(self.routes.len() + 1);
        if !self.queue.is_empty() {
            lines.push(format!("Queue: {}", self.queue));
        }
        for route in &self.routes {
            lines.push(format!("  {:width$}  ->  {}", route.topic, route.handler));
        }
        lines.join("\n")
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

pub fn execute(args: RoutesArgs, json_mode: bool) -> Result<()> {
    let source = args.source.source();
    let config = ConfigLoader::load(&source)
        .with_context(|| format!("Failed to load configuration from {source}"))?;

    output(&RoutesOutput::from(&config.queue), json_mode);
    Ok(())
}
