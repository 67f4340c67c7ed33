//! SQS Relay - configuration for a cloud-queue to background-worker relay
//!
//! The relay listens on a cloud queue and enqueues background workers on a
//! Redis-style broker, routing each message by topic. This crate owns the
//! configuration contract: decoding the JSON document that describes the
//! broker, the cloud credentials and the topic routing table.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): Configuration model and validation port
//! - **Infrastructure Layer** (`infrastructure`): Loader, validator and logging
//! - **CLI Layer** (`cli`): Command-line interface
//!
//! # Example
//!
//! ```no_run
//! use sqs_relay::ConfigLoader;
//!
//! let config = ConfigLoader::load_from_env("SQS_RELAY_CONFIG")?;
//! if let Some(handler) = config.queue.handler_for("foo_topic") {
//!     println!("foo_topic -> {handler}");
//! }
//! # Ok::<(), sqs_relay::ConfigError>(())
//! ```

pub mod cli;
pub mod domain;
pub mod infrastructure;

// Re-export commonly used types for convenience
pub use domain::models::{BrokerConfig, CloudConfig, Config, QueueConfig};
pub use domain::ports::ConfigValidator;
pub use domain::ValidationError;
pub use infrastructure::config::{
    ConfigError, ConfigLoader, ConfigSource, RequiredFieldsValidator,
};
