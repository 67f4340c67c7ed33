pub mod config;
mod config_de;

pub use config::{BrokerConfig, CloudConfig, Config, QueueConfig};
