//! Logging infrastructure
//!
//! Structured logging using tracing and tracing-subscriber. Only the binary
//! installs a subscriber; the library never logs on its own.

pub mod config;
pub mod logger;

pub use config::{LogConfig, LogFormat};
pub use logger::LoggerImpl;
