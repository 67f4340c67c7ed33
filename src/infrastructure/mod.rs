//! Infrastructure layer module
//!
//! - Configuration loading and validation
//! - Logging infrastructure
//!
//! Infrastructure implementations satisfy the port traits defined in the domain layer.

pub mod config;
pub mod logging;
