//! Port trait definitions (Hexagonal Architecture)
//!
//! - ConfigValidator: caller-supplied checks layered on top of a decoded config

pub mod config_validator;

pub use config_validator::ConfigValidator;
