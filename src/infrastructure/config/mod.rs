//! Configuration management infrastructure
//!
//! - JSON decoding from an environment variable, a file, or an inline string
//! - Opt-in required-field validation

pub mod loader;
pub mod validator;

pub use loader::{ConfigError, ConfigLoader, ConfigSource};
pub use validator::RequiredFieldsValidator;
