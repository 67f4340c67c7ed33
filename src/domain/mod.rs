//! Domain layer for the relay
//!
//! This module contains the configuration model and the ports that
//! infrastructure adapters implement.

pub mod error;
pub mod models;
pub mod ports;

pub use error::ValidationError;
