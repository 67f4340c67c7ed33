//! Common test utilities for integration tests
//!
//! Provides shared fixtures and helpers used across multiple integration
//! test files.

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Fully populated relay configuration
#[allow(dead_code)]
pub const VALID_CONFIG: &str = r#"{
	"redis": {
	  "host": "localhost:9000",
	  "namespace": "test",
	  "queue": "background"
	},
	"aws": {
	  "access_key": "super",
	  "secret_key": "secret",
	  "region": "us_best"
	},
	"queue": {
	  "name": "myapp_queue",
	  "topics": {
		"foo_topic": "FooWorker",
		"bar_topic": "BazWorker"
	  }
	}
  }"#;

/// Configuration missing most optional fields and the whole queue block
#[allow(dead_code)]
pub const SPARSE_CONFIG: &str = r#"{
	"redis": {
	  "host": "localhost:9000"
	},
	"aws": {
	  "access_key": "super",
	  "secret_key": "secret",
	  "region": "us_best"
	}
  }"#;

/// Write `contents` to a config file inside a fresh temporary directory
///
/// Keep the returned TempDir alive for as long as the path is used.
#[allow(dead_code)]
pub fn write_config(contents: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("relay.json");
    fs::write(&path, contents).expect("Failed to write config file");
    (dir, path)
}
