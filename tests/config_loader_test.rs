//! Integration tests for loading relay configuration from the environment
//! and from files.

mod common;

use common::{write_config, SPARSE_CONFIG, VALID_CONFIG};
use sqs_relay::{Config, ConfigError, ConfigLoader, ConfigSource};
use std::thread;

#[test]
fn test_env_valid_config() {
    temp_env::with_var("SQS_RELAY_IT_VALID", Some(VALID_CONFIG), || {
        let config = ConfigLoader::load_from_env("SQS_RELAY_IT_VALID").unwrap();

        assert_eq!(config.broker.host, "localhost:9000");
        assert_eq!(config.broker.queue, "background");
        assert_eq!(config.cloud.region, "us_best");
        assert_eq!(config.queue.name, "myapp_queue");
        assert_eq!(config.queue.topics["foo_topic"], "FooWorker");
        assert_eq!(config.queue.topics["bar_topic"], "BazWorker");
    });
}

// Missing fields are fine here; presence is checked by a validator
#[test]
fn test_env_sparse_config() {
    temp_env::with_var("SQS_RELAY_IT_SPARSE", Some(SPARSE_CONFIG), || {
        let config = ConfigLoader::load_from_env("SQS_RELAY_IT_SPARSE").unwrap();

        assert_eq!(config.broker.host, "localhost:9000");
        assert_eq!(config.broker.namespace, "");
        assert_eq!(config.broker.queue, "");
        assert_eq!(config.cloud.region, "us_best");
        assert_eq!(config.queue.name, "");
        assert_eq!(config.queue.topics.len(), 0);
    });
}

#[test]
fn test_env_empty_object() {
    temp_env::with_var("SQS_RELAY_IT_EMPTY", Some("{}"), || {
        let config = ConfigLoader::load_from_env("SQS_RELAY_IT_EMPTY").unwrap();
        assert_eq!(config, Config::default());
    });
}

#[test]
fn test_env_unset_and_empty_are_decode_errors() {
    temp_env::with_var_unset("SQS_RELAY_IT_UNSET", || {
        let err = ConfigLoader::load_from_env("SQS_RELAY_IT_UNSET").unwrap_err();
        assert!(matches!(err, ConfigError::Decode(_)));
    });
    temp_env::with_var("SQS_RELAY_IT_BLANK", Some(""), || {
        let err = ConfigLoader::load_from_env("SQS_RELAY_IT_BLANK").unwrap_err();
        assert!(matches!(err, ConfigError::Decode(_)));
    });
}

#[test]
fn test_env_malformed() {
    temp_env::with_var("SQS_RELAY_IT_BAD", Some(r#"{"redis": {"host": "x"}"#), || {
        assert!(ConfigLoader::load_from_env("SQS_RELAY_IT_BAD").is_err());
    });
    temp_env::with_var("SQS_RELAY_IT_WORD", Some("localhost"), || {
        assert!(ConfigLoader::load_from_env("SQS_RELAY_IT_WORD").is_err());
    });
}

#[test]
fn test_file_valid_config() {
    let (_dir, path) = write_config(VALID_CONFIG);
    let config = ConfigLoader::load_from_file(&path).unwrap();

    assert_eq!(config.broker.namespace, "test");
    assert_eq!(config.cloud.access_key, "super");
    assert_eq!(config.cloud.secret_key, "secret");
    assert_eq!(config.queue.handler_for("foo_topic"), Some("FooWorker"));
}

#[test]
fn test_file_and_env_agree() {
    let (_dir, path) = write_config(VALID_CONFIG);
    let from_file = ConfigLoader::load(&ConfigSource::File(path)).unwrap();

    temp_env::with_var("SQS_RELAY_IT_AGREE", Some(VALID_CONFIG), || {
        let from_env = ConfigLoader::load_from_env("SQS_RELAY_IT_AGREE").unwrap();
        assert_eq!(from_env, from_file);
    });
}

#[test]
fn test_file_malformed_is_decode_error() {
    let (_dir, path) = write_config("{ unbalanced");
    let err = ConfigLoader::load_from_file(&path).unwrap_err();
    assert!(err.is_decode());
    assert!(!err.is_read());
}

#[test]
fn test_file_missing_is_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("does-not-exist.json");

    let err = ConfigLoader::load_from_file(&path).unwrap_err();
    assert!(err.is_read());
    assert!(matches!(err, ConfigError::Read { .. }));
    assert!(err.to_string().contains("does-not-exist.json"));
}

#[test]
fn test_file_directory_is_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = ConfigLoader::load_from_file(dir.path()).unwrap_err();
    assert!(err.is_read());
}

#[test]
fn test_concurrent_loads_are_independent() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            thread::spawn(move || {
                let json = format!(r#"{{"queue":{{"name":"queue_{i}"}}}}"#);
                ConfigLoader::load_from_str(&json).unwrap()
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let config = handle.join().unwrap();
        assert_eq!(config.queue.name, format!("queue_{i}"));
        assert!(config.queue.topics.is_empty());
    }
}

#[test]
fn test_repeated_keys_and_sections_are_accepted() {
    let json = r#"{
        "redis": {"host": "old:6379", "host": "localhost:9000"},
        "redis": {"queue": "background"},
        "queue": {"topics": {"foo_topic": "FooWorker"}},
        "queue": {"name": "myapp_queue", "topics": {"bar_topic": "BazWorker"}}
    }"#;
    let config = ConfigLoader::load_from_str(json).unwrap();

    assert_eq!(config.broker.host, "localhost:9000");
    assert_eq!(config.broker.queue, "background");
    assert_eq!(config.queue.name, "myapp_queue");
    assert_eq!(config.queue.topics.len(), 2);
}

#[test]
fn test_section_and_field_keys_ignore_case() {
    let json = r#"{"Redis":{"HOST":"localhost:9000"},"AWS":{"Region":"us_best"},"Queue":{"Name":"q"}}"#;
    temp_env::with_var("SQS_RELAY_IT_CASE", Some(json), || {
        let config = ConfigLoader::load_from_env("SQS_RELAY_IT_CASE").unwrap();
        assert_eq!(config.broker.host, "localhost:9000");
        assert_eq!(config.cloud.region, "us_best");
        assert_eq!(config.queue.name, "q");
    });
}
