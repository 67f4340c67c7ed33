use crate::domain::error::ValidationError;
use crate::domain::models::config::Config;
use crate::domain::ports::ConfigValidator;

/// Validator requiring everything the relay needs to start
///
/// Checks run in a fixed order and the first failure wins.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequiredFieldsValidator;

impl RequiredFieldsValidator {
    /// Create a new validator
    pub const fn new() -> Self {
        Self
    }
}

impl ConfigValidator for RequiredFieldsValidator {
    fn validate(&self, config: &Config) -> Result<(), ValidationError> {
        let required = [
            ("redis.host", &config.broker.host),
            ("redis.queue", &config.broker.queue),
            ("aws.access_key", &config.cloud.access_key),
            ("aws.secret_key", &config.cloud.secret_key),
            ("aws.region", &config.cloud.region),
            ("queue.name", &config.queue.name),
        ];
        for (field, value) in required {
            if value.is_empty() {
                return Err(ValidationError::MissingField(field));
            }
        }

        if config.queue.topics.is_empty() {
            return Err(ValidationError::NoTopics);
        }

        if let Some((topic, _)) = config
            .queue
            .routes()
            .into_iter()
            .find(|(_, handler)| handler.is_empty())
        {
            return Err(ValidationError::EmptyHandler(topic.to_string()));
        }

        Ok(())
    }
}
