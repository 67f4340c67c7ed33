use crate::domain::error::ValidationError;
use crate::domain::models::config::Config;

/// Port for semantic checks on a decoded configuration
///
/// Decoding only guarantees that the input was well-formed JSON of the right
/// shape. Anything stricter, such as which fields must be present, belongs
/// to an implementation of this trait chosen by the caller.
///
/// # Examples
///
/// ```no_run
/// use sqs_relay::domain::ports::ConfigValidator;
/// use sqs_relay::domain::models::Config;
/// use sqs_relay::domain::ValidationError;
///
/// fn ensure_ready(validator: &dyn ConfigValidator, config: &Config) -> Result<(), ValidationError> {
///     validator.validate(config)
/// }
/// ```
pub trait ConfigValidator: Send + Sync {
    /// Check `config`, returning the first problem found
    fn validate(&self, config: &Config) -> Result<(), ValidationError>;
}
