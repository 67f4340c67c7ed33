use thiserror::Error;

/// Errors raised when a decoded configuration is missing something a caller requires
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required field is empty: {0}")]
    MissingField(&'static str),

    #[error("Queue has no topics configured")]
    NoTopics,

    #[error("Topic '{0}' has an empty handler")]
    EmptyHandler(String),
}
