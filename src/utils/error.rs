use thiserror::Error;

#[derive(Error, Debug)]
pub enum TextError {
    #[error("Invalid argument '{name}': {reason}")]
    InvalidArgument { name: String, reason: String },

    #[error("Invalid pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl TextError {
    /// The wildcard text that failed to translate, if this is a pattern error.
    pub fn pattern(&self) -> Option<&str> {
        match self {
            TextError::InvalidPattern { pattern, .. } => Some(pattern),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, TextError>;
