//! Error types for the logger

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// Severity value the dispatcher cannot route
    #[error("Unsupported severity: '{value}'")]
    UnsupportedSeverity { value: String },

    /// The deferred sink reported a failure
    #[error("Deferred sink failed: {message}")]
    Sink { message: String },

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl LoggerError {
    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Create an unsupported severity error
    pub fn severity(value: impl Into<String>) -> Self {
        LoggerError::UnsupportedSeverity {
            value: value.into(),
        }
    }

    /// Create a sink failure error
    pub fn sink(message: impl Into<String>) -> Self {
        LoggerError::Sink {
            message: message.into(),
        }
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LoggerError::Other(msg.into())
    }
}
