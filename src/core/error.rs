//! Error types for the logging facade

pub type Result<T> = std::result::Result<T, LogError>;

#[derive(Debug, thiserror::Error)]
pub enum LogError {
    /// IO error while writing or flushing a sink
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Level string did not parse
    #[error("invalid log level: '{0}'")]
    InvalidLevel(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl LogError {
    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LogError::Other(msg.into())
    }
}
