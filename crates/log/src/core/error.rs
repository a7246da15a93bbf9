//! Error handling for nebula-console-log

/// Result type for logger construction and reconfiguration
pub type LogResult<T> = Result<T, LogError>;

/// Error type for logger construction and reconfiguration
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum LogError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Unknown severity name
    #[error("Invalid level '{0}': expected one of trace, debug, info, warn, error, fatal")]
    InvalidLevel(String),

    /// Timestamp pattern could not be compiled
    #[error("Invalid timestamp format '{pattern}': {reason}")]
    InvalidTimestampFormat {
        /// The rejected pattern
        pattern: String,
        /// Why the pattern was rejected
        reason: String,
    },

    /// IO error while opening a sink
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Global subscriber installation failed
    #[error("Failed to install global subscriber: {0}")]
    Init(String),
}
