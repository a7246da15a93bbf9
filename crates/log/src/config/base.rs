//! Core configuration types

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::WriterConfig;
use crate::color::Color;
use crate::core::{LogError, LogResult};

/// Default timestamp pattern, renders as `YYYY-MM-DD HH:MM:SS`
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "[year]-[month]-[day] [hour]:[minute]:[second]";

/// Logger configuration
///
/// Describes every setting a [`Logger`](crate::Logger) carries except the
/// clock and the error hook. Partial documents fill in defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Minimum severity that is written
    pub level: Level,

    /// Wrap the prefix in ANSI color sequences
    pub colors: bool,

    /// Prepend `<time> [<LEVEL>] ` to every message
    pub timestamp: bool,

    /// Timestamp pattern in `time` format-description syntax
    pub timestamp_format: String,

    /// Output sink
    pub writer: WriterConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            level: Level::Trace,
            colors: true,
            timestamp: true,
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
            writer: WriterConfig::Stdout,
        }
    }
}

impl Config {
    /// Parse a JSON configuration document
    pub fn from_json(json: &str) -> LogResult<Self> {
        serde_json::from_str(json).map_err(|e| LogError::Config(e.to_string()))
    }
}

/// Log level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// Trace level
    Trace,
    /// Debug level
    Debug,
    /// Info level
    Info,
    /// Warn level
    Warn,
    /// Error level
    Error,
    /// Fatal level. Does not terminate the process.
    Fatal,
}

impl Level {
    /// All levels, lowest first
    pub const ALL: [Self; 6] = [
        Self::Trace,
        Self::Debug,
        Self::Info,
        Self::Warn,
        Self::Error,
        Self::Fatal,
    ];

    /// Uppercase display name
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Trace => "TRACE",
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
            Self::Fatal => "FATAL",
        }
    }

    /// Color used for this level's prefix
    pub const fn color(self) -> Color {
        match self {
            Self::Trace => Color::Blue,
            Self::Debug => Color::BrightYellow,
            Self::Info => Color::BrightGreen,
            Self::Warn => Color::Yellow,
            Self::Error => Color::Red,
            Self::Fatal => Color::Magenta,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Level {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            "fatal" => Ok(Self::Fatal),
            _ => Err(LogError::InvalidLevel(s.to_string())),
        }
    }
}

impl From<tracing::Level> for Level {
    fn from(level: tracing::Level) -> Self {
        match level {
            tracing::Level::TRACE => Self::Trace,
            tracing::Level::DEBUG => Self::Debug,
            tracing::Level::INFO => Self::Info,
            tracing::Level::WARN => Self::Warn,
            _ => Self::Error,
        }
    }
}
