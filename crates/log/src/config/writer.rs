//! Sink configuration

use serde::{Deserialize, Serialize};

/// Writer configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "type", rename_all = "lowercase")]
#[non_exhaustive]
pub enum WriterConfig {
    /// Write to stdout
    #[default]
    Stdout,
    /// Write to stderr
    Stderr,
    /// Write to a file
    File {
        /// Path to the log file
        path: std::path::PathBuf,
        /// Append to an existing file instead of truncating it
        #[serde(default = "default_append")]
        append: bool,
    },
}

fn default_append() -> bool {
    true
}
