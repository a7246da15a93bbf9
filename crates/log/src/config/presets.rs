//! Configuration presets for common scenarios

use super::{Config, Level, WriterConfig};

impl Config {
    /// Development configuration (debug level, colors, timestamps)
    #[must_use]
    pub fn development() -> Self {
        Self {
            level: Level::Debug,
            colors: true,
            timestamp: true,
            ..Self::default()
        }
    }

    /// Production configuration (info level, plain text on stderr)
    #[must_use]
    pub fn production() -> Self {
        Self {
            level: Level::Info,
            colors: false,
            writer: WriterConfig::Stderr,
            ..Self::default()
        }
    }

    /// Test configuration (bare messages)
    #[cfg(test)]
    pub fn test() -> Self {
        Self {
            level: Level::Trace,
            colors: false,
            timestamp: false,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_production() {
        let config = Config::production();
        assert_eq!(config.level, Level::Info);
        assert!(!config.colors);
        assert!(config.timestamp);
        assert_eq!(config.writer, WriterConfig::Stderr);
    }

    #[test]
    fn test_development() {
        let config = Config::development();
        assert_eq!(config.level, Level::Debug);
        assert!(config.colors);
        assert!(config.timestamp);
        assert_eq!(config.writer, WriterConfig::Stdout);
    }
}
