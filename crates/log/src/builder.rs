//! Logger builder implementation

use std::fmt;
use std::io::{self, Write};
use std::sync::Arc;

use crate::clock::{Clock, LocalClock};
use crate::config::{Config, Level, WriterConfig};
use crate::core::LogResult;
use crate::format::TimestampFormat;
use crate::logger::{ErrorHook, Logger, Settings};
use crate::writer::{self, Sink};

/// Logger builder
///
/// Starts from [`Config::default`]. A sink passed to [`writer`](Self::writer)
/// takes precedence over the configured [`WriterConfig`].
pub struct LoggerBuilder {
    config: Config,
    sink: Option<Sink>,
    clock: Arc<dyn Clock>,
    error_hook: Option<Arc<ErrorHook>>,
}

impl LoggerBuilder {
    /// Builder with default settings
    pub fn new() -> Self {
        Self::from_config(Config::default())
    }

    /// Create builder from config
    #[must_use]
    pub fn from_config(config: Config) -> Self {
        Self {
            config,
            sink: None,
            clock: Arc::new(LocalClock),
            error_hook: None,
        }
    }

    /// Set the minimum level
    pub fn level(mut self, level: Level) -> Self {
        self.config.level = level;
        self
    }

    /// Enable/disable colors
    pub fn colors(mut self, colors: bool) -> Self {
        self.config.colors = colors;
        self
    }

    /// Enable/disable the timestamp and level prefix
    pub fn timestamp(mut self, timestamp: bool) -> Self {
        self.config.timestamp = timestamp;
        self
    }

    /// Set the timestamp pattern (checked by [`build`](Self::build))
    pub fn timestamp_format(mut self, pattern: impl Into<String>) -> Self {
        self.config.timestamp_format = pattern.into();
        self
    }

    /// Write to an arbitrary sink
    pub fn writer(mut self, writer: impl Write + Send + 'static) -> Self {
        self.sink = Some(Box::new(writer));
        self
    }

    /// Write to a configured destination
    pub fn writer_config(mut self, writer: WriterConfig) -> Self {
        self.config.writer = writer;
        self.sink = None;
        self
    }

    /// Use a custom clock for timestamps
    pub fn clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    /// Observe sink write failures instead of discarding them
    pub fn on_write_error(mut self, hook: impl Fn(&io::Error) + Send + Sync + 'static) -> Self {
        self.error_hook = Some(Arc::new(ErrorHook(Box::new(hook))));
        self
    }

    /// Build the logger
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The timestamp pattern cannot be compiled
    /// - The configured file cannot be opened
    pub fn build(self) -> LogResult<Logger> {
        let timestamp_format = TimestampFormat::new(self.config.timestamp_format.as_str())?;

        let sink = match self.sink {
            Some(sink) => sink,
            None => writer::make_writer(&self.config.writer)?,
        };

        tracing::debug!(
            level = %self.config.level,
            colors = self.config.colors,
            timestamp = self.config.timestamp,
            timestamp_format = %timestamp_format.pattern(),
            "console logger built"
        );

        Ok(Logger::assemble(
            Settings {
                level: self.config.level,
                colors: self.config.colors,
                timestamp: self.config.timestamp,
                timestamp_format,
            },
            sink,
            self.clock,
            self.error_hook,
        ))
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for LoggerBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerBuilder")
            .field("config", &self.config)
            .field("custom_sink", &self.sink.is_some())
            .field("error_hook", &self.error_hook.is_some())
            .finish_non_exhaustive()
    }
}
