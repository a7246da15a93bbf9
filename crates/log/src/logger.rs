//! The console logger

use std::fmt;
use std::io::{self, Write};
use std::sync::Arc;

use arc_swap::{ArcSwap, ArcSwapOption};
use parking_lot::Mutex;

use crate::builder::LoggerBuilder;
use crate::clock::Clock;
use crate::config::{Config, Level, WriterConfig};
use crate::core::LogResult;
use crate::format::{self, Stamp, TimestampFormat};
use crate::writer::{self, Sink};

/// Callback that observes sink write failures
pub(crate) struct ErrorHook(pub(crate) Box<dyn Fn(&io::Error) + Send + Sync>);

/// Configuration a single call works from
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Settings {
    pub(crate) level: Level,
    pub(crate) colors: bool,
    pub(crate) timestamp: bool,
    pub(crate) timestamp_format: TimestampFormat,
}

/// Leveled, colorized, timestamped logger
///
/// Every call filters against the minimum level, composes
/// `<time> [<LEVEL>] <message>\n` and writes it to the sink in one piece.
/// Logging never fails: write errors are dropped, or handed to the hook
/// registered with [`set_error_hook`](Self::set_error_hook).
///
/// Settings are swapped as whole snapshots, so the setters may be called
/// while other threads are logging.
///
/// ```rust
/// use nebula_console_log::{Level, Logger, MemoryWriter, info, debug};
///
/// let out = MemoryWriter::new();
/// let logger = Logger::builder()
///     .level(Level::Info)
///     .colors(false)
///     .timestamp(false)
///     .writer(out.clone())
///     .build()
///     .unwrap();
///
/// info!(logger, "value={}", 7);
/// debug!(logger, "filtered");
/// assert_eq!(out.contents(), "value=7\n");
/// ```
pub struct Logger {
    settings: ArcSwap<Settings>,
    sink: Mutex<Sink>,
    clock: Arc<dyn Clock>,
    error_hook: ArcSwapOption<ErrorHook>,
}

impl Logger {
    /// Logger with default settings writing to stdout
    pub fn new() -> Self {
        Self::assemble(
            Settings {
                level: Level::Trace,
                colors: true,
                timestamp: true,
                timestamp_format: TimestampFormat::default(),
            },
            Box::new(io::stdout()),
            Arc::new(crate::clock::LocalClock),
            None,
        )
    }

    /// Build a logger from configuration
    pub fn from_config(config: Config) -> LogResult<Self> {
        LoggerBuilder::from_config(config).build()
    }

    /// Start a builder with default settings
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    pub(crate) fn assemble(
        settings: Settings,
        sink: Sink,
        clock: Arc<dyn Clock>,
        error_hook: Option<Arc<ErrorHook>>,
    ) -> Self {
        Self {
            settings: ArcSwap::from_pointee(settings),
            sink: Mutex::new(sink),
            clock,
            error_hook: ArcSwapOption::new(error_hook),
        }
    }

    // ------------------------------------------------------------------
    // Logging
    // ------------------------------------------------------------------

    /// Whether a message at `level` would be written
    #[inline]
    pub fn enabled(&self, level: Level) -> bool {
        level >= self.settings.load().level
    }

    /// Log at an explicit level
    pub fn log(&self, level: Level, args: fmt::Arguments<'_>) {
        let settings = self.settings.load();
        if level < settings.level {
            return;
        }

        let mut line = Vec::with_capacity(128);
        let stamp = settings.timestamp.then(|| Stamp {
            format: &settings.timestamp_format,
            at: self.clock.now(),
        });
        format::compose(&mut line, level, settings.colors, stamp, args);

        let result = {
            let mut sink = self.sink.lock();
            sink.write_all(&line).and_then(|()| sink.flush())
        };

        if let Err(err) = result {
            self.report(&err);
        }
    }

    /// Log at [`Level::Trace`]
    #[inline]
    pub fn trace(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Trace, args);
    }

    /// Log at [`Level::Debug`]
    #[inline]
    pub fn debug(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Debug, args);
    }

    /// Log at [`Level::Info`]
    #[inline]
    pub fn info(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Info, args);
    }

    /// Log at [`Level::Warn`]
    #[inline]
    pub fn warn(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Warn, args);
    }

    /// Log at [`Level::Error`]
    #[inline]
    pub fn error(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Error, args);
    }

    /// Log at [`Level::Fatal`]
    ///
    /// Only writes the message. Exiting is up to the caller.
    #[inline]
    pub fn fatal(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Fatal, args);
    }

    /// Flush the sink, discarding any error the same way writes do
    pub fn flush(&self) {
        let result = self.sink.lock().flush();
        if let Err(err) = result {
            self.report(&err);
        }
    }

    fn report(&self, err: &io::Error) {
        // Runs outside the sink lock so the hook may log through this logger.
        if let Some(hook) = &*self.error_hook.load() {
            (hook.0)(err);
        }
    }

    // ------------------------------------------------------------------
    // Configuration
    // ------------------------------------------------------------------

    /// Minimum level that is written
    pub fn level(&self) -> Level {
        self.settings.load().level
    }

    /// Whether prefixes are colored
    pub fn colors(&self) -> bool {
        self.settings.load().colors
    }

    /// Whether messages carry the timestamp and level prefix
    pub fn timestamp(&self) -> bool {
        self.settings.load().timestamp
    }

    /// Current timestamp pattern
    pub fn timestamp_format(&self) -> String {
        self.settings.load().timestamp_format.pattern().to_string()
    }

    /// Change the minimum level
    pub fn set_level(&self, level: Level) {
        self.update(|s| s.level = level);
    }

    /// Enable or disable colored prefixes
    pub fn set_colors(&self, colors: bool) {
        self.update(|s| s.colors = colors);
    }

    /// Enable or disable the timestamp and level prefix
    pub fn set_timestamp(&self, timestamp: bool) {
        self.update(|s| s.timestamp = timestamp);
    }

    /// Change the timestamp pattern
    ///
    /// An invalid pattern is rejected and the current one stays in effect.
    pub fn set_timestamp_format(&self, pattern: impl Into<String>) -> LogResult<()> {
        let format = TimestampFormat::new(pattern)?;
        self.update(|s| s.timestamp_format = format.clone());
        Ok(())
    }

    /// Replace the sink
    ///
    /// The previous sink is flushed before it is dropped.
    pub fn set_writer(&self, writer: impl Write + Send + 'static) {
        self.replace_sink(Box::new(writer));
    }

    /// Replace the sink with one described by configuration
    pub fn set_writer_config(&self, config: &WriterConfig) -> LogResult<()> {
        let sink = writer::make_writer(config)?;
        self.replace_sink(sink);
        Ok(())
    }

    /// Observe sink write failures
    pub fn set_error_hook(&self, hook: impl Fn(&io::Error) + Send + Sync + 'static) {
        self.error_hook
            .store(Some(Arc::new(ErrorHook(Box::new(hook)))));
    }

    /// Go back to silently discarding write failures
    pub fn clear_error_hook(&self) {
        self.error_hook.store(None);
    }

    fn update(&self, mut apply: impl FnMut(&mut Settings)) {
        self.settings.rcu(|current| {
            let mut next = Settings::clone(current);
            apply(&mut next);
            next
        });
    }

    fn replace_sink(&self, sink: Sink) {
        let mut previous = std::mem::replace(&mut *self.sink.lock(), sink);
        if let Err(err) = previous.flush() {
            self.report(&err);
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let settings = self.settings.load();
        f.debug_struct("Logger")
            .field("level", &settings.level)
            .field("colors", &settings.colors)
            .field("timestamp", &settings.timestamp)
            .field("timestamp_format", &settings.timestamp_format.pattern())
            .field("error_hook", &self.error_hook.load().is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::writer::MemoryWriter;
    use pretty_assertions::assert_eq;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use time::macros::datetime;

    fn logger(out: &MemoryWriter) -> Logger {
        Logger::builder()
            .writer(out.clone())
            .clock(FixedClock(datetime!(2024-01-02 03:04:05 UTC)))
            .build()
            .unwrap()
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_default_line() {
        let out = MemoryWriter::new();
        let logger = logger(&out);
        logger.info(format_args!("value={}", 7));
        assert_eq!(
            out.contents(),
            "\x1b[92m2024-01-02 03:04:05 [INFO] \x1b[0mvalue=7\n"
        );
    }

    #[test]
    fn test_filtered_call_has_no_side_effect() {
        struct Loud;
        impl fmt::Display for Loud {
            fn fmt(&self, _: &mut fmt::Formatter<'_>) -> fmt::Result {
                panic!("filtered message was formatted");
            }
        }

        let out = MemoryWriter::new();
        let logger = logger(&out);
        logger.set_level(Level::Warn);
        logger.debug(format_args!("{}", Loud));
        assert!(out.is_empty());
    }

    #[test]
    fn test_setters() {
        let out = MemoryWriter::new();
        let logger = logger(&out);

        logger.set_colors(false);
        logger.set_timestamp(false);
        logger.error(format_args!("boom"));
        assert_eq!(out.take(), "boom\n");

        logger.set_timestamp(true);
        logger.set_timestamp_format("[hour]:[minute]").unwrap();
        logger.fatal(format_args!("down"));
        assert_eq!(out.take(), "03:04 [FATAL] down\n");

        assert!(!logger.colors());
        assert!(logger.timestamp());
        assert_eq!(logger.timestamp_format(), "[hour]:[minute]");
    }

    #[test]
    fn test_invalid_pattern_keeps_previous() {
        let out = MemoryWriter::new();
        let logger = logger(&out);
        logger.set_colors(false);

        assert!(logger.set_timestamp_format("[bogus]").is_err());
        assert_eq!(logger.timestamp_format(), crate::DEFAULT_TIMESTAMP_FORMAT);

        logger.warn(format_args!("still"));
        assert_eq!(out.contents(), "2024-01-02 03:04:05 [WARN] still\n");
    }

    #[test]
    fn test_enabled() {
        let logger = logger(&MemoryWriter::new());
        logger.set_level(Level::Error);
        assert!(!logger.enabled(Level::Warn));
        assert!(logger.enabled(Level::Error));
        assert!(logger.enabled(Level::Fatal));
        assert_eq!(logger.level(), Level::Error);
    }

    #[test]
    fn test_write_failure_is_swallowed() {
        let logger = logger(&MemoryWriter::new());
        logger.set_writer(FailingWriter);
        logger.error(format_args!("lost"));
    }

    #[test]
    fn test_error_hook() {
        let logger = logger(&MemoryWriter::new());
        logger.set_writer(FailingWriter);

        let failures = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&failures);
        logger.set_error_hook(move |err| {
            assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
            seen.fetch_add(1, Ordering::SeqCst);
        });

        logger.info(format_args!("one"));
        logger.info(format_args!("two"));
        assert_eq!(failures.load(Ordering::SeqCst), 2);

        logger.clear_error_hook();
        logger.info(format_args!("three"));
        assert_eq!(failures.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_replace_writer() {
        let first = MemoryWriter::new();
        let second = MemoryWriter::new();
        let logger = logger(&first);
        logger.set_timestamp(false);

        logger.info(format_args!("a"));
        logger.set_writer(second.clone());
        logger.info(format_args!("b"));

        assert_eq!(first.contents(), "a\n");
        assert_eq!(second.contents(), "b\n");
    }

    #[test]
    fn test_set_writer_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("switched.log");
        let out = MemoryWriter::new();
        let logger = logger(&out);
        logger.set_colors(false);
        logger.set_timestamp(false);

        logger.info(format_args!("before"));
        logger
            .set_writer_config(&WriterConfig::File {
                path: path.clone(),
                append: true,
            })
            .unwrap();
        logger.info(format_args!("after"));
        drop(logger);

        assert_eq!(out.contents(), "before\n");
        assert_eq!(std::fs::read_to_string(path).unwrap(), "after\n");
    }

    #[test]
    fn test_set_writer_config_failure_keeps_sink() {
        let dir = tempfile::tempdir().unwrap();
        let out = MemoryWriter::new();
        let logger = logger(&out);
        logger.set_colors(false);
        logger.set_timestamp(false);

        let result = logger.set_writer_config(&WriterConfig::File {
            path: dir.path().join("missing").join("app.log"),
            append: true,
        });
        assert!(matches!(result, Err(crate::LogError::Io(_))));

        logger.info(format_args!("still here"));
        assert_eq!(out.contents(), "still here\n");
    }

    #[test]
    fn test_debug_output() {
        let logger = logger(&MemoryWriter::new());
        let debug = format!("{logger:?}");
        assert!(debug.contains("level: Trace"));
        assert!(debug.contains("error_hook: false"));
    }
}
