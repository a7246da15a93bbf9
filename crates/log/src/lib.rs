//! # Nebula Console Log
//!
//! Leveled, colorized, timestamped console logging.
//!
//! A [`Logger`] filters each message against a minimum [`Level`], prefixes it
//! with `<time> [<LEVEL>] ` (optionally wrapped in an ANSI color) and writes
//! the finished line to its sink in one piece.
//!
//! ## Quick Start
//!
//! ```rust
//! use nebula_console_log::prelude::*;
//!
//! let logger = Logger::new();
//! info!(logger, "user {} logged in at {}", "alice", 42);
//! warn!(logger, "disk {}% full", 91);
//! ```
//!
//! ## `tracing` integration
//!
//! [`ConsoleLayer`] renders `tracing` events through a logger, and
//! [`init`] installs one as the global subscriber:
//!
//! ```rust,no_run
//! let logger = nebula_console_log::init()?;
//! tracing::info!(port = 8080, "server starting");
//! logger.set_level(nebula_console_log::Level::Warn);
//! # Ok::<(), nebula_console_log::LogError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

mod builder;
mod clock;
mod color;
mod config;
mod core;
mod format;
mod layer;
mod logger;
mod macros;
mod writer;

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// Public API
pub use builder::LoggerBuilder;
pub use clock::{Clock, FixedClock, LocalClock};
pub use color::{Color, RESET};
pub use config::{Config, DEFAULT_TIMESTAMP_FORMAT, Level, WriterConfig};
pub use crate::core::{LogError, LogResult};
pub use format::TimestampFormat;
pub use layer::ConsoleLayer;
pub use logger::Logger;
pub use writer::{MemoryWriter, Sink, make_writer};

/// Prelude for common imports
pub mod prelude {
    pub use crate::{
        Config, Level, LogResult, Logger, LoggerBuilder, MemoryWriter, WriterConfig, debug,
        error, fatal, info, log, trace, warn,
    };
}

// ============================================================================
// Initialization Functions
// ============================================================================

/// Install a default logger as the global `tracing` subscriber
///
/// Returns the shared logger so it can be reconfigured later.
pub fn init() -> LogResult<Arc<Logger>> {
    init_with(Config::default())
}

/// Install a logger built from `config` as the global `tracing` subscriber
pub fn init_with(config: Config) -> LogResult<Arc<Logger>> {
    let logger = Arc::new(Logger::from_config(config)?);
    install(Arc::clone(&logger))?;
    Ok(logger)
}

/// Install an existing logger as the global `tracing` subscriber
///
/// # Errors
///
/// Returns [`LogError::Init`] if a global subscriber is already set.
pub fn install(logger: Arc<Logger>) -> LogResult<()> {
    tracing_subscriber::registry()
        .with(ConsoleLayer::new(logger))
        .try_init()
        .map_err(|e| LogError::Init(e.to_string()))
}
