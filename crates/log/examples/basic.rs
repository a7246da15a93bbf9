//! Log at every level with the default configuration, then reconfigure.
//!
//! Run with `cargo run -p nebula-console-log --example basic`.

use nebula_console_log::prelude::*;

fn main() -> LogResult<()> {
    let logger = Logger::new();

    trace!(logger, "entering {}", "main");
    debug!(logger, "config loaded from {}", "defaults");
    info!(logger, "user {} logged in at {}", "alice", 42);
    warn!(logger, "disk {}% full", 91);
    error!(logger, "request {} failed", "GET /health");
    fatal!(logger, "fatal only labels the message; the process keeps running");

    logger.set_level(Level::Warn);
    logger.set_colors(false);
    logger.set_timestamp_format("[hour]:[minute]:[second]")?;

    info!(logger, "filtered out");
    warn!(logger, "plain, with a short timestamp");

    Ok(())
}
