//! Route `tracing` events through the console logger.
//!
//! Run with `cargo run -p nebula-console-log --example tracing_bridge`.

use nebula_console_log::{Config, Level};

fn main() -> nebula_console_log::LogResult<()> {
    let logger = nebula_console_log::init_with(Config::development())?;

    tracing::info!(port = 8080, "server starting");
    tracing::debug!(path = "/health", "request");

    logger.set_level(Level::Warn);
    tracing::info!("no longer shown");
    tracing::warn!(retries = 3, "upstream slow");

    Ok(())
}
