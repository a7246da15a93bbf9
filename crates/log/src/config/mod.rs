//! Configuration types
//!
//! This module provides configuration types for the logger, organized into:
//! - `base`: Core configuration structs (Config, Level)
//! - `writer`: Sink configuration
//! - `presets`: Pre-configured setups (development, production, test)

mod base;
mod presets;
mod writer;

pub use base::{Config, DEFAULT_TIMESTAMP_FORMAT, Level};
pub use writer::WriterConfig;
