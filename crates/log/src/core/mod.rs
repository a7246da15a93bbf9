//! Core types shared across the logger.
//!
//! ### [`error`] - Error handling
//! [`LogError`] covers construction and reconfiguration failures. Logging
//! calls themselves never return an error.

pub mod error;

pub use error::{LogError, LogResult};
