//! Formatting macros for the per-level entry points
//!
//! Each macro takes the logger first and a `format!`-style template after
//! it. Arguments are only formatted when the level passes the filter.

/// Log at an explicit [`Level`](crate::Level)
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log($level, ::core::format_args!($($arg)+))
    };
}

/// Log at [`Level::Trace`](crate::Level::Trace)
#[macro_export]
macro_rules! trace {
    ($logger:expr, $($arg:tt)+) => {
        $logger.trace(::core::format_args!($($arg)+))
    };
}

/// Log at [`Level::Debug`](crate::Level::Debug)
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $logger.debug(::core::format_args!($($arg)+))
    };
}

/// Log at [`Level::Info`](crate::Level::Info)
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $logger.info(::core::format_args!($($arg)+))
    };
}

/// Log at [`Level::Warn`](crate::Level::Warn)
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $logger.warn(::core::format_args!($($arg)+))
    };
}

/// Log at [`Level::Error`](crate::Level::Error)
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $logger.error(::core::format_args!($($arg)+))
    };
}

/// Log at [`Level::Fatal`](crate::Level::Fatal). Does not exit.
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $logger.fatal(::core::format_args!($($arg)+))
    };
}
