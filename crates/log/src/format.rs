//! Timestamp patterns and line composition

use std::fmt;
use std::io::Write as _;

use time::OffsetDateTime;
use time::format_description::{self, OwnedFormatItem};

use crate::color::RESET;
use crate::config::{DEFAULT_TIMESTAMP_FORMAT, Level};
use crate::core::{LogError, LogResult};

/// Compiled timestamp pattern
///
/// Patterns use the `time` format-description syntax, for example
/// `[year]-[month]-[day] [hour]:[minute]:[second]`.
#[derive(Debug, Clone)]
pub struct TimestampFormat {
    pattern: String,
    items: OwnedFormatItem,
}

impl TimestampFormat {
    /// Compile a pattern
    pub fn new(pattern: impl Into<String>) -> LogResult<Self> {
        let pattern = pattern.into();
        let invalid = |reason: String| LogError::InvalidTimestampFormat {
            pattern: pattern.clone(),
            reason,
        };
        let items =
            format_description::parse_owned::<1>(&pattern).map_err(|e| invalid(e.to_string()))?;
        // Some components parse but can only be used for parsing, not formatting.
        OffsetDateTime::UNIX_EPOCH
            .format(&items)
            .map_err(|e| invalid(e.to_string()))?;
        Ok(Self { pattern, items })
    }

    /// The source pattern
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Render `at` with this pattern
    pub fn render(&self, at: OffsetDateTime) -> String {
        let mut buf = Vec::new();
        self.render_into(at, &mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    }

    fn render_into(&self, at: OffsetDateTime, buf: &mut Vec<u8>) {
        // Formattability is checked in `new`.
        let _ = at.format_into(buf, &self.items);
    }
}

impl Default for TimestampFormat {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_TIMESTAMP_FORMAT.to_string(),
            items: format_description::parse_owned::<1>(DEFAULT_TIMESTAMP_FORMAT)
                .unwrap_or_else(|_| OwnedFormatItem::Compound(Box::default())),
        }
    }
}

impl PartialEq for TimestampFormat {
    fn eq(&self, other: &Self) -> bool {
        self.pattern == other.pattern
    }
}

impl Eq for TimestampFormat {}

/// Timestamp slot of a prefix
#[derive(Debug, Clone, Copy)]
pub(crate) struct Stamp<'a> {
    pub(crate) format: &'a TimestampFormat,
    pub(crate) at: OffsetDateTime,
}

/// Compose one complete line into `buf`.
///
/// With a stamp the line reads `<time> [<LEVEL>] <body>\n`; without one it is
/// just `<body>\n`. When `colors` is set the prefix, and only the prefix, is
/// wrapped in the level's color and a reset.
pub(crate) fn compose(
    buf: &mut Vec<u8>,
    level: Level,
    colors: bool,
    stamp: Option<Stamp<'_>>,
    body: fmt::Arguments<'_>,
) {
    if let Some(stamp) = stamp {
        if colors {
            buf.extend_from_slice(level.color().code().as_bytes());
        }
        stamp.format.render_into(stamp.at, buf);
        buf.extend_from_slice(b" [");
        buf.extend_from_slice(level.as_str().as_bytes());
        buf.extend_from_slice(b"] ");
        if colors {
            buf.extend_from_slice(RESET.as_bytes());
        }
    }
    // A Display impl that errors leaves whatever it wrote so far.
    let _ = buf.write_fmt(body);
    buf.push(b'\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use time::macros::datetime;

    fn line(
        level: Level,
        colors: bool,
        stamp: Option<Stamp<'_>>,
        body: fmt::Arguments<'_>,
    ) -> String {
        let mut buf = Vec::new();
        compose(&mut buf, level, colors, stamp, body);
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_default_pattern() {
        let format = TimestampFormat::default();
        assert_eq!(format.pattern(), DEFAULT_TIMESTAMP_FORMAT);
        assert_eq!(
            format.render(datetime!(2024-01-02 03:04:05 UTC)),
            "2024-01-02 03:04:05"
        );
    }

    #[test]
    fn test_custom_pattern() {
        let format = TimestampFormat::new("[hour]:[minute]").unwrap();
        assert_eq!(format.render(datetime!(2024-01-02 13:45:05 UTC)), "13:45");
    }

    #[test]
    fn test_invalid_pattern() {
        let err = TimestampFormat::new("[yeer]").unwrap_err();
        assert!(
            matches!(err, LogError::InvalidTimestampFormat { ref pattern, .. } if pattern == "[yeer]")
        );
    }

    #[test]
    fn test_parse_only_component_rejected() {
        let err = TimestampFormat::new("[year] [ignore count:2]").unwrap_err();
        assert!(matches!(
            err,
            LogError::InvalidTimestampFormat { ref pattern, .. }
                if pattern == "[year] [ignore count:2]"
        ));
    }

    #[test]
    fn test_plain_prefix() {
        let format = TimestampFormat::default();
        let stamp = Stamp {
            format: &format,
            at: datetime!(2024-01-02 03:04:05 UTC),
        };
        assert_eq!(
            line(Level::Info, false, Some(stamp), format_args!("value={}", 7)),
            "2024-01-02 03:04:05 [INFO] value=7\n"
        );
    }

    #[test]
    fn test_colored_prefix_leaves_body_alone() {
        let format = TimestampFormat::default();
        let stamp = Stamp {
            format: &format,
            at: datetime!(2024-01-02 03:04:05 UTC),
        };
        assert_eq!(
            line(Level::Error, true, Some(stamp), format_args!("boom")),
            "\x1b[31m2024-01-02 03:04:05 [ERROR] \x1b[0mboom\n"
        );
    }

    #[test]
    fn test_no_stamp() {
        assert_eq!(line(Level::Error, false, None, format_args!("boom")), "boom\n");
        assert_eq!(line(Level::Warn, true, None, format_args!("boom")), "boom\n");
    }

    #[test]
    fn test_positional_arguments() {
        assert_eq!(
            line(
                Level::Info,
                false,
                None,
                format_args!("user {} logged in at {}", "alice", 42)
            ),
            "user alice logged in at 42\n"
        );
    }

    #[test]
    fn test_body_is_not_reinterpreted() {
        assert_eq!(
            line(Level::Info, false, None, format_args!("{}", "100% {done}")),
            "100% {done}\n"
        );
    }
}
