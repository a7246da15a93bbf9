//! ANSI colors for level prefixes

/// Reset sequence appended after a colored prefix
pub const RESET: &str = "\x1b[0m";

/// Terminal color of a level prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// `\x1b[34m`
    Blue,
    /// `\x1b[93m`
    BrightYellow,
    /// `\x1b[92m`
    BrightGreen,
    /// `\x1b[33m`
    Yellow,
    /// `\x1b[31m`
    Red,
    /// `\x1b[35m`
    Magenta,
}

impl Color {
    /// Escape sequence that switches the terminal to this color
    pub const fn code(self) -> &'static str {
        match self {
            Self::Blue => "\x1b[34m",
            Self::BrightYellow => "\x1b[93m",
            Self::BrightGreen => "\x1b[92m",
            Self::Yellow => "\x1b[33m",
            Self::Red => "\x1b[31m",
            Self::Magenta => "\x1b[35m",
        }
    }
}
