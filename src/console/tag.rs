//! Labeled message kinds written to the console.

use std::fmt;

use colored::{ColoredString, Colorize};

/// Category of a console message; rendered as a bracketed label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleTag {
    /// Diagnostics for conditions that should not occur.
    Debug,
    /// Rejected input.
    Error,
    /// Preconditions and outcomes reported by the program itself.
    System,
    /// Progress and results of an action.
    Info,
}

impl ConsoleTag {
    /// Plain label text, e.g. `[INFO]`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Debug => "[DEBUG]",
            Self::Error => "[ERROR]",
            Self::System => "[SYSTEM]",
            Self::Info => "[INFO]",
        }
    }

    /// Label with its color applied; plain when coloring is disabled.
    #[must_use]
    pub fn styled(self) -> ColoredString {
        let label = self.label();
        match self {
            Self::Debug => label.dimmed(),
            Self::Error => label.red().bold(),
            Self::System => label.yellow(),
            Self::Info => label.cyan(),
        }
    }
}

impl fmt::Display for ConsoleTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.styled())
    }
}
