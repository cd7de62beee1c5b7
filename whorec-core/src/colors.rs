//! Terminal palette shared by the human formatter and the CLI.
//!
//! Sticks to ANSI bright colors so output looks the same on most terminals.

use colored::{ColoredString, Colorize};

/// Semantic colors for record output.
pub trait PaletteExt {
    /// Section headers.
    fn heading(&self) -> ColoredString;
    /// Field labels.
    fn field(&self) -> ColoredString;
    /// Extracted values.
    fn plain(&self) -> ColoredString;
    /// Rules and secondary text.
    fn muted(&self) -> ColoredString;
    fn caution(&self) -> ColoredString;
    fn failure(&self) -> ColoredString;
}

impl<S: AsRef<str>> PaletteExt for S {
    fn heading(&self) -> ColoredString {
        self.as_ref().bright_purple().bold()
    }

    fn field(&self) -> ColoredString {
        self.as_ref().bright_cyan().bold()
    }

    fn plain(&self) -> ColoredString {
        self.as_ref().bright_white()
    }

    fn muted(&self) -> ColoredString {
        self.as_ref().bright_black()
    }

    fn caution(&self) -> ColoredString {
        self.as_ref().bright_yellow().bold()
    }

    fn failure(&self) -> ColoredString {
        self.as_ref().bright_red().bold()
    }
}
