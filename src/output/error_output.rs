//! Colored error, warning and info lines on stderr.
//!
//! Format: `✖ Type: message` / `  × detail` / `  help: suggestion`

use std::io::{IsTerminal, Write};

use super::ColorMode;
use super::ansi;

/// Stderr reporter used for everything that is not the check result itself.
#[derive(Debug, Clone, Copy)]
pub struct ErrorOutput {
    use_colors: bool,
}

impl ErrorOutput {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: match mode {
                ColorMode::Always => true,
                ColorMode::Never => false,
                ColorMode::Auto => Self::stderr_supports_color(),
            },
        }
    }

    /// Auto-detects color support on stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(ColorMode::Auto)
    }

    fn stderr_supports_color() -> bool {
        // Presence of NO_COLOR (any value) disables color.
        if std::env::var("NO_COLOR").is_ok() {
            return false;
        }
        std::io::stderr().is_terminal()
    }

    pub fn print_error_with_detail(
        &self,
        error_type: &str,
        message: &str,
        detail: Option<&str>,
        suggestion: Option<&str>,
    ) {
        let mut stderr = std::io::stderr().lock();
        self.write_error(&mut stderr, error_type, message, detail, suggestion);
    }

    /// Verbose progress notes.
    pub fn print_info(&self, message: &str, detail: Option<&str>) {
        let mut stderr = std::io::stderr().lock();
        self.write_info(&mut stderr, message, detail, None);
    }

    /// Writes `✖ {error_type}: {message}` plus optional detail and suggestion.
    pub fn write_error<W: Write>(
        &self,
        w: &mut W,
        error_type: &str,
        message: &str,
        detail: Option<&str>,
        suggestion: Option<&str>,
    ) {
        // Write failures on stderr are not recoverable here.
        if self.use_colors {
            let _ = writeln!(
                w,
                "{}{}✖ {error_type}:{} {message}",
                ansi::BOLD,
                ansi::RED,
                ansi::RESET
            );
        } else {
            let _ = writeln!(w, "✖ {error_type}: {message}");
        }
        self.write_trailer(w, detail, suggestion);
    }

    /// Writes `⚠ Warning: {message}` plus optional detail and suggestion.
    pub fn write_warning<W: Write>(
        &self,
        w: &mut W,
        message: &str,
        detail: Option<&str>,
        suggestion: Option<&str>,
    ) {
        if self.use_colors {
            let _ = writeln!(
                w,
                "{}{}⚠ Warning:{} {message}",
                ansi::BOLD,
                ansi::YELLOW,
                ansi::RESET
            );
        } else {
            let _ = writeln!(w, "⚠ Warning: {message}");
        }
        self.write_trailer(w, detail, suggestion);
    }

    /// Writes `ℹ {message}` plus optional detail and suggestion.
    pub fn write_info<W: Write>(
        &self,
        w: &mut W,
        message: &str,
        detail: Option<&str>,
        suggestion: Option<&str>,
    ) {
        if self.use_colors {
            let _ = writeln!(w, "{}ℹ{} {message}", ansi::CYAN, ansi::RESET);
        } else {
            let _ = writeln!(w, "ℹ {message}");
        }
        self.write_trailer(w, detail, suggestion);
    }

    fn write_trailer<W: Write>(&self, w: &mut W, detail: Option<&str>, suggestion: Option<&str>) {
        if let Some(d) = detail {
            if self.use_colors {
                let _ = writeln!(w, "  {}× {d}{}", ansi::DIM, ansi::RESET);
            } else {
                let _ = writeln!(w, "  × {d}");
            }
        }

        if let Some(s) = suggestion {
            if self.use_colors {
                let _ = writeln!(w, "  {}help:{} {s}", ansi::CYAN, ansi::RESET);
            } else {
                let _ = writeln!(w, "  help: {s}");
            }
        }
    }

    #[cfg(test)]
    pub const fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }
}

impl Default for ErrorOutput {
    fn default() -> Self {
        Self::stderr()
    }
}

#[cfg(test)]
#[path = "error_output_tests.rs"]
mod tests;
