use std::fmt::Write;

use crate::checker::{Diagnostic, FileReport};
use crate::error::Result;

use super::{ColorMode, OutputFormatter, ansi};

pub struct TextFormatter {
    use_colors: bool,
    verbose: u8,
    quiet: bool,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self::with_verbose(mode, 0)
    }

    #[must_use]
    pub fn with_verbose(mode: ColorMode, verbose: u8) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
            verbose,
            quiet: false,
        }
    }

    /// Suppress the summary line.
    #[must_use]
    pub const fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        format!("{color}{text}{}", ansi::RESET)
    }

    fn format_diagnostic(&self, diagnostic: &Diagnostic, output: &mut String) {
        if self.use_colors {
            let location = format!(
                "{}:{}",
                diagnostic.signature.filename().display(),
                diagnostic.line()
            );
            let _ = writeln!(
                output,
                "{} in function {} - {}",
                self.colorize(&location, ansi::CYAN),
                diagnostic.function(),
                self.colorize(&diagnostic.kind.message(), ansi::RED)
            );
        } else {
            let _ = writeln!(output, "{diagnostic}");
        }
    }

    fn format_clean(&self, report: &FileReport, output: &mut String) {
        let _ = writeln!(
            output,
            "{} {} ({} declarations, {} comments)",
            self.colorize("✓", ansi::GREEN),
            report.path.display(),
            report.declarations,
            report.comments
        );
    }

    fn format_summary(&self, reports: &[FileReport]) -> String {
        let declarations: usize = reports.iter().map(|r| r.declarations).sum();
        let diagnostics: usize = reports.iter().map(|r| r.diagnostics.len()).sum();
        let clean = reports.iter().filter(|r| r.is_clean()).count();

        let clean_str = self.colorize(&clean.to_string(), ansi::GREEN);
        let diagnostics_str = if diagnostics == 0 {
            self.colorize("0", ansi::GREEN)
        } else {
            self.colorize(&diagnostics.to_string(), ansi::RED)
        };

        format!(
            "Summary: {} files checked, {declarations} declarations, {clean_str} clean, {diagnostics_str} diagnostics",
            reports.len()
        )
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new(ColorMode::Auto)
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, reports: &[FileReport]) -> Result<String> {
        let mut output = String::new();

        for report in reports {
            for diagnostic in &report.diagnostics {
                self.format_diagnostic(diagnostic, &mut output);
            }
        }

        if self.verbose >= 1 {
            for report in reports.iter().filter(|r| r.is_clean()) {
                self.format_clean(report, &mut output);
            }
        }

        if !self.quiet {
            if !output.is_empty() {
                output.push('\n');
            }
            let _ = writeln!(output, "{}", self.format_summary(reports));
        }

        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
