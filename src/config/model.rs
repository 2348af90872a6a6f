use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::comment::{Dialect, WrapOptions};

/// Top-level `.cdoc-guard.toml` contents.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub scanner: ScannerConfig,

    #[serde(default)]
    pub check: CheckConfig,

    #[serde(default)]
    pub template: TemplateConfig,
}

/// Which files a directory walk picks up.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ScannerConfig {
    /// File extensions to check, without the dot.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Glob patterns excluded from directory walks.
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            exclude: Vec::new(),
        }
    }
}

fn default_extensions() -> Vec<String> {
    vec!["c".to_string(), "h".to_string()]
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CheckConfig {
    /// Functions whose diagnostics are suppressed.
    #[serde(default)]
    pub ignore_functions: Vec<String>,

    /// Newline-delimited ignore list, relative to the working directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ignore_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct TemplateConfig {
    #[serde(default)]
    pub dialect: Dialect,

    /// Maximum comment line length.
    #[serde(default = "default_width")]
    pub width: usize,

    /// Extra indentation for wrapped continuation lines.
    #[serde(default = "default_indent")]
    pub indent: usize,
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            dialect: Dialect::default(),
            width: default_width(),
            indent: default_indent(),
        }
    }
}

impl TemplateConfig {
    #[must_use]
    pub const fn wrap_options(&self) -> WrapOptions {
        WrapOptions {
            width: self.width,
            indent: self.indent,
        }
    }
}

const fn default_width() -> usize {
    80
}

const fn default_indent() -> usize {
    4
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
