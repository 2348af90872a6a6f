use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DocGuardError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid glob pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),

    #[error("Declaration provider failed on {path}: {message}")]
    Provider { path: PathBuf, message: String },

    #[error("Function '{name}' is not declared in {path}")]
    FunctionNotFound { name: String, path: PathBuf },
}

impl DocGuardError {
    /// Short category label used as the heading of stderr error output.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) | Self::TomlParse(_) => "Config",
            Self::FileRead { .. } => "FileRead",
            Self::InvalidPattern { .. } => "Pattern",
            Self::Io(_) => "IO",
            Self::JsonSerialize(_) => "Output",
            Self::Provider { .. } => "Provider",
            Self::FunctionNotFound { .. } => "Lookup",
        }
    }

    /// Underlying cause for variants that wrap one, shown under the headline.
    #[must_use]
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::FileRead { source, .. } => Some(source.to_string()),
            Self::InvalidPattern { source, .. } => Some(source.to_string()),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, DocGuardError>;

/// A malformed documentation comment.
///
/// Only the one comment is abandoned; the rest of the file is still checked and
/// any function relying on the comment is reported as undocumented.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("line {line}: {message}")]
pub struct StructuralCommentError {
    /// 1-based source line of the offending comment line.
    pub line: usize,
    pub message: String,
}

impl StructuralCommentError {
    #[must_use]
    pub fn new(line: usize, message: impl Into<String>) -> Self {
        Self {
            line,
            message: message.into(),
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
