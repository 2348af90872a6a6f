use std::fmt;
use std::path::PathBuf;

use crate::comment::Dialect;
use crate::error::StructuralCommentError;
use crate::provider::ProviderDiagnostic;

use super::{Diagnostic, IgnoreList};

/// A comment that could not be parsed and was skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentIssue {
    pub dialect: Dialect,
    pub error: StructuralCommentError,
}

impl fmt::Display for CommentIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "malformed {} comment at {}", self.dialect.as_str(), self.error)
    }
}

/// Everything learned about one checked file.
#[derive(Debug, Clone, Default)]
pub struct FileReport {
    pub path: PathBuf,
    pub declarations: usize,
    /// Parsed documentation records of both dialects.
    pub comments: usize,
    pub diagnostics: Vec<Diagnostic>,
    pub comment_issues: Vec<CommentIssue>,
    /// Identifiers aliased to `int` while resolving the skeleton.
    pub aliases: Vec<String>,
    /// Provider diagnostics left after resolution.
    pub provider_notes: Vec<ProviderDiagnostic>,
    /// Number of provider passes.
    pub passes: usize,
}

impl FileReport {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Drop diagnostics raised on ignored functions.
    pub fn apply_ignore_list(&mut self, ignore: &IgnoreList) {
        if ignore.is_empty() {
            return;
        }
        self.diagnostics.retain(|d| !ignore.contains(d.function()));
    }
}
