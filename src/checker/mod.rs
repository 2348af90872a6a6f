//! Per-file documentation checking.
//!
//! One file goes through the whole pipeline before the next starts: stub and
//! resolve the skeleton, parse declarations, locate and parse comments of both
//! dialects, bind them, validate the bindings.

mod diagnostic;
mod ignore;
mod report;
mod validate;

pub use diagnostic::{Diagnostic, DiagnosticKind};
pub use ignore::IgnoreList;
pub use report::{CommentIssue, FileReport};
pub use validate::{validate, validate_bindings};

use std::path::Path;

use crate::comment::{Dialect, DoxygenParser, EdtParser, locate_comments};
use crate::error::{DocGuardError, Result};
use crate::matcher::{LocatedRecord, bind};
use crate::provider::{AstProvider, DeclarationScanner};
use crate::stubber::{Resolved, resolve};

/// Checks C files against their documentation comments.
#[derive(Debug, Clone)]
pub struct DocChecker<P = DeclarationScanner> {
    provider: P,
    doxygen: DoxygenParser,
    edt: EdtParser,
}

impl Default for DocChecker<DeclarationScanner> {
    fn default() -> Self {
        Self::new()
    }
}

impl DocChecker<DeclarationScanner> {
    #[must_use]
    pub fn new() -> Self {
        Self::with_provider(DeclarationScanner::new())
    }
}

impl<P: AstProvider> DocChecker<P> {
    #[must_use]
    pub fn with_provider(provider: P) -> Self {
        Self {
            provider,
            doxygen: DoxygenParser::new(),
            edt: EdtParser::new(),
        }
    }

    #[must_use]
    pub const fn provider(&self) -> &P {
        &self.provider
    }

    /// Read and check one file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or the provider fails on it.
    pub fn check_file(&self, path: &Path) -> Result<FileReport> {
        let source = std::fs::read_to_string(path).map_err(|source| DocGuardError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        self.check_source(path, &source)
    }

    /// Check already loaded source text. `path` is used for locations only.
    ///
    /// # Errors
    /// Returns an error if the provider fails on the skeleton.
    pub fn check_source(&self, path: &Path, source: &str) -> Result<FileReport> {
        let Resolved {
            skeleton,
            output,
            passes,
        } = resolve(&self.provider, source, path)?;

        let provider_notes = output.diagnostics.clone();
        let signatures = output.into_signatures(path);

        let lines: Vec<&str> = source.lines().collect();
        let mut comment_issues = Vec::new();

        let mut doxygen = Vec::new();
        for comment in locate_comments(&lines, Dialect::Doxygen) {
            match self.doxygen.parse(&comment) {
                Ok(record) => doxygen.push(LocatedRecord::new(comment.end_line, record)),
                Err(error) => comment_issues.push(CommentIssue {
                    dialect: Dialect::Doxygen,
                    error,
                }),
            }
        }

        let mut edt = Vec::new();
        for comment in locate_comments(&lines, Dialect::Edt) {
            match self.edt.parse(&comment) {
                Ok(Some(record)) => edt.push(LocatedRecord::new(comment.end_line, record)),
                Ok(None) => {}
                Err(error) => comment_issues.push(CommentIssue {
                    dialect: Dialect::Edt,
                    error,
                }),
            }
        }

        let comments = doxygen.len() + edt.len();
        let bindings = bind(signatures, &doxygen, &edt);
        let diagnostics = validate_bindings(&bindings);

        Ok(FileReport {
            path: path.to_path_buf(),
            declarations: bindings.len(),
            comments,
            diagnostics,
            comment_issues,
            aliases: skeleton.aliases().iter().cloned().collect(),
            provider_notes,
            passes,
        })
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
