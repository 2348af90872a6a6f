//! Declaration provider seam.
//!
//! A provider receives skeleton text and reports the top-level function
//! declarations it contains together with severity-tagged diagnostics. The
//! built-in [`DeclarationScanner`] covers the declaration subset that a skeleton
//! can contain; anything implementing [`AstProvider`] can replace it.

mod scanner;

pub use scanner::DeclarationScanner;

use std::path::Path;

use indexmap::IndexSet;

use crate::error::Result;
use crate::model::{FunctionSignature, Location, ParameterDescriptor};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Note,
    Warning,
    Error,
    Fatal,
}

impl Severity {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Note => "note",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Fatal => "fatal",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderDiagnostic {
    pub severity: Severity,
    pub line: usize,
    pub message: String,
}

impl ProviderDiagnostic {
    #[must_use]
    pub fn new(severity: Severity, line: usize, message: impl Into<String>) -> Self {
        Self {
            severity,
            line,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        self.severity >= Severity::Error
    }

    /// Every `'quoted'` token in the message, in order.
    pub fn quoted_tokens(&self) -> impl Iterator<Item = &str> {
        let segments: Vec<&str> = self.message.split('\'').collect();
        let closed = segments.len().saturating_sub(1);
        segments
            .into_iter()
            .enumerate()
            .filter(move |(i, _)| i % 2 == 1 && *i < closed)
            .map(|(_, s)| s)
    }
}

/// A function declaration as the provider sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub name: String,
    /// 1-based line of the function name in the skeleton.
    pub line: usize,
    pub return_type: String,
    /// `(type spelling, parameter name)` pairs in declaration order.
    pub params: Vec<(String, String)>,
}

impl Declaration {
    /// Convert into a signature located in the original source file.
    #[must_use]
    pub fn into_signature(self, filename: &Path) -> FunctionSignature {
        FunctionSignature {
            name: self.name,
            location: Location::new(filename, self.line),
            returns: ParameterDescriptor::returning(self.return_type),
            params: self
                .params
                .into_iter()
                .map(|(ty, name)| ParameterDescriptor::typed(ty, name))
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProviderOutput {
    pub declarations: Vec<Declaration>,
    pub diagnostics: Vec<ProviderDiagnostic>,
}

impl ProviderOutput {
    /// Identifiers quoted by error-severity diagnostics, first occurrence first.
    #[must_use]
    pub fn unknown_types(&self) -> IndexSet<String> {
        self.diagnostics
            .iter()
            .filter(|d| d.is_error())
            .flat_map(ProviderDiagnostic::quoted_tokens)
            .map(str::to_string)
            .collect()
    }

    #[must_use]
    pub fn into_signatures(self, filename: &Path) -> Vec<FunctionSignature> {
        self.declarations
            .into_iter()
            .map(|d| d.into_signature(filename))
            .collect()
    }
}

/// Parses skeleton text into declarations.
pub trait AstProvider {
    /// Parse one skeleton.
    ///
    /// `filename` names the original source and is only used for error reporting.
    ///
    /// # Errors
    /// Returns an error if the provider cannot process the skeleton at all; the
    /// caller abandons the current file and moves on.
    fn parse(&self, skeleton: &str, filename: &Path) -> Result<ProviderOutput>;
}

impl<P: AstProvider + ?Sized> AstProvider for &P {
    fn parse(&self, skeleton: &str, filename: &Path) -> Result<ProviderOutput> {
        (**self).parse(skeleton, filename)
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
