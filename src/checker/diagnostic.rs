use std::fmt;

use crate::model::FunctionSignature;

/// What is wrong between a declaration and its documentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticKind {
    MissingDocumentation,
    MissingParameter(String),
    ExtraParameter(String),
    MismatchedParameter(String),
    MissingReturnDocumentation,
}

impl DiagnosticKind {
    /// Stable identifier used in machine-readable output.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::MissingDocumentation => "missing-documentation",
            Self::MissingParameter(_) => "missing-parameter",
            Self::ExtraParameter(_) => "extra-parameter",
            Self::MismatchedParameter(_) => "mismatched-parameter",
            Self::MissingReturnDocumentation => "missing-return",
        }
    }

    #[must_use]
    pub fn parameter(&self) -> Option<&str> {
        match self {
            Self::MissingParameter(name)
            | Self::ExtraParameter(name)
            | Self::MismatchedParameter(name) => Some(name),
            Self::MissingDocumentation | Self::MissingReturnDocumentation => None,
        }
    }

    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::MissingDocumentation => "Is missing documentation!".to_string(),
            Self::MissingParameter(name) => format!("Argument missing from docstring: {name}"),
            Self::ExtraParameter(name) => format!("Extra argument in docstring: {name}"),
            Self::MismatchedParameter(name) => format!("Argument incorrect in docstring: {name}"),
            Self::MissingReturnDocumentation => {
                "Missing return documentation in non-void function".to_string()
            }
        }
    }
}

/// One inconsistency, tied to the declaration it was found on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub signature: FunctionSignature,
}

impl Diagnostic {
    #[must_use]
    pub const fn new(kind: DiagnosticKind, signature: FunctionSignature) -> Self {
        Self { kind, signature }
    }

    #[must_use]
    pub fn function(&self) -> &str {
        &self.signature.name
    }

    #[must_use]
    pub const fn line(&self) -> usize {
        self.signature.line()
    }
}

impl fmt::Display for Diagnostic {
    /// `<filename>:<line> in function <name> - <message>`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{} in function {} - {}",
            self.signature.filename().display(),
            self.line(),
            self.function(),
            self.kind.message()
        )
    }
}
