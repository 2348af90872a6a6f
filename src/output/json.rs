use serde::Serialize;

use crate::checker::{Diagnostic, FileReport};
use crate::error::Result;

use super::OutputFormatter;

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormatter;

impl JsonFormatter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

#[derive(Serialize)]
struct JsonOutput {
    summary: Summary,
    diagnostics: Vec<JsonDiagnostic>,
    comment_issues: Vec<JsonCommentIssue>,
}

#[derive(Serialize)]
struct Summary {
    files: usize,
    declarations: usize,
    comments: usize,
    diagnostics: usize,
    comment_issues: usize,
}

#[derive(Serialize)]
struct JsonDiagnostic {
    file: String,
    line: usize,
    function: String,
    code: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    parameter: Option<String>,
    message: String,
}

#[derive(Serialize)]
struct JsonCommentIssue {
    file: String,
    line: usize,
    dialect: &'static str,
    message: String,
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, reports: &[FileReport]) -> Result<String> {
        let diagnostics: Vec<_> = reports
            .iter()
            .flat_map(|r| &r.diagnostics)
            .map(convert_diagnostic)
            .collect();

        let comment_issues: Vec<_> = reports
            .iter()
            .flat_map(|r| {
                r.comment_issues.iter().map(|issue| JsonCommentIssue {
                    file: r.path.display().to_string(),
                    line: issue.error.line,
                    dialect: issue.dialect.as_str(),
                    message: issue.error.message.clone(),
                })
            })
            .collect();

        let output = JsonOutput {
            summary: Summary {
                files: reports.len(),
                declarations: reports.iter().map(|r| r.declarations).sum(),
                comments: reports.iter().map(|r| r.comments).sum(),
                diagnostics: diagnostics.len(),
                comment_issues: comment_issues.len(),
            },
            diagnostics,
            comment_issues,
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

fn convert_diagnostic(diagnostic: &Diagnostic) -> JsonDiagnostic {
    JsonDiagnostic {
        file: diagnostic.signature.filename().display().to_string(),
        line: diagnostic.line(),
        function: diagnostic.function().to_string(),
        code: diagnostic.kind.code(),
        parameter: diagnostic.kind.parameter().map(ToString::to_string),
        message: diagnostic.kind.message(),
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
