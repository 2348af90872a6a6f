//! Structured documentation comments.
//!
//! Two dialects are understood: Doxygen blocks opened by `/**` and EDT blocks
//! opened by `/*` whose body carries an `edt:` definition line. Both share the
//! locator, the body stripping rules and the line wrapper.

mod doxygen;
mod edt;
mod locator;
mod reference;
mod wrap;

pub use doxygen::{DoxygenParser, render_doxygen};
pub use edt::{EdtParser, render_edt, render_edt_text};
pub use locator::locate_comments;
pub use reference::ReferenceClassifier;
pub use wrap::{WrapOptions, to_comment_block, wrap_line};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::StructuralCommentError;
use crate::model::VerbatimComment;

/// Closing line of every located comment.
pub const CLOSING_LINE: &str = " */";

/// Placeholder used by templates for empty descriptions.
pub const DESCRIPTION_PLACEHOLDER: &str = "<Description>";

/// Placeholder used by templates for empty parameter and return comments.
pub const COMMENT_PLACEHOLDER: &str = "<Comment>";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    #[default]
    Doxygen,
    Edt,
}

impl Dialect {
    /// Exact text of the line that opens a block in this dialect.
    #[must_use]
    pub const fn opening(self) -> &'static str {
        match self {
            Self::Doxygen => "/**",
            Self::Edt => "/*",
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Doxygen => "doxygen",
            Self::Edt => "edt",
        }
    }
}

/// Parse cursor shared by both dialect parsers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    Description,
    Parameter,
    Return,
}

/// What a body line introduces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Parameter,
    Return,
    Text,
}

impl Section {
    /// Cursor transition for one body line.
    #[must_use]
    pub const fn after(self, marker: Marker) -> Self {
        match marker {
            Marker::Parameter => Self::Parameter,
            Marker::Return => Self::Return,
            Marker::Text => self,
        }
    }
}

/// An interior comment line with its `*` marker and surrounding space removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BodyLine {
    /// 1-based source line.
    pub line: usize,
    pub text: String,
}

/// Check the block delimiters and markers, returning the interior lines.
///
/// # Errors
/// Returns a [`StructuralCommentError`] at the first line that breaks the rules:
/// the opening line must equal `opening`, every later line must start with `*`
/// once trimmed, and the last line must end with `/`.
pub fn strip_body(
    comment: &VerbatimComment,
    opening: &str,
) -> Result<Vec<BodyLine>, StructuralCommentError> {
    let Some(first) = comment.lines.first() else {
        return Err(StructuralCommentError::new(
            comment.start_line,
            "Comment is empty",
        ));
    };
    if first.trim() != opening {
        return Err(StructuralCommentError::new(
            comment.start_line,
            format!("First line is not {opening}"),
        ));
    }

    let rest = &comment.lines[1..];
    let mut body = Vec::with_capacity(rest.len());
    for (offset, raw) in rest.iter().enumerate() {
        let line = comment.line_number(offset + 1);
        let Some(stripped) = raw.trim().strip_prefix('*') else {
            return Err(StructuralCommentError::new(
                line,
                "Line does not start with a *",
            ));
        };
        body.push(BodyLine {
            line,
            text: stripped.trim().to_string(),
        });
    }

    match body.pop() {
        Some(last) if last.text.ends_with('/') => Ok(body),
        _ => Err(StructuralCommentError::new(
            comment.end_line,
            "Last line is not */",
        )),
    }
}

/// Split off the first whitespace-delimited word.
fn split_word(text: &str) -> (&str, &str) {
    let text = text.trim_start();
    let end = text.find(char::is_whitespace).unwrap_or(text.len());
    text.split_at(end)
}

fn or_placeholder<'a>(text: &'a str, placeholder: &'a str) -> &'a str {
    if text.trim().is_empty() {
        placeholder
    } else {
        text
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
