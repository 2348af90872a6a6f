use std::fmt::Write as _;

use crate::error::StructuralCommentError;
use crate::model::{DocRecord, Direction, ParameterDescriptor, RETURN_SENTINEL, VerbatimComment};

use super::{
    BodyLine, COMMENT_PLACEHOLDER, DESCRIPTION_PLACEHOLDER, Dialect, Marker, ReferenceClassifier,
    Section, WrapOptions, or_placeholder, strip_body, to_comment_block,
};

const DEFINITION_PREFIX: &str = "edt:";
const RETURN_PREFIX: &str = "Return:";
const ARGUMENT_PREFIX: &str = "Argument:";

/// Fields after `edt:`: category placeholder, wildcard marker, function name.
const DEFINITION_FIELDS: usize = 3;

/// Width of the `Argument` label that direction tags are aligned against.
const LABEL_WIDTH: usize = "Argument".len();

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EdtLine<'a> {
    Definition(&'a str),
    Marker(Marker, &'a str),
}

impl<'a> EdtLine<'a> {
    fn classify(text: &'a str) -> Self {
        if let Some(rest) = text.strip_prefix(DEFINITION_PREFIX) {
            Self::Definition(rest)
        } else if let Some(rest) = text.strip_prefix(ARGUMENT_PREFIX) {
            Self::Marker(Marker::Parameter, rest)
        } else if let Some(rest) = text.strip_prefix(RETURN_PREFIX) {
            Self::Marker(Marker::Return, rest)
        } else {
            Self::Marker(Marker::Text, text)
        }
    }
}

/// Parser for `/*` blocks carrying an `edt: * function <name>` definition line.
#[derive(Debug, Clone)]
pub struct EdtParser {
    classifier: ReferenceClassifier,
}

impl Default for EdtParser {
    fn default() -> Self {
        Self::new()
    }
}

impl EdtParser {
    #[must_use]
    pub fn new() -> Self {
        Self {
            classifier: ReferenceClassifier::for_dialect(Dialect::Edt),
        }
    }

    /// Parse one located `/*` comment.
    ///
    /// Returns `Ok(None)` for plain block comments that carry neither a definition
    /// line nor a reference to documentation elsewhere.
    ///
    /// # Errors
    /// Returns a [`StructuralCommentError`] for bad delimiters or markers in a
    /// block that names an `edt:` line, a definition line without exactly three
    /// fields, repeated definition or `Return:` lines, and malformed `Argument:`
    /// lines.
    pub fn parse(
        &self,
        comment: &VerbatimComment,
    ) -> Result<Option<DocRecord>, StructuralCommentError> {
        let body = match strip_body(comment, Dialect::Edt.opening()) {
            Ok(body) => body,
            Err(_) if !mentions_definition(comment) => return Ok(None),
            Err(e) => return Err(e),
        };

        if self.classifier.is_reference(body.iter().map(|l| l.text.as_str())) {
            let name = body.iter().find_map(|line| match EdtLine::classify(&line.text) {
                EdtLine::Definition(rest) => definition_name(rest),
                EdtLine::Marker(..) => None,
            });
            return Ok(Some(DocRecord::opaque(name)));
        }

        let mut name: Option<String> = None;
        let mut section = Section::Description;
        let mut description: Vec<&str> = Vec::new();
        let mut params: Vec<ParameterDescriptor> = Vec::new();
        let mut returns: Option<ParameterDescriptor> = None;

        for line in &body {
            match EdtLine::classify(&line.text) {
                EdtLine::Definition(rest) => {
                    if name.is_some() {
                        return Err(StructuralCommentError::new(
                            line.line,
                            "Found more than one 'edt:' line",
                        ));
                    }
                    name = Some(definition_name(rest).ok_or_else(|| {
                        StructuralCommentError::new(
                            line.line,
                            format!(
                                "Definition line must have {DEFINITION_FIELDS} fields after '{DEFINITION_PREFIX}'"
                            ),
                        )
                    })?);
                }
                EdtLine::Marker(marker, rest) => {
                    section = section.after(marker);
                    match marker {
                        Marker::Parameter => params.push(parse_argument(line, rest)?),
                        Marker::Return => {
                            if returns.is_some() {
                                return Err(StructuralCommentError::new(
                                    line.line,
                                    "Found more than one 'Return:' line",
                                ));
                            }
                            returns = Some(parse_return(rest));
                        }
                        Marker::Text => match section {
                            Section::Description if name.is_some() => description.push(rest),
                            Section::Description => {}
                            Section::Parameter => {
                                if let Some(param) = params.last_mut() {
                                    push_argument_text(param, rest);
                                }
                            }
                            Section::Return => {
                                if let Some(ret) = returns.as_mut() {
                                    ret.push_comment(rest);
                                }
                            }
                        },
                    }
                }
            }
        }

        let Some(name) = name else {
            return Ok(None);
        };

        Ok(Some(DocRecord {
            name: Some(name),
            description: description.join("\n").trim().to_string(),
            returns,
            params,
            opaque: false,
        }))
    }
}

fn mentions_definition(comment: &VerbatimComment) -> bool {
    comment.lines.iter().any(|line| {
        line.trim_start_matches(|c: char| c == '*' || c.is_whitespace())
            .starts_with(DEFINITION_PREFIX)
    })
}

fn definition_name(rest: &str) -> Option<String> {
    let fields: Vec<&str> = rest.split_whitespace().collect();
    (fields.len() == DEFINITION_FIELDS).then(|| fields[DEFINITION_FIELDS - 1].to_string())
}

/// `Argument: [type] name`
fn parse_argument(line: &BodyLine, rest: &str) -> Result<ParameterDescriptor, StructuralCommentError> {
    let tokens: Vec<&str> = rest.split_whitespace().collect();
    match tokens.as_slice() {
        [name] => Ok(ParameterDescriptor::named(*name)),
        [typename, name] => Ok(ParameterDescriptor::typed(*typename, *name)),
        _ => Err(StructuralCommentError::new(
            line.line,
            "Argument line must name exactly one variable",
        )),
    }
}

fn parse_return(rest: &str) -> ParameterDescriptor {
    let typename = rest.trim();
    let mut ret = ParameterDescriptor::named(RETURN_SENTINEL);
    if !typename.is_empty() {
        ret.typename = Some(typename.to_string());
    }
    ret
}

/// The first text line of an argument block may open with `IN:`, `OUT:` or `INOUT:`.
fn push_argument_text(param: &mut ParameterDescriptor, text: &str) {
    if param.comment.is_none()
        && param.direction.is_none()
        && let Some((label, rest)) = text.split_once(':')
        && let Some(direction) = Direction::parse(label)
        && label.chars().all(|c| c.is_ascii_uppercase())
    {
        param.direction = Some(direction);
        param.push_comment(rest);
        return;
    }
    param.push_comment(text);
}

/// Render the free text of an EDT block for `record`, without comment delimiters.
#[must_use]
pub fn render_edt_text(record: &DocRecord) -> String {
    let mut text = String::new();
    let _ = write!(
        text,
        "{DEFINITION_PREFIX} * function {}\n\n",
        record.name.as_deref().unwrap_or_default()
    );
    text.push_str(or_placeholder(&record.description, DESCRIPTION_PLACEHOLDER));
    text.push_str("\n\n");

    if let Some(ret) = &record.returns {
        let _ = write!(
            text,
            "{RETURN_PREFIX} {}\n  {}\n",
            ret.typename.as_deref().unwrap_or_default(),
            ret.comment.as_deref().unwrap_or(COMMENT_PLACEHOLDER)
        );
    }

    for param in &record.params {
        let _ = write!(text, "\n{ARGUMENT_PREFIX} {}\n", param.name);
        if let Some(direction) = param.direction {
            let label = direction.label();
            let pad = LABEL_WIDTH.saturating_sub(label.len() + 3);
            let _ = write!(text, "  {label}:{}", " ".repeat(pad));
        }
        let _ = writeln!(
            text,
            "  {}",
            param.comment.as_deref().unwrap_or(COMMENT_PLACEHOLDER)
        );
    }

    text
}

/// Render an EDT template for `record`, wrapped into a `/*` block.
#[must_use]
pub fn render_edt(record: &DocRecord, options: WrapOptions) -> String {
    to_comment_block(&render_edt_text(record), Dialect::Edt.opening(), options)
}

#[cfg(test)]
#[path = "edt_tests.rs"]
mod tests;
