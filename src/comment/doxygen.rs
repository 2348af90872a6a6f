use std::fmt::Write as _;

use crate::error::StructuralCommentError;
use crate::model::{DocRecord, Direction, ParameterDescriptor, VerbatimComment};

use super::{
    BodyLine, COMMENT_PLACEHOLDER, DESCRIPTION_PLACEHOLDER, Dialect, Marker, ReferenceClassifier,
    Section, WrapOptions, or_placeholder, split_word, strip_body, to_comment_block,
};

const PARAM_MARKERS: &[&str] = &["@param", "\\param"];
const RETURN_MARKERS: &[&str] = &["@return", "\\return"];

/// Indentation of value lines under `@param` and `@return` in templates.
const VALUE_INDENT: &str = "             ";

fn classify(text: &str) -> Marker {
    let (word, _) = split_word(text);
    if PARAM_MARKERS.iter().any(|m| word.starts_with(m)) {
        Marker::Parameter
    } else if RETURN_MARKERS.iter().any(|m| word.starts_with(m)) {
        Marker::Return
    } else {
        Marker::Text
    }
}

/// Parser for `/**` blocks using `@param` and `@return` markers.
#[derive(Debug, Clone)]
pub struct DoxygenParser {
    classifier: ReferenceClassifier,
}

impl Default for DoxygenParser {
    fn default() -> Self {
        Self::new()
    }
}

impl DoxygenParser {
    #[must_use]
    pub fn new() -> Self {
        Self {
            classifier: ReferenceClassifier::for_dialect(Dialect::Doxygen),
        }
    }

    /// Parse one located comment.
    ///
    /// # Errors
    /// Returns a [`StructuralCommentError`] for bad delimiters or markers, a
    /// `@param` line without a name, or a second `@return` line.
    pub fn parse(&self, comment: &VerbatimComment) -> Result<DocRecord, StructuralCommentError> {
        let body = strip_body(comment, Dialect::Doxygen.opening())?;

        if self.classifier.is_reference(body.iter().map(|l| l.text.as_str())) {
            return Ok(DocRecord::opaque(None));
        }

        let mut section = Section::Description;
        let mut description: Vec<&str> = Vec::new();
        let mut params: Vec<ParameterDescriptor> = Vec::new();
        let mut returns: Option<ParameterDescriptor> = None;

        for line in &body {
            let marker = classify(&line.text);
            section = section.after(marker);

            match marker {
                Marker::Parameter => params.push(parse_param(line)?),
                Marker::Return => {
                    if returns.is_some() {
                        return Err(StructuralCommentError::new(
                            line.line,
                            "Found more than one return line",
                        ));
                    }
                    returns = Some(parse_return(line));
                }
                Marker::Text => match section {
                    Section::Description => description.push(&line.text),
                    Section::Parameter => {
                        if let Some(param) = params.last_mut() {
                            param.push_comment(&line.text);
                        }
                    }
                    Section::Return => {
                        if let Some(ret) = returns.as_mut() {
                            ret.push_comment(&line.text);
                        }
                    }
                },
            }
        }

        Ok(DocRecord {
            name: None,
            description: description.join("\n").trim().to_string(),
            returns,
            params,
            opaque: false,
        })
    }
}

/// `@param[dir] name comment`; only the name is required.
///
/// Text after the name, a bracketed type spelling included, is kept as comment.
fn parse_param(line: &BodyLine) -> Result<ParameterDescriptor, StructuralCommentError> {
    let (marker, rest) = split_word(&line.text);
    let (name, rest) = split_word(rest);
    if name.is_empty() {
        return Err(StructuralCommentError::new(
            line.line,
            "Parameter line has no variable name",
        ));
    }

    let mut param = ParameterDescriptor::named(name);
    if let Some((_, tag)) = marker.split_once('[') {
        param.direction = Direction::parse(tag.trim_end_matches(']'));
    }

    param.push_comment(rest);

    Ok(param)
}

fn parse_return(line: &BodyLine) -> ParameterDescriptor {
    let (_, rest) = split_word(&line.text);
    let mut ret = ParameterDescriptor::named(crate::model::RETURN_SENTINEL);
    ret.push_comment(rest);
    ret
}

/// Render a Doxygen template for `record`, wrapped into a `/**` block.
#[must_use]
pub fn render_doxygen(record: &DocRecord, options: WrapOptions) -> String {
    let mut text = String::new();
    let _ = writeln!(text, "{}", record.name.as_deref().unwrap_or_default());
    text.push('\n');
    text.push_str(or_placeholder(&record.description, DESCRIPTION_PLACEHOLDER));
    text.push('\n');

    for param in &record.params {
        let direction = param.direction.unwrap_or(Direction::In);
        let _ = write!(text, "\n@param[{}] {}", direction.tag(), param.name);
        if let Some(typename) = &param.typename {
            let _ = write!(text, " ({typename})");
        }
        let _ = writeln!(
            text,
            "\n{VALUE_INDENT}{}",
            param.comment.as_deref().unwrap_or(COMMENT_PLACEHOLDER)
        );
    }

    if let Some(ret) = &record.returns {
        let _ = writeln!(
            text,
            "\n@return {}\n{VALUE_INDENT}{}",
            ret.typename.as_deref().unwrap_or_default(),
            ret.comment.as_deref().unwrap_or(COMMENT_PLACEHOLDER)
        );
    }

    to_comment_block(&text, Dialect::Doxygen.opening(), options)
}

#[cfg(test)]
#[path = "doxygen_tests.rs"]
mod tests;
