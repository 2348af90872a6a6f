use regex::Regex;

use super::Dialect;

/// Phrases that, next to a header name, say the documentation lives elsewhere.
const BASE_PHRASES: &[&str] = &["function description", "for documentation", "see"];

/// Extra phrase recognised in EDT blocks, as in `EDT in foo.h`.
const EDT_PHRASE: &str = "edt in";

/// Recognises comments that point at documentation kept somewhere else.
///
/// A comment is a reference when one of its lines names a header file and uses
/// one of the reference phrases, or when a line reads `implements <name>_cb`.
#[derive(Debug, Clone)]
pub struct ReferenceClassifier {
    header: Regex,
    phrase: Regex,
    implements: Regex,
}

impl Default for ReferenceClassifier {
    fn default() -> Self {
        Self::new(&[])
    }
}

impl ReferenceClassifier {
    #[must_use]
    pub fn new(extra_phrases: &[&str]) -> Self {
        let alternatives: Vec<String> = BASE_PHRASES
            .iter()
            .chain(extra_phrases)
            .map(|phrase| regex::escape(phrase).replace(' ', r"\s+"))
            .collect();

        Self {
            header: Regex::new(r"(?i)\b[A-Za-z0-9_./-]+\.h\b").expect("Invalid regex"),
            phrase: Regex::new(&format!(r"(?i)\b(?:{})\b", alternatives.join("|")))
                .expect("Invalid regex"),
            implements: Regex::new(r"(?i)\bimplements\s+[A-Za-z_][A-Za-z0-9_]*_cb\b")
                .expect("Invalid regex"),
        }
    }

    #[must_use]
    pub fn for_dialect(dialect: Dialect) -> Self {
        match dialect {
            Dialect::Doxygen => Self::new(&[]),
            Dialect::Edt => Self::new(&[EDT_PHRASE]),
        }
    }

    #[must_use]
    pub fn is_reference_line(&self, line: &str) -> bool {
        (self.header.is_match(line) && self.phrase.is_match(line))
            || self.implements.is_match(line)
    }

    pub fn is_reference<'a, I>(&self, lines: I) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        lines.into_iter().any(|line| self.is_reference_line(line))
    }
}

#[cfg(test)]
#[path = "reference_tests.rs"]
mod tests;
