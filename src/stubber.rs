//! Source-to-skeleton transform.
//!
//! A skeleton keeps every top-level declaration of a C file but blanks all
//! function and struct bodies, so a declaration provider can parse it without the
//! file's dependencies. Line count and line positions match the source exactly.

use std::path::Path;

use indexmap::IndexSet;

use crate::error::Result;
use crate::provider::{AstProvider, ProviderOutput};

const INCLUDE_DIRECTIVE: &str = "#include";
const TYPEDEF_KEYWORD: &str = "typedef";
const COMMENT_PREFIX: &str = "// ";

/// Character-level brace blanker. The depth carries across lines.
#[derive(Debug, Default, Clone, Copy)]
pub struct BraceStubber {
    depth: usize,
}

impl BraceStubber {
    #[must_use]
    pub const fn new() -> Self {
        Self { depth: 0 }
    }

    #[must_use]
    pub const fn depth(&self) -> usize {
        self.depth
    }

    /// Transform one source line, updating the running brace depth.
    pub fn stub_line(&mut self, line: &str) -> String {
        if line.starts_with(INCLUDE_DIRECTIVE) {
            return String::new();
        }

        let mut buffer: Vec<char> = line.chars().collect();
        for ch in &mut buffer {
            match *ch {
                '{' => {
                    *ch = if self.depth == 0 { ';' } else { ' ' };
                    self.depth += 1;
                }
                '}' => {
                    if self.depth > 0 {
                        *ch = ' ';
                        self.depth -= 1;
                    }
                }
                '\n' => {}
                _ if self.depth > 0 => *ch = ' ',
                _ => {}
            }
        }

        let stubbed: String = buffer.into_iter().collect();
        if stubbed.starts_with(TYPEDEF_KEYWORD) {
            format!("{COMMENT_PREFIX}{stubbed}")
        } else {
            stubbed
        }
    }
}

/// Stub a whole file, one output line per input line.
#[must_use]
pub fn stub_lines<S: AsRef<str>>(lines: &[S]) -> Vec<String> {
    let mut stubber = BraceStubber::new();
    lines
        .iter()
        .map(|line| stubber.stub_line(line.as_ref()))
        .collect()
}

/// Stubbed lines plus the synthetic `int` aliases discovered so far.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Skeleton {
    lines: Vec<String>,
    aliases: IndexSet<String>,
}

impl Skeleton {
    #[must_use]
    pub fn from_source(source: &str) -> Self {
        let lines: Vec<&str> = source.lines().collect();
        Self {
            lines: stub_lines(&lines),
            aliases: IndexSet::new(),
        }
    }

    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    #[must_use]
    pub const fn aliases(&self) -> &IndexSet<String> {
        &self.aliases
    }

    /// Register identifiers to alias as `int`. Returns how many were new.
    ///
    /// Tokens that are not plain C identifiers are ignored; aliasing them would
    /// only produce another unknown-type diagnostic.
    pub fn add_aliases<I, S>(&mut self, names: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let before = self.aliases.len();
        for name in names {
            let name = name.into();
            if is_identifier(&name) {
                self.aliases.insert(name);
            }
        }
        self.aliases.len() - before
    }

    /// Render the skeleton text handed to the provider.
    ///
    /// Aliases share the first line so that every declaration keeps its line number.
    #[must_use]
    pub fn text(&self) -> String {
        let prefix: String = self
            .aliases
            .iter()
            .map(|name| format!("typedef int {name};"))
            .collect();

        let mut out = String::new();
        out.push_str(&prefix);
        for line in &self.lines {
            out.push_str(line);
            out.push('\n');
        }
        out
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// A skeleton after the unknown-type resolution loop, with the final parse.
#[derive(Debug, Clone)]
pub struct Resolved {
    pub skeleton: Skeleton,
    pub output: ProviderOutput,
    /// Number of provider invocations.
    pub passes: usize,
}

/// Stub `source` and parse it, aliasing unknown types until none are new.
///
/// # Errors
/// Propagates provider failures.
pub fn resolve<P: AstProvider>(provider: &P, source: &str, filename: &Path) -> Result<Resolved> {
    let mut skeleton = Skeleton::from_source(source);
    let mut passes = 0;

    loop {
        let output = provider.parse(&skeleton.text(), filename)?;
        passes += 1;
        if skeleton.add_aliases(output.unknown_types()) == 0 {
            return Ok(Resolved {
                skeleton,
                output,
                passes,
            });
        }
    }
}

#[cfg(test)]
#[path = "stubber_tests.rs"]
mod tests;
