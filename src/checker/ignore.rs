use std::path::Path;

use indexmap::IndexSet;

use crate::error::{DocGuardError, Result};

/// Function names whose diagnostics are suppressed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IgnoreList {
    names: IndexSet<String>,
}

impl IgnoreList {
    /// Parse a newline-delimited list. Blank lines and `#` comments are skipped.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let mut list = Self::default();
        list.extend(
            text.lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#')),
        );
        list
    }

    /// # Errors
    /// Returns an error if the file cannot be read.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| DocGuardError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::parse(&text))
    }

    pub fn extend<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.names.extend(names.into_iter().map(Into::into));
    }

    #[must_use]
    pub fn contains(&self, function: &str) -> bool {
        self.names.contains(function)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
#[path = "ignore_tests.rs"]
mod tests;
