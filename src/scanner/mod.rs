mod filter;

pub use filter::{FileFilter, GlobFilter};

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{DocGuardError, Result};

/// Trait for scanning directories and finding files.
pub trait FileScanner {
    /// Scan a directory and return all matching file paths.
    ///
    /// # Errors
    /// Returns an error if the directory cannot be read.
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>>;
}

pub struct DirectoryScanner<F: FileFilter> {
    filter: F,
}

impl<F: FileFilter> DirectoryScanner<F> {
    #[must_use]
    pub const fn new(filter: F) -> Self {
        Self { filter }
    }

    #[must_use]
    pub const fn filter(&self) -> &F {
        &self.filter
    }
}

impl<F: FileFilter> FileScanner for DirectoryScanner<F> {
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>> {
        Ok(WalkDir::new(root)
            .into_iter()
            .filter_map(std::result::Result::ok)
            .filter(|e| e.file_type().is_file())
            .filter(|e| self.filter.should_include(e.path()))
            .map(walkdir::DirEntry::into_path)
            .collect())
    }
}

/// Expand command-line paths into the files to check.
///
/// Files named directly are always kept, whatever their extension; directories
/// are walked through `scanner`. The result is sorted and de-duplicated.
///
/// # Errors
/// Returns an error if a path does not exist or a directory cannot be read.
pub fn collect_files<S: FileScanner>(paths: &[PathBuf], scanner: &S) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_dir() {
            files.extend(scanner.scan(path)?);
        } else if path.is_file() {
            files.push(path.clone());
        } else {
            return Err(DocGuardError::FileRead {
                path: path.clone(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file or directory"),
            });
        }
    }
    files.sort();
    files.dedup();
    Ok(files)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
