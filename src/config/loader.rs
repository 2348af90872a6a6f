use std::path::Path;

use crate::error::{DocGuardError, Result};

use super::filesystem::{FileSystem, RealFileSystem};
use super::validation::validate_config_semantics;
use super::Config;

/// Name of the configuration file looked up in the working directory.
pub const LOCAL_CONFIG_NAME: &str = ".cdoc-guard.toml";

/// Trait for loading configuration from various sources.
pub trait ConfigLoader {
    /// Load configuration from the default location, falling back to defaults.
    ///
    /// # Errors
    /// Returns an error if the config file exists but cannot be read or parsed.
    fn load(&self) -> Result<Config>;

    /// Load configuration from a specific path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    fn load_from_path(&self, path: &Path) -> Result<Config>;
}

/// Loads `.cdoc-guard.toml` from the current directory, or `Config::default()`.
#[derive(Debug, Default)]
pub struct FileConfigLoader<F: FileSystem = RealFileSystem> {
    fs: F,
}

impl FileConfigLoader<RealFileSystem> {
    #[must_use]
    pub const fn new() -> Self {
        Self { fs: RealFileSystem }
    }
}

impl<F: FileSystem> FileConfigLoader<F> {
    #[must_use]
    pub const fn with_fs(fs: F) -> Self {
        Self { fs }
    }

    fn parse(content: &str) -> Result<Config> {
        let config: Config = toml::from_str(content)?;
        validate_config_semantics(&config)?;
        Ok(config)
    }
}

impl<F: FileSystem> ConfigLoader for FileConfigLoader<F> {
    fn load(&self) -> Result<Config> {
        let path = self.fs.current_dir()?.join(LOCAL_CONFIG_NAME);
        if self.fs.exists(&path) {
            self.load_from_path(&path)
        } else {
            Ok(Config::default())
        }
    }

    fn load_from_path(&self, path: &Path) -> Result<Config> {
        let content = self
            .fs
            .read_to_string(path)
            .map_err(|source| DocGuardError::FileRead {
                path: path.to_path_buf(),
                source,
            })?;
        Self::parse(&content)
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
