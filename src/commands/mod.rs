pub mod check;
pub mod format;
pub mod init;
pub mod stub;
pub mod template;

pub use check::{run_check, run_check_impl};
pub use format::{format_signature, run_format, run_format_impl};
pub use init::{generate_config_template, run_init, run_init_impl};
pub use stub::{run_stub, run_stub_impl};
pub use template::{run_template, run_template_impl};

use std::fs;
use std::path::Path;

use crate::config::{Config, ConfigLoader, FileConfigLoader};
use crate::error::DocGuardError;
use crate::model::FunctionSignature;
use crate::output::{ColorMode, ErrorOutput};
use crate::provider::DeclarationScanner;
use crate::stubber::resolve;

/// Load `--config PATH`, the local config file, or defaults under `--no-config`.
///
/// # Errors
/// Returns an error if the configuration file cannot be read, parsed or validated.
pub(crate) fn load_config(config_path: Option<&Path>, no_config: bool) -> crate::Result<Config> {
    if no_config {
        return Ok(Config::default());
    }
    let loader = FileConfigLoader::new();
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

/// Resolve `path` and return the first declaration of `function`.
///
/// # Errors
/// Returns an error if the file cannot be read, the provider fails, or no
/// declaration of `function` exists.
pub(crate) fn lookup_function(path: &Path, function: &str) -> crate::Result<FunctionSignature> {
    let source = fs::read_to_string(path).map_err(|source| DocGuardError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let resolved = resolve(&DeclarationScanner::new(), &source, path)?;

    resolved
        .output
        .into_signatures(path)
        .into_iter()
        .find(|s| s.name == function)
        .ok_or_else(|| DocGuardError::FunctionNotFound {
            name: function.to_string(),
            path: path.to_path_buf(),
        })
}

/// Write `content` to `output_path`, or to stdout when no path is given.
///
/// # Errors
/// Returns an error if the file or its parent directories cannot be written.
pub(crate) fn write_output(output_path: Option<&Path>, content: &str) -> crate::Result<()> {
    if let Some(path) = output_path {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
    } else {
        print!("{content}");
    }
    Ok(())
}

/// Print a command failure as `✖ Type: message` with its cause underneath.
pub(crate) fn report_error(color: ColorMode, error: &DocGuardError) {
    ErrorOutput::new(color).print_error_with_detail(
        error.error_type(),
        &error.to_string(),
        error.detail().as_deref(),
        None,
    );
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
