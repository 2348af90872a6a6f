use std::path::Path;

use crate::cli::{Cli, StubArgs};
use crate::error::DocGuardError;
use crate::output::ErrorOutput;
use crate::provider::DeclarationScanner;
use crate::stubber::resolve;
use crate::{EXIT_ERROR, EXIT_SUCCESS};

use super::report_error;

#[must_use]
pub fn run_stub(args: &StubArgs, cli: &Cli) -> i32 {
    match run_stub_impl(&args.file) {
        Ok((skeleton, aliases)) => {
            if cli.verbose >= 1 && !cli.quiet && !aliases.is_empty() {
                ErrorOutput::new(cli.color)
                    .print_info("aliased to int", Some(&aliases.join(", ")));
            }
            print!("{skeleton}");
            EXIT_SUCCESS
        }
        Err(e) => {
            report_error(cli.color, &e);
            EXIT_ERROR
        }
    }
}

/// Resolve `path` into the skeleton the declaration parser sees.
///
/// Returns the skeleton text and the identifiers that were aliased to `int`.
///
/// # Errors
/// Returns an error if the file cannot be read or the provider fails.
pub fn run_stub_impl(path: &Path) -> crate::Result<(String, Vec<String>)> {
    let source = std::fs::read_to_string(path).map_err(|source| DocGuardError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let resolved = resolve(&DeclarationScanner::new(), &source, path)?;
    Ok((
        resolved.skeleton.text(),
        resolved.skeleton.aliases().iter().cloned().collect(),
    ))
}

#[cfg(test)]
#[path = "stub_tests.rs"]
mod tests;
