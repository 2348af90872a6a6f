use std::fs;

use crate::cli::{Cli, InitArgs};
use crate::{DocGuardError, EXIT_ERROR, EXIT_SUCCESS, Result};

use super::report_error;

#[must_use]
pub fn run_init(args: &InitArgs, cli: &Cli) -> i32 {
    match run_init_impl(args) {
        Ok(()) => {
            if !cli.quiet {
                println!("Created configuration file: {}", args.output.display());
            }
            EXIT_SUCCESS
        }
        Err(e) => {
            report_error(cli.color, &e);
            EXIT_ERROR
        }
    }
}

/// Writes the default configuration file.
///
/// # Errors
/// Returns an error if the file already exists (without --force) or cannot be written.
pub fn run_init_impl(args: &InitArgs) -> Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(DocGuardError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    fs::write(output_path, generate_config_template())?;
    Ok(())
}

#[must_use]
pub fn generate_config_template() -> String {
    r#"# cdoc-guard configuration file

[scanner]
# File extensions checked when walking directories
extensions = ["c", "h"]

# Exclude patterns (glob syntax)
exclude = [
    "**/third_party/**",
    "**/build/**",
]

[check]
# Functions whose diagnostics are suppressed
ignore_functions = []

# Newline-delimited list of further functions to ignore
# ignore_file = "doc-ignore.txt"

[template]
# Comment dialect for `cdoc-guard template`: "doxygen" or "edt"
dialect = "doxygen"

# Maximum width of rendered comment lines
width = 80

# Extra indent of wrapped continuation lines
indent = 4
"#
    .to_string()
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
