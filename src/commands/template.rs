use std::path::Path;

use crate::cli::{Cli, TemplateArgs};
use crate::comment::{Dialect, WrapOptions, render_doxygen, render_edt};
use crate::config::{TemplateConfig, validate_config_semantics};
use crate::model::DocRecord;
use crate::{EXIT_ERROR, EXIT_SUCCESS};

use super::{load_config, lookup_function, report_error};

#[must_use]
pub fn run_template(args: &TemplateArgs, cli: &Cli) -> i32 {
    match run_template_impl(args, cli) {
        Ok(text) => {
            println!("{text}");
            EXIT_SUCCESS
        }
        Err(e) => {
            report_error(cli.color, &e);
            EXIT_ERROR
        }
    }
}

/// Render the documentation template for `args.function`.
///
/// # Errors
/// Returns an error if configuration is invalid, the file cannot be read or
/// parsed, or the function is not declared in it.
pub fn run_template_impl(args: &TemplateArgs, cli: &Cli) -> crate::Result<String> {
    let mut config = load_config(args.config.as_deref(), cli.no_config)?;
    apply_cli_overrides(&mut config.template, args);
    validate_config_semantics(&config)?;

    render_template(
        &args.file,
        &args.function,
        config.template.dialect,
        config.template.wrap_options(),
    )
}

pub(crate) fn apply_cli_overrides(template: &mut TemplateConfig, args: &TemplateArgs) {
    if let Some(dialect) = args.dialect {
        template.dialect = dialect;
    }
    if let Some(width) = args.width {
        template.width = width;
    }
    if let Some(indent) = args.indent {
        template.indent = indent;
    }
}

/// Look up `function` in `path` and render a fresh comment for it.
///
/// # Errors
/// Returns an error if the file cannot be read, the provider fails, or no
/// declaration of `function` exists.
pub fn render_template(
    path: &Path,
    function: &str,
    dialect: Dialect,
    options: WrapOptions,
) -> crate::Result<String> {
    let signature = lookup_function(path, function)?;

    let record = DocRecord::from_signature(&signature);
    Ok(match dialect {
        Dialect::Doxygen => render_doxygen(&record, options),
        Dialect::Edt => render_edt(&record, options),
    })
}

#[cfg(test)]
#[path = "template_tests.rs"]
mod tests;
