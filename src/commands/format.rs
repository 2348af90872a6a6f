use std::fmt::Write as _;

use crate::cli::{Cli, FormatArgs};
use crate::model::{FunctionSignature, ParameterDescriptor};
use crate::{EXIT_ERROR, EXIT_SUCCESS};

use super::{lookup_function, report_error};

#[must_use]
pub fn run_format(args: &FormatArgs, cli: &Cli) -> i32 {
    match run_format_impl(args) {
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

/// Lay out the signature of `args.function` as found in `args.file`.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed, or the function is
/// not declared in it.
pub fn run_format_impl(args: &FormatArgs) -> crate::Result<String> {
    let signature = lookup_function(&args.file, &args.function)?;
    Ok(format_signature(&signature, args.header))
}

/// One parameter split into the pieces that get their own column.
struct Column<'a> {
    base: &'a str,
    stars: usize,
    name: &'a str,
    /// Array bounds, printed after the name.
    suffix: &'a str,
}

impl<'a> Column<'a> {
    fn new(param: &'a ParameterDescriptor) -> Self {
        let spelling = param.typename.as_deref().unwrap_or_default().trim();
        let (spelling, suffix) = match spelling.find('[') {
            Some(open) if !spelling.contains("(*)") => spelling.split_at(open),
            _ => (spelling, ""),
        };
        let spelling = spelling.trim_end();
        let base = spelling.trim_end_matches('*');
        Self {
            base: base.trim_end(),
            stars: spelling.len() - base.len(),
            name: &param.name,
            suffix,
        }
    }

    /// Function pointer types carry their name inside the declarator.
    fn is_function_pointer(&self) -> bool {
        self.base.contains("(*)")
    }
}

/// Lay out a declaration with aligned parameter columns.
///
/// Definitions put the return type on its own line and a space before `(`;
/// header prototypes keep `type name(` on one line and end with `);`. Type
/// names, pointer stars and parameter names each line up in their own column.
#[must_use]
pub fn format_signature(signature: &FunctionSignature, header: bool) -> String {
    let return_type = signature.returns.typename.as_deref().unwrap_or_default().trim();
    let close = if header { ");" } else { ")" };

    let mut text = String::new();
    let opening = if header {
        format!("{return_type} {}(", signature.name)
    } else {
        let _ = writeln!(text, "{return_type}");
        format!("{} (", signature.name)
    };
    text.push_str(&opening);

    if signature.params.is_empty() {
        let _ = write!(text, "void{close}");
        return text;
    }

    let columns: Vec<Column> = signature.params.iter().map(Column::new).collect();
    let aligned = columns.iter().filter(|c| !c.is_function_pointer());
    let type_width = aligned.clone().map(|c| c.base.len()).max().unwrap_or(0);
    let star_width = aligned.map(|c| c.stars).max().unwrap_or(0);
    let indent = " ".repeat(opening.len());

    for (index, column) in columns.iter().enumerate() {
        if index > 0 {
            let _ = write!(text, ",\n{indent}");
        }
        let entry = if column.is_function_pointer() {
            column.base.replacen("(*)", &format!("(*{})", column.name), 1)
        } else {
            let pad = type_width + 1 + star_width - column.base.len() - column.stars;
            format!(
                "{}{}{}{}{}",
                column.base,
                " ".repeat(pad),
                "*".repeat(column.stars),
                column.name,
                column.suffix
            )
        };
        text.push_str(entry.trim_end());
    }

    text.push_str(close);
    text
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;
