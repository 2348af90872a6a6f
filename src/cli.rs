use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::comment::Dialect;
use crate::config::LOCAL_CONFIG_NAME;
use crate::output::{ColorMode, OutputFormat};

#[derive(Parser, Debug)]
#[command(name = "cdoc-guard")]
#[command(author, version, about = "Check C declarations against their documentation comments")]
#[command(long_about = "Checks that every C function declaration has a Doxygen or EDT \
    documentation comment whose parameters and return entry agree with the declaration.\n\n\
    Exit codes:\n  \
    0 - All declarations documented consistently\n  \
    1 - Documentation diagnostics found\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// Increase output verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Skip loading configuration file
    #[arg(long, global = true)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check C files for missing or inconsistent documentation
    Check(CheckArgs),

    /// Print the brace-stubbed skeleton handed to the declaration parser
    Stub(StubArgs),

    /// Render a documentation template for a declared function
    Template(TemplateArgs),

    /// Print a declared function signature with aligned parameter columns
    Format(FormatArgs),

    /// Generate a default configuration file
    Init(InitArgs),
}

#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Paths to check (files or directories)
    #[arg(default_value = ".")]
    pub paths: Vec<PathBuf>,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// File listing function names whose diagnostics are suppressed
    #[arg(long)]
    pub ignore_file: Option<PathBuf>,

    /// File extensions to check (comma-separated, e.g., c,h)
    #[arg(long, value_delimiter = ',')]
    pub ext: Option<Vec<String>>,

    /// Exclude patterns (glob syntax, can be specified multiple times)
    #[arg(long, short = 'x')]
    pub exclude: Vec<String>,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Only warn, don't fail on diagnostics
    #[arg(long)]
    pub warn_only: bool,
}

#[derive(Parser, Debug)]
pub struct StubArgs {
    /// C source file to stub
    pub file: PathBuf,
}

#[derive(Parser, Debug)]
pub struct TemplateArgs {
    /// C source file declaring the function
    pub file: PathBuf,

    /// Name of the function to document
    #[arg(long)]
    pub function: String,

    /// Comment dialect (overrides config)
    #[arg(long, value_enum)]
    pub dialect: Option<Dialect>,

    /// Maximum line width of the rendered comment (overrides config)
    #[arg(long)]
    pub width: Option<usize>,

    /// Indent of wrapped continuation lines (overrides config)
    #[arg(long)]
    pub indent: Option<usize>,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct FormatArgs {
    /// C source file declaring the function
    pub file: PathBuf,

    /// Name of the function to lay out
    #[arg(long)]
    pub function: String,

    /// Emit a header prototype (`type name(...);`) instead of a definition head
    #[arg(long)]
    pub header: bool,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for the configuration file
    #[arg(short, long, default_value = LOCAL_CONFIG_NAME)]
    pub output: PathBuf,

    /// Overwrite existing configuration file
    #[arg(long)]
    pub force: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
