use std::io::Write;
use std::path::PathBuf;

use crate::checker::{DocChecker, FileReport, IgnoreList};
use crate::cli::{CheckArgs, Cli};
use crate::config::{Config, validate_config_semantics};
use crate::output::{ErrorOutput, JsonFormatter, OutputFormat, OutputFormatter, TextFormatter};
use crate::provider::AstProvider;
use crate::scanner::{DirectoryScanner, GlobFilter, collect_files};
use crate::{EXIT_DIAGNOSTICS, EXIT_ERROR, EXIT_SUCCESS};

use super::{load_config, report_error, write_output};

#[must_use]
pub fn run_check(args: &CheckArgs, cli: &Cli) -> i32 {
    match run_check_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            report_error(cli.color, &e);
            EXIT_ERROR
        }
    }
}

/// Checks every file under `args.paths` and writes the report.
///
/// # Errors
/// Returns an error if configuration, path expansion or output writing fails.
/// Failures on individual files are reported and counted instead.
pub fn run_check_impl(args: &CheckArgs, cli: &Cli) -> crate::Result<i32> {
    // 1. Load configuration and apply CLI overrides
    let mut config = load_config(args.config.as_deref(), cli.no_config)?;
    apply_cli_overrides(&mut config, args);
    validate_config_semantics(&config)?;

    // 2. Build the ignore list
    let ignore = load_ignore_list(&config)?;

    // 3. Expand paths
    let filter = GlobFilter::new(&config.scanner.extensions, &config.scanner.exclude)?;
    let scanner = DirectoryScanner::new(filter);
    let files = collect_files(&args.paths, &scanner)?;

    // 4. Check files one at a time
    let notes = Notes {
        out: ErrorOutput::new(cli.color),
        verbose: cli.verbose,
        quiet: cli.quiet,
    };
    let checker = DocChecker::new();
    let outcome = check_files(&checker, &files, &ignore, &notes, &mut std::io::stderr().lock());

    // 5. Format and write
    let formatted = match args.format {
        OutputFormat::Text => TextFormatter::with_verbose(cli.color, cli.verbose)
            .with_quiet(cli.quiet)
            .format(&outcome.reports)?,
        OutputFormat::Json => JsonFormatter::new().format(&outcome.reports)?,
    };
    write_output(args.output.as_deref(), &formatted)?;

    Ok(exit_code(outcome.diagnostics(), outcome.failures, args.warn_only))
}

pub(crate) fn apply_cli_overrides(config: &mut Config, args: &CheckArgs) {
    if let Some(ref extensions) = args.ext {
        config.scanner.extensions.clone_from(extensions);
    }
    config.scanner.exclude.extend(args.exclude.iter().cloned());
    if let Some(ref path) = args.ignore_file {
        config.check.ignore_file = Some(path.clone());
    }
}

pub(crate) fn load_ignore_list(config: &Config) -> crate::Result<IgnoreList> {
    let mut ignore = match &config.check.ignore_file {
        Some(path) => IgnoreList::load(path)?,
        None => IgnoreList::default(),
    };
    ignore.extend(config.check.ignore_functions.iter().cloned());
    Ok(ignore)
}

/// Gating for stderr notes.
pub(crate) struct Notes {
    pub out: ErrorOutput,
    pub verbose: u8,
    pub quiet: bool,
}

impl Notes {
    fn file_failed<W: Write>(&self, w: &mut W, error: &crate::DocGuardError) {
        if !self.quiet {
            self.out.write_warning(
                w,
                &error.to_string(),
                error.detail().as_deref(),
                Some("the file was skipped"),
            );
        }
    }

    fn report<W: Write>(&self, w: &mut W, report: &FileReport) {
        if self.quiet {
            return;
        }
        for issue in &report.comment_issues {
            self.out
                .write_warning(w, &format!("{}: {issue}", report.path.display()), None, None);
        }
        if self.verbose >= 1 {
            let detail = format!(
                "{} declarations, {} comments",
                report.declarations, report.comments
            );
            self.out
                .write_info(w, &report.path.display().to_string(), Some(&detail), None);
        }
        if self.verbose >= 2 {
            if !report.aliases.is_empty() {
                let detail = format!(
                    "{} (after {} passes)",
                    report.aliases.join(", "),
                    report.passes
                );
                self.out.write_info(w, "aliased to int", Some(&detail), None);
            }
            for note in &report.provider_notes {
                let message = format!(
                    "{}:{}: {}: {}",
                    report.path.display(),
                    note.line,
                    note.severity.as_str(),
                    note.message
                );
                self.out.write_info(w, &message, None, None);
            }
        }
    }
}

/// Reports of the files that could be checked plus the number that could not.
#[derive(Debug, Default)]
pub(crate) struct CheckOutcome {
    pub reports: Vec<FileReport>,
    pub failures: usize,
}

impl CheckOutcome {
    pub fn diagnostics(&self) -> usize {
        self.reports.iter().map(|r| r.diagnostics.len()).sum()
    }
}

pub(crate) fn check_files<P: AstProvider, W: Write>(
    checker: &DocChecker<P>,
    files: &[PathBuf],
    ignore: &IgnoreList,
    notes: &Notes,
    w: &mut W,
) -> CheckOutcome {
    let mut outcome = CheckOutcome::default();
    for path in files {
        match checker.check_file(path) {
            Ok(mut report) => {
                report.apply_ignore_list(ignore);
                notes.report(w, &report);
                outcome.reports.push(report);
            }
            Err(e) => {
                notes.file_failed(w, &e);
                outcome.failures += 1;
            }
        }
    }
    outcome
}

/// Diagnostics win over runtime failures; `--warn-only` only relaxes diagnostics.
pub(crate) const fn exit_code(diagnostics: usize, failures: usize, warn_only: bool) -> i32 {
    if diagnostics > 0 && !warn_only {
        EXIT_DIAGNOSTICS
    } else if diagnostics == 0 && failures > 0 {
        EXIT_ERROR
    } else {
        EXIT_SUCCESS
    }
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
