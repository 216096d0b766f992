//! Report formatting and printing utilities.
//!
//! Separate from core logic to allow keyprune to be used as a library.

use std::{
    io::{self, Write},
    path::Path,
};

use colored::Colorize;

use crate::core::{LocaleSummary, PruneReport};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

fn plural(count: usize, one: &str, many: &str) -> String {
    if count == 1 {
        format!("{} {}", count, one)
    } else {
        format!("{} {}", count, many)
    }
}

/// Displays `path` relative to `root` when it lies below it.
fn display_path(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .into_owned()
}

/// Print the outcome of a prune run to stdout.
pub fn print(report: &PruneReport, root: &Path, verbose: bool) {
    print_to(report, root, verbose, &mut io::stdout().lock());
}

/// Print the outcome of a prune run to a custom writer.
pub fn print_to<W: Write>(report: &PruneReport, root: &Path, verbose: bool, writer: &mut W) {
    if verbose {
        let _ = writeln!(
            writer,
            "Scanned {}, found {}",
            plural(report.documents_scanned, "markup file", "markup files"),
            plural(report.used_key_count, "referenced key", "referenced keys")
        );
        for locale in &report.locales {
            print_locale(locale, root, writer);
        }
    }

    let outputs: Vec<String> = report
        .locales
        .iter()
        .map(|l| display_path(&l.output, root))
        .collect();

    let msg = if report.written {
        format!("Pruning complete! Output files: {}", outputs.join(", "))
    } else {
        format!(
            "Dry run complete, nothing written. Would write: {}",
            outputs.join(", ")
        )
    };
    let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), msg.green());
}

fn print_locale<W: Write>(locale: &LocaleSummary, root: &Path, writer: &mut W) {
    let _ = writeln!(
        writer,
        "  {}: kept {} of {}, removed {}",
        display_path(&locale.input, root).bold(),
        locale.kept_keys,
        locale.total_keys,
        locale.removed_keys()
    );
    for key in &locale.missing_keys {
        let _ = writeln!(
            writer,
            "    {} {} is referenced but not defined",
            "note:".cyan(),
            key
        );
    }
}

/// Print a confirmation that a config file was created.
pub fn print_init(path: &Path) {
    let _ = writeln!(
        io::stdout().lock(),
        "{} {}",
        SUCCESS_MARK.green(),
        format!("Created {}", path.display()).green()
    );
}
