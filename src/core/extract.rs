//! Key extraction from HTML markup.
//!
//! Walks a directory tree for markup documents and collects every value of the
//! configured i18n attributes (`data-i18n="nav.home"` by default).

use std::{
    collections::BTreeSet,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use colored::Colorize;
use glob::Pattern;
use regex::Regex;
use walkdir::WalkDir;

use super::ScanOptions;

/// Check if a pattern contains glob wildcards (* or ?).
/// Patterns without wildcards are treated as literal directory paths.
fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

/// Result of scanning a directory tree for markup documents.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Matching documents, sorted by path.
    pub files: Vec<PathBuf>,
    /// Walk entries that could not be accessed.
    pub skipped_count: usize,
}

/// Keys referenced by markup, with the number of documents they came from.
#[derive(Debug, Default)]
pub struct UsedKeys {
    pub keys: BTreeSet<String>,
    pub documents_scanned: usize,
}

fn has_markup_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| extensions.iter().any(|m| m.eq_ignore_ascii_case(ext)))
}

/// Recursively lists markup documents below `root`.
///
/// Ignore patterns with wildcards are matched against the path relative to `root`;
/// other patterns are literal directory prefixes relative to `root`.
pub fn scan_markup_files(root: &Path, options: &ScanOptions) -> Result<ScanResult> {
    if !root.exists() {
        bail!("Scan root '{}' does not exist.", root.display());
    }
    if !root.is_dir() {
        bail!("'{}' is not a directory.", root.display());
    }

    let mut literal_ignore_paths: Vec<PathBuf> = Vec::new();
    let mut glob_patterns: Vec<Pattern> = Vec::new();
    for p in &options.ignores {
        if is_glob_pattern(p) {
            let pattern = Pattern::new(p)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", p))?;
            glob_patterns.push(pattern);
        } else {
            literal_ignore_paths.push(root.join(p));
        }
    }

    let mut result = ScanResult::default();
    for entry in WalkDir::new(root) {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                result.skipped_count += 1;
                if options.verbose {
                    eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                }
                continue;
            }
        };
        let path = entry.path();

        if literal_ignore_paths
            .iter()
            .any(|ignore_path| path.starts_with(ignore_path))
        {
            continue;
        }

        let relative = path.strip_prefix(root).unwrap_or(path);
        if glob_patterns.iter().any(|p| p.matches_path(relative)) {
            continue;
        }

        if path.is_file() && has_markup_extension(path, &options.extensions) {
            result.files.push(path.to_path_buf());
        }
    }

    result.files.sort();
    Ok(result)
}

/// Matches complete, double-quoted i18n attribute values.
pub struct KeyExtractor {
    pattern: Regex,
}

impl KeyExtractor {
    /// Builds an extractor for the given attribute names (e.g. `data-i18n`).
    pub fn new(attributes: &[String]) -> Result<Self> {
        if attributes.is_empty() {
            bail!("At least one i18n attribute name is required.");
        }

        let alternatives: Vec<String> = attributes.iter().map(|a| regex::escape(a)).collect();
        let source = format!(r#"(?:{})="([^"]+)""#, alternatives.join("|"));
        let pattern = Regex::new(&source)
            .with_context(|| format!("Failed to build attribute pattern: {}", source))?;

        Ok(Self { pattern })
    }

    /// Returns every attribute value in `text`, verbatim and in document order.
    pub fn extract_from_str<'a>(&self, text: &'a str) -> Vec<&'a str> {
        self.pattern
            .captures_iter(text)
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str())
            .collect()
    }

    /// Reads each document as UTF-8 and collects the distinct keys.
    ///
    /// Aborts on the first document that can't be read or decoded.
    pub fn extract_from_files(&self, files: &[PathBuf]) -> Result<UsedKeys> {
        let mut used = UsedKeys::default();

        for path in files {
            let content = fs::read_to_string(path)
                .with_context(|| format!("Failed to read markup file: {}", path.display()))?;
            used.keys.extend(
                self.extract_from_str(&content)
                    .into_iter()
                    .map(str::to_string),
            );
            used.documents_scanned += 1;
        }

        Ok(used)
    }
}

/// Scans `root` and returns the set of referenced keys.
pub fn collect_used_keys(root: &Path, options: &ScanOptions) -> Result<UsedKeys> {
    let extractor = KeyExtractor::new(&options.attributes)?;
    let scan = scan_markup_files(root, options)?;
    extractor.extract_from_files(&scan.files)
}
