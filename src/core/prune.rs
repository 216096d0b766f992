//! Pruning driver: scan markup once, then filter each locale file with the same key set.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};

use super::{
    ScanOptions,
    extract::collect_used_keys,
    filter::{filter_tree, flatten_keys, missing_keys},
    locale::{load_tree, output_path, render_tree},
};

/// What to prune and where.
#[derive(Debug, Clone)]
pub struct PruneRequest {
    /// Directory scanned for markup; locale paths are relative to it.
    pub root: PathBuf,
    pub locale_files: Vec<PathBuf>,
    pub scan: ScanOptions,
    /// Dotted keys kept even when no markup references them.
    pub keep_keys: Vec<String>,
    pub output_suffix: String,
    /// Compute everything but write nothing.
    pub dry_run: bool,
}

/// Outcome for one locale file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleSummary {
    pub input: PathBuf,
    pub output: PathBuf,
    pub total_keys: usize,
    pub kept_keys: usize,
    /// Referenced keys with no leaf in this locale.
    pub missing_keys: Vec<String>,
}

impl LocaleSummary {
    pub fn removed_keys(&self) -> usize {
        self.total_keys - self.kept_keys
    }
}

#[derive(Debug, Clone)]
pub struct PruneReport {
    pub documents_scanned: usize,
    pub used_key_count: usize,
    pub locales: Vec<LocaleSummary>,
    pub written: bool,
}

/// Runs a full prune.
///
/// Every locale is loaded, filtered and rendered before the first output is written,
/// so a read or parse failure leaves no output behind.
pub fn prune(request: &PruneRequest) -> Result<PruneReport> {
    let inputs: Vec<PathBuf> = request
        .locale_files
        .iter()
        .map(|f| request.root.join(f))
        .collect();
    let outputs: Vec<PathBuf> = inputs
        .iter()
        .map(|input| output_path(input, &request.output_suffix))
        .collect();
    check_output_paths(&inputs, &outputs)?;

    let used = collect_used_keys(&request.root, &request.scan)?;
    let mut allowed = used.keys.clone();
    allowed.extend(request.keep_keys.iter().cloned());

    let mut pending: Vec<(PathBuf, String)> = Vec::with_capacity(request.locale_files.len());
    let mut locales = Vec::with_capacity(request.locale_files.len());

    for (input, output) in inputs.into_iter().zip(outputs) {
        let tree = load_tree(&input)?;
        let filtered = filter_tree(&tree, &allowed);

        locales.push(LocaleSummary {
            input,
            output: output.clone(),
            total_keys: flatten_keys(&tree).len(),
            kept_keys: flatten_keys(&filtered).len(),
            missing_keys: missing_keys(&tree, &used.keys),
        });
        pending.push((output, render_tree(&filtered)?));
    }

    if !request.dry_run {
        for (path, content) in &pending {
            write_output(path, content)?;
        }
    }

    Ok(PruneReport {
        documents_scanned: used.documents_scanned,
        used_key_count: used.keys.len(),
        locales,
        written: !request.dry_run,
    })
}

/// Resolves links and `..` where the file (or at least its directory) exists.
fn resolve_path(path: &Path) -> PathBuf {
    if let Ok(resolved) = fs::canonicalize(path) {
        return resolved;
    }
    match (path.parent(), path.file_name()) {
        (Some(parent), Some(name)) => {
            let parent = if parent.as_os_str().is_empty() {
                Path::new(".")
            } else {
                parent
            };
            fs::canonicalize(parent)
                .map(|dir| dir.join(name))
                .unwrap_or_else(|_| path.to_path_buf())
        }
        _ => path.to_path_buf(),
    }
}

/// Fails when an output would overwrite an input or another output.
fn check_output_paths(inputs: &[PathBuf], outputs: &[PathBuf]) -> Result<()> {
    let resolved_inputs: Vec<PathBuf> = inputs.iter().map(|p| resolve_path(p)).collect();
    let mut seen_outputs: Vec<PathBuf> = Vec::with_capacity(outputs.len());

    for output in outputs {
        let resolved = resolve_path(output);
        if resolved_inputs.contains(&resolved) {
            bail!(
                "Output file {} would overwrite an input file; choose different locale files or another suffix",
                output.display()
            );
        }
        if seen_outputs.contains(&resolved) {
            bail!(
                "Two locale files would be written to the same output: {}",
                output.display()
            );
        }
        seen_outputs.push(resolved);
    }

    Ok(())
}

fn write_output(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content)
        .with_context(|| format!("Failed to write file: {}", path.display()))
}
