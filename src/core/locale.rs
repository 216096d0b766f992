//! Loading and rendering of locale translation files.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use serde_json::{Map, Value};

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Reads a translation file whose root is a JSON object.
pub fn load_tree(path: &Path) -> Result<Map<String, Value>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read translation file: {}", path.display()))?;
    let content = content.strip_prefix(BYTE_ORDER_MARK).unwrap_or(content.as_str());

    let value: Value = serde_json::from_str(content)
        .with_context(|| format!("Failed to parse translation file: {}", path.display()))?;

    match value {
        Value::Object(map) => Ok(map),
        _ => bail!(
            "Root of translation file must be an object: {}",
            path.display()
        ),
    }
}

/// Renders a tree with 2-space indentation and a trailing newline.
///
/// Non-ASCII text is written as-is rather than escaped.
pub fn render_tree(tree: &Map<String, Value>) -> Result<String> {
    let content = serde_json::to_string_pretty(tree).context("Failed to serialize JSON")?;
    Ok(format!("{}\n", content))
}

/// Path of the cleaned copy of `input`: `tr.json` with suffix `_cleaned` becomes
/// `tr_cleaned.json` in the same directory.
pub fn output_path(input: &Path, suffix: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let file_name = match input.extension() {
        Some(ext) => format!("{}{}.{}", stem, suffix, ext.to_string_lossy()),
        None => format!("{}{}", stem, suffix),
    };
    input.with_file_name(file_name)
}
