//! Core pruning engine.
//!
//! ## Module Structure
//!
//! - `extract`: Markup scanning and i18n attribute extraction
//! - `filter`: Recursive translation tree filtering by dotted key
//! - `locale`: Translation file loading and rendering
//! - `prune`: Driver composing the above into a full run

pub mod extract;
pub mod filter;
pub mod locale;
pub mod prune;

pub use extract::{KeyExtractor, ScanResult, UsedKeys, collect_used_keys, scan_markup_files};
pub use filter::{filter_tree, flatten_keys, missing_keys};
pub use locale::{load_tree, output_path, render_tree};
pub use prune::{LocaleSummary, PruneReport, PruneRequest, prune};

use crate::config::{Config, default_attributes, default_extensions};

/// Settings for the markup scan.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Attribute names whose values are i18n keys.
    pub attributes: Vec<String>,
    /// Markup file extensions, compared case-insensitively.
    pub extensions: Vec<String>,
    pub ignores: Vec<String>,
    pub verbose: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            attributes: default_attributes(),
            extensions: default_extensions(),
            ignores: Vec::new(),
            verbose: false,
        }
    }
}

impl ScanOptions {
    pub fn from_config(config: &Config, verbose: bool) -> Self {
        Self {
            attributes: config.attributes.clone(),
            extensions: config.extensions.clone(),
            ignores: config.ignores.clone(),
            verbose,
        }
    }
}
