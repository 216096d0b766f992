//! CLI argument definitions using clap.
//!
//! Invoked without arguments, keyprune scans the current directory and prunes
//! `tr.json` and `en.json` into `tr_cleaned.json` and `en_cleaned.json`.

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// Directory scanned for HTML files; locale files are resolved against it
    #[arg(default_value = ".")]
    pub root: PathBuf,

    /// First locale file
    #[arg(default_value = "tr.json")]
    pub primary: PathBuf,

    /// Second locale file
    #[arg(default_value = "en.json")]
    pub secondary: PathBuf,

    /// Suffix appended to output file names (overrides config file)
    #[arg(long)]
    pub suffix: Option<String>,

    /// Attribute holding i18n keys; repeat for several (overrides config file)
    #[arg(long = "attribute", value_name = "NAME")]
    pub attributes: Vec<String>,

    /// Report what would be written without writing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Write a default .keyprune.json into the root directory and exit
    #[arg(long, conflicts_with = "dry_run")]
    pub init: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Arguments {
    pub fn locale_files(&self) -> Vec<PathBuf> {
        vec![self.primary.clone(), self.secondary.clone()]
    }
}
