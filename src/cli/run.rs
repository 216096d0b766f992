use std::{fs, path::PathBuf};

use anyhow::{Context, Result, bail};

use super::args::Arguments;
use crate::{
    config::{CONFIG_FILE_NAME, Config, default_config_json, load_config},
    core::{PruneReport, PruneRequest, ScanOptions, prune},
};

/// Builds a prune request from the arguments, with CLI flags taking precedence
/// over the config file found from the root directory.
pub fn build_request(args: &Arguments) -> Result<PruneRequest> {
    let loaded = load_config(&args.root)?;
    let mut config = loaded.config;
    apply_overrides(&mut config, args);
    config.validate()?;

    Ok(PruneRequest {
        root: args.root.clone(),
        locale_files: args.locale_files(),
        scan: ScanOptions::from_config(&config, args.verbose),
        keep_keys: config.keep_keys,
        output_suffix: config.output_suffix,
        dry_run: args.dry_run,
    })
}

fn apply_overrides(config: &mut Config, args: &Arguments) {
    if let Some(suffix) = &args.suffix {
        config.output_suffix = suffix.clone();
    }
    if !args.attributes.is_empty() {
        config.attributes = args.attributes.clone();
    }
}

pub fn run(args: &Arguments) -> Result<PruneReport> {
    let request = build_request(args)?;
    prune(&request)
}

/// Writes a default config file into the root directory.
pub fn init(args: &Arguments) -> Result<PathBuf> {
    let config_path = args.root.join(CONFIG_FILE_NAME);
    if config_path.exists() {
        bail!("{} already exists", config_path.display());
    }

    fs::write(&config_path, format!("{}\n", default_config_json()?))
        .with_context(|| format!("Failed to write file: {}", config_path.display()))?;
    Ok(config_path)
}
