use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".keyprune.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_attributes")]
    pub attributes: Vec<String>,
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    #[serde(default)]
    pub ignores: Vec<String>,
    #[serde(default)]
    pub keep_keys: Vec<String>,
    #[serde(default = "default_output_suffix")]
    pub output_suffix: String,
}

pub fn default_attributes() -> Vec<String> {
    vec!["data-i18n".to_string()]
}

pub fn default_extensions() -> Vec<String> {
    ["html", "htm"].map(String::from).to_vec()
}

fn default_output_suffix() -> String {
    "_cleaned".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            attributes: default_attributes(),
            extensions: default_extensions(),
            ignores: Vec::new(),
            keep_keys: Vec::new(),
            output_suffix: default_output_suffix(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if a glob pattern in `ignores` is invalid or a required list is empty.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            if pattern.contains('*') || pattern.contains('?') {
                Pattern::new(pattern).with_context(|| {
                    format!("Invalid glob pattern in 'ignores': \"{}\"", pattern)
                })?;
            }
        }

        if self.attributes.is_empty() {
            bail!("'attributes' must list at least one attribute name");
        }
        if self.extensions.is_empty() {
            bail!("'extensions' must list at least one file extension");
        }
        if self.output_suffix.is_empty() {
            bail!("'outputSuffix' must not be empty, or outputs would overwrite the inputs");
        }

        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
#[derive(Debug)]
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
