use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use crate::dedup::{
    BlockMarkers, DEFAULT_COMMENT_PREFIX, DEFAULT_HEADER_PREFIX, DEFAULT_HEADER_SUFFIX,
};

pub const CONFIG_FILE_NAME: &str = ".keydeduprc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_header_prefix")]
    pub header_prefix: String,
    #[serde(default = "default_header_suffix")]
    pub header_suffix: String,
    #[serde(default = "default_comment_prefix")]
    pub comment_prefix: String,
    #[serde(default)]
    pub backup: bool,
    #[serde(default = "default_backup_extension")]
    pub backup_extension: String,
}

fn default_header_prefix() -> String {
    DEFAULT_HEADER_PREFIX.to_string()
}

fn default_header_suffix() -> String {
    DEFAULT_HEADER_SUFFIX.to_string()
}

fn default_comment_prefix() -> String {
    DEFAULT_COMMENT_PREFIX.to_string()
}

fn default_backup_extension() -> String {
    "bak".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            header_prefix: default_header_prefix(),
            header_suffix: default_header_suffix(),
            comment_prefix: default_comment_prefix(),
            backup: false,
            backup_extension: default_backup_extension(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Markers must be non-empty, otherwise every line would match them.
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("headerPrefix", &self.header_prefix),
            ("headerSuffix", &self.header_suffix),
            ("commentPrefix", &self.comment_prefix),
            ("backupExtension", &self.backup_extension),
        ] {
            if value.is_empty() {
                bail!("'{}' must not be empty", field);
            }
        }

        if self.backup_extension.contains(['/', '\\']) {
            bail!(
                "'backupExtension' must not contain a path separator: \"{}\"",
                self.backup_extension
            );
        }

        Ok(())
    }

    pub fn markers(&self) -> BlockMarkers {
        BlockMarkers {
            header_prefix: self.header_prefix.clone(),
            header_suffix: self.header_suffix.clone(),
            comment_prefix: self.comment_prefix.clone(),
        }
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
pub struct ConfigLoadResult {
    pub config: Config,
    /// Where the config was read from, `None` if using defaults.
    pub source: Option<PathBuf>,
}

/// Read and validate a config file at an explicit path.
pub fn load_config_file(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let config: Config = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;
    config.validate()?;
    Ok(config)
}

/// Find the nearest config file above `start_dir`, falling back to defaults.
pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => Ok(ConfigLoadResult {
            config: load_config_file(&path)?,
            source: Some(path),
        }),
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            source: None,
        }),
    }
}
