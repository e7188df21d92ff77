use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use serde::{Deserialize, Serialize};

use crate::export::{CsvQuoting, DEFAULT_EXPORT_FILE_NAME};

pub const CONFIG_FILE_NAME: &str = ".spacingauditrc.json";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Path of the document snapshot to audit.
    #[serde(default = "default_document", alias = "documentPath")]
    pub document: String,
    /// Where `export` writes the CSV.
    #[serde(default = "default_output")]
    pub output: String,
    #[serde(default)]
    pub csv_quoting: CsvQuoting,
    /// Page id or name. Defaults to the document's current page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<String>,
}

fn default_document() -> String {
    "./document.json".to_string()
}

fn default_output() -> String {
    DEFAULT_EXPORT_FILE_NAME.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            document: default_document(),
            output: default_output(),
            csv_quoting: CsvQuoting::default(),
            page: None,
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Paths must be non-empty and a page selector, when given, must not be blank.
    pub fn validate(&self) -> Result<()> {
        if self.document.trim().is_empty() {
            bail!("Invalid value in 'document': path must not be empty");
        }
        if self.output.trim().is_empty() {
            bail!("Invalid value in 'output': path must not be empty");
        }
        if let Some(page) = &self.page
            && page.trim().is_empty()
        {
            bail!("Invalid value in 'page': selector must not be blank");
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
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
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
