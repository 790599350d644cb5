use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use demolens_packet::AnalyzerConfig;

use crate::args::OutputFormat;

const CONFIG_FILE_NAME: &str = "demolens_config.json";

#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub analyzer: AnalyzerConfig,
    pub output_format: OutputFormat,
    /// Used when `--loglevel` is not given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
}

#[derive(Debug)]
pub struct ConfigManager {
    args_config_path: Option<PathBuf>,
    current_dir_config_path: PathBuf,
    home_dir_config_path: Option<PathBuf>,

    runtime_config_path: Option<PathBuf>,
}

impl ConfigManager {
    pub fn new(args_path: Option<String>) -> Self {
        #[cfg(windows)]
        let home = std::env::var("USERPROFILE").ok().map(PathBuf::from);
        #[cfg(not(windows))]
        let home = std::env::var("HOME").ok().map(PathBuf::from);

        Self::with_paths(
            args_path.map(PathBuf::from),
            PathBuf::from(CONFIG_FILE_NAME),
            home.map(|home| home.join(".config").join("demolens").join("config.json")),
        )
    }

    fn with_paths(
        args_config_path: Option<PathBuf>,
        current_dir_config_path: PathBuf,
        home_dir_config_path: Option<PathBuf>,
    ) -> Self {
        // `config init` writes here unless a file is found first
        let runtime_config_path = args_config_path
            .clone()
            .or_else(|| home_dir_config_path.clone());
        Self {
            args_config_path,
            current_dir_config_path,
            home_dir_config_path,
            runtime_config_path,
        }
    }

    /// Load the first config file found: `--config`, then the current directory, then home.
    pub fn load_config(&mut self) -> Result<Option<Config>> {
        let candidates = [
            self.args_config_path.clone(),
            Some(self.current_dir_config_path.clone()),
            self.home_dir_config_path.clone(),
        ];
        for path in candidates.into_iter().flatten() {
            if path.exists() {
                let config = self.read_config(&path)?;
                tracing::debug!("Loaded config from {}", path.display());
                self.runtime_config_path = Some(path);
                return Ok(Some(config));
            }
        }
        Ok(None)
    }

    pub fn get_config_path(&self) -> Option<&Path> {
        self.runtime_config_path.as_deref()
    }

    fn read_config(&self, path: &Path) -> Result<Config> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file at {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file at {}", path.display()))
    }

    pub fn save_config(&self, config: &Config) -> Result<PathBuf> {
        let path = self
            .get_config_path()
            .context("No config path available, pass --config")?;
        tracing::debug!("Trying to save config to {}", path.display());
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create config directory at {}", parent.display())
                })?;
            }
        }

        let content = serde_json::to_string_pretty(config).context("Failed to serialize config")?;

        fs::write(path, content)
            .with_context(|| format!("Failed to write config file at {}", path.display()))?;

        Ok(path.to_path_buf())
    }
}
