use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::path::PathBuf;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Directory holding the structured input files
    /// (char data, manual overrides, translation store)
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Resource root containing the on-disk image assets
    #[serde(default = "default_res_root")]
    pub res_root: PathBuf,

    /// Output path for the serialized catalog
    #[serde(default = "default_catalog_output")]
    pub catalog_output: PathBuf,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

impl Config {
    /// Validate the configuration after loading and applying overrides
    pub fn validate(&self) -> Result<()> {
        if self.data_dir.as_os_str().is_empty() {
            return Err(anyhow!("data_dir must not be empty"));
        }
        if self.res_root.as_os_str().is_empty() {
            return Err(anyhow!("res_root must not be empty"));
        }
        if self.catalog_output.as_os_str().is_empty() {
            return Err(anyhow!("catalog_output must not be empty"));
        }

        // Input files are read lazily by the builder; only the directories
        // are checked up front so a bad path fails before any work starts
        if !self.data_dir.is_dir() {
            return Err(anyhow!("data_dir does not exist: {:?}", self.data_dir));
        }
        if !self.res_root.is_dir() {
            return Err(anyhow!("res_root does not exist: {:?}", self.res_root));
        }

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            data_dir: default_data_dir(),
            res_root: default_res_root(),
            catalog_output: default_catalog_output(),
            log_level: LogLevel::default(),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_res_root() -> PathBuf {
    PathBuf::from("res")
}

fn default_catalog_output() -> PathBuf {
    PathBuf::from("catalog.json")
}
