pub mod toml_config;

use crate::utils::error::{Result, SweepError};
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use toml_config::TomlConfig;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "clean-docs")]
#[command(about = "Replace docs with their -zh.mdx variants before a build")]
pub struct CliConfig {
    #[arg(long, help = "Docs root to sweep (default: parent of the executable's directory)")]
    pub root: Option<PathBuf>,

    #[arg(long, help = "Optional TOML file with [sweep] and [logging] settings")]
    pub config: Option<PathBuf>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn load_file_config(&self) -> Result<Option<TomlConfig>> {
        self.config.as_ref().map(TomlConfig::from_file).transpose()
    }

    /// `--root` first, then `sweep.root` from the config file, then the default.
    pub fn resolve_root(&self, file_config: Option<&TomlConfig>) -> Result<PathBuf> {
        if let Some(root) = &self.root {
            return Ok(root.clone());
        }
        if let Some(root) = file_config.and_then(TomlConfig::root) {
            return Ok(root);
        }
        default_root()
    }
}

/// 執行檔所在目錄的上一層
pub fn default_root() -> Result<PathBuf> {
    let exe = std::env::current_exe()?;
    exe.parent()
        .and_then(|dir| dir.parent())
        .map(|root| root.to_path_buf())
        .ok_or_else(|| SweepError::ConfigError {
            message: format!("Cannot derive a docs root from {}", exe.display()),
        })
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(root) = &self.root {
            validate_path("root", &root.to_string_lossy())?;
        }
        if let Some(config) = &self.config {
            validate_path("config", &config.to_string_lossy())?;
        }
        Ok(())
    }
}
