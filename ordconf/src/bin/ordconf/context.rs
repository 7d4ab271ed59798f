use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file looked up in the working directory when `--config` is absent.
pub const CONFIG_FILE: &str = "ordconf.toml";

/// Working directory and optional `ordconf.toml` for a generator run
pub struct ProjectContext {
    /// Directory the tool was invoked from
    pub working_dir: PathBuf,
    /// Config file that was loaded, if any
    pub config_path: Option<PathBuf>,
    /// Loaded configuration (defaults when no file was found)
    pub config: OrdconfConfig,
}

/// Configuration stored in ordconf.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrdconfConfig {
    #[serde(default)]
    pub generate: GenerateSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateSettings {
    #[serde(default = "default_package")]
    pub package: String,
    #[serde(default = "default_configurable")]
    pub configurable: String,
    #[serde(default)]
    pub is_pointer: bool,
    #[serde(default)]
    pub document: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,
    #[serde(default = "default_file_name")]
    pub file_name: String,
}

impl Default for GenerateSettings {
    fn default() -> Self {
        Self {
            package: default_package(),
            configurable: default_configurable(),
            is_pointer: false,
            document: false,
            output_dir: None,
            file_name: default_file_name(),
        }
    }
}

fn default_package() -> String {
    "main".to_string()
}

fn default_configurable() -> String {
    "Item".to_string()
}

fn default_file_name() -> String {
    "configuration.rs".to_string()
}

impl ProjectContext {
    /// Load context for the current directory
    pub fn find(explicit_config: Option<&Path>) -> Result<Self> {
        let current_dir = std::env::current_dir().context("Failed to get current directory")?;
        Self::from_dir(current_dir, explicit_config)
    }

    /// Load context for a known working directory.
    ///
    /// An explicitly named config file must exist; the implicit `ordconf.toml`
    /// is optional.
    pub fn from_dir(working_dir: PathBuf, explicit_config: Option<&Path>) -> Result<Self> {
        let config_path = match explicit_config {
            Some(path) => Some(path.to_path_buf()),
            None => Some(working_dir.join(CONFIG_FILE)).filter(|path| path.exists()),
        };

        let config = match &config_path {
            Some(path) => load_config(path)?,
            None => OrdconfConfig::default(),
        };

        Ok(Self {
            working_dir,
            config_path,
            config,
        })
    }

    /// Directory the module is written into, resolved against the working directory
    pub fn output_dir(&self, flag: Option<&Path>) -> PathBuf {
        match flag.or(self.config.generate.output_dir.as_deref()) {
            Some(dir) => self.working_dir.join(dir),
            None => self.working_dir.clone(),
        }
    }
}

fn load_config(path: &Path) -> Result<OrdconfConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    toml::from_str(&content).with_context(|| format!("Failed to parse config file {}", path.display()))
}
