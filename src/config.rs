use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub descriptor: DescriptorConfig,
    pub exclusions: ExclusionConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DescriptorConfig {
    /// Extension of project descriptor files (without the dot)
    pub extension: String,
}

/// Files and subtrees that are never considered deletion candidates.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExclusionConfig {
    /// Directory names directly under the root whose subtrees are skipped
    pub directory_names: Vec<String>,
    /// Nested relative paths under the root whose subtrees are skipped
    pub nested_paths: Vec<String>,
    /// Extensions (without the dot) of descriptor companion files
    pub companion_extensions: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            descriptor: DescriptorConfig::default(),
            exclusions: ExclusionConfig::default(),
        }
    }
}

impl Default for DescriptorConfig {
    fn default() -> Self {
        Self {
            extension: "vcxproj".to_string(),
        }
    }
}

impl Default for ExclusionConfig {
    fn default() -> Self {
        Self {
            directory_names: vec![
                ".svn".to_string(),
                "3rdParty".to_string(),
                "AutomationCommon".to_string(),
                "BuildScript".to_string(),
                "Common".to_string(),
                "Documentation".to_string(),
                "Infrastructure".to_string(),
                "InstallScript".to_string(),
                "packages".to_string(),
                "QA".to_string(),
            ],
            nested_paths: vec!["WINDEV4/MinfosTPI".to_string()],
            companion_extensions: vec![
                "user".to_string(),
                "filters".to_string(),
                "ncrunchproject".to_string(),
            ],
        }
    }
}

impl Config {
    /// Load configuration from an explicit path, or from the default
    /// location (`$XDG_CONFIG_HOME/orphan-sweeper/config.toml`), or fall
    /// back to defaults if no file exists.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load_file(path),
            None => {
                let default_path = Self::default_path();
                match default_path {
                    Some(p) if p.exists() => Self::load_file(&p),
                    _ => Ok(Self::default()),
                }
            }
        }
    }

    fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Default config file location
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("orphan-sweeper").join("config.toml"))
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.descriptor.extension.is_empty() {
            return Err(ConfigError::Invalid(
                "descriptor extension must not be empty".to_string(),
            ));
        }
        if self.descriptor.extension.starts_with('.') {
            return Err(ConfigError::Invalid(format!(
                "descriptor extension must not include the dot: '{}'",
                self.descriptor.extension
            )));
        }
        Ok(())
    }
}
