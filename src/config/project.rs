use std::fs;
use std::path::{Path, PathBuf};

use super::ConfigData;
use crate::error::{ConfigError, StripResult};

pub const CONFIG_FILE_NAME: &str = ".linestrip.toml";

const KEYS: &[&str] = &[
    "target.file",
    "target.range",
    "behavior.clamp",
    "behavior.atomic",
    "behavior.strict_exit",
];

#[derive(Debug, Clone)]
pub struct Config {
    pub data: ConfigData,
    pub path: PathBuf,
}

impl Config {
    /// Load `.linestrip.toml` from `project_root`, falling back to defaults when absent.
    pub fn load_or_default(project_root: impl AsRef<Path>) -> StripResult<Self> {
        let config_path = project_root.as_ref().join(CONFIG_FILE_NAME);

        if config_path.exists() {
            Self::load(config_path)
        } else {
            tracing::debug!("No config at {:?}, using defaults", config_path);
            Ok(Self {
                data: ConfigData::default(),
                path: config_path,
            })
        }
    }

    /// Load an explicit config file; it must exist.
    pub fn load(path: impl AsRef<Path>) -> StripResult<Self> {
        let path = path.as_ref().to_path_buf();
        let content = fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        let data = toml::from_str(&content)
            .map_err(|e| ConfigError::Invalid(format!("{}: {}", path.display(), e)))?;

        tracing::debug!("Loaded config from {:?}", path);
        Ok(Self { data, path })
    }

    /// Write a default config into `project_root` unless one is already there.
    pub fn init(project_root: impl AsRef<Path>) -> StripResult<Self> {
        let config = Self::load_or_default(project_root)?;
        if !config.path.exists() {
            config.save()?;
        }
        Ok(config)
    }

    pub fn save(&self) -> StripResult<()> {
        let content = toml::to_string_pretty(&self.data)
            .map_err(|e| ConfigError::Invalid(format!("Failed to serialize config: {}", e)))?;

        fs::write(&self.path, content).map_err(|source| ConfigError::Io {
            path: self.path.clone(),
            source,
        })?;

        Ok(())
    }

    pub fn set(&mut self, key: &str, value: &str) -> StripResult<()> {
        let invalid = || ConfigError::InvalidValue {
            field: key.to_string(),
            value: value.to_string(),
        };

        match key {
            "target.file" => {
                if value.trim().is_empty() {
                    return Err(invalid().into());
                }
                self.data.target.file = PathBuf::from(value);
            }
            "target.range" => {
                self.data.target.range = value.parse().map_err(|_| invalid())?;
            }
            "behavior.clamp" => {
                self.data.behavior.clamp = value.parse().map_err(|_| invalid())?;
            }
            "behavior.atomic" => {
                self.data.behavior.atomic = value.parse().map_err(|_| invalid())?;
            }
            "behavior.strict_exit" => {
                self.data.behavior.strict_exit = value.parse().map_err(|_| invalid())?;
            }
            _ => {
                return Err(ConfigError::UnknownKey {
                    key: key.to_string(),
                }
                .into())
            }
        }

        self.save()
    }

    pub fn get(&self, key: &str) -> StripResult<String> {
        let value = match key {
            "target.file" => self.data.target.file.display().to_string(),
            "target.range" => self.data.target.range.to_string(),
            "behavior.clamp" => self.data.behavior.clamp.to_string(),
            "behavior.atomic" => self.data.behavior.atomic.to_string(),
            "behavior.strict_exit" => self.data.behavior.strict_exit.to_string(),
            _ => {
                return Err(ConfigError::UnknownKey {
                    key: key.to_string(),
                }
                .into())
            }
        };

        Ok(value)
    }

    pub fn list(&self) -> StripResult<Vec<(&'static str, String)>> {
        KEYS.iter()
            .map(|key| self.get(key).map(|value| (*key, value)))
            .collect()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data: ConfigData::default(),
            path: PathBuf::from(CONFIG_FILE_NAME),
        }
    }
}
