use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const KEYS: [&str; 4] = ["file_path", "page_size", "default_query", "log_file"];

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    pub file_path: String,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default = "default_query")]
    pub default_query: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file: Option<String>,
}

fn default_page_size() -> usize {
    25
}

fn default_query() -> String {
    "is:unresolved".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            file_path: String::new(),
            page_size: default_page_size(),
            default_query: default_query(),
            log_file: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&get_config_file_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self, ConfigError> {
        if !config_path.exists() {
            return Err(ConfigError::ConfigNotFound);
        }

        let content = fs::read_to_string(config_path)
            .map_err(|e| ConfigError::ReadError(e.to_string()))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;

        if config.page_size == 0 {
            return Err(ConfigError::InvalidValue {
                key: "page_size".to_string(),
                message: "must be at least 1".to_string(),
            });
        }

        Ok(config)
    }

    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&get_config_file_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::WriteError(e.to_string()))?;
        }

        let content = toml::to_string(self)
            .map_err(|e| ConfigError::SerializeError(e.to_string()))?;

        fs::write(config_path, content)
            .map_err(|e| ConfigError::WriteError(e.to_string()))?;

        Ok(())
    }

    pub fn set(&mut self, key: &str, value: String) -> Result<(), ConfigError> {
        match key {
            "file_path" => self.file_path = value,
            "page_size" => {
                let page_size: usize = value.parse().map_err(|_| ConfigError::InvalidValue {
                    key: key.to_string(),
                    message: format!("'{}' is not a number", value),
                })?;
                if page_size == 0 {
                    return Err(ConfigError::InvalidValue {
                        key: key.to_string(),
                        message: "must be at least 1".to_string(),
                    });
                }
                self.page_size = page_size;
            }
            "default_query" => self.default_query = value,
            "log_file" => self.log_file = (!value.is_empty()).then_some(value),
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        }
        Ok(())
    }

    pub fn get(&self, key: &str) -> Result<String, ConfigError> {
        match key {
            "file_path" => Ok(self.file_path.clone()),
            "page_size" => Ok(self.page_size.to_string()),
            "default_query" => Ok(self.default_query.clone()),
            "log_file" => Ok(self.log_file.clone().unwrap_or_default()),
            _ => Err(ConfigError::UnknownKey(key.to_string())),
        }
    }

    pub fn log_path(&self) -> Result<PathBuf, ConfigError> {
        match &self.log_file {
            Some(path) => Ok(PathBuf::from(path)),
            None => {
                let data_dir = dirs::data_local_dir().ok_or(ConfigError::ConfigDirNotFound)?;
                Ok(data_dir.join("triage").join("triage.log"))
            }
        }
    }
}

fn get_config_file_path() -> Result<PathBuf, ConfigError> {
    let config_dir = dirs::config_dir()
        .ok_or(ConfigError::ConfigDirNotFound)?;

    Ok(config_dir.join("triage").join("config.toml"))
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration not found. Run 'triage config set file_path <path>' to configure your issue file location.")]
    ConfigNotFound,
    #[error("Could not find config directory")]
    ConfigDirNotFound,
    #[error("Failed to read config file: {0}")]
    ReadError(String),
    #[error("Failed to write config file: {0}")]
    WriteError(String),
    #[error("Failed to parse config file: {0}")]
    ParseError(String),
    #[error("Failed to serialize config: {0}")]
    SerializeError(String),
    #[error("Unknown configuration key '{0}'. Supported keys: file_path, page_size, default_query, log_file.")]
    UnknownKey(String),
    #[error("Invalid value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}
