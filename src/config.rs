use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Main configuration for framefx
///
/// Only driver-level settings live here; effect parameters are fixed in the
/// effect implementations themselves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Output encoding settings
    pub output: OutputConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output: OutputConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|_| ConfigError::ParseFailed {
            path: path.display().to_string(),
        })?;
        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::InvalidValue {
            key: "config".to_string(),
            value: e.to_string(),
        })?;

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        self.output.validate()
    }
}

/// Output encoding configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Container extension for output files, without the dot
    pub extension: String,

    /// FFmpeg encoder name
    pub encoder: String,

    /// Four-character codec tag written into the container
    pub fourcc: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            extension: "avi".to_string(),
            encoder: "mpeg4".to_string(),
            fourcc: "XVID".to_string(),
        }
    }
}

impl OutputConfig {
    fn validate(&self) -> Result<()> {
        if self.fourcc.len() != 4 || !self.fourcc.is_ascii() {
            return Err(ConfigError::InvalidValue {
                key: "output.fourcc".to_string(),
                value: self.fourcc.clone(),
            }
            .into());
        }

        if self.extension.is_empty() || self.extension.starts_with('.') {
            return Err(ConfigError::InvalidValue {
                key: "output.extension".to_string(),
                value: self.extension.clone(),
            }
            .into());
        }

        if self.encoder.is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "output.encoder".to_string(),
                value: self.encoder.clone(),
            }
            .into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.output.fourcc, "XVID");
    }

    #[test]
    fn test_config_roundtrip() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("test_config.toml");

        let mut original = Config::default();
        original.output.extension = "mp4".to_string();

        original.save_to_file(&file_path).unwrap();
        let loaded = Config::from_file(&file_path).unwrap();

        assert_eq!(original.output.extension, loaded.output.extension);
        assert_eq!(original.output.encoder, loaded.output.encoder);
        assert_eq!(original.output.fourcc, loaded.output.fourcc);
    }

    #[test]
    fn test_invalid_fourcc() {
        let mut config = Config::default();
        config.output.fourcc = "TOOLONG".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_extension() {
        let mut config = Config::default();
        config.output.extension = ".avi".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_file() {
        assert!(Config::from_file("/definitely/not/here.toml").is_err());
    }
}
