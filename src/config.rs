use crate::analyzer::GardenAnalyzer;
use crate::model::ConfigError;
use crate::parser::GardenParser;
use serde::Deserialize;
use std::fs;
use std::path::Path;

pub const DEFAULT_CONFIG_PATH: &str = "garden.json";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PresetConfig {
    pub name: String,
    pub values: Vec<i32>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RandomConfig {
    pub min_value: i32,
    pub max_value: i32,
    pub min_len: usize,
    pub max_len: usize,
}

impl Default for RandomConfig {
    fn default() -> Self {
        Self {
            min_value: -10,
            max_value: 10,
            min_len: 5,
            max_len: 15,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub default_input: String,
    pub top_k: usize,
    pub max_flowers: usize,
    pub random: RandomConfig,
    pub presets: Vec<PresetConfig>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_input: "1, 2, 3, 1, 2".to_string(),
            top_k: GardenAnalyzer::DEFAULT_TOP_K,
            max_flowers: GardenParser::DEFAULT_MAX_FLOWERS,
            random: RandomConfig::default(),
            presets: default_presets(),
        }
    }
}

fn default_presets() -> Vec<PresetConfig> {
    vec![
        PresetConfig {
            name: "Small garden".into(),
            values: vec![1, 2, 3, 1, 2],
        },
        PresetConfig {
            name: "Medium garden".into(),
            values: vec![2, 3, -5, 8, 2, -1, 3, 5],
        },
        PresetConfig {
            name: "Large garden".into(),
            values: vec![4, -3, 5, -2, -1, 2, 6, -2, 1, 5, -3, 2],
        },
    ]
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.top_k == 0 {
            return Err(ConfigError::Invalid("top_k must be at least 1".into()));
        }
        if self.max_flowers == 0 {
            return Err(ConfigError::Invalid("max_flowers must be at least 1".into()));
        }
        let r = &self.random;
        if r.min_value > r.max_value {
            return Err(ConfigError::Invalid(format!(
                "random.min_value ({}) exceeds random.max_value ({})",
                r.min_value, r.max_value
            )));
        }
        if r.min_len == 0 || r.min_len > r.max_len {
            return Err(ConfigError::Invalid(format!(
                "random length range {}..={} is empty or starts at zero",
                r.min_len, r.max_len
            )));
        }
        Ok(())
    }
}

pub fn load_config(path: impl AsRef<Path>) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: AppConfig = serde_json::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

/// Like `load_config`, but a missing file yields the defaults.
pub fn load_config_or_default(path: impl AsRef<Path>) -> Result<AppConfig, ConfigError> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::info!("No config at {}, using defaults", path.display());
        return Ok(AppConfig::default());
    }
    load_config(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn defaults_are_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.presets.len(), 3);
        assert_eq!(config.top_k, 5);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("garden.json");
        fs::write(&path, r#"{ "top_k": 3, "random": { "max_len": 8 } }"#).unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.top_k, 3);
        assert_eq!(config.random.max_len, 8);
        assert_eq!(config.random.min_value, -10);
        assert_eq!(config.default_input, "1, 2, 3, 1, 2");
    }

    #[test]
    fn missing_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let config = load_config_or_default(dir.path().join("nope.json")).unwrap();
        assert_eq!(config, AppConfig::default());
        assert!(matches!(
            load_config(dir.path().join("nope.json")),
            Err(ConfigError::Io(_))
        ));
    }

    #[test]
    fn malformed_file_is_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("garden.json");
        fs::write(&path, "{ top_k: ").unwrap();
        assert!(matches!(load_config(&path), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn invalid_ranges_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("garden.json");
        fs::write(&path, r#"{ "random": { "min_value": 5, "max_value": -5 } }"#).unwrap();
        assert!(matches!(load_config(&path), Err(ConfigError::Invalid(_))));

        let mut config = AppConfig::default();
        config.top_k = 0;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.random.min_len = 0;
        assert!(config.validate().is_err());
    }
}
