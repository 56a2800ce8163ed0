// ============================
// crates/validator-lib/src/config.rs
// ============================
//! Configuration management.
use crate::dictionary::DictionaryTuning;
use crate::error::ConfigError;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use password_policy_common::PolicyConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Settings file read by [`Settings::load`]
pub const DEFAULT_CONFIG_FILE: &str = "password-policy.toml";
/// Prefix for environment overrides, e.g. `PCV_POLICY__MIN_PASSWORD_LENGTH`
pub const ENV_PREFIX: &str = "PCV_";
/// Word list used when none is configured
pub const DEFAULT_DICTIONARY_PATH: &str = "dictionary.txt";

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Log level
    pub log_level: String,
    /// Password policy
    pub policy: PolicyConfig,
    /// Dictionary word list
    pub dictionary: DictionarySettings,
}

/// Where the dictionary word list lives
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DictionarySettings {
    pub path: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            policy: PolicyConfig::default(),
            dictionary: DictionarySettings::default(),
        }
    }
}

impl Default for DictionarySettings {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_DICTIONARY_PATH),
        }
    }
}

impl Settings {
    /// Load settings from `password-policy.toml` and the environment
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(DEFAULT_CONFIG_FILE)
    }

    /// Load settings from a specific file, then the environment
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let settings: Settings = Self::figment(path.as_ref()).extract()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Provider chain: defaults, then the file, then `PCV_*` variables
    pub fn figment(path: &Path) -> Figment {
        Figment::from(Serialized::defaults(Settings::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Check the settings are internally consistent
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !LOG_LEVELS.contains(&self.log_level.to_lowercase().as_str()) {
            return Err(ConfigError::InvalidLogLevel(self.log_level.clone()));
        }
        validate_policy(&self.policy)
    }
}

/// Check a policy's invariants
pub fn validate_policy(policy: &PolicyConfig) -> Result<(), ConfigError> {
    if policy.min_password_length > policy.max_password_length {
        return Err(ConfigError::LengthBounds {
            min: policy.min_password_length,
            max: policy.max_password_length,
        });
    }
    DictionaryTuning::new(policy.dictionary_accuracy, policy.dictionary_min_word_length)?;
    Ok(())
}
