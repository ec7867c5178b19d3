use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::{slog_debug, Error, Result};

pub const DEFAULT_CURRENCY: &str = "€";
pub const DEFAULT_AVATAR_URL: &str = "https://i.pravatar.cc/48";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Symbol appended to every amount.
    #[serde(default = "default_currency")]
    pub currency: String,
    /// Image URL the add-friend form starts with.
    #[serde(default = "default_avatar_url")]
    pub avatar_url: String,
    /// Start with Clark, Sarah and Anthony in the list.
    #[serde(default = "default_seed_friends")]
    pub seed_friends: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

fn default_avatar_url() -> String {
    DEFAULT_AVATAR_URL.to_string()
}

fn default_seed_friends() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            avatar_url: default_avatar_url(),
            seed_friends: default_seed_friends(),
            log_level: None,
        }
    }
}

impl Config {
    pub fn app_dir() -> Result<PathBuf> {
        Ok(dirs::home_dir().ok_or(Error::NoHomeDir)?.join(".splitbill"))
    }

    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::app_dir()?.join("config.toml"))
    }

    /// Load from the explicit path if given, otherwise from the default
    /// location.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load_from(p),
            None => Self::load_from(&Self::config_path()?),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        slog_debug!("Config::load path={}", path.display());
        if !path.exists() {
            slog_debug!("Config file not found, using defaults");
            return Ok(Self::default());
        }
        let config: Self = toml::from_str(&fs::read_to_string(path)?)?;
        config.validate()?;
        slog_debug!(
            "Config loaded: currency={} avatar_url={} seed_friends={} log_level={:?}",
            config.currency,
            config.avatar_url,
            config.seed_friends,
            config.log_level
        );
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, toml::to_string_pretty(self)?)?;
        slog_debug!("Config saved to {}", path.display());
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.avatar_url.trim().is_empty() {
            return Err(Error::Validation("avatar_url must not be empty".into()));
        }
        Ok(())
    }
}
