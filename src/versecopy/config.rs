//! # Configuration
//!
//! Stored as `config.json` in the versecopy config directory.
//!
//! Resolution order for each setting:
//! 1. Command-line flag (`--api-url`)
//! 2. Environment (`VERSECOPY_API_URL`)
//! 3. `config.json`
//! 4. Compiled defaults
//!
//! The directory is `$VERSECOPY_HOME` when set, otherwise the OS config dir
//! (via the `directories` crate).
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `api-url` | `https://sil-bibles-api.parabible.com/` | Verse API base URL |
//! | `translation-order` | built-in list | Comma-separated priority list |
//! | `timeout` | `30` | Request timeout in seconds |

use crate::error::{Result, VerseError};
use crate::order::TranslationOrder;
use crate::source::http::{DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILENAME: &str = "config.json";
pub const API_URL_ENV: &str = "VERSECOPY_API_URL";
pub const HOME_ENV: &str = "VERSECOPY_HOME";
pub const KEYS: &[&str] = &["api-url", "translation-order", "timeout"];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VerseConfig {
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Overrides the built-in translation priority list when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translation_order: Option<Vec<String>>,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for VerseConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            translation_order: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Directory holding `config.json`.
pub fn config_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("org", "versecopy", "versecopy")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| VerseError::Config("Could not determine config directory".to_string()))
}

impl VerseConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: VerseConfig = serde_json::from_str(&content)?;
        check_api_url(&config.api_url)?;
        check_timeout(config.timeout_secs)?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        fs::create_dir_all(config_dir)?;

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    /// Applies `VERSECOPY_API_URL` from the process environment.
    pub fn with_env(self) -> Self {
        let api_url = std::env::var(API_URL_ENV).ok();
        self.with_api_url(api_url)
    }

    /// Overrides the API URL when `api_url` is set and non-blank.
    pub fn with_api_url(mut self, api_url: Option<String>) -> Self {
        if let Some(url) = api_url.filter(|u| !u.trim().is_empty()) {
            self.api_url = url.trim().to_string();
        }
        self
    }

    pub fn translation_order(&self) -> TranslationOrder {
        match &self.translation_order {
            Some(codes) => TranslationOrder::new(codes.iter().cloned()),
            None => TranslationOrder::default(),
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "api-url" => Ok(self.api_url.clone()),
            "translation-order" => Ok(self.translation_order().codes().join(",")),
            "timeout" => Ok(self.timeout_secs.to_string()),
            other => Err(unknown_key(other)),
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let value = value.trim();
        match key {
            "api-url" => {
                check_api_url(value)?;
                self.api_url = value.to_string();
            }
            "translation-order" => {
                if value.eq_ignore_ascii_case("default") {
                    self.translation_order = None;
                    return Ok(());
                }
                let codes: Vec<String> = value
                    .split(',')
                    .map(str::trim)
                    .filter(|c| !c.is_empty())
                    .map(str::to_string)
                    .collect();
                if codes.is_empty() {
                    return Err(VerseError::Config(
                        "translation-order needs at least one translation code".to_string(),
                    ));
                }
                self.translation_order = Some(codes);
            }
            "timeout" => {
                let secs = value.parse::<u64>().map_err(|_| timeout_error(value))?;
                check_timeout(secs)?;
                self.timeout_secs = secs;
            }
            other => return Err(unknown_key(other)),
        }
        Ok(())
    }
}

fn check_api_url(url: &str) -> Result<()> {
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(())
    } else {
        Err(VerseError::Config(format!(
            "api-url must start with http:// or https://, got '{}'",
            url
        )))
    }
}

fn check_timeout(secs: u64) -> Result<()> {
    if secs == 0 {
        return Err(timeout_error("0"));
    }
    Ok(())
}

fn timeout_error(value: &str) -> VerseError {
    VerseError::Config(format!(
        "timeout must be a positive number of seconds, got '{}'",
        value
    ))
}

fn unknown_key(key: &str) -> VerseError {
    VerseError::Config(format!(
        "Unknown config key '{}' (expected one of: {})",
        key,
        KEYS.join(", ")
    ))
}
