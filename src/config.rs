use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

const CONFIG_DIR_NAME: &str = "ticketlens";
const CONFIG_FILE_NAME: &str = "config.json";
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

pub const API_URL_ENV: &str = "TICKETLENS_API_URL";
pub const TIMEOUT_ENV: &str = "TICKETLENS_TIMEOUT_SECS";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_base_url: String,
    pub request_timeout: Duration,
}

impl AppConfig {
    /// Resolves `--api-url` > environment > stored config > defaults.
    pub fn load(api_url_override: Option<String>) -> AppResult<Self> {
        let stored = StoredConfig::load()?;
        Self::resolve(
            stored,
            api_url_override,
            env::var(API_URL_ENV).ok(),
            env::var(TIMEOUT_ENV).ok(),
        )
    }

    fn resolve(
        stored: StoredConfig,
        api_url_override: Option<String>,
        api_url_env: Option<String>,
        timeout_env: Option<String>,
    ) -> AppResult<Self> {
        let api_base_url = [api_url_override, api_url_env, stored.api_base_url]
            .into_iter()
            .flatten()
            .map(|url| url.trim().to_string())
            .find(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let timeout_secs = match timeout_env.as_deref().map(str::trim) {
            Some(raw) if !raw.is_empty() => raw.parse::<u64>().map_err(|_| {
                AppError::Configuration(format!("{TIMEOUT_ENV} must be a whole number, got '{raw}'"))
            })?,
            _ => stored.request_timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS),
        };
        if timeout_secs == 0 {
            return Err(AppError::Configuration(
                "request timeout must be at least one second".to_string(),
            ));
        }

        Ok(Self {
            api_base_url,
            request_timeout: Duration::from_secs(timeout_secs),
        })
    }
}

/// Settings persisted by `ticketlens config init`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_base_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,
}

impl StoredConfig {
    pub fn load() -> AppResult<Self> {
        Self::load_from(&config_file_path()?)
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        match fs::read_to_string(path) {
            Ok(contents) => serde_json::from_str(&contents).map_err(|err| {
                AppError::Configuration(format!("invalid config file {}: {err}", path.display()))
            }),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(AppError::Io(err)),
        }
    }

    pub fn save(&self) -> AppResult<()> {
        self.save_to(&config_file_path()?)
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}

pub fn config_directory() -> AppResult<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join(CONFIG_DIR_NAME))
        .ok_or_else(|| {
            AppError::Configuration("unable to locate the user config directory".to_string())
        })
}

pub fn config_file_path() -> AppResult<PathBuf> {
    Ok(config_directory()?.join(CONFIG_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored(url: Option<&str>, timeout: Option<u64>) -> StoredConfig {
        StoredConfig {
            api_base_url: url.map(str::to_string),
            request_timeout_secs: timeout,
        }
    }

    #[test]
    fn falls_back_to_defaults() {
        let config = AppConfig::resolve(StoredConfig::default(), None, None, None).unwrap();
        assert_eq!(config.api_base_url, DEFAULT_API_URL);
        assert_eq!(config.request_timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }

    #[test]
    fn flag_beats_env_beats_stored() {
        let config = AppConfig::resolve(
            stored(Some("http://stored:1"), Some(3)),
            Some("http://flag:1".to_string()),
            Some("http://env:1".to_string()),
            None,
        )
        .unwrap();
        assert_eq!(config.api_base_url, "http://flag:1");
        assert_eq!(config.request_timeout, Duration::from_secs(3));

        let config = AppConfig::resolve(
            stored(Some("http://stored:1"), None),
            None,
            Some("http://env:1".to_string()),
            Some("30".to_string()),
        )
        .unwrap();
        assert_eq!(config.api_base_url, "http://env:1");
        assert_eq!(config.request_timeout, Duration::from_secs(30));
    }

    #[test]
    fn blank_values_are_skipped() {
        let config = AppConfig::resolve(
            stored(Some("http://stored:1"), None),
            Some("  ".to_string()),
            Some(String::new()),
            Some(" ".to_string()),
        )
        .unwrap();
        assert_eq!(config.api_base_url, "http://stored:1");
    }

    #[test]
    fn rejects_bad_timeouts() {
        assert!(AppConfig::resolve(StoredConfig::default(), None, None, Some("soon".to_string())).is_err());
        assert!(AppConfig::resolve(stored(None, Some(0)), None, None, None).is_err());
    }

    #[test]
    fn missing_file_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = StoredConfig::load_from(&dir.path().join("absent.json")).unwrap();
        assert_eq!(loaded, StoredConfig::default());
    }

    #[test]
    fn saved_file_is_read_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(CONFIG_FILE_NAME);
        let config = stored(Some("http://desk.internal:8000"), Some(5));

        config.save_to(&path).unwrap();

        assert_eq!(StoredConfig::load_from(&path).unwrap(), config);
    }

    #[test]
    fn corrupt_file_is_a_configuration_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "{not json").unwrap();

        assert!(matches!(
            StoredConfig::load_from(&path),
            Err(AppError::Configuration(_))
        ));
    }
}
