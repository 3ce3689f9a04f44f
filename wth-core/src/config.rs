use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{env, fs, path::Path, path::PathBuf, time::Duration};

use crate::error::WthError;

/// Environment variable holding the OpenWeather API key.
pub const API_KEY_VAR: &str = "WEATHER_API_KEY";

pub const DEFAULT_WEATHER_BASE: &str = "https://api.openweathermap.org/data/2.5";
pub const DEFAULT_GEOLOCATION_URL: &str = "https://ipwhois.app/json/";
pub const DEFAULT_FALLBACK_CITY: &str = "London";

/// Read the API key from the process environment.
pub fn api_key_from_env() -> Result<String, WthError> {
    api_key_from(|name| env::var(name).ok())
}

/// Same as [`api_key_from_env`], with the variable lookup injected.
pub fn api_key_from(lookup: impl Fn(&str) -> Option<String>) -> Result<String, WthError> {
    lookup(API_KEY_VAR)
        .filter(|key| !key.trim().is_empty())
        .ok_or(WthError::MissingCredential(API_KEY_VAR))
}

/// Optional overrides stored on disk.
///
/// Example TOML:
/// ```toml
/// weather_base = "https://api.openweathermap.org/data/2.5"
/// geolocation = "https://ipwhois.app/json/"
/// fallback_city = "London"
/// timeout_secs = 10
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Endpoints {
    pub weather_base: String,
    pub geolocation: String,
    pub fallback_city: String,

    /// Per-request deadline. Requests wait indefinitely when unset.
    pub timeout_secs: Option<u64>,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            weather_base: DEFAULT_WEATHER_BASE.to_string(),
            geolocation: DEFAULT_GEOLOCATION_URL.to_string(),
            fallback_city: DEFAULT_FALLBACK_CITY.to_string(),
            timeout_secs: None,
        }
    }
}

impl Endpoints {
    /// Load overrides from the platform config directory, or defaults if no file exists yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let endpoints: Endpoints = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(endpoints)
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "wth", "wth")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    pub fn current_url(&self) -> String {
        format!("{}/weather", self.weather_base.trim_end_matches('/'))
    }

    pub fn forecast_url(&self) -> String {
        format!("{}/forecast", self.weather_base.trim_end_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_api_key_is_a_credential_error() {
        let err = api_key_from(|_| None).unwrap_err();

        assert!(matches!(err, WthError::MissingCredential(API_KEY_VAR)));
        assert_eq!(
            err.to_string(),
            "WEATHER_API_KEY environment variable is not set."
        );
    }

    #[test]
    fn blank_api_key_counts_as_missing() {
        let err = api_key_from(|_| Some("  ".into())).unwrap_err();
        assert!(matches!(err, WthError::MissingCredential(_)));
    }

    #[test]
    fn api_key_is_read_from_the_expected_variable() {
        let key = api_key_from(|name| (name == "WEATHER_API_KEY").then(|| "KEY".to_string()))
            .expect("key must be found");
        assert_eq!(key, "KEY");
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let endpoints = Endpoints::load_from(&dir.path().join("config.toml")).unwrap();

        assert_eq!(endpoints, Endpoints::default());
        assert_eq!(endpoints.fallback_city, "London");
        assert_eq!(endpoints.timeout(), None);
    }

    #[test]
    fn partial_file_overrides_only_given_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "fallback_city = \"Oslo\"\ntimeout_secs = 5\n").unwrap();

        let endpoints = Endpoints::load_from(&path).unwrap();

        assert_eq!(endpoints.fallback_city, "Oslo");
        assert_eq!(endpoints.timeout(), Some(Duration::from_secs(5)));
        assert_eq!(endpoints.weather_base, DEFAULT_WEATHER_BASE);
    }

    #[test]
    fn malformed_file_reports_its_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "timeout_secs = \"soon\"").unwrap();

        let err = Endpoints::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn urls_ignore_trailing_slash_on_base() {
        let endpoints = Endpoints {
            weather_base: "http://localhost:1234/".into(),
            ..Endpoints::default()
        };

        assert_eq!(endpoints.current_url(), "http://localhost:1234/weather");
        assert_eq!(endpoints.forecast_url(), "http://localhost:1234/forecast");
    }
}
