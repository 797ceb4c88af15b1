//! Portal configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional; the defaults point at the production rental
//! spreadsheet.
//!
//! - `PORTAL_API_URL` - Rental API endpoint (default: production Apps Script deployment)
//! - `PORTAL_SHEET_ID` - Spreadsheet the API reads from (default: production sheet)
//! - `PORTAL_SESSION_FILE` - Where the phone and theme are persisted
//!   (default: `<config dir>/container-portal/session.json`)
//! - `PORTAL_LOCALE` - Message language, `he` or `en` (default: `he`)
//! - `PORTAL_REQUEST_TIMEOUT_SECS` - HTTP request timeout (default: 30)

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;
use url::Url;

/// Production rental API endpoint.
pub const DEFAULT_API_URL: &str = "https://script.google.com/macros/s/AKfycbyVjQLVuLAm03s2o5zg9ClbOe9iKIL9zTVpDI3kIb8ojMSe3QkmLj420r8FphX1X4j_/exec";

/// Production rental spreadsheet.
pub const DEFAULT_SHEET_ID: &str = "1xdEVKU5sreegA7Q0rOxY9ES5a3nsvxmCM7p7OCHaK0k";

const DEFAULT_TIMEOUT_SECS: &str = "30";
const SESSION_DIR: &str = "container-portal";
const SESSION_FILE: &str = "session.json";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Language of user-facing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    Hebrew,
    English,
}

impl std::str::FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "he" | "he-il" => Ok(Self::Hebrew),
            "en" | "en-us" | "en-gb" => Ok(Self::English),
            _ => Err(format!("unsupported locale: {s}")),
        }
    }
}

/// Portal client configuration.
#[derive(Debug, Clone)]
pub struct PortalConfig {
    /// Rental API endpoint
    pub api_url: Url,
    /// Spreadsheet identifier sent with every request
    pub sheet_id: String,
    /// Session file holding the last phone number and theme
    pub session_file: PathBuf,
    /// Message language
    pub locale: Locale,
    /// Timeout for a single API request
    pub request_timeout: Duration,
}

impl PortalConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value, or if
    /// no session file is configured and the platform has no config directory.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// See [`PortalConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get_or_default = |key: &str, default: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let api_url = Url::parse(&get_or_default("PORTAL_API_URL", DEFAULT_API_URL))
            .map_err(|e| ConfigError::InvalidEnvVar("PORTAL_API_URL".to_string(), e.to_string()))?;
        if !matches!(api_url.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidEnvVar(
                "PORTAL_API_URL".to_string(),
                format!("unsupported scheme: {}", api_url.scheme()),
            ));
        }

        let sheet_id = get_or_default("PORTAL_SHEET_ID", DEFAULT_SHEET_ID);

        let session_file = match lookup("PORTAL_SESSION_FILE").filter(|v| !v.trim().is_empty()) {
            Some(path) => PathBuf::from(path),
            None => default_session_file()?,
        };

        let locale = get_or_default("PORTAL_LOCALE", "he")
            .parse::<Locale>()
            .map_err(|e| ConfigError::InvalidEnvVar("PORTAL_LOCALE".to_string(), e))?;

        let timeout_secs = get_or_default("PORTAL_REQUEST_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)
            .parse::<u64>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("PORTAL_REQUEST_TIMEOUT_SECS".to_string(), e.to_string())
            })?;
        if timeout_secs == 0 {
            return Err(ConfigError::InvalidEnvVar(
                "PORTAL_REQUEST_TIMEOUT_SECS".to_string(),
                "must be greater than zero".to_string(),
            ));
        }

        Ok(Self {
            api_url,
            sheet_id,
            session_file,
            locale,
            request_timeout: Duration::from_secs(timeout_secs),
        })
    }
}

/// Session file under the platform configuration directory.
fn default_session_file() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|dir| dir.join(SESSION_DIR).join(SESSION_FILE))
        .ok_or_else(|| ConfigError::MissingEnvVar("PORTAL_SESSION_FILE".to_string()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config =
            PortalConfig::from_lookup(lookup(&[("PORTAL_SESSION_FILE", "/tmp/s.json")])).unwrap();

        assert_eq!(config.api_url.as_str(), DEFAULT_API_URL);
        assert_eq!(config.sheet_id, DEFAULT_SHEET_ID);
        assert_eq!(config.session_file, PathBuf::from("/tmp/s.json"));
        assert_eq!(config.locale, Locale::Hebrew);
        assert_eq!(config.request_timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_overrides() {
        let config = PortalConfig::from_lookup(lookup(&[
            ("PORTAL_API_URL", "http://127.0.0.1:8080/exec"),
            ("PORTAL_SHEET_ID", "test-sheet"),
            ("PORTAL_SESSION_FILE", "/tmp/s.json"),
            ("PORTAL_LOCALE", "EN"),
            ("PORTAL_REQUEST_TIMEOUT_SECS", "5"),
        ]))
        .unwrap();

        assert_eq!(config.api_url.as_str(), "http://127.0.0.1:8080/exec");
        assert_eq!(config.sheet_id, "test-sheet");
        assert_eq!(config.locale, Locale::English);
        assert_eq!(config.request_timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_blank_values_use_defaults() {
        let config = PortalConfig::from_lookup(lookup(&[
            ("PORTAL_SHEET_ID", "  "),
            ("PORTAL_SESSION_FILE", "/tmp/s.json"),
        ]))
        .unwrap();
        assert_eq!(config.sheet_id, DEFAULT_SHEET_ID);
    }

    #[test]
    fn test_invalid_url() {
        let result = PortalConfig::from_lookup(lookup(&[
            ("PORTAL_API_URL", "not a url"),
            ("PORTAL_SESSION_FILE", "/tmp/s.json"),
        ]));
        assert!(matches!(result, Err(ConfigError::InvalidEnvVar(key, _)) if key == "PORTAL_API_URL"));
    }

    #[test]
    fn test_non_http_url() {
        let result = PortalConfig::from_lookup(lookup(&[
            ("PORTAL_API_URL", "file:///etc/passwd"),
            ("PORTAL_SESSION_FILE", "/tmp/s.json"),
        ]));
        assert!(matches!(result, Err(ConfigError::InvalidEnvVar(_, _))));
    }

    #[test]
    fn test_invalid_locale() {
        let result = PortalConfig::from_lookup(lookup(&[
            ("PORTAL_LOCALE", "fr"),
            ("PORTAL_SESSION_FILE", "/tmp/s.json"),
        ]));
        assert!(matches!(result, Err(ConfigError::InvalidEnvVar(key, _)) if key == "PORTAL_LOCALE"));
    }

    #[test]
    fn test_invalid_timeout() {
        for value in ["abc", "0", "-3"] {
            let result = PortalConfig::from_lookup(lookup(&[
                ("PORTAL_REQUEST_TIMEOUT_SECS", value),
                ("PORTAL_SESSION_FILE", "/tmp/s.json"),
            ]));
            assert!(result.is_err(), "{value}");
        }
    }
}
