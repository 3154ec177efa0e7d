//! API configuration resolved once at process start.

use crate::error::{Error, Result};

/// Environment variable naming the API base URL.
pub const BASE_URL_ENV: &str = "TOV_API_URL";

/// Environment variable naming the API key.
pub const API_KEY_ENV: &str = "TOV_API_KEY";

/// Base URL of the development user service.
pub const DEFAULT_BASE_URL: &str = "https://dev.tovtrip.com/usersvc/api/v1";

/// Default country calling code for phone login.
pub const DEFAULT_COUNTRY_CODE: &str = "+855";

/// Client platform reported in the `x-platform` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Ios,
    Android,
}

impl Platform {
    /// Platform of the current build target.
    ///
    /// The service expects exactly two values; anything that is not an
    /// Apple mobile target reports as Android.
    #[must_use]
    pub const fn current() -> Self {
        if cfg!(target_os = "ios") {
            Self::Ios
        } else {
            Self::Android
        }
    }

    /// The wire value for the `x-platform` header.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ios => "ios",
            Self::Android => "android",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Connection settings for the user service API.
///
/// Built once and injected into the HTTP client; nothing in the crate
/// reads the environment after construction.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub api_key: String,
    pub platform: Platform,
}

impl ApiConfig {
    /// Create a config, rejecting empty values.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into();
        let api_key = api_key.into();
        if base_url.trim().is_empty() {
            return Err(Error::Config("API base URL is missing".into()));
        }
        if api_key.trim().is_empty() {
            return Err(Error::Config("API key is missing".into()));
        }
        Ok(Self {
            base_url,
            api_key,
            platform: Platform::current(),
        })
    }

    /// Resolve configuration from `TOV_API_URL` / `TOV_API_KEY`.
    ///
    /// An unset or empty variable is a hard configuration failure; no
    /// network operation is ever attempted with a partial config.
    pub fn from_env() -> Result<Self> {
        let base_url = env_var(BASE_URL_ENV)
            .ok_or_else(|| Error::Config(format!("{BASE_URL_ENV} is missing")))?;
        let api_key =
            env_var(API_KEY_ENV).ok_or_else(|| Error::Config(format!("{API_KEY_ENV} is missing")))?;
        Self::new(base_url, api_key)
    }

    /// Override the reported platform.
    #[must_use]
    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_empty_values() {
        assert!(matches!(ApiConfig::new("", "key"), Err(Error::Config(_))));
        assert!(matches!(
            ApiConfig::new("https://api.example.com", ""),
            Err(Error::Config(_))
        ));
        assert!(matches!(ApiConfig::new("   ", "key"), Err(Error::Config(_))));
    }

    #[test]
    fn test_new_accepts_valid_values() {
        let config = ApiConfig::new(DEFAULT_BASE_URL, "test-key").unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.api_key, "test-key");
    }

    #[test]
    fn test_with_platform() {
        let config = ApiConfig::new("https://api.example.com", "key")
            .unwrap()
            .with_platform(Platform::Ios);
        assert_eq!(config.platform, Platform::Ios);
    }

    #[test]
    fn test_platform_wire_values() {
        assert_eq!(Platform::Ios.as_str(), "ios");
        assert_eq!(Platform::Android.as_str(), "android");
        assert_eq!(Platform::Android.to_string(), "android");
    }
}
