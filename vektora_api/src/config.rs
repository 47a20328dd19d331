//! Backend endpoint resolution.
//!
//! The base URL is resolved once at startup, in priority order: the
//! `VEKTORA_API_URL` environment variable, then an `apiUrl` entry in a
//! `config.json` next to the working directory, then the local development
//! fallback.

use std::path::Path;

use serde::Deserialize;

/// Environment variable that overrides every other base URL source.
pub const API_URL_ENV: &str = "VEKTORA_API_URL";

/// Runtime config file probed in the working directory.
pub const RUNTIME_CONFIG_FILE: &str = "config.json";

/// Base URL used when neither the environment nor `config.json` provide one.
pub const DEFAULT_API_URL: &str = "http://localhost:5000";

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RuntimeConfig {
    api_url: String,
}

/// Resolved client configuration.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Backend base URL without a trailing slash.
    pub api_url: String,
}

impl ClientConfig {
    /// Resolves the base URL from the environment, `config.json`, or the
    /// development fallback, in that order.
    pub fn resolve() -> Self {
        Self::resolve_from(
            std::env::var(API_URL_ENV).ok(),
            Path::new(RUNTIME_CONFIG_FILE),
        )
    }

    fn resolve_from(env_url: Option<String>, config_path: &Path) -> Self {
        if let Some(url) = env_url.filter(|u| !u.trim().is_empty()) {
            return Self::with_api_url(url);
        }
        if let Some(url) = read_runtime_config(config_path) {
            return Self::with_api_url(url);
        }
        Self::with_api_url(DEFAULT_API_URL)
    }

    /// Builds a config around an explicit base URL.
    pub fn with_api_url(url: impl Into<String>) -> Self {
        let mut api_url = url.into().trim().to_string();
        while api_url.ends_with('/') {
            api_url.pop();
        }
        Self { api_url }
    }
}

fn read_runtime_config(path: &Path) -> Option<String> {
    let text = std::fs::read_to_string(path).ok()?;
    match serde_json::from_str::<RuntimeConfig>(&text) {
        Ok(config) if !config.api_url.trim().is_empty() => Some(config.api_url),
        Ok(_) => None,
        Err(e) => {
            tracing::warn!("ignoring malformed {}: {}", path.display(), e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_var_wins() {
        let config = ClientConfig::resolve_from(
            Some("https://api.vektora.example".to_string()),
            Path::new("does-not-exist.json"),
        );
        assert_eq!(config.api_url, "https://api.vektora.example");
    }

    #[test]
    fn blank_env_var_is_ignored() {
        let config =
            ClientConfig::resolve_from(Some("  ".to_string()), Path::new("does-not-exist.json"));
        assert_eq!(config.api_url, DEFAULT_API_URL);
    }

    #[test]
    fn config_file_used_when_env_missing() {
        let path = std::env::temp_dir().join(format!("vektora-config-{}.json", std::process::id()));
        std::fs::write(&path, r#"{"apiUrl": "https://cfg.vektora.example/"}"#).unwrap();
        let config = ClientConfig::resolve_from(None, &path);
        std::fs::remove_file(&path).ok();
        assert_eq!(config.api_url, "https://cfg.vektora.example");
    }

    #[test]
    fn falls_back_to_local_default() {
        let config = ClientConfig::resolve_from(None, Path::new("does-not-exist.json"));
        assert_eq!(config.api_url, DEFAULT_API_URL);
    }

    #[test]
    fn trailing_slashes_are_trimmed() {
        let config = ClientConfig::with_api_url("https://api.vektora.example//");
        assert_eq!(config.api_url, "https://api.vektora.example");
    }
}
