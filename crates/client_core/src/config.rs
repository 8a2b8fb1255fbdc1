use std::{fs, path::Path, time::Duration};

use anyhow::Context;
use serde::Deserialize;
use shared::protocol::{API_ENDPOINT, DEFAULT_SEARCH_TERM};

pub const SETTINGS_FILE: &str = "hn_search.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub api_endpoint: String,
    pub database_url: String,
    pub default_term: String,
    pub request_timeout_seconds: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_endpoint: API_ENDPOINT.into(),
            database_url: "sqlite://./data/hn_search.db".into(),
            default_term: DEFAULT_SEARCH_TERM.into(),
            request_timeout_seconds: 10,
        }
    }
}

impl Settings {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds.max(1))
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    api_endpoint: Option<String>,
    database_url: Option<String>,
    default_term: Option<String>,
    request_timeout_seconds: Option<u64>,
}

/// Defaults, then `hn_search.toml` in the working directory, then environment.
pub fn load_settings() -> Settings {
    let raw = fs::read_to_string(SETTINGS_FILE).ok();
    resolve_settings(raw.as_deref(), |name| std::env::var(name).ok())
}

pub fn load_settings_from(path: &Path) -> anyhow::Result<Settings> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read settings file '{}'", path.display()))?;
    toml::from_str::<FileSettings>(&raw)
        .with_context(|| format!("invalid settings file '{}'", path.display()))?;
    Ok(resolve_settings(Some(&raw), |name| std::env::var(name).ok()))
}

pub fn resolve_settings<F>(file_contents: Option<&str>, env: F) -> Settings
where
    F: Fn(&str) -> Option<String>,
{
    let mut settings = Settings::default();

    if let Some(raw) = file_contents {
        match toml::from_str::<FileSettings>(raw) {
            Ok(file_cfg) => {
                if let Some(v) = file_cfg.api_endpoint {
                    settings.api_endpoint = v;
                }
                if let Some(v) = file_cfg.database_url {
                    settings.database_url = v;
                }
                if let Some(v) = file_cfg.default_term {
                    settings.default_term = v;
                }
                if let Some(v) = file_cfg.request_timeout_seconds {
                    settings.request_timeout_seconds = v;
                }
            }
            Err(err) => tracing::warn!(error = %err, "ignoring malformed settings file"),
        }
    }

    if let Some(v) = env("HN_SEARCH_ENDPOINT") {
        settings.api_endpoint = v;
    }
    if let Some(v) = env("APP__API_ENDPOINT") {
        settings.api_endpoint = v;
    }

    if let Some(v) = env("DATABASE_URL") {
        settings.database_url = v;
    }
    if let Some(v) = env("APP__DATABASE_URL") {
        settings.database_url = v;
    }

    if let Some(v) = env("APP__DEFAULT_TERM") {
        settings.default_term = v;
    }

    if let Some(v) = env("APP__REQUEST_TIMEOUT_SECONDS") {
        if let Ok(parsed) = v.parse::<u64>() {
            settings.request_timeout_seconds = parsed;
        }
    }

    settings.database_url = normalize_database_url(&settings.database_url);
    settings
}

fn normalize_database_url(raw_database_url: &str) -> String {
    let raw_database_url = raw_database_url.trim();

    if raw_database_url.is_empty() {
        return Settings::default().database_url;
    }

    if raw_database_url.starts_with("sqlite:") || raw_database_url.contains("://") {
        return raw_database_url.to_string();
    }

    format!("sqlite://{}", raw_database_url.replace('\\', "/"))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn defaults_without_file_or_env() {
        let settings = resolve_settings(None, env_from(&[]));
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.default_term, "React");
    }

    #[test]
    fn file_values_then_env_overrides() {
        let file = r#"
            api_endpoint = "http://localhost:9000/search?query="
            default_term = "Rust"
            request_timeout_seconds = 3
        "#;
        let settings = resolve_settings(
            Some(file),
            env_from(&[("APP__DEFAULT_TERM", "Zig"), ("DATABASE_URL", "./terms.db")]),
        );
        assert_eq!(settings.api_endpoint, "http://localhost:9000/search?query=");
        assert_eq!(settings.default_term, "Zig");
        assert_eq!(settings.request_timeout_seconds, 3);
        assert_eq!(settings.database_url, "sqlite://./terms.db");
    }

    #[test]
    fn malformed_file_and_bad_timeout_fall_back() {
        let settings = resolve_settings(
            Some("this is = = not toml"),
            env_from(&[("APP__REQUEST_TIMEOUT_SECONDS", "soon")]),
        );
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn keeps_memory_and_explicit_sqlite_urls() {
        assert_eq!(normalize_database_url("sqlite::memory:"), "sqlite::memory:");
        assert_eq!(
            normalize_database_url("sqlite://./data/x.db"),
            "sqlite://./data/x.db"
        );
        assert_eq!(
            normalize_database_url("C:\\data\\x.db"),
            "sqlite://C:/data/x.db"
        );
    }
}
