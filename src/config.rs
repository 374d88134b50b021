use std::env;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use dotenvy::dotenv;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0 Safari/537.36";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub user_agent: String,
    /// Per-request timeout in seconds.
    pub timeout: u64,
    pub max_retries: u32,
    /// Pages fetched at the same time.
    pub concurrency: usize,
    pub default_output_dir: PathBuf,
    pub bing_base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: 10,
            max_retries: 2,
            concurrency: 4,
            default_output_dir: PathBuf::from("data"),
            bing_base_url: "https://www.bing.com/search".to_string(),
        }
    }
}

impl Config {
    /// Settings file first, then `.env` / environment overrides.
    ///
    /// An unreadable or malformed settings file is logged and the built-in
    /// defaults are used instead. A single bad key only loses that key.
    pub fn load(path: &Path) -> Config {
        let mut config = Config::from_file(path);
        dotenv().ok();
        config.apply_env();
        config
    }

    pub fn from_file(path: &Path) -> Config {
        if !path.exists() {
            log::warn!(
                "Config file {} not found. Using built-in defaults.",
                path.display()
            );
            return Config::default();
        }

        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) => {
                log::error!("Failed to read config file {}: {}", path.display(), e);
                return Config::default();
            }
        };

        match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Object(settings)) => {
                let mut config = Config::default();
                config.overlay(&settings);
                config
            }
            Ok(_) => {
                log::warn!("Config file {} does not contain a JSON object.", path.display());
                Config::default()
            }
            Err(e) => {
                log::error!("Failed to parse config file {}: {}", path.display(), e);
                Config::default()
            }
        }
    }

    /// Applies every recognised key of `settings`; keys with a value of the
    /// wrong type are logged and leave the current value in place.
    pub fn overlay(&mut self, settings: &Map<String, Value>) {
        for (key, value) in settings {
            match key.as_str() {
                "user_agent" => set(&mut self.user_agent, key, value, setting),
                "timeout" => set(&mut self.timeout, key, value, numeric_setting),
                "max_retries" => set(&mut self.max_retries, key, value, numeric_setting),
                "concurrency" => set(&mut self.concurrency, key, value, numeric_setting),
                "default_output_dir" => set(&mut self.default_output_dir, key, value, setting),
                "bing_base_url" => set(&mut self.bing_base_url, key, value, setting),
                _ => log::debug!("Ignoring unknown setting '{key}'"),
            }
        }
    }

    pub fn apply_env(&mut self) {
        if let Some(v) = get_env("SERP_USER_AGENT") {
            self.user_agent = v;
        }
        if let Some(v) = get_env_parsed("SERP_TIMEOUT") {
            self.timeout = v;
        }
        if let Some(v) = get_env_parsed("SERP_MAX_RETRIES") {
            self.max_retries = v;
        }
        if let Some(v) = get_env_parsed("SERP_CONCURRENCY") {
            self.concurrency = v;
        }
        if let Some(v) = get_env("SERP_OUTPUT_DIR") {
            self.default_output_dir = PathBuf::from(v);
        }
        if let Some(v) = get_env("SERP_BASE_URL") {
            self.bing_base_url = v;
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}

fn set<T>(field: &mut T, key: &str, value: &Value, convert: fn(&Value) -> Option<T>) {
    match convert(value) {
        Some(v) => *field = v,
        None => log::warn!("Ignoring setting '{key}': unexpected value {value}"),
    }
}

fn setting<T: DeserializeOwned>(value: &Value) -> Option<T> {
    serde_json::from_value(value.clone()).ok()
}

/// Numbers given either as JSON numbers or as numeric strings.
fn numeric_setting<T: DeserializeOwned + FromStr>(value: &Value) -> Option<T> {
    match value {
        Value::String(s) => s.trim().parse().ok(),
        other => setting(other),
    }
}

fn get_env(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn get_env_parsed<T: FromStr>(key: &str) -> Option<T> {
    let raw = get_env(key)?;
    match raw.trim().parse() {
        Ok(v) => Some(v),
        Err(_) => {
            log::warn!("Ignoring {key}={raw}: not a valid number");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_gives_defaults() {
        let config = Config::from_file(Path::new("/definitely/not/here.json"));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"timeout": 3, "bing_base_url": "http://localhost/search"}}"#).unwrap();

        let config = Config::from_file(file.path());
        assert_eq!(config.timeout, 3);
        assert_eq!(config.bing_base_url, "http://localhost/search");
        assert_eq!(config.max_retries, 2);
        assert_eq!(config.user_agent, DEFAULT_USER_AGENT);
    }

    #[test]
    fn bad_key_only_loses_itself() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"timeout": "5", "max_retries": 7, "concurrency": "many",
                "user_agent": 42, "bing_base_url": "http://localhost/s"}}"#
        )
        .unwrap();

        let config = Config::from_file(file.path());
        assert_eq!(config.timeout, 5);
        assert_eq!(config.max_retries, 7);
        assert_eq!(config.bing_base_url, "http://localhost/s");
        assert_eq!(config.concurrency, 4);
        assert_eq!(config.user_agent, DEFAULT_USER_AGENT);
    }

    #[test]
    fn negative_numbers_are_rejected() {
        let mut config = Config::default();
        let settings = serde_json::json!({"max_retries": -1, "timeout": "-3"});
        config.overlay(settings.as_object().unwrap());
        assert_eq!(config, Config::default());
    }

    #[test]
    fn non_object_file_gives_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[1, 2, 3]").unwrap();
        assert_eq!(Config::from_file(file.path()), Config::default());
    }
}
