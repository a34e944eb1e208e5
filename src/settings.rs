use std::env;

use anyhow::Context;
use serde::Deserialize;
use tracing::{info, Level};

use crate::model::profile::STORAGE_KEY;

#[derive(Clone, Copy, Deserialize, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    #[default]
    File,
    Redis,
    Memory,
}

#[derive(Clone, Deserialize, Debug)]
pub struct Config {
    #[serde(default = "default_env")]
    pub env: String, // file / server
    #[serde(default)]
    pub storage_backend: StorageBackend,
    #[serde(default = "default_storage_dir")]
    pub storage_dir: String,
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    pub redis_url: Option<String>,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_env() -> String {
    "file".to_string()
}

fn default_storage_dir() -> String {
    "./data".to_string()
}

fn default_storage_key() -> String {
    STORAGE_KEY.to_string()
}

fn default_base_url() -> String {
    "http://localhost:3000/".to_string()
}

fn default_log_dir() -> String {
    "./logs".to_string()
}

fn default_log_level() -> String {
    "debug".to_string()
}

impl Config {
    /// `log_level` as a tracing level. An unknown name is an error rather than
    /// a silent fallback.
    pub fn max_log_level(&self) -> anyhow::Result<Level> {
        self.log_level
            .parse::<Level>()
            .with_context(|| format!("invalid log_level {:?}", self.log_level))
    }

    /// Say where the config came from. Called once logging is installed,
    /// since the config has to be read before the subscriber exists.
    pub fn log_source(&self) {
        if self.env == "file" {
            info!("using .env file as environtment variable");
        } else {
            info!("using server environtment as environtment variable");
        }
    }
}

/// Read the config, loading `.env` first when `env` is `file`. Runs before
/// logging is set up, so it does not log.
pub fn get_config() -> anyhow::Result<Config> {
    let env_var = env::var("env").unwrap_or("file".to_string());
    if env_var == "file" {
        let _ = dotenvy::dotenv();
    }
    Ok(envy::from_env::<Config>()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_env() {
        let config: Config = envy::from_iter(Vec::<(String, String)>::new()).unwrap();
        assert_eq!(config.env, "file");
        assert_eq!(config.storage_backend, StorageBackend::File);
        assert_eq!(config.storage_dir, "./data");
        assert_eq!(config.storage_key, "visitingCardProfile");
        assert_eq!(config.redis_url, None);
        assert_eq!(config.base_url, "http://localhost:3000/");
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_overrides() {
        let vars = vec![
            ("STORAGE_BACKEND".to_string(), "redis".to_string()),
            ("REDIS_URL".to_string(), "redis://127.0.0.1/".to_string()),
            ("STORAGE_KEY".to_string(), "card".to_string()),
        ];
        let config: Config = envy::from_iter(vars).unwrap();
        assert_eq!(config.storage_backend, StorageBackend::Redis);
        assert_eq!(config.redis_url.as_deref(), Some("redis://127.0.0.1/"));
        assert_eq!(config.storage_key, "card");
    }

    #[test]
    fn test_log_level() -> anyhow::Result<()> {
        let config: Config = envy::from_iter(Vec::<(String, String)>::new())?;
        assert_eq!(config.max_log_level()?, Level::DEBUG);

        let config: Config =
            envy::from_iter(vec![("LOG_LEVEL".to_string(), "warn".to_string())])?;
        assert_eq!(config.max_log_level()?, Level::WARN);

        let config: Config =
            envy::from_iter(vec![("LOG_LEVEL".to_string(), "verbose".to_string())])?;
        let err = config.max_log_level().unwrap_err();
        assert!(err.to_string().contains("verbose"));
        Ok(())
    }
}
