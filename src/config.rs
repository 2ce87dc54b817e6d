use serde::{Deserialize, Serialize};

use std::{env, fs, path::Path};

const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,
    /// Base of public share links. Sharing is disabled when absent.
    #[serde(default)]
    pub public_base_url: Option<String>,
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "backend", rename_all = "lowercase")]
pub enum StorageConfig {
    Postgres { dsn: String },
    Memory,
}

const fn default_port() -> u16 {
    DEFAULT_PORT
}

fn parse_storage(backend: &str, dsn: Option<String>) -> Result<StorageConfig, String> {
    match backend {
        "postgres" => dsn
            .map(|dsn| StorageConfig::Postgres { dsn })
            .ok_or_else(|| "DATABASE_URL environment variable is required".to_string()),
        "memory" => Ok(StorageConfig::Memory),
        other => Err(format!(
            "Unknown STORAGE_BACKEND '{other}', expected 'postgres' or 'memory'"
        )),
    }
}

fn load_from_env(var: &impl Fn(&str) -> Option<String>) -> Result<Config, String> {
    let port = match var("PORT") {
        Some(port) => port
            .parse::<u16>()
            .map_err(|e| format!("Failed to parse PORT: {e}"))?,
        None => DEFAULT_PORT,
    };

    let backend = var("STORAGE_BACKEND").unwrap_or_else(|| "postgres".to_string());
    let storage = parse_storage(&backend, var("DATABASE_URL"))?;

    let public_base_url = var("PUBLIC_BASE_URL").filter(|url| !url.is_empty());

    Ok(Config {
        port,
        public_base_url,
        storage,
    })
}

fn load_from_file(path: &str) -> Result<Config, Box<dyn std::error::Error>> {
    let contents = fs::read_to_string(path)?;
    serde_yaml::from_str(&contents).map_err(Into::into)
}

pub fn load_config() -> Result<Config, Box<dyn std::error::Error>> {
    load_config_with(|key| env::var(key).ok())
}

fn load_config_with(
    var: impl Fn(&str) -> Option<String>,
) -> Result<Config, Box<dyn std::error::Error>> {
    // Retrieve env variable
    let config_path = var("NOTES_API_CONFIG").unwrap_or_else(|| "config.yaml".to_string());

    // Try env path
    if Path::new(&config_path).exists() {
        return load_from_file(&config_path);
    }

    // Fallback to config.yaml
    if Path::new("config.yaml").exists() {
        tracing::warn!(
            "Config file '{}' not found, falling back to 'config.yaml'",
            config_path
        );
        return load_from_file("config.yaml");
    }

    // Fallback to environment variables
    tracing::info!(
        "No config file found, attempting to load configuration from environment variables"
    );
    let env_error = match load_from_env(&var) {
        Ok(config) => {
            tracing::info!("Successfully loaded configuration from environment variables");
            return Ok(config);
        }
        Err(e) => e,
    };

    // Fallback to config.example.yaml
    if Path::new("config.example.yaml").exists() {
        tracing::warn!(
            "Config file '{}' and 'config.yaml' not found and environment variables are \
             incomplete ({}), falling back to 'config.example.yaml'\
             \n This file should not be used and should be replaced with actual data",
            config_path,
            env_error
        );
        return load_from_file("config.example.yaml");
    }

    Err(format!(
        "Config file not found and environment variables are incomplete. \
         Tried: '{config_path}', 'config.yaml', environment variables, and 'config.example.yaml'. \
         Error: {env_error}"
    )
    .into())
}
