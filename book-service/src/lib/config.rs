use std::env;
use std::path::PathBuf;

use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

/// Signing key the original deployment fell back to when unconfigured.
/// Only ever used when `jwt.allow_insecure_default` is explicitly enabled.
const INSECURE_DEFAULT_SECRET: &str = "secret-key";

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub jwt: JwtConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_http_port")]
    pub http_port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    /// Directory holding the flat JSON data files.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

#[derive(Debug, Deserialize, Clone)]
pub struct JwtConfig {
    /// Token signing key. Must be set unless `allow_insecure_default` is on.
    #[serde(default)]
    pub secret: Option<String>,

    #[serde(default = "default_expiration_days")]
    pub expiration_days: i64,

    /// Opt-in fallback to the original hardcoded signing key. Never enable
    /// outside local development.
    #[serde(default)]
    pub allow_insecure_default: bool,
}

fn default_http_port() -> u16 {
    5000
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_expiration_days() -> i64 {
    7
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_port: default_http_port(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: None,
            expiration_days: default_expiration_days(),
            allow_insecure_default: false,
        }
    }
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (JWT__SECRET, SERVER__HTTP_PORT, etc.)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = ConfigBuilder::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Example: JWT__SECRET=... overrides jwt.secret
            .add_source(Environment::with_prefix("").separator("__"))
            .build()?;

        let config: Config = configuration.try_deserialize()?;

        Ok(config)
    }
}

impl StorageConfig {
    pub fn users_file(&self) -> PathBuf {
        self.data_dir.join("users.json")
    }

    pub fn books_file(&self) -> PathBuf {
        self.data_dir.join("books.json")
    }
}

impl JwtConfig {
    /// Resolve the token signing key.
    ///
    /// A missing or empty `jwt.secret` is a startup error. The insecure
    /// built-in key is only handed out when explicitly opted into, with a
    /// warning.
    ///
    /// # Errors
    /// Fails when no secret is configured and the insecure fallback is off.
    pub fn signing_key(&self) -> Result<String, anyhow::Error> {
        match &self.secret {
            Some(secret) if !secret.is_empty() => Ok(secret.clone()),
            _ if self.allow_insecure_default => {
                tracing::warn!(
                    "jwt.secret is not set; using the built-in insecure signing key. \
                     Do not run this configuration outside local development"
                );
                Ok(INSECURE_DEFAULT_SECRET.to_string())
            }
            _ => Err(anyhow::anyhow!(
                "jwt.secret is not configured; set JWT__SECRET or enable jwt.allow_insecure_default"
            )),
        }
    }
}
