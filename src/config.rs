use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. `DATABASE_URL`
    /// 2. Environment variables (SABORBR__DATABASE__URL, etc.)
    /// 3. Config file given by path, `CONFIG_PATH`, or `config/default.toml`
    /// 4. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder()
            .set_default("database.url", "sqlite:saborbr.db")?
            .set_default("database.max_connections", 5)?
            .set_default("observability.log_level", "info")?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Optional, a missing file keeps the defaults
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("SABORBR")
                .separator("__")
                .try_parsing(true),
        );

        if let Ok(database_url) = env::var("DATABASE_URL") {
            builder = builder.set_override("database.url", database_url)?;
        }

        builder.build()?.try_deserialize()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.database.url.trim().is_empty() {
            return Err("Database url must not be empty".to_string());
        }
        if self.database.max_connections < 1 {
            return Err("Database max_connections must be at least 1".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(url: &str, max_connections: u32) -> Config {
        Config {
            database: DatabaseConfig {
                url: url.to_string(),
                max_connections,
            },
            observability: ObservabilityConfig::default(),
        }
    }

    #[test]
    fn test_validation_zero_connections() {
        assert!(config("sqlite:test.db", 0).validate().is_err());
    }

    #[test]
    fn test_validation_empty_url() {
        assert!(config("  ", 5).validate().is_err());
    }

    #[test]
    fn test_validation_ok() {
        assert!(config("sqlite:test.db", 5).validate().is_ok());
        assert_eq!(ObservabilityConfig::default().log_level, "info");
    }
}
