//! Configuration loader with layered sources.

use crate::AppConfig;
use config::{Config, Environment, File};
use shelfmark_core::ShelfmarkError;
use std::path::Path;
use tracing::{debug, info};

/// Loads [`AppConfig`] from a configuration directory.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config_dir: String,
}

impl ConfigLoader {
    /// Creates a loader rooted at the given configuration directory.
    #[must_use]
    pub fn new(config_dir: impl Into<String>) -> Self {
        Self {
            config_dir: config_dir.into(),
        }
    }

    /// Creates a loader for the default location (`./config`).
    #[must_use]
    pub fn from_default_location() -> Self {
        Self::new("./config")
    }

    /// Loads configuration from multiple sources in order:
    /// 1. Built-in defaults
    /// 2. `config/default.toml`
    /// 3. `config/{environment}.toml`
    /// 4. Environment variables shaped `SHELFMARK_SECTION__KEY`
    pub fn load(&self) -> Result<AppConfig, ShelfmarkError> {
        if let Err(e) = dotenvy::dotenv() {
            debug!("No .env file found or error loading it: {}", e);
        }

        let environment =
            std::env::var("SHELFMARK_ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

        info!("Loading configuration for environment: {}", environment);

        let mut builder = Config::builder();

        let default_path = format!("{}/default.toml", self.config_dir);
        if Path::new(&default_path).exists() {
            debug!("Loading default config from: {}", default_path);
            builder = builder.add_source(File::with_name(&default_path).required(false));
        }

        let env_path = format!("{}/{}.toml", self.config_dir, environment);
        if Path::new(&env_path).exists() {
            debug!("Loading environment config from: {}", env_path);
            builder = builder.add_source(File::with_name(&env_path).required(false));
        }

        builder = builder.add_source(
            Environment::with_prefix("SHELFMARK")
                .separator("__")
                .try_parsing(true),
        );

        let raw = builder
            .build()
            .map_err(|e| ShelfmarkError::Configuration(e.to_string()))?;

        raw.try_deserialize::<AppConfig>()
            .map_err(|e| ShelfmarkError::Configuration(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_defaults_when_no_files() {
        let loader = ConfigLoader::new("/nonexistent/config/dir");
        let config = loader.load().unwrap();
        assert_eq!(config.app.name, "shelfmark");
    }

    #[test]
    fn test_load_overrides_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("default.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            "[database]\nurl = \"postgres://db:5432/override\"\nmin_connections = 2\nmax_connections = 20\nconnect_timeout_secs = 5\nidle_timeout_secs = 300"
        )
        .unwrap();

        let loader = ConfigLoader::new(dir.path().to_string_lossy().to_string());
        let config = loader.load().unwrap();
        assert_eq!(config.database.url, "postgres://db:5432/override");
        assert_eq!(config.database.max_connections, 20);
    }
}
