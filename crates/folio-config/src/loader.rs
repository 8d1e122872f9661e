use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::schema::FolioConfig;

/// Loads the Folio configuration.
pub struct ConfigLoader {
    config: FolioConfig,
    config_path: PathBuf,
}

impl ConfigLoader {
    /// Resolve the config path: explicit path > FOLIO_CONFIG env > ~/.folio/folio.toml
    pub fn resolve_path(explicit: Option<&Path>) -> PathBuf {
        if let Some(p) = explicit {
            return p.to_path_buf();
        }
        if let Ok(p) = std::env::var("FOLIO_CONFIG") {
            return PathBuf::from(p);
        }
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".folio")
            .join("folio.toml")
    }

    /// Load the config from disk, falling back to defaults.
    pub fn load(path: Option<&Path>) -> folio_core::Result<Self> {
        let config_path = Self::resolve_path(path);
        let config = if config_path.exists() {
            info!(?config_path, "loading configuration");
            let raw = std::fs::read_to_string(&config_path)?;
            Self::parse(&raw, &config_path)?
        } else {
            warn!(?config_path, "config file not found, using defaults");
            FolioConfig::default()
        };

        let config = Self::apply_env_overrides(config, |key| std::env::var(key).ok());

        match config.validate() {
            Ok(warnings) => {
                for w in &warnings {
                    warn!("{}", w);
                }
            }
            Err(e) => {
                return Err(folio_core::FolioError::Config(e));
            }
        }

        Ok(Self {
            config,
            config_path,
        })
    }

    fn parse(raw: &str, config_path: &Path) -> folio_core::Result<FolioConfig> {
        toml::from_str::<FolioConfig>(raw).map_err(|e| {
            folio_core::FolioError::Config(format!(
                "failed to parse {}: {}",
                config_path.display(),
                e
            ))
        })
    }

    /// Get a snapshot of the loaded config.
    pub fn get(&self) -> FolioConfig {
        self.config.clone()
    }

    /// Path the config was (or would have been) read from.
    pub fn path(&self) -> &Path {
        &self.config_path
    }

    /// Apply env var overrides. `lookup` is `std::env::var` in production.
    pub fn apply_env_overrides<F>(mut config: FolioConfig, lookup: F) -> FolioConfig
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("FOLIO_LISTEN") {
            config.server.listen = v;
        }
        // PORT only swaps the port and keeps the configured host.
        if let Some(v) = lookup("PORT") {
            if let Ok(port) = v.trim().parse::<u16>() {
                let host = config
                    .server
                    .listen
                    .rsplit_once(':')
                    .map(|(h, _)| h.to_string())
                    .unwrap_or_else(|| "127.0.0.1".to_string());
                config.server.listen = format!("{host}:{port}");
            } else {
                warn!(value = %v, "ignoring PORT that is not a port number");
            }
        }
        if let Some(v) = lookup("FOLIO_DATABASE") {
            config.database.path = PathBuf::from(v);
        }
        if let Some(v) = lookup("FOLIO_API_BASE_URL") {
            if !v.is_empty() {
                config.client.api_base_url = v;
            }
        }
        if let Some(v) = lookup("FOLIO_LOG_LEVEL") {
            config.logging.level = v;
        }
        config
    }
}
