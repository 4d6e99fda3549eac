//! Ingestion configuration loaded from environment variables.

use crate::services::ingest::IdStrategy;
use std::env;
use std::path::PathBuf;

/// Default number of trackpoints per deferred bulk insert chunk.
pub const DEFAULT_CHUNK_SIZE: usize = 400_000;

/// Ingestion run configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Dataset root holding `Data/` and `labeled_ids.txt`
    pub dataset_root: PathBuf,
    /// How activity identifiers are assigned
    pub id_strategy: IdStrategy,
    /// Accumulate all trackpoints and flush at the end (driver-assigned only)
    pub deferred_bulk: bool,
    /// Trackpoints per bulk insert chunk
    pub chunk_size: usize,
    /// Ingest only the first N user directories (None = all)
    pub user_limit: Option<usize>,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            dataset_root: PathBuf::from("dataset"),
            id_strategy: IdStrategy::DriverAssigned,
            deferred_bulk: false,
            chunk_size: DEFAULT_CHUNK_SIZE,
            user_limit: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let dataset_root = env::var("GEOLIFE_DATASET_ROOT")
            .map(PathBuf::from)
            .map_err(|_| ConfigError::Missing("GEOLIFE_DATASET_ROOT"))?;

        let id_strategy = match env::var("GEOLIFE_ID_STRATEGY").ok().as_deref() {
            None | Some("driver") => IdStrategy::DriverAssigned,
            Some("store") => IdStrategy::StoreAssigned,
            Some(other) => {
                return Err(ConfigError::Invalid {
                    name: "GEOLIFE_ID_STRATEGY",
                    value: other.to_string(),
                })
            }
        };

        let deferred_bulk = env::var("GEOLIFE_DEFERRED_BULK")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        let chunk_size = match env::var("GEOLIFE_CHUNK_SIZE").ok() {
            Some(raw) => raw
                .parse::<usize>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or(ConfigError::Invalid {
                    name: "GEOLIFE_CHUNK_SIZE",
                    value: raw,
                })?,
            None => DEFAULT_CHUNK_SIZE,
        };

        let user_limit = match env::var("GEOLIFE_USER_LIMIT").ok() {
            Some(raw) => Some(raw.parse::<usize>().map_err(|_| ConfigError::Invalid {
                name: "GEOLIFE_USER_LIMIT",
                value: raw.clone(),
            })?),
            None => None,
        };

        Ok(Self {
            dataset_root,
            id_strategy,
            deferred_bulk,
            chunk_size,
            user_limit,
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {name}: '{value}'")]
    Invalid { name: &'static str, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test: the env vars are process-global, so the cases run in
    // sequence here instead of racing across test threads.
    #[test]
    fn test_config_from_env() {
        env::set_var("GEOLIFE_DATASET_ROOT", "/data/geolife");
        env::set_var("GEOLIFE_ID_STRATEGY", "store");
        env::set_var("GEOLIFE_CHUNK_SIZE", "500");
        env::remove_var("GEOLIFE_DEFERRED_BULK");
        env::remove_var("GEOLIFE_USER_LIMIT");

        let config = Config::from_env().expect("Config should load");
        assert_eq!(config.dataset_root, PathBuf::from("/data/geolife"));
        assert_eq!(config.id_strategy, IdStrategy::StoreAssigned);
        assert_eq!(config.chunk_size, 500);
        assert!(!config.deferred_bulk);
        assert_eq!(config.user_limit, None);

        env::set_var("GEOLIFE_CHUNK_SIZE", "0");
        let err = Config::from_env().expect_err("zero chunk size should fail");
        assert!(matches!(
            err,
            ConfigError::Invalid {
                name: "GEOLIFE_CHUNK_SIZE",
                ..
            }
        ));

        env::set_var("GEOLIFE_CHUNK_SIZE", "500");
        env::set_var("GEOLIFE_ID_STRATEGY", "eventual");
        let err = Config::from_env().expect_err("unknown strategy should fail");
        assert!(matches!(
            err,
            ConfigError::Invalid {
                name: "GEOLIFE_ID_STRATEGY",
                ..
            }
        ));
    }
}
