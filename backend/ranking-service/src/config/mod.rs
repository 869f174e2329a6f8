use demographics_core::constants::DEFAULT_TOP_N;
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub service: ServiceConfig,
    pub dataset: DatasetConfig,
    pub ranking: RankingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_http_port")]
    pub http_port: u16,
    #[serde(default = "default_service_name")]
    pub service_name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatasetConfig {
    /// Flat record CSV loaded at startup
    #[serde(default = "default_dataset_path")]
    pub dataset_path: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RankingConfig {
    #[serde(default = "default_top_n")]
    pub ranking_top_n: usize,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment: {0}")]
    Env(#[from] envy::Error),

    #[error("RANKING_TOP_N must be at least 1")]
    InvalidTopN,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_http_port() -> u16 {
    8090
}

fn default_service_name() -> String {
    "ranking-service".to_string()
}

fn default_dataset_path() -> PathBuf {
    PathBuf::from("data/youtubes.csv")
}

fn default_top_n() -> usize {
    DEFAULT_TOP_N
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();

        Self::from_parts(
            envy::from_env()?,
            envy::from_env()?,
            envy::from_env()?,
        )
    }

    /// Build from explicit key/value pairs instead of the process environment.
    pub fn from_vars<I>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)> + Clone,
    {
        Self::from_parts(
            envy::from_iter(vars.clone())?,
            envy::from_iter(vars.clone())?,
            envy::from_iter(vars)?,
        )
    }

    fn from_parts(
        service: ServiceConfig,
        dataset: DatasetConfig,
        ranking: RankingConfig,
    ) -> Result<Self, ConfigError> {
        if ranking.ranking_top_n == 0 {
            return Err(ConfigError::InvalidTopN);
        }

        Ok(Config {
            service,
            dataset,
            ranking,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_vars(vars(&[])).unwrap();

        assert_eq!(config.service.host, "0.0.0.0");
        assert_eq!(config.service.http_port, 8090);
        assert_eq!(config.service.service_name, "ranking-service");
        assert_eq!(config.dataset.dataset_path, PathBuf::from("data/youtubes.csv"));
        assert_eq!(config.ranking.ranking_top_n, 10);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_vars(vars(&[
            ("HTTP_PORT", "9000"),
            ("DATASET_PATH", "/srv/data/videos.csv"),
            ("RANKING_TOP_N", "25"),
        ]))
        .unwrap();

        assert_eq!(config.service.http_port, 9000);
        assert_eq!(
            config.dataset.dataset_path,
            PathBuf::from("/srv/data/videos.csv")
        );
        assert_eq!(config.ranking.ranking_top_n, 25);
    }

    #[test]
    fn test_rejects_zero_top_n() {
        let result = Config::from_vars(vars(&[("RANKING_TOP_N", "0")]));
        assert!(matches!(result, Err(ConfigError::InvalidTopN)));
    }

    #[test]
    fn test_rejects_bad_port() {
        let result = Config::from_vars(vars(&[("HTTP_PORT", "not-a-port")]));
        assert!(matches!(result, Err(ConfigError::Env(_))));
    }
}
