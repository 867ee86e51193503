use std::env;
use dotenv::dotenv;
use serde::Deserialize;
use log::{info, warn};
use shared::DEFAULT_POINTS_PER_SUIT;
use thiserror::Error;

/// Most decimal places the page will render
const MAX_DISPLAY_PRECISION: usize = 6;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{0} must be set in production")]
    MissingVariable(&'static str),

    #[error("Invalid value {value:?} for {key}")]
    InvalidValue { key: &'static str, value: String },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub enum Environment {
    #[default]
    Development,
    Test,
    Production,
}

impl std::str::FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dev" | "development" => Ok(Environment::Development),
            "test" => Ok(Environment::Test),
            "prod" | "production" => Ok(Environment::Production),
            _ => Err(format!("Unknown environment: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub environment: Environment,
    pub server: ServerConfig,
    pub data: DataConfig,
    pub scores: ScoresConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: usize,
}

/// Where the variant catalog and the player data are read from
#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    pub variants_path: String,
    pub scores_data_path: String,
}

/// Scoring policy for the aggregation
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ScoresConfig {
    pub points_per_suit: u32,
    /// Decimal places used for percentages, averages and rates
    pub display_precision: usize,
}

impl Default for ScoresConfig {
    fn default() -> Self {
        Self {
            points_per_suit: DEFAULT_POINTS_PER_SUIT,
            display_precision: 1,
        }
    }
}

type Lookup<'a> = &'a dyn Fn(&str) -> Option<String>;

fn parse_or<T: std::str::FromStr>(
    lookup: Lookup<'_>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(key) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { key, value }),
        None => Ok(default),
    }
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        // An explicit env file replaces the .env / .env.<environment> lookup
        match env::var("ENV_FILE_PATH") {
            Ok(env_file_path) if !env_file_path.is_empty() => {
                info!("Loading environment from ENV_FILE_PATH: {}", env_file_path);
                dotenv::from_filename(&env_file_path).ok();
            }
            _ => {
                dotenv().ok();
                let environment_hint = env::var("RUST_ENV")
                    .unwrap_or_else(|_| "development".to_string())
                    .parse()
                    .unwrap_or(Environment::Development);
                let env_file = format!(".env.{:?}", environment_hint).to_lowercase();
                if env_file != ".env.development" {
                    let _ = dotenv::from_filename(&env_file);
                }
            }
        }

        let environment = env::var("RUST_ENV")
            .unwrap_or_else(|_| "development".to_string())
            .parse()
            .unwrap_or(Environment::Development);

        info!("Loading configuration for environment: {:?}", environment);

        let config = Self::from_lookup(environment, &|key: &str| env::var(key).ok())?;
        config.log_configuration();

        Ok(config)
    }

    /// Builds and validates a config from an arbitrary variable source
    pub fn from_lookup(environment: Environment, lookup: Lookup<'_>) -> Result<Self, ConfigError> {
        let config = Config {
            server: Self::load_server_config(&environment, lookup)?,
            data: Self::load_data_config(&environment, lookup)?,
            scores: Self::load_scores_config(lookup)?,
            environment,
        };

        config.validate()?;
        Ok(config)
    }

    fn load_server_config(env: &Environment, lookup: Lookup<'_>) -> Result<ServerConfig, ConfigError> {
        let default_workers = match env {
            Environment::Production => 8,
            Environment::Development | Environment::Test => 1,
        };

        Ok(ServerConfig {
            host: lookup("SERVER_HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: parse_or(lookup, "SERVER_PORT", 50002)?,
            workers: parse_or(lookup, "SERVER_WORKERS", default_workers)?,
        })
    }

    fn load_data_config(env: &Environment, lookup: Lookup<'_>) -> Result<DataConfig, ConfigError> {
        match env {
            Environment::Production => Ok(DataConfig {
                variants_path: lookup("VARIANTS_PATH")
                    .ok_or(ConfigError::MissingVariable("VARIANTS_PATH"))?,
                scores_data_path: lookup("SCORES_DATA_PATH")
                    .ok_or(ConfigError::MissingVariable("SCORES_DATA_PATH"))?,
            }),
            Environment::Development | Environment::Test => Ok(DataConfig {
                variants_path: lookup("VARIANTS_PATH")
                    .unwrap_or_else(|| "data/variants.json".to_string()),
                scores_data_path: lookup("SCORES_DATA_PATH")
                    .unwrap_or_else(|| "data/fixtures.json".to_string()),
            }),
        }
    }

    fn load_scores_config(lookup: Lookup<'_>) -> Result<ScoresConfig, ConfigError> {
        let defaults = ScoresConfig::default();
        Ok(ScoresConfig {
            points_per_suit: parse_or(lookup, "POINTS_PER_SUIT", defaults.points_per_suit)?,
            display_precision: parse_or(lookup, "DISPLAY_PRECISION", defaults.display_precision)?,
        })
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Invalid("Server port cannot be 0".to_string()));
        }
        if self.server.workers == 0 {
            return Err(ConfigError::Invalid("Server workers cannot be 0".to_string()));
        }
        if self.scores.points_per_suit == 0 {
            return Err(ConfigError::Invalid("Points per suit cannot be 0".to_string()));
        }
        if self.scores.display_precision > MAX_DISPLAY_PRECISION {
            return Err(ConfigError::Invalid(format!(
                "Display precision cannot exceed {} decimal places",
                MAX_DISPLAY_PRECISION
            )));
        }

        Ok(())
    }

    fn log_configuration(&self) {
        info!("Configuration loaded successfully");
        info!("Environment: {:?}", self.environment);
        info!("Server: {}:{} (workers: {})", self.server.host, self.server.port, self.server.workers);
        info!("Variants: {}", self.data.variants_path);
        info!("Scores data: {}", self.data.scores_data_path);
        info!(
            "Scoring: {} points per suit, {} decimal place(s)",
            self.scores.points_per_suit, self.scores.display_precision
        );

        if self.is_development() {
            warn!("Running in development mode with sample data paths");
        }
    }

    pub fn is_development(&self) -> bool {
        self.environment == Environment::Development
    }
}
