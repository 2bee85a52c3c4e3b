//! Configuration management for the AQI dashboard server
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with AQI__ prefix (e.g. AQI__SERVER__PORT)
//!
//! The environment name itself comes from AQI__ENVIRONMENT and picks the file.

use config::{ConfigError, Environment, File};
use serde::Deserialize;
use shared::{
    validate_marker_size_max, validate_trend_points, MapSettings, DEFAULT_TREND_POINTS,
};

use crate::error::AppError;

/// Directory holding the per-environment TOML files
const CONFIG_DIR: &str = "config";

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Synthetic reading configuration
    pub simulation: SimulationConfig,

    /// Map rendering configuration
    pub map: MapConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SimulationConfig {
    /// Fixed RNG seed. Unset means a fresh entropy seed on every start.
    pub seed: Option<u64>,

    /// Points in each city trend series
    pub trend_points: usize,
}

#[derive(Debug, Deserialize, Clone)]
pub struct MapConfig {
    pub zoom: u8,

    /// Map height in pixels
    pub height: u32,

    /// Diameter of the largest city marker
    pub size_max: f64,

    /// Tile style name
    pub style: String,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment =
            std::env::var("AQI__ENVIRONMENT").unwrap_or_else(|_| "development".into());
        Self::load_from(CONFIG_DIR, &environment)
    }

    /// Layer defaults, `<config_dir>/<environment>.toml` and `AQI__*` variables
    pub fn load_from(config_dir: &str, environment: &str) -> Result<Self, ConfigError> {
        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment)?
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("simulation.trend_points", DEFAULT_TREND_POINTS as u64)?
            .set_default("map.zoom", 4)?
            .set_default("map.height", 500)?
            .set_default("map.size_max", 30.0)?
            .set_default("map.style", "open-street-map")?
            // Load environment-specific config file
            .add_source(
                File::with_name(&format!("{}/{}", config_dir, environment)).required(false),
            )
            // Override with environment variables (AQI__ prefix)
            .add_source(
                Environment::with_prefix("AQI")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Reject settings the dashboard cannot render with
    pub fn validate(&self) -> Result<(), AppError> {
        validate_trend_points(self.simulation.trend_points)
            .map_err(|msg| AppError::Configuration(format!("simulation.trend_points: {}", msg)))?;
        validate_marker_size_max(self.map.size_max)
            .map_err(|msg| AppError::Configuration(format!("map.size_max: {}", msg)))?;
        Ok(())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            host: "0.0.0.0".to_string(),
        }
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        let settings = MapSettings::default();
        Self {
            zoom: settings.zoom,
            height: settings.height,
            size_max: settings.size_max,
            style: settings.style,
        }
    }
}

impl MapConfig {
    pub fn settings(&self) -> MapSettings {
        MapSettings {
            zoom: self.zoom,
            height: self.height,
            size_max: self.size_max,
            style: self.style.clone(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            server: ServerConfig::default(),
            simulation: SimulationConfig {
                seed: None,
                trend_points: DEFAULT_TREND_POINTS,
            },
            map: MapConfig::default(),
        }
    }
}
