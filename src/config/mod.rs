//! Application configuration.
//!
//! Loaded from an optional TOML file (`LISTINGS_CONFIG`, default `listings.toml`),
//! then overridden from the environment (`.env` is read first):
//! `LISTINGS_ADDR`, `LISTINGS_DB`, `KAKAO_MAP_KEY`.

mod logging;

pub use logging::LoggingConfig;

use serde::Deserialize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

pub const CONFIG_PATH_ENV: &str = "LISTINGS_CONFIG";
const DEFAULT_CONFIG_PATH: &str = "listings.toml";
/// Upper bound on how long a toast stays up.
const MAX_TOAST_TTL_SECS: i64 = 3_600;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
    pub simulation: SimulationConfig,
    pub map: MapConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub addr: String,
    pub max_workers: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: "127.0.0.1:3000".into(),
            max_workers: 8,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub path: String,
    pub schema_path: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: "listings.sqlite3".into(),
            schema_path: "sql/schema.sql".into(),
        }
    }
}

/// Inclusive range of milliseconds a task period is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct PeriodRange {
    pub min_ms: u64,
    pub max_ms: u64,
}

impl PeriodRange {
    pub const fn new(min_ms: u64, max_ms: u64) -> Self {
        Self { min_ms, max_ms }
    }

    pub fn sample<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> Duration {
        Duration::from_millis(rng.gen_range(self.min_ms..=self.max_ms))
    }

    fn validate(&self, field: &'static str) -> Result<(), ConfigError> {
        if self.min_ms == 0 || self.min_ms > self.max_ms {
            return Err(ConfigError::InvalidValue {
                field,
                reason: format!("expected 0 < min_ms <= max_ms, got {}..{}", self.min_ms, self.max_ms),
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub enabled: bool,
    pub start_delay_ms: u64,
    pub views: PeriodRange,
    pub new_listing: PeriodRange,
    pub sold_notice: PeriodRange,
    pub price_change: PeriodRange,
    pub notification_capacity: usize,
    /// How long a toast stays visible, in seconds.
    pub toast_ttl_secs: i64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            start_delay_ms: 2_000,
            views: PeriodRange::new(3_000, 8_000),
            new_listing: PeriodRange::new(30_000, 60_000),
            sold_notice: PeriodRange::new(20_000, 40_000),
            price_change: PeriodRange::new(40_000, 80_000),
            notification_capacity: 20,
            toast_ttl_secs: 5,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    pub kakao_app_key: Option<String>,
    /// Fall back to Leaflet + OpenStreetMap tiles when no Kakao key is set.
    pub leaflet: bool,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            kakao_app_key: None,
            leaflet: true,
        }
    }
}

impl AppConfig {
    /// Resolve the config file, read it if present, and apply env overrides.
    pub fn load() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();

        let path = std::env::var(CONFIG_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH));

        let mut config = if path.exists() {
            Self::from_file(&path)?
        } else {
            Self::default()
        };

        config.apply_env();
        config.validate()?;
        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    fn apply_env(&mut self) {
        if let Ok(addr) = std::env::var("LISTINGS_ADDR") {
            self.server.addr = addr;
        }
        if let Ok(path) = std::env::var("LISTINGS_DB") {
            self.database.path = path;
        }
        if let Ok(key) = std::env::var("KAKAO_MAP_KEY") {
            if !key.trim().is_empty() {
                self.map.kakao_app_key = Some(key);
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.socket_addr()?;

        if self.server.max_workers == 0 {
            return Err(ConfigError::InvalidValue {
                field: "server.max_workers",
                reason: "must be greater than 0".into(),
            });
        }

        let sim = &self.simulation;
        sim.views.validate("simulation.views")?;
        sim.new_listing.validate("simulation.new_listing")?;
        sim.sold_notice.validate("simulation.sold_notice")?;
        sim.price_change.validate("simulation.price_change")?;

        if sim.toast_ttl_secs <= 0 || sim.toast_ttl_secs > MAX_TOAST_TTL_SECS {
            return Err(ConfigError::InvalidValue {
                field: "simulation.toast_ttl_secs",
                reason: format!(
                    "expected 0 < toast_ttl_secs <= {MAX_TOAST_TTL_SECS}, got {}",
                    sim.toast_ttl_secs
                ),
            });
        }

        if sim.notification_capacity == 0 {
            return Err(ConfigError::InvalidValue {
                field: "simulation.notification_capacity",
                reason: "must be greater than 0".into(),
            });
        }

        Ok(())
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.server
            .addr
            .parse()
            .map_err(|e: std::net::AddrParseError| ConfigError::InvalidValue {
                field: "server.addr",
                reason: e.to_string(),
            })
    }
}
