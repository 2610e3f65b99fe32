//! # Luxe Config
//!
//! Configuration is layered, lowest priority first:
//!
//! ```text
//! defaults  ──▶  config.yaml  ──▶  LUXE_* environment  ──▶  validate()
//! ```
//!
//! The YAML file is optional. Every field has a default, so a partial file
//! only overrides what it names.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Directory name under the platform config dir
pub const APP_DIR: &str = "luxe";

pub const ENV_HOST: &str = "LUXE_HOST";
pub const ENV_PORT: &str = "LUXE_PORT";
pub const ENV_FIXTURES_DIR: &str = "LUXE_FIXTURES_DIR";
pub const ENV_SESSION_FILE: &str = "LUXE_SESSION_FILE";
pub const ENV_SUBMIT_DELAY_MS: &str = "LUXE_SUBMIT_DELAY_MS";
pub const ENV_LOG: &str = "LUXE_LOG";

/// Result type for luxe-config operations
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid value for {key}: '{value}'")]
    InvalidEnv { key: &'static str, value: String },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Longest stay a quote may cover
pub const MAX_NIGHTS: u32 = 365;
/// Furthest a default check-in may sit from today
pub const MAX_LEAD_DAYS: u32 = 3650;

/// `~/.config/luxe` (or the platform equivalent)
pub fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}

pub fn default_config_path() -> PathBuf {
    config_dir().join("config.yaml")
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 3000,
        }
    }
}

impl ServerConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Directory holding replacement fixture files. `None` uses the embedded set.
    pub fixtures_dir: Option<PathBuf>,
    /// Where the CLI keeps the current user
    pub session_file: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            fixtures_dir: None,
            session_file: config_dir().join("session.json"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BookingConfig {
    /// Length of every quoted stay
    pub nights: u32,
    /// Flat cleaning and service charge added to every booking
    pub service_fee: u32,
    /// Simulated payment processing time
    pub submit_delay_ms: u64,
    pub default_room: String,
    /// Days from today to the default check-in
    pub lead_days: u32,
    pub default_guests: u32,
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            nights: 5,
            service_fee: 170,
            submit_delay_ms: 2000,
            default_room: "Deluxe King Room".into(),
            lead_days: 14,
            default_guests: 2,
        }
    }
}

impl BookingConfig {
    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directives; `RUST_LOG` still wins when set
    pub filter: String,
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info,tower_http=info".into(),
            json: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LuxeConfig {
    pub server: ServerConfig,
    pub data: DataConfig,
    pub booking: BookingConfig,
    pub logging: LoggingConfig,
}

impl LuxeConfig {
    /// Load from `path`, or the default location when it exists, then apply
    /// the process environment and validate.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(p) => Self::from_file(p)?,
            None => {
                let p = default_config_path();
                if p.exists() {
                    Self::from_file(&p)?
                } else {
                    Self::default()
                }
            }
        };
        config.apply_env(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_yaml::from_str(&content).map_err(|source| Error::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Overlay `LUXE_*` variables resolved through `lookup`.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup(ENV_HOST) {
            self.server.host = host;
        }
        if let Some(port) = lookup(ENV_PORT) {
            self.server.port = port.trim().parse().map_err(|_| Error::InvalidEnv {
                key: ENV_PORT,
                value: port.clone(),
            })?;
        }
        if let Some(dir) = lookup(ENV_FIXTURES_DIR) {
            self.data.fixtures_dir = if dir.trim().is_empty() {
                None
            } else {
                Some(PathBuf::from(dir))
            };
        }
        if let Some(file) = lookup(ENV_SESSION_FILE) {
            self.data.session_file = PathBuf::from(file);
        }
        if let Some(delay) = lookup(ENV_SUBMIT_DELAY_MS) {
            self.booking.submit_delay_ms =
                delay.trim().parse().map_err(|_| Error::InvalidEnv {
                    key: ENV_SUBMIT_DELAY_MS,
                    value: delay.clone(),
                })?;
        }
        if let Some(filter) = lookup(ENV_LOG) {
            self.logging.filter = filter;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.server.host.trim().is_empty() {
            return Err(Error::Invalid("server.host must not be empty".into()));
        }
        if self.booking.nights == 0 {
            return Err(Error::Invalid("booking.nights must be at least 1".into()));
        }
        if self.booking.nights > MAX_NIGHTS {
            return Err(Error::Invalid(format!(
                "booking.nights must be at most {}",
                MAX_NIGHTS
            )));
        }
        if self.booking.lead_days > MAX_LEAD_DAYS {
            return Err(Error::Invalid(format!(
                "booking.lead_days must be at most {}",
                MAX_LEAD_DAYS
            )));
        }
        if self.booking.default_room.trim().is_empty() {
            return Err(Error::Invalid("booking.default_room must not be empty".into()));
        }
        if self.booking.default_guests == 0 {
            return Err(Error::Invalid("booking.default_guests must be at least 1".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = LuxeConfig::default();
        assert_eq!(config.server.bind_addr(), "127.0.0.1:3000");
        assert_eq!(config.booking.nights, 5);
        assert_eq!(config.booking.service_fee, 170);
        assert_eq!(config.booking.submit_delay(), Duration::from_secs(2));
        assert!(config.data.fixtures_dir.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = LuxeConfig::from_yaml_str(
            "server:\n  port: 8080\nbooking:\n  service_fee: 200\n",
        )
        .unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.booking.service_fee, 200);
        assert_eq!(config.booking.nights, 5);
    }

    #[test]
    fn test_env_overrides() {
        let mut config = LuxeConfig::default();
        config
            .apply_env(env(&[
                (ENV_HOST, "0.0.0.0"),
                (ENV_PORT, "9000"),
                (ENV_FIXTURES_DIR, "/srv/fixtures"),
                (ENV_SUBMIT_DELAY_MS, "0"),
                (ENV_LOG, "debug"),
            ]))
            .unwrap();

        assert_eq!(config.server.bind_addr(), "0.0.0.0:9000");
        assert_eq!(config.data.fixtures_dir, Some(PathBuf::from("/srv/fixtures")));
        assert_eq!(config.booking.submit_delay_ms, 0);
        assert_eq!(config.logging.filter, "debug");
    }

    #[test]
    fn test_bad_env_port() {
        let mut config = LuxeConfig::default();
        let err = config.apply_env(env(&[(ENV_PORT, "eighty")])).unwrap_err();
        assert!(matches!(err, Error::InvalidEnv { key: ENV_PORT, .. }));
    }

    #[test]
    fn test_zero_nights_rejected() {
        let mut config = LuxeConfig::default();
        config.booking.nights = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_stay_bounds() {
        let mut config = LuxeConfig::default();
        config.booking.nights = MAX_NIGHTS;
        config.booking.lead_days = MAX_LEAD_DAYS;
        assert!(config.validate().is_ok());

        config.booking.nights = 10_000_000;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("booking.nights"));

        config.booking.nights = 5;
        config.booking.lead_days = u32::MAX;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("booking.lead_days"));
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "logging:\n  json: true\n").unwrap();

        let config = LuxeConfig::from_file(&path).unwrap();
        assert!(config.logging.json);

        let missing = LuxeConfig::from_file(&dir.path().join("nope.yaml"));
        assert!(matches!(missing, Err(Error::Read { .. })));
    }

    #[test]
    fn test_yaml_round_trip() {
        let config = LuxeConfig::default();
        let yaml = config.to_yaml().unwrap();
        assert_eq!(LuxeConfig::from_yaml_str(&yaml).unwrap(), config);
    }
}
