//! Chat API configuration, loadable from TOML and overridden by environment.

use serde::Deserialize;
use tb_telemetry::WindSensorConfig;

/// Top-level API server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Listen address (e.g., "0.0.0.0").
    #[serde(default = "default_host")]
    pub host: String,
    /// Listen port.
    #[serde(default = "default_port")]
    pub port: u16,
    /// PostgreSQL connection URL. None keeps conversations in memory.
    #[serde(default)]
    pub database_url: Option<String>,
    /// Member id the bot joins conversations as; never greeted.
    #[serde(default = "default_bot_id")]
    pub bot_id: String,
    /// Anemometer settings.
    #[serde(default)]
    pub wind: WindSensorConfig,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_bot_id() -> String {
    "turbina-alpha".to_string()
}

impl ApiConfig {
    /// Load config from a TOML file path.
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load from `path` if given (defaults otherwise), then apply env overrides.
    pub fn load(path: Option<&str>) -> anyhow::Result<Self> {
        let base = match path {
            Some(p) => Self::from_file(p)?,
            None => Self::default(),
        };
        base.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply `TURBINA_HOST`, `TURBINA_PORT`, `DATABASE_URL` and
    /// `WIND_SENSOR_URL` as returned by `lookup`.
    pub fn with_overrides(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> anyhow::Result<Self> {
        if let Some(host) = lookup("TURBINA_HOST") {
            self.host = host;
        }
        if let Some(port) = lookup("TURBINA_PORT") {
            self.port = port
                .parse()
                .map_err(|e| anyhow::anyhow!("invalid TURBINA_PORT '{port}': {e}"))?;
        }
        if let Some(url) = lookup("DATABASE_URL") {
            self.database_url = Some(url);
        }
        if let Some(url) = lookup("WIND_SENSOR_URL") {
            self.wind.url = Some(url);
        }
        Ok(self)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            database_url: None,
            bot_id: default_bot_id(),
            wind: WindSensorConfig::default(),
        }
    }
}
