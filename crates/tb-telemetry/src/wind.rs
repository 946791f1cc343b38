//! Anemometer client.
//!
//! The anemometer publishes its latest reading as a JSON document at a
//! fixed URL. A missing document (HTTP 404) means there is no current
//! reading; anything else that goes wrong is reported as an error so the
//! caller can log it before falling back.

use async_trait::async_trait;
use serde::Deserialize;

use tb_protocol::WindSnapshot;

use crate::error::{TelemetryError, TelemetryResult};
use crate::provider::WindSensor;

/// Configuration for the HTTP anemometer.
#[derive(Debug, Clone, Deserialize)]
pub struct WindSensorConfig {
    /// URL of the latest-reading document. `None` disables the sensor.
    #[serde(default)]
    pub url: Option<String>,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    5
}

impl Default for WindSensorConfig {
    fn default() -> Self {
        Self {
            url: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Anemometer document as published by the sensor.
#[derive(Deserialize)]
struct AnemometerDocument {
    #[serde(rename = "velocidad")]
    speed: f64,
}

/// Reads the anemometer over HTTP.
pub struct HttpWindSensor {
    client: reqwest::Client,
    url: String,
    timeout_secs: u64,
}

impl HttpWindSensor {
    pub fn new(url: impl Into<String>, timeout_secs: u64) -> TelemetryResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| TelemetryError::Transport(e.to_string()))?;
        Ok(Self {
            client,
            url: url.into(),
            timeout_secs,
        })
    }

    /// Build the sensor described by `config`, or `None` if no URL is set.
    pub fn from_config(config: &WindSensorConfig) -> TelemetryResult<Option<Self>> {
        config
            .url
            .as_ref()
            .map(|url| Self::new(url.clone(), config.timeout_secs))
            .transpose()
    }

    fn map_request_error(&self, e: reqwest::Error) -> TelemetryError {
        if e.is_timeout() {
            TelemetryError::Timeout {
                timeout_ms: self.timeout_secs * 1000,
            }
        } else {
            TelemetryError::Transport(e.to_string())
        }
    }
}

#[async_trait]
impl WindSensor for HttpWindSensor {
    async fn wind(&self) -> TelemetryResult<Option<WindSnapshot>> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| self.map_request_error(e))?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            tracing::debug!(url = %self.url, "anemometer has no current reading");
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(TelemetryError::Transport(format!(
                "anemometer returned {}",
                response.status()
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| self.map_request_error(e))?;
        let doc: AnemometerDocument =
            serde_json::from_str(&body).map_err(|e| TelemetryError::Decode(e.to_string()))?;
        Ok(Some(WindSnapshot::new(doc.speed)))
    }
}

/// Sensor used when no anemometer is configured. Never has a reading.
pub struct NoWindSensor;

#[async_trait]
impl WindSensor for NoWindSensor {
    async fn wind(&self) -> TelemetryResult<Option<WindSnapshot>> {
        Ok(None)
    }
}
