//! Telemetry error types.

use thiserror::Error;

/// Errors that can occur while reading turbine or wind telemetry.
#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("no reading for turbine {0}")]
    NotFound(String),

    #[error("sensor request failed: {0}")]
    Transport(String),

    #[error("sensor timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("sensor payload decode error: {0}")]
    Decode(String),
}

/// Convenience alias for telemetry results.
pub type TelemetryResult<T> = Result<T, TelemetryError>;
