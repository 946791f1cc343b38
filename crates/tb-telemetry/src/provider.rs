//! Telemetry provider abstractions.
//!
//! Both traits are object-safe so the dialogue layer can hold them as
//! `Arc<dyn ..>` and tests can swap in scripted doubles.

use async_trait::async_trait;

use tb_protocol::{OperatingStatusMap, Turbine, TurbineSnapshot, WindSnapshot, status_map};

use crate::error::TelemetryResult;

/// Reads live data from the turbines.
#[async_trait]
pub trait TelemetryProvider: Send + Sync {
    /// Latest snapshot for one turbine.
    async fn snapshot(&self, turbine: Turbine) -> TelemetryResult<TurbineSnapshot>;

    /// Whether one turbine is currently generating.
    async fn operating_status(&self, turbine: Turbine) -> TelemetryResult<bool>;

    /// Operating flag for every turbine, keyed by display name.
    ///
    /// Default implementation queries each turbine in turn.
    async fn all_operating_status(&self) -> TelemetryResult<OperatingStatusMap> {
        let mut flags = Vec::with_capacity(Turbine::ALL.len());
        for turbine in Turbine::ALL {
            flags.push((turbine, self.operating_status(turbine).await?));
        }
        Ok(status_map(flags))
    }
}

/// Reads the site anemometer.
#[async_trait]
pub trait WindSensor: Send + Sync {
    /// Latest wind reading, or `None` if the anemometer has nothing to report.
    async fn wind(&self) -> TelemetryResult<Option<WindSnapshot>>;
}
