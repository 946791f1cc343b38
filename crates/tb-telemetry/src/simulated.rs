//! Simulated telemetry feed.
//!
//! The turbines do not report data yet, so readings are drawn at random
//! from plausible integer ranges on every request. Operating flags are
//! fixed at construction time.

use async_trait::async_trait;
use rand::Rng;
use std::collections::HashMap;

use tb_protocol::{Turbine, TurbineSnapshot};

use crate::error::TelemetryResult;
use crate::provider::TelemetryProvider;

/// Random-valued stand-in for the real sensor feed.
pub struct SimulatedTelemetry {
    operating: HashMap<Turbine, bool>,
}

impl SimulatedTelemetry {
    /// Every turbine reported as generating.
    pub fn new() -> Self {
        Self {
            operating: Turbine::ALL.iter().map(|t| (*t, true)).collect(),
        }
    }

    /// Override the operating flag of one turbine.
    pub fn with_operating(mut self, turbine: Turbine, operating: bool) -> Self {
        self.operating.insert(turbine, operating);
        self
    }
}

impl Default for SimulatedTelemetry {
    fn default() -> Self {
        Self::new()
    }
}

/// Draw one random snapshot. Kept out of the async fns so the
/// non-`Send` thread RNG never lives across an await point.
fn random_snapshot(turbine: Turbine) -> TurbineSnapshot {
    let mut rng = rand::thread_rng();
    TurbineSnapshot::new(
        turbine,
        f64::from(rng.gen_range(3..210)),
        f64::from(rng.gen_range(0..100)),
        f64::from(rng.gen_range(0..13)),
        f64::from(rng.gen_range(0..5)),
    )
}

#[async_trait]
impl TelemetryProvider for SimulatedTelemetry {
    async fn snapshot(&self, turbine: Turbine) -> TelemetryResult<TurbineSnapshot> {
        let snapshot = random_snapshot(turbine);
        tracing::debug!(
            turbine = %turbine,
            rpm = snapshot.rpm,
            load = snapshot.load_percent,
            "simulated snapshot"
        );
        Ok(snapshot)
    }

    async fn operating_status(&self, turbine: Turbine) -> TelemetryResult<bool> {
        Ok(self.operating.get(&turbine).copied().unwrap_or(false))
    }
}
