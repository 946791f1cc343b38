//! Scripted telemetry doubles for testing.
//!
//! Readings are fixed at construction so repeated requests return
//! identical snapshots, and every snapshot request is recorded for
//! assertions.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use tb_protocol::{Turbine, TurbineSnapshot, WindSnapshot};

use crate::error::{TelemetryError, TelemetryResult};
use crate::provider::{TelemetryProvider, WindSensor};

/// Mock telemetry provider with scripted snapshots and operating flags.
pub struct MockTelemetry {
    snapshots: HashMap<Turbine, TurbineSnapshot>,
    operating: HashMap<Turbine, bool>,
    /// Turbines whose snapshot requests fail.
    unavailable: Vec<Turbine>,
    /// Every turbine passed to `snapshot` (for test assertions).
    requested: Mutex<Vec<Turbine>>,
}

impl MockTelemetry {
    /// No snapshots scripted, every turbine operating.
    pub fn new() -> Self {
        Self {
            snapshots: HashMap::new(),
            operating: Turbine::ALL.iter().map(|t| (*t, true)).collect(),
            unavailable: Vec::new(),
            requested: Mutex::new(Vec::new()),
        }
    }

    /// Distinct, easy-to-spot readings for all three turbines.
    ///
    /// Arthas: 120 rpm, 80 %, 12 V, 3 A.
    /// Berta: 95 rpm, 55 %, 11 V, 2 A.
    /// Carlamagna: 150 rpm, 30 %, 10 V, 4 A.
    pub fn with_sample_readings() -> Self {
        Self::new()
            .with_snapshot(TurbineSnapshot::new(Turbine::Arthas, 120.0, 80.0, 12.0, 3.0))
            .with_snapshot(TurbineSnapshot::new(Turbine::Berta, 95.0, 55.0, 11.0, 2.0))
            .with_snapshot(TurbineSnapshot::new(Turbine::Carlamagna, 150.0, 30.0, 10.0, 4.0))
    }

    /// Script the snapshot returned for the turbine named in `snapshot`.
    pub fn with_snapshot(mut self, snapshot: TurbineSnapshot) -> Self {
        if let Some(turbine) = Turbine::ALL
            .into_iter()
            .find(|t| t.display_name() == snapshot.name)
        {
            self.snapshots.insert(turbine, snapshot);
        }
        self
    }

    pub fn with_operating(mut self, turbine: Turbine, operating: bool) -> Self {
        self.operating.insert(turbine, operating);
        self
    }

    /// Make snapshot requests for `turbine` fail.
    pub fn with_unavailable(mut self, turbine: Turbine) -> Self {
        self.unavailable.push(turbine);
        self
    }

    /// Turbines requested via `snapshot`, in call order.
    pub fn requested(&self) -> Vec<Turbine> {
        self.requested.lock().unwrap().clone()
    }
}

impl Default for MockTelemetry {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TelemetryProvider for MockTelemetry {
    async fn snapshot(&self, turbine: Turbine) -> TelemetryResult<TurbineSnapshot> {
        self.requested.lock().unwrap().push(turbine);
        if self.unavailable.contains(&turbine) {
            return Err(TelemetryError::NotFound(turbine.to_string()));
        }
        self.snapshots
            .get(&turbine)
            .cloned()
            .ok_or_else(|| TelemetryError::NotFound(turbine.to_string()))
    }

    async fn operating_status(&self, turbine: Turbine) -> TelemetryResult<bool> {
        Ok(self.operating.get(&turbine).copied().unwrap_or(false))
    }
}

/// Mock anemometer.
pub struct MockWindSensor {
    reading: Option<WindSnapshot>,
    fail: bool,
}

impl MockWindSensor {
    /// Always reports `speed` m/s.
    pub fn with_speed(speed: f64) -> Self {
        Self {
            reading: Some(WindSnapshot::new(speed)),
            fail: false,
        }
    }

    /// Never has a reading.
    pub fn silent() -> Self {
        Self {
            reading: None,
            fail: false,
        }
    }

    /// Every read fails.
    pub fn failing() -> Self {
        Self {
            reading: None,
            fail: true,
        }
    }
}

#[async_trait]
impl WindSensor for MockWindSensor {
    async fn wind(&self) -> TelemetryResult<Option<WindSnapshot>> {
        if self.fail {
            return Err(TelemetryError::Timeout { timeout_ms: 5000 });
        }
        Ok(self.reading.clone())
    }
}
