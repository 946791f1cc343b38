use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::turbine::Turbine;

/// Point-in-time reading of one turbine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TurbineSnapshot {
    /// Display name of the turbine.
    pub name: String,
    /// Rotor speed in revolutions per minute.
    pub rpm: f64,
    /// Battery charge, percent.
    pub load_percent: f64,
    /// Output voltage (V).
    pub voltage: f64,
    /// Output current (A).
    pub amperage: f64,
    /// When the reading was taken.
    pub read_at: DateTime<Utc>,
}

impl TurbineSnapshot {
    /// Build a snapshot for `turbine` stamped with the current time.
    pub fn new(turbine: Turbine, rpm: f64, load_percent: f64, voltage: f64, amperage: f64) -> Self {
        Self {
            name: turbine.display_name().to_string(),
            rpm,
            load_percent,
            voltage,
            amperage,
            read_at: Utc::now(),
        }
    }
}

/// Anemometer reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindSnapshot {
    /// Wind speed in m/s.
    pub speed: f64,
    pub read_at: DateTime<Utc>,
}

impl WindSnapshot {
    pub fn new(speed: f64) -> Self {
        Self {
            speed,
            read_at: Utc::now(),
        }
    }
}

/// Turbine display name → "is currently generating".
///
/// Ordered by name, which matches display order for the named turbines.
pub type OperatingStatusMap = BTreeMap<String, bool>;

/// Build an operating-status map from per-turbine flags.
pub fn status_map<I>(flags: I) -> OperatingStatusMap
where
    I: IntoIterator<Item = (Turbine, bool)>,
{
    flags
        .into_iter()
        .map(|(t, on)| (t.display_name().to_string(), on))
        .collect()
}
