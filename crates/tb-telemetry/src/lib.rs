//! Telemetry sources for the turbine chat bot.
//!
//! `TelemetryProvider` reads per-turbine snapshots and operating flags,
//! `WindSensor` reads the anemometer. Production uses `SimulatedTelemetry`
//! and `HttpWindSensor`; tests use the scripted mocks.

pub mod error;
pub mod mock;
pub mod provider;
pub mod simulated;
pub mod wind;

pub use error::{TelemetryError, TelemetryResult};
pub use mock::{MockTelemetry, MockWindSensor};
pub use provider::{TelemetryProvider, WindSensor};
pub use simulated::SimulatedTelemetry;
pub use wind::{HttpWindSensor, NoWindSensor, WindSensorConfig};
