//! Shared application state for the Axum server.
//!
//! Supports two modes:
//! - **Database mode**: conversations persisted in PostgreSQL (production).
//! - **In-memory mode**: conversations in an `InMemoryStore` (tests and development).

use std::sync::Arc;

use sqlx::PgPool;

use tb_dialogue::{ConversationStore, Dialogue, InMemoryStore};
use tb_telemetry::{NoWindSensor, SimulatedTelemetry, TelemetryProvider, WindSensor};

use crate::db::conversations::PgConversationStore;

/// Shared application state, cheap to clone into every handler.
#[derive(Clone)]
pub struct AppState {
    pub dialogue: Arc<Dialogue>,
    /// Member id the bot joins conversations as.
    pub bot_id: String,
}

impl AppState {
    /// Create state backed by a PostgreSQL pool.
    pub fn with_pool(
        pool: PgPool,
        telemetry: Arc<dyn TelemetryProvider>,
        wind: Arc<dyn WindSensor>,
        bot_id: impl Into<String>,
    ) -> Self {
        Self::with_parts(
            Arc::new(PgConversationStore::new(pool)),
            telemetry,
            wind,
            bot_id,
        )
    }

    /// In-memory state with simulated telemetry and no anemometer.
    pub fn new() -> Self {
        Self::with_parts(
            Arc::new(InMemoryStore::new()),
            Arc::new(SimulatedTelemetry::new()),
            Arc::new(NoWindSensor),
            "turbina-alpha",
        )
    }

    /// Assemble state from explicit parts (tests swap in mocks here).
    pub fn with_parts(
        store: Arc<dyn ConversationStore>,
        telemetry: Arc<dyn TelemetryProvider>,
        wind: Arc<dyn WindSensor>,
        bot_id: impl Into<String>,
    ) -> Self {
        Self {
            dialogue: Arc::new(Dialogue::new(store, telemetry, wind)),
            bot_id: bot_id.into(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
