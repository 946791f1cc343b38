//! Turbina chat API: HTTP front for the turbine chat bot.
//!
//! Receives channel messages and member-join events per conversation and
//! returns the bot's replies.

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use tb_chat_api::config::ApiConfig;
use tb_chat_api::db;
use tb_chat_api::routes;
use tb_chat_api::state::AppState;
use tb_dialogue::InMemoryStore;
use tb_telemetry::{HttpWindSensor, NoWindSensor, SimulatedTelemetry, TelemetryProvider, WindSensor};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "tb-chat-api starting");

    // ── Load config ─────────────────────────────────────────────
    let config_path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("TURBINA_CONFIG").ok());
    let config = ApiConfig::load(config_path.as_deref())?;
    tracing::info!(
        host = %config.host,
        port = config.port,
        bot_id = %config.bot_id,
        "config loaded"
    );

    // ── Telemetry sources ───────────────────────────────────────
    let telemetry: Arc<dyn TelemetryProvider> = Arc::new(SimulatedTelemetry::new());
    let wind: Arc<dyn WindSensor> = match HttpWindSensor::from_config(&config.wind)? {
        Some(sensor) => {
            tracing::info!(url = ?config.wind.url, "anemometer enabled");
            Arc::new(sensor)
        }
        None => {
            tracing::warn!("WIND_SENSOR_URL not set, wind questions report no anemometer");
            Arc::new(NoWindSensor)
        }
    };

    // ── Conversation store ──────────────────────────────────────
    let state = if let Some(database_url) = &config.database_url {
        tracing::info!("connecting to PostgreSQL");
        let pool = db::connect(database_url).await?;
        AppState::with_pool(pool, telemetry, wind, config.bot_id.clone())
    } else {
        tracing::warn!("DATABASE_URL not set, conversations are kept in memory");
        AppState::with_parts(
            Arc::new(InMemoryStore::new()),
            telemetry,
            wind,
            config.bot_id.clone(),
        )
    };

    let app = routes::build_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, "listening");

    axum::serve(listener, app).await?;

    Ok(())
}
