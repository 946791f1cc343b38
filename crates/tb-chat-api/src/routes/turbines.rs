//! Turbine status endpoint.

use axum::Json;
use axum::extract::State;
use serde::Serialize;

use tb_dialogue::status;
use tb_protocol::OperatingStatusMap;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub all_operating: bool,
    pub turbines: OperatingStatusMap,
}

/// GET /api/v1/turbines/status: operating flag per turbine.
pub async fn get_status(State(state): State<AppState>) -> ApiResult<Json<StatusResponse>> {
    let turbines = state
        .dialogue
        .telemetry()
        .all_operating_status()
        .await
        .map_err(|e| ApiError::Internal(format!("telemetry unavailable: {e}")))?;

    Ok(Json(StatusResponse {
        all_operating: status::all_operating(&turbines),
        turbines,
    }))
}
