use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::Result;
use crate::health::{check_liveness, check_readiness};
use crate::run::AppState;

pub async fn health_live_handler() -> Result<Response> {
    let health = check_liveness().await?;
    Ok(Json(health).into_response())
}

pub async fn health_ready_handler(State(state): State<AppState>) -> Result<Response> {
    let health = check_readiness(&state.db).await?;
    let status = if health.is_healthy() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    Ok((status, Json(health)).into_response())
}
