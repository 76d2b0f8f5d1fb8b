//! GET /health

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;

use crate::mock::state::MockState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub started_at: DateTime<Utc>,
    pub uptime_seconds: u64,
    pub version: String,
}

/// Always healthy; the fault switch does not apply here
pub async fn health(State(state): State<Arc<MockState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        started_at: state.started_at,
        uptime_seconds: state.uptime_seconds(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
