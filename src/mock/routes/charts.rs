//! Chart Routes
//!
//! - GET /performance-geral - sentiment distribution in percent
//! - GET /evolucao-mensal - monthly negative/positive/neutral counts

use axum::{extract::State, Json};
use std::sync::Arc;

use super::check_fault;
use crate::mock::error::MockResult;
use crate::mock::state::MockState;
use crate::model::{BarSeries, PieSeries};

/// GET /performance-geral
pub async fn performance(State(state): State<Arc<MockState>>) -> MockResult<Json<PieSeries>> {
    check_fault(&state)?;
    Ok(Json(state.fixtures.performance.clone()))
}

/// GET /evolucao-mensal
pub async fn monthly_evolution(
    State(state): State<Arc<MockState>>,
) -> MockResult<Json<BarSeries>> {
    check_fault(&state)?;
    Ok(Json(state.fixtures.evolution.clone()))
}
