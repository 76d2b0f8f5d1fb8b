//! Ranking Routes
//!
//! - GET /atendentes?page=&limit= - attendants by score, 8 per page by default
//! - GET /clientes?page=&limit= - clients by score, 10 per page by default
//!
//! `page` must be at least 1 and `limit` between 1 and 100.

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::check_fault;
use crate::mock::error::{MockApiError, MockResult};
use crate::mock::state::MockState;
use crate::model::RankedEntry;

pub const ATTENDANTS_DEFAULT_LIMIT: i64 = 8;
pub const CLIENTS_DEFAULT_LIMIT: i64 = 10;
pub const MAX_LIMIT: i64 = 100;

#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

/// One page of a ranking, as the backend returns it
#[derive(Debug, Serialize)]
pub struct PageResponse {
    pub items: Vec<RankedEntry>,
    pub total: u64,
    pub page: u64,
    pub limit: u64,
}

/// GET /atendentes
pub async fn list_attendants(
    State(state): State<Arc<MockState>>,
    params: Result<Query<PageParams>, QueryRejection>,
) -> MockResult<Json<PageResponse>> {
    check_fault(&state)?;
    let Query(params) = params.map_err(|e| MockApiError::Validation(e.body_text()))?;
    paginate(&state.fixtures.attendants, &params, ATTENDANTS_DEFAULT_LIMIT).map(Json)
}

/// GET /clientes
pub async fn list_clients(
    State(state): State<Arc<MockState>>,
    params: Result<Query<PageParams>, QueryRejection>,
) -> MockResult<Json<PageResponse>> {
    check_fault(&state)?;
    let Query(params) = params.map_err(|e| MockApiError::Validation(e.body_text()))?;
    paginate(&state.fixtures.clients, &params, CLIENTS_DEFAULT_LIMIT).map(Json)
}

/// Slice one page out of an already ranked list
pub fn paginate(
    entries: &[RankedEntry],
    params: &PageParams,
    default_limit: i64,
) -> MockResult<PageResponse> {
    let page = params.page.unwrap_or(1);
    let limit = params.limit.unwrap_or(default_limit);

    if page < 1 {
        return Err(MockApiError::Validation(format!(
            "page must be greater than or equal to 1, got {}",
            page
        )));
    }
    if !(1..=MAX_LIMIT).contains(&limit) {
        return Err(MockApiError::Validation(format!(
            "limit must be between 1 and {}, got {}",
            MAX_LIMIT, limit
        )));
    }

    let page = page as u64;
    let limit = limit as u64;
    let offset = usize::try_from((page - 1).saturating_mul(limit)).unwrap_or(usize::MAX);

    let items = entries
        .iter()
        .skip(offset)
        .take(limit as usize)
        .cloned()
        .collect();

    Ok(PageResponse {
        items,
        total: entries.len() as u64,
        page,
        limit,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(n: i64) -> Vec<RankedEntry> {
        (0..n).map(|i| RankedEntry::new(format!("n{}", i), n - i)).collect()
    }

    fn params(page: Option<i64>, limit: Option<i64>) -> PageParams {
        PageParams { page, limit }
    }

    #[test]
    fn test_defaults() {
        let page = paginate(&entries(12), &PageParams::default(), 8).unwrap();
        assert_eq!(page.items.len(), 8);
        assert_eq!(page.total, 12);
        assert_eq!(page.page, 1);
        assert_eq!(page.limit, 8);
    }

    #[test]
    fn test_offset_and_last_page() {
        let page = paginate(&entries(12), &params(Some(2), Some(8)), 8).unwrap();
        assert_eq!(page.items.len(), 4);
        assert_eq!(page.items[0].name, "n8");
    }

    #[test]
    fn test_page_past_end_is_empty() {
        let page = paginate(&entries(12), &params(Some(5), Some(8)), 8).unwrap();
        assert!(page.items.is_empty());
        assert_eq!(page.total, 12);
    }

    #[test]
    fn test_huge_page_does_not_overflow() {
        let page = paginate(&entries(3), &params(Some(i64::MAX), Some(100)), 8).unwrap();
        assert!(page.items.is_empty());
    }

    #[test]
    fn test_invalid_params() {
        assert!(matches!(
            paginate(&entries(3), &params(Some(0), None), 8),
            Err(MockApiError::Validation(_))
        ));
        assert!(paginate(&entries(3), &params(None, Some(0)), 8).is_err());
        assert!(paginate(&entries(3), &params(None, Some(101)), 8).is_err());
        assert!(paginate(&entries(3), &params(None, Some(100)), 8).is_ok());
    }
}
