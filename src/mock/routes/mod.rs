//! Mock API Routes

pub mod charts;
pub mod health;
pub mod rankings;

use super::error::{MockApiError, MockResult};
use super::state::MockState;

/// Fail with the configured status when the fault switch is on
pub(crate) fn check_fault(state: &MockState) -> MockResult<()> {
    match state.fail_with {
        Some(status) => Err(MockApiError::Injected(status)),
        None => Ok(()),
    }
}
