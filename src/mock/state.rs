//! Mock Server State
//!
//! Shared by all handlers behind an `Arc`.

use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::time::Instant;

use super::fixtures::Fixtures;

/// Shared state for the mock backend
#[derive(Debug, Clone)]
pub struct MockState {
    /// Data served by the ranking and chart endpoints
    pub fixtures: Arc<Fixtures>,
    /// When set, every data endpoint answers with this status instead
    pub fail_with: Option<u16>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
    pub started_at: DateTime<Utc>,
}

impl MockState {
    pub fn new(fixtures: Fixtures) -> Self {
        Self {
            fixtures: Arc::new(fixtures),
            fail_with: None,
            start_time: Instant::now(),
            started_at: Utc::now(),
        }
    }

    /// Make every data endpoint fail with `status`
    pub fn fail_with(mut self, status: u16) -> Self {
        self.fail_with = Some(status);
        self
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}

impl Default for MockState {
    fn default() -> Self {
        Self::new(Fixtures::sample())
    }
}
