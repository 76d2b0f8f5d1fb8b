//! Mock Sentiment API Server
//!
//! Run with: cargo run --bin sentiment-mock-api
//!
//! Serves fixture data on the same endpoints as the sentiment backend.
//!
//! # Configuration
//!
//! Read from the dashboard config file (`[mock]` section) with environment
//! overrides:
//! - `SENTIMENT_MOCK_HOST`: Host to bind to (default: 127.0.0.1)
//! - `SENTIMENT_MOCK_PORT`: Port to listen on (default: 8000)
//! - `SENTIMENT_MOCK_FAIL_WITH`: Answer every data endpoint with this status
//! - `RUST_LOG`: Log filter (overrides `[logging] level`)

use sentiment_dashboard::config::Config;
use sentiment_dashboard::logging;
use sentiment_dashboard::mock::{serve, Fixtures, MockState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (config, skipped) = Config::discover();
    logging::init(&config.logging);
    for error in &skipped {
        tracing::warn!("Skipping config file: {}", error);
    }

    tracing::info!(
        "Starting mock sentiment API v{}",
        env!("CARGO_PKG_VERSION")
    );

    let fixtures = Fixtures::sample();
    tracing::info!(
        attendants = fixtures.attendants.len(),
        clients = fixtures.clients.len(),
        "Loaded fixtures"
    );

    let mut state = MockState::new(fixtures);
    if let Some(status) = fail_with_from_env() {
        tracing::warn!("Fault switch on: data endpoints answer {}", status);
        state = state.fail_with(status);
    }

    serve(state, &config.mock).await?;

    tracing::info!("Mock sentiment API stopped");
    Ok(())
}

fn fail_with_from_env() -> Option<u16> {
    std::env::var("SENTIMENT_MOCK_FAIL_WITH")
        .ok()
        .and_then(|s| s.parse().ok())
}
