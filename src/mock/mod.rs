//! Mock Sentiment Backend
//!
//! A stand-in for the sentiment REST backend, serving fixture data so the
//! dashboard can run without the real service.
//!
//! # Endpoints
//!
//! - `GET /atendentes?page=&limit=` - ranked attendants
//! - `GET /clientes?page=&limit=` - ranked clients
//! - `GET /performance-geral` - pie chart series
//! - `GET /evolucao-mensal` - bar chart series
//! - `GET /health` - liveness
//!
//! Setting [`MockState::fail_with`] makes the four data endpoints answer
//! with a fixed status.

pub mod error;
pub mod fixtures;
pub mod routes;
pub mod state;

pub use error::{MockApiError, MockResult};
pub use fixtures::Fixtures;
pub use state::MockState;

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::MockConfig;

/// Build the mock router with all routes and middleware
pub fn build_router(state: MockState) -> Router {
    Router::new()
        .route("/atendentes", get(routes::rankings::list_attendants))
        .route("/clientes", get(routes::rankings::list_clients))
        .route("/performance-geral", get(routes::charts::performance))
        .route("/evolucao-mensal", get(routes::charts::monthly_evolution))
        .route("/health", get(routes::health::health))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(Arc::new(state))
}

/// Bind and serve until Ctrl-C or SIGTERM
pub async fn serve(state: MockState, config: &MockConfig) -> Result<(), MockApiError> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Mock sentiment API listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| MockApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Mock sentiment API shut down gracefully");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::util::ServiceExt;

    async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_attendants_first_page() {
        let app = build_router(MockState::default());
        let (status, body) = get_json(app, "/atendentes?page=1&limit=8").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], 12);
        assert_eq!(body["page"], 1);
        assert_eq!(body["limit"], 8);
        assert_eq!(body["items"].as_array().unwrap().len(), 8);
        assert_eq!(body["items"][0]["nome"], "Henrique");
        assert_eq!(body["items"][0]["score"], 32);
    }

    #[tokio::test]
    async fn test_clients_default_limit() {
        let app = build_router(MockState::default());
        let (status, body) = get_json(app, "/clientes").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], 96);
        assert_eq!(body["limit"], 10);
        assert_eq!(body["items"].as_array().unwrap().len(), 10);
        assert_eq!(body["items"][0]["score"], 25);
    }

    #[tokio::test]
    async fn test_invalid_page_is_unprocessable() {
        let app = build_router(MockState::default());
        let (status, body) = get_json(app.clone(), "/atendentes?page=0").await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert!(body["request_id"].is_string());

        let (status, _) = get_json(app, "/clientes?page=abc").await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_chart_endpoints() {
        let app = build_router(MockState::default());

        let (status, pie) = get_json(app.clone(), "/performance-geral").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(pie["labels"][0], "Satisfação");
        assert_eq!(pie["valores"].as_array().unwrap().len(), 6);

        let (status, bar) = get_json(app, "/evolucao-mensal").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(bar["meses"][11], "Dezembro");
        assert_eq!(bar["positivo"].as_array().unwrap().len(), 12);
    }

    #[tokio::test]
    async fn test_fault_switch() {
        let app = build_router(MockState::default().fail_with(503));

        let (status, body) = get_json(app.clone(), "/performance-geral").await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["error"]["code"], "INJECTED_FAILURE");

        let (status, _) = get_json(app.clone(), "/atendentes").await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);

        let (status, health) = get_json(app, "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(health["status"], "healthy");
    }

    #[tokio::test]
    async fn test_empty_fixtures() {
        let app = build_router(MockState::new(Fixtures::empty()));
        let (status, body) = get_json(app, "/clientes?page=1&limit=10").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], 0);
        assert!(body["items"].as_array().unwrap().is_empty());
    }
}
