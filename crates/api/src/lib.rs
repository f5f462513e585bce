//! HTTP API server for per-user country statuses.
//!
//! Serves the `/api/statuses` CRUD endpoints over a [`StatusStore`], with
//! permissive CORS, structured request logging (tracing) and Prometheus
//! metrics.

pub mod config;
pub mod error;
pub mod extract;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, put};
use metrics_exporter_prometheus::PrometheusHandle;
use status_store::{InMemoryStatusStore, StatusStore};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use routes::statuses::AppState;

/// Creates the Axum application router with all routes and shared state.
pub fn create_app<S: StatusStore + 'static>(
    state: Arc<AppState<S>>,
    metrics_handle: PrometheusHandle,
) -> Router {
    let system_router = Router::new()
        .route("/health", get(routes::system::health))
        .route("/metrics", get(routes::system::metrics))
        .with_state(metrics_handle);

    Router::new()
        .route(
            "/api/statuses/{user_id}",
            get(routes::statuses::list::<S>).post(routes::statuses::create::<S>),
        )
        .route(
            "/api/statuses/{user_id}/{iso_code}",
            put(routes::statuses::update::<S>).delete(routes::statuses::remove::<S>),
        )
        .with_state(state)
        .merge(system_router)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

/// Creates application state backed by a fresh in-memory store.
pub fn create_default_state() -> Arc<AppState<InMemoryStatusStore>> {
    Arc::new(AppState {
        store: InMemoryStatusStore::new(),
    })
}
