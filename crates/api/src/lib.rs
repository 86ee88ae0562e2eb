//! HTTP API server for the shipment service.
//!
//! Provides REST endpoints for creating, querying, and re-routing shipments,
//! with structured logging (tracing) and Prometheus metrics. The handlers
//! are generic over the persistence and publication ports, so the same
//! router serves the PostgreSQL/broker wiring in production and the
//! in-memory implementations in tests.

pub mod address;
pub mod config;
pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use messaging::EventPublisher;
use metrics_exporter_prometheus::PrometheusHandle;
use store::ShipmentRepository;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use routes::shipments::AppState;

/// Creates the application state from the two outbound ports.
pub fn create_state<R, P>(repository: R, publisher: P) -> Arc<AppState<R, P>>
where
    R: ShipmentRepository,
    P: EventPublisher,
{
    Arc::new(AppState {
        shipments: application::ShipmentService::new(repository, publisher),
    })
}

/// Creates the Axum application router with all routes and shared state.
pub fn create_app<R, P>(state: Arc<AppState<R, P>>, metrics_handle: PrometheusHandle) -> Router
where
    R: ShipmentRepository + 'static,
    P: EventPublisher + 'static,
{
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::get))
        .with_state(metrics_handle);

    Router::new()
        .route("/health", get(routes::health::check))
        .route(
            "/shipments",
            axum::routing::post(routes::shipments::create::<R, P>)
                .patch(routes::shipments::update::<R, P>),
        )
        .route("/shipments/{id}", get(routes::shipments::get::<R, P>))
        .with_state(state)
        .merge(metrics_router)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}
