//! API server entry point.

use messaging::BroadcastEventPublisher;
use store::{InMemoryShipmentRepository, PostgresShipmentRepository};
use tokio::signal;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Waits for a shutdown signal (SIGINT or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install SIGINT handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("received SIGINT, starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("received SIGTERM, starting graceful shutdown");
        }
    }
}

async fn serve(app: axum::Router, addr: &str) {
    tracing::info!(%addr, "starting shipment service");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind address");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("server error");

    tracing::info!("server shut down gracefully");
}

#[tokio::main]
async fn main() {
    // 1. Initialize tracing
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // 2. Install Prometheus metrics recorder
    let prometheus_builder = metrics_exporter_prometheus::PrometheusBuilder::new();
    let metrics_handle = prometheus_builder
        .install_recorder()
        .expect("failed to install Prometheus recorder");

    // 3. Load configuration and wire the outbound ports
    let config = api::config::Config::from_env();
    let publisher = BroadcastEventPublisher::default();

    let app = match &config.database_url {
        Some(database_url) => {
            let repository = PostgresShipmentRepository::connect(database_url)
                .await
                .expect("failed to connect to database");
            repository
                .run_migrations()
                .await
                .expect("failed to run migrations");
            tracing::info!("using PostgreSQL shipment repository");

            api::create_app(api::create_state(repository, publisher), metrics_handle)
        }
        None => {
            tracing::warn!("DATABASE_URL not set, using in-memory shipment repository");
            let repository = InMemoryShipmentRepository::new();

            api::create_app(api::create_state(repository, publisher), metrics_handle)
        }
    };

    // 4. Start server
    serve(app, &config.addr()).await;
}
