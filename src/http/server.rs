//! HTTP server setup.
//!
//! # Responsibilities
//! - Create the Axum router with all handlers
//! - Wire up middleware (access log tracing, request metrics)
//! - Serve until ctrl-c, then shut down gracefully

use std::time::Instant;

use axum::extract::Request;
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::get;
use axum::Router;
use metrics_exporter_prometheus::PrometheusHandle;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::config::schema::Settings;
use crate::http::handlers;
use crate::observability::metrics;
use crate::store::mysql::UserStore;
use crate::store::redis::GroupStore;

/// Application state injected into handlers.
///
/// Both store handles are shared read-only across all concurrent requests
/// and never reassigned after startup.
#[derive(Clone)]
pub struct AppState {
    pub users: UserStore,
    pub groups: GroupStore,
    /// Non-loopback IPv4 of this host, resolved once at startup. Empty
    /// when the host has no routable address.
    pub local_ip: String,
    pub metrics: PrometheusHandle,
}

/// HTTP server for the IAM service.
pub struct HttpServer {
    router: Router,
    bind_address: String,
}

impl HttpServer {
    /// Create a new server from settings and the shared state.
    pub fn new(settings: &Settings, state: AppState) -> Self {
        Self {
            router: Self::build_router(state),
            bind_address: settings.server.bind_address.clone(),
        }
    }

    fn build_router(state: AppState) -> Router {
        Router::new()
            .route("/hello", get(handlers::hello))
            .route("/users", get(handlers::list_users))
            .route("/groups", get(handlers::list_groups))
            .route("/auth", get(handlers::auth))
            .route("/metrics", get(handlers::metrics))
            .with_state(state)
            .layer(middleware::from_fn(track_requests))
            .layer(TraceLayer::new_for_http())
    }

    /// Address the server will bind to.
    pub fn bind_address(&self) -> &str {
        &self.bind_address
    }

    /// Run the server, accepting connections on the given listener until
    /// a shutdown signal arrives.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Record counter and latency for every completed request.
async fn track_requests(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().to_string();
    let path = request.uri().path().to_string();

    let response = next.run(request).await;

    metrics::record_request(&method, &path, response.status().as_u16(), start);
    response
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received");
}
