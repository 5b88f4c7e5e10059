//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router with the search route and fallback
//! - Wire up middleware (request ID, tracing, metrics)
//! - Bind the server to a listener and drive graceful shutdown
//!
//! # Design Decisions
//! - `/search` accepts any method; every other path is a plain-text 404
//! - Request IDs are minted before TraceLayer so spans carry them
//! - The metrics middleware sits innermost so it times handler work only

use std::time::Instant;

use axum::{
    extract::Request,
    http::{HeaderMap, StatusCode, Uri},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::any,
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::config::ProxyConfig;
use crate::http::request::request_id;
use crate::http::search::search_handler;
use crate::observability::metrics;
use crate::upstream::UpstreamClient;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub upstream: UpstreamClient,
}

/// HTTP server for the search proxy.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: &ProxyConfig) -> Self {
        let state = AppState {
            upstream: UpstreamClient::new(config.upstream.clone()),
        };
        let router = Self::build_router(state);
        Self { router }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(state: AppState) -> Router {
        Router::new()
            .route("/search", any(search_handler))
            .fallback(not_found)
            .with_state(state)
            .layer(
                ServiceBuilder::new()
                    .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                    .layer(TraceLayer::new_for_http())
                    .layer(PropagateRequestIdLayer::x_request_id())
                    .layer(middleware::from_fn(track_metrics)),
            )
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Fallback for paths other than `/search`.
async fn not_found(headers: HeaderMap, uri: Uri) -> impl IntoResponse {
    tracing::warn!(
        request_id = %request_id(&headers),
        path = %uri.path(),
        "No route matched"
    );
    (StatusCode::NOT_FOUND, "Not Found")
}

/// Records request count and latency for every response served.
async fn track_metrics(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let response = next.run(request).await;
    metrics::record_request(method.as_str(), response.status().as_u16(), start);
    response
}
