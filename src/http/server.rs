//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (tracing, timeout)
//! - Bind server to listener
//! - Dispatch `POST /faucet` into the faucet core
//! - Graceful shutdown on signal

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::extract::rejection::JsonRejection;
use axum::extract::{ConnectInfo, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::config::FaucetConfig;
use crate::faucet::Faucet;
use crate::http::request::{client_ip, DispenseRequest};
use crate::http::response::DispenseResponse;
use crate::observability::metrics;

/// The faucet page, embedded at compile time.
const INDEX_HTML: &str = include_str!("../../static/index.html");

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub faucet: Arc<Faucet>,
}

/// HTTP server for the faucet.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: &FaucetConfig, faucet: Arc<Faucet>) -> Self {
        let state = AppState { faucet };
        let router = Self::build_router(config, state);
        Self { router }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &FaucetConfig, state: AppState) -> Router {
        Router::new()
            .route("/", get(index_handler))
            .route("/faucet", post(faucet_handler))
            .route("/healthz", get(health_handler))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections on the given listener.
    ///
    /// Stops on ctrl-c or when the shutdown channel fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        let app = self
            .router
            .into_make_service_with_connect_info::<SocketAddr>();

        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                tokio::select! {
                    _ = tokio::signal::ctrl_c() => {
                        tracing::info!("Shutdown signal received");
                    }
                    _ = shutdown.recv() => {
                        tracing::info!("Shutdown triggered");
                    }
                }
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// `GET /` → the static faucet page.
async fn index_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// `GET /healthz` → liveness plus RPC reachability.
///
/// Always 200: an unreachable node degrades service but the process
/// itself is alive. The probe also refreshes the RPC health gauge.
async fn health_handler(State(state): State<AppState>) -> Json<serde_json::Value> {
    let rpc_healthy = state.faucet.rpc_healthy().await;
    Json(json!({ "status": "ok", "rpc_healthy": rpc_healthy }))
}

/// `POST /faucet` → one dispensation attempt.
async fn faucet_handler(
    State(state): State<AppState>,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
    body: Result<Json<DispenseRequest>, JsonRejection>,
) -> Response {
    let start = Instant::now();
    let request_id = Uuid::new_v4();

    let Json(request) = match body {
        Ok(body) => body,
        Err(rejection) => {
            tracing::debug!(request_id = %request_id, error = %rejection, "Rejected request body");
            metrics::record_request("/faucet", 400, start);
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "Invalid request body" })),
            )
                .into_response();
        }
    };

    let ip = client_ip(&headers, peer);

    tracing::debug!(
        request_id = %request_id,
        ip = %ip,
        addr = %request.addr,
        "Dispense requested"
    );

    match state.faucet.dispense(&ip, &request.addr).await {
        Ok(tx_hash) => {
            tracing::info!(
                request_id = %request_id,
                tx_hash = %tx_hash,
                "Dispense succeeded"
            );
            metrics::record_request("/faucet", 200, start);
            (StatusCode::OK, Json(DispenseResponse::new(tx_hash))).into_response()
        }
        Err(error) => {
            let status = crate::http::response::error_status(&error);
            tracing::debug!(
                request_id = %request_id,
                status = status.as_u16(),
                error = %error,
                "Dispense refused"
            );
            metrics::record_request("/faucet", status.as_u16(), start);
            error.into_response()
        }
    }
}
