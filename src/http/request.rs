//! Request handling.
//!
//! # Responsibilities
//! - Resolve the client IP used as a rate-limit key
//! - Define the dispense request body
//!
//! # Design Decisions
//! - `X-Forwarded-For` is trusted when present (the service is expected to
//!   sit behind a reverse proxy); the first hop in the list is the client
//! - Without the header, the socket peer address is used

use std::net::SocketAddr;

use axum::http::HeaderMap;
use serde::Deserialize;

/// JSON body of `POST /faucet`.
#[derive(Debug, Clone, Deserialize)]
pub struct DispenseRequest {
    /// Requested recipient address.
    pub addr: String,
}

/// Resolve the client IP string used as the per-IP cooldown key.
pub fn client_ip(headers: &HeaderMap, peer: SocketAddr) -> String {
    headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| peer.ip().to_string())
}
