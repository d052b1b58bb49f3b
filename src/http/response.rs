//! Response shaping.
//!
//! # Responsibilities
//! - Map dispensation outcomes to HTTP status codes
//! - Keep the JSON response surface to exactly two shapes:
//!   `{"tx_hash": ...}` on success, `{"error": ...}` on failure
//!
//! # Design Decisions
//! - Three user-visible failures: 400 malformed address, 429 cooldown,
//!   500 underfunded; everything else collapses to a generic 500
//! - Internal error details are logged, never sent to the client

use alloy::primitives::TxHash;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::json;

use crate::faucet::FaucetError;

/// JSON body of a successful dispensation.
#[derive(Debug, Serialize)]
pub struct DispenseResponse {
    pub tx_hash: String,
}

impl DispenseResponse {
    pub fn new(tx_hash: TxHash) -> Self {
        Self {
            tx_hash: tx_hash.to_string(),
        }
    }
}

/// HTTP status for a dispensation error.
pub fn error_status(error: &FaucetError) -> StatusCode {
    match error {
        FaucetError::InvalidAddress => StatusCode::BAD_REQUEST,
        FaucetError::RateLimited(_) => StatusCode::TOO_MANY_REQUESTS,
        FaucetError::InsufficientFunds => StatusCode::INTERNAL_SERVER_ERROR,
        FaucetError::Chain(_) | FaucetError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for FaucetError {
    fn into_response(self) -> Response {
        let status = error_status(&self);
        let message = match &self {
            FaucetError::Chain(e) => {
                tracing::error!(error = %e, "Dispense failed: blockchain fault");
                "Internal server error".to_string()
            }
            FaucetError::Store(e) => {
                tracing::error!(error = %e, "Dispense failed: store fault");
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blockchain::BlockchainError;
    use crate::ratelimit::StoreError;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            error_status(&FaucetError::InvalidAddress),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            error_status(&FaucetError::RateLimited(12)),
            StatusCode::TOO_MANY_REQUESTS
        );
        assert_eq!(
            error_status(&FaucetError::InsufficientFunds),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            error_status(&FaucetError::Chain(BlockchainError::Rpc("x".into()))),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            error_status(&FaucetError::Store(StoreError::Backend("x".into()))),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_success_body_shape() {
        let response = DispenseResponse::new(TxHash::ZERO);
        let body = serde_json::to_value(&response).unwrap();
        assert!(body["tx_hash"].as_str().unwrap().starts_with("0x"));
    }
}
