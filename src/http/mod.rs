//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, routes, middleware)
//!     → request.rs (client IP resolution, request body)
//!     → faucet core (validate, rate-limit, dispense)
//!     → response.rs (outcome → status code + JSON body)
//!     → Send to client
//! ```

pub mod request;
pub mod response;
pub mod server;

pub use request::client_ip;
pub use server::HttpServer;
