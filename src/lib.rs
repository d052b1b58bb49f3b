//! Sepolia Testnet Faucet
//!
//! A single-endpoint web service that dispenses a fixed amount of Sepolia
//! ETH per request, rate-limited per client IP and per target address.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌───────────────────────────────────────────────┐
//!                    │                   FAUCET                      │
//!                    │                                               │
//!   POST /faucet     │  ┌────────┐    ┌────────┐    ┌────────────┐   │
//!   ─────────────────┼─▶│  http  │───▶│ faucet │───▶│ ratelimit  │───┼──▶ Redis
//!                    │  │ server │    │  core  │    │   store    │   │    (TTL keys)
//!                    │  └────────┘    └───┬────┘    └────────────┘   │
//!                    │                    │                          │
//!                    │                    ▼                          │
//!   {"tx_hash": ..}  │             ┌────────────┐                    │
//!   ◀────────────────┼─────────────│ blockchain │────────────────────┼──▶ Sepolia
//!                    │             │client+tx   │                    │    node (RPC)
//!                    │             └────────────┘                    │
//!                    │                                               │
//!                    │  ┌─────────────────────────────────────────┐  │
//!                    │  │          Cross-Cutting Concerns          │  │
//!                    │  │  ┌────────┐ ┌─────────────┐ ┌─────────┐  │  │
//!                    │  │  │ config │ │observability│ │lifecycle│  │  │
//!                    │  │  └────────┘ └─────────────┘ └─────────┘  │  │
//!                    │  └─────────────────────────────────────────┘  │
//!                    └───────────────────────────────────────────────┘
//! ```

// Core subsystems
pub mod blockchain;
pub mod config;
pub mod faucet;
pub mod http;
pub mod ratelimit;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;

pub use config::FaucetConfig;
pub use faucet::{Faucet, FaucetError};
pub use http::HttpServer;
pub use lifecycle::Shutdown;
