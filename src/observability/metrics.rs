//! Metrics collection and exposition.
//!
//! # Metrics
//! - `faucet_dispense_total` (counter): dispensation attempts by outcome
//! - `faucet_dispensed_wei_total` (counter): total wei paid out
//! - `faucet_balance_wei` (gauge): faucet account balance at last check
//! - `faucet_rpc_healthy` (gauge): 1=reachable, 0=unreachable
//! - `faucet_request_duration_seconds` (histogram): HTTP latency by path
//!
//! # Design Decisions
//! - Low-overhead metric updates (atomic operations)
//! - Outcome labels are a small fixed set, never user input

use std::net::SocketAddr;
use std::time::Instant;

use alloy::primitives::U256;
use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus exporter on its own listener.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics endpoint started"),
        Err(e) => tracing::error!(error = %e, "Failed to start metrics endpoint"),
    }
}

/// Count a dispensation attempt by outcome
/// (success, invalid_address, rate_limited, underfunded, fault).
pub fn record_dispense(outcome: &'static str) {
    metrics::counter!("faucet_dispense_total", "outcome" => outcome).increment(1);
}

/// Accumulate wei paid out by successful dispensations.
pub fn record_dispensed_wei(amount_wei: u64) {
    metrics::counter!("faucet_dispensed_wei_total").increment(amount_wei);
}

/// Record the faucet account balance observed during a sufficiency check.
pub fn record_faucet_balance(balance: U256) {
    let wei = u128::try_from(balance).unwrap_or(u128::MAX);
    metrics::gauge!("faucet_balance_wei").set(wei as f64);
}

/// Record RPC reachability.
pub fn record_rpc_health(healthy: bool) {
    metrics::gauge!("faucet_rpc_healthy").set(if healthy { 1.0 } else { 0.0 });
}

/// Record an HTTP request's status and latency.
pub fn record_request(path: &str, status: u16, start: Instant) {
    metrics::counter!(
        "faucet_requests_total",
        "path" => path.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
    metrics::histogram!(
        "faucet_request_duration_seconds",
        "path" => path.to_string(),
        "status" => status.to_string()
    )
    .record(start.elapsed().as_secs_f64());
}
