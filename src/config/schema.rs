//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the faucet.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Default RPC endpoint for Sepolia.
pub const DEFAULT_SEPOLIA_RPC: &str = "https://ethereum-sepolia-rpc.publicnode.com";

/// Sepolia chain ID.
pub const SEPOLIA_CHAIN_ID: u64 = 11_155_111;

/// Environment variable overriding the configured RPC URL.
pub const RPC_URL_ENV_VAR: &str = "FAUCET_RPC_URL";

/// Root configuration for the faucet service.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct FaucetConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Blockchain node settings.
    pub blockchain: BlockchainConfig,

    /// Dispensation amount and cooldown.
    pub faucet: DispenseConfig,

    /// Cooldown store settings.
    pub store: StoreConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Blockchain node configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct BlockchainConfig {
    /// JSON-RPC endpoint URL.
    pub rpc_url: String,

    /// Failover JSON-RPC endpoint URLs.
    #[serde(default)]
    pub failover_urls: Vec<String>,

    /// Chain ID (11155111 for Sepolia).
    pub chain_id: u64,

    /// RPC request timeout in seconds.
    pub rpc_timeout_secs: u64,
}

impl Default for BlockchainConfig {
    fn default() -> Self {
        Self {
            rpc_url: DEFAULT_SEPOLIA_RPC.to_string(),
            failover_urls: Vec::new(),
            chain_id: SEPOLIA_CHAIN_ID,
            rpc_timeout_secs: 10,
        }
    }
}

impl BlockchainConfig {
    /// Apply the `FAUCET_RPC_URL` environment override, if set.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(url) = std::env::var(RPC_URL_ENV_VAR) {
            if !url.is_empty() {
                self.rpc_url = url;
            }
        }
        self
    }
}

/// Dispensation configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DispenseConfig {
    /// Amount dispensed per request, in wei (default 0.001 ETH).
    pub amount_wei: u64,

    /// Cooldown window applied to both the client IP and the target
    /// address, in hours.
    pub cooldown_hours: u64,
}

impl Default for DispenseConfig {
    fn default() -> Self {
        Self {
            amount_wei: 1_000_000_000_000_000, // 0.001 ETH
            cooldown_hours: 12,
        }
    }
}

impl DispenseConfig {
    /// Cooldown TTL in seconds.
    pub fn cooldown_secs(&self) -> u64 {
        self.cooldown_hours * 3600
    }
}

/// Cooldown store configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct StoreConfig {
    /// Redis connection URL (e.g., "redis://127.0.0.1:6379").
    /// When absent, an in-process store is used; cooldown state is then
    /// lost on restart.
    pub redis_url: Option<String>,
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: true,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FaucetConfig::default();
        assert_eq!(config.listener.bind_address, "0.0.0.0:8080");
        assert_eq!(config.blockchain.chain_id, SEPOLIA_CHAIN_ID);
        assert_eq!(config.faucet.amount_wei, 1_000_000_000_000_000);
        assert_eq!(config.faucet.cooldown_hours, 12);
        assert!(config.store.redis_url.is_none());
    }

    #[test]
    fn test_cooldown_secs() {
        let faucet = DispenseConfig {
            amount_wei: 1,
            cooldown_hours: 12,
        };
        assert_eq!(faucet.cooldown_secs(), 43_200);
    }

    #[test]
    fn test_minimal_toml() {
        let config: FaucetConfig = toml::from_str("").unwrap();
        assert_eq!(config.blockchain.rpc_url, DEFAULT_SEPOLIA_RPC);
    }

    #[test]
    fn test_partial_toml() {
        let config: FaucetConfig = toml::from_str(
            r#"
            [faucet]
            amount_wei = 5000000000000000
            cooldown_hours = 24

            [store]
            redis_url = "redis://127.0.0.1:6379"
            "#,
        )
        .unwrap();
        assert_eq!(config.faucet.amount_wei, 5_000_000_000_000_000);
        assert_eq!(config.faucet.cooldown_hours, 24);
        assert_eq!(
            config.store.redis_url.as_deref(),
            Some("redis://127.0.0.1:6379")
        );
        // Untouched sections keep their defaults
        assert_eq!(config.timeouts.request_secs, 30);
    }
}
