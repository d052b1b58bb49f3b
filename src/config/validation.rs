//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (amount > 0, cooldown > 0, timeouts > 0)
//! - Check addresses and URLs are parseable
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is a pure function: FaucetConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use crate::config::schema::FaucetConfig;

/// A single semantic validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dotted path of the offending field.
    pub field: String,
    /// Human-readable description.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validate a configuration, reporting every failure found.
pub fn validate_config(config: &FaucetConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError {
            field: "listener.bind_address".to_string(),
            message: format!("'{}' is not a valid socket address", config.listener.bind_address),
        });
    }

    if config.blockchain.rpc_url.parse::<url::Url>().is_err() {
        errors.push(ValidationError {
            field: "blockchain.rpc_url".to_string(),
            message: format!("'{}' is not a valid URL", config.blockchain.rpc_url),
        });
    }

    for (i, url) in config.blockchain.failover_urls.iter().enumerate() {
        if url.parse::<url::Url>().is_err() {
            errors.push(ValidationError {
                field: format!("blockchain.failover_urls[{}]", i),
                message: format!("'{}' is not a valid URL", url),
            });
        }
    }

    if config.blockchain.chain_id == 0 {
        errors.push(ValidationError {
            field: "blockchain.chain_id".to_string(),
            message: "chain id must be non-zero".to_string(),
        });
    }

    if config.blockchain.rpc_timeout_secs == 0 {
        errors.push(ValidationError {
            field: "blockchain.rpc_timeout_secs".to_string(),
            message: "timeout must be non-zero".to_string(),
        });
    }

    if config.faucet.amount_wei == 0 {
        errors.push(ValidationError {
            field: "faucet.amount_wei".to_string(),
            message: "dispensation amount must be non-zero".to_string(),
        });
    }

    if config.faucet.cooldown_hours == 0 {
        errors.push(ValidationError {
            field: "faucet.cooldown_hours".to_string(),
            message: "cooldown must be non-zero".to_string(),
        });
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError {
            field: "timeouts.request_secs".to_string(),
            message: "request timeout must be non-zero".to_string(),
        });
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError {
            field: "observability.metrics_address".to_string(),
            message: format!(
                "'{}' is not a valid socket address",
                config.observability.metrics_address
            ),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&FaucetConfig::default()).is_ok());
    }

    #[test]
    fn test_all_errors_reported() {
        let mut config = FaucetConfig::default();
        config.listener.bind_address = "not-an-addr".to_string();
        config.faucet.amount_wei = 0;
        config.faucet.cooldown_hours = 0;

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors.iter().any(|e| e.field == "listener.bind_address"));
        assert!(errors.iter().any(|e| e.field == "faucet.amount_wei"));
        assert!(errors.iter().any(|e| e.field == "faucet.cooldown_hours"));
    }

    #[test]
    fn test_bad_failover_url() {
        let mut config = FaucetConfig::default();
        config.blockchain.failover_urls.push("nope".to_string());

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "blockchain.failover_urls[0]");
    }

    #[test]
    fn test_metrics_address_ignored_when_disabled() {
        let mut config = FaucetConfig::default();
        config.observability.metrics_enabled = false;
        config.observability.metrics_address = "garbage".to_string();

        assert!(validate_config(&config).is_ok());
    }
}
