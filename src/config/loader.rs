//! Configuration loading and assembly.
//!
//! The runtime configuration is assembled in one place: the TOML file when
//! a path is given (defaults otherwise), then the `FAUCET_RPC_URL`
//! environment override, then semantic validation. The signing key is not
//! part of this flow at all; it only ever lives in `FAUCET_PRIVATE_KEY`.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::FaucetConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Assemble the runtime configuration.
///
/// Environment overrides are applied before validation, so a bad
/// `FAUCET_RPC_URL` is rejected the same way a bad file value is.
pub fn load_config(path: Option<&Path>) -> Result<FaucetConfig, ConfigError> {
    let mut config = match path {
        Some(path) => {
            let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
                path: path.display().to_string(),
                source,
            })?;
            toml::from_str::<FaucetConfig>(&content)?
        }
        None => FaucetConfig::default(),
    };

    config.blockchain = config.blockchain.with_env_overrides();

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::{DEFAULT_SEPOLIA_RPC, RPC_URL_ENV_VAR};

    #[test]
    fn test_missing_file() {
        let result = load_config(Some(Path::new("/nonexistent/faucet.toml")));
        match result {
            Err(ConfigError::Io { path, .. }) => assert!(path.contains("faucet.toml")),
            other => panic!("expected IO failure, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_load_valid_file() {
        let dir = std::env::temp_dir();
        let path = dir.join("faucet_loader_test.toml");
        fs::write(
            &path,
            r#"
            [listener]
            bind_address = "127.0.0.1:9999"

            [faucet]
            cooldown_hours = 6
            "#,
        )
        .unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.listener.bind_address, "127.0.0.1:9999");
        assert_eq!(config.faucet.cooldown_hours, 6);

        fs::remove_file(&path).unwrap_or_default();
    }

    #[test]
    fn test_invalid_values_rejected() {
        let dir = std::env::temp_dir();
        let path = dir.join("faucet_loader_invalid_test.toml");
        fs::write(
            &path,
            r#"
            [faucet]
            amount_wei = 0
            cooldown_hours = 0
            "#,
        )
        .unwrap();

        let result = load_config(Some(&path));
        match result {
            Err(ConfigError::Validation(errors)) => assert_eq!(errors.len(), 2),
            other => panic!("expected validation failure, got {:?}", other.map(|_| ())),
        }

        fs::remove_file(&path).unwrap_or_default();
    }

    // The no-file and env-override paths share one test body: the override
    // variable is process-global, so asserting both here avoids ordering
    // races with a sibling test.
    #[test]
    fn test_no_file_defaults_and_env_override() {
        std::env::remove_var(RPC_URL_ENV_VAR);
        let config = load_config(None).unwrap();
        assert_eq!(config.blockchain.rpc_url, DEFAULT_SEPOLIA_RPC);
        assert_eq!(config.listener.bind_address, "0.0.0.0:8080");

        std::env::set_var(RPC_URL_ENV_VAR, "http://127.0.0.1:8545");
        let config = load_config(None).unwrap();
        assert_eq!(config.blockchain.rpc_url, "http://127.0.0.1:8545");
        std::env::remove_var(RPC_URL_ENV_VAR);
    }
}
