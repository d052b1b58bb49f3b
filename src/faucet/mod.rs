//! Dispensation core.
//!
//! # Data Flow
//! ```text
//! (client ip, requested address)
//!     → cooldown lookup (ip key + lowercased address key)
//!     → address format check
//!     → gas price + balance sufficiency check
//!     → sign and broadcast transfer
//!     → cooldown keys written
//!     → transaction hash
//! ```
//!
//! Failed and underfunded requests write no cooldown keys. Two concurrent
//! requests can both pass the checks before either writes; that race is
//! accepted and left to the node's nonce handling.

use std::sync::Arc;
use std::time::Duration;

use alloy::primitives::{Address, TxHash, U256};
use thiserror::Error;

use crate::blockchain::transaction::{TxSender, TRANSFER_GAS};
use crate::blockchain::{BlockchainClient, BlockchainError};
use crate::config::DispenseConfig;
use crate::observability::metrics;
use crate::ratelimit::{CooldownStore, StoreError};

/// Errors surfaced by a dispensation attempt.
///
/// The display strings are the user-visible error messages.
#[derive(Debug, Error)]
pub enum FaucetError {
    /// The requested address is not `0x` + 40 hex characters.
    #[error("Invalid Ethereum address")]
    InvalidAddress,

    /// The IP or the address is still in its cooldown window.
    #[error("IPs and addresses can request only once per {0} hours")]
    RateLimited(u64),

    /// The faucet account cannot cover amount + fee.
    #[error("Faucet balance is too low")]
    InsufficientFunds,

    /// Any blockchain-side failure.
    #[error(transparent)]
    Chain(#[from] BlockchainError),

    /// Any cooldown-store failure.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Check the fixed address pattern: `0x` followed by 40 hex characters.
pub fn valid_address(addr: &str) -> bool {
    addr.len() == 42
        && addr.starts_with("0x")
        && addr[2..].bytes().all(|b| b.is_ascii_hexdigit())
}

/// The faucet service: one custodial account, one transfer shape.
pub struct Faucet {
    client: BlockchainClient,
    sender: TxSender,
    store: Arc<dyn CooldownStore>,
    config: DispenseConfig,
}

impl Faucet {
    /// Wire up the faucet from its collaborators.
    pub fn new(
        client: BlockchainClient,
        sender: TxSender,
        store: Arc<dyn CooldownStore>,
        config: DispenseConfig,
    ) -> Self {
        Self {
            client,
            sender,
            store,
            config,
        }
    }

    /// The faucet account address.
    pub fn address(&self) -> Address {
        self.sender.address()
    }

    /// Probe RPC reachability, updating the health gauge.
    pub async fn rpc_healthy(&self) -> bool {
        self.client.is_healthy().await
    }

    /// Attempt one dispensation for the given client IP and address.
    ///
    /// The cooldown check runs before address validation: a caller inside
    /// the window gets the rate-limited outcome even when the second
    /// request's address is malformed.
    pub async fn dispense(&self, ip: &str, addr: &str) -> Result<TxHash, FaucetError> {
        let result = self.dispense_inner(ip, addr).await;
        if let Err(FaucetError::Chain(_) | FaucetError::Store(_)) = &result {
            metrics::record_dispense("fault");
        }
        result
    }

    async fn dispense_inner(&self, ip: &str, addr: &str) -> Result<TxHash, FaucetError> {
        let addr_key = addr.to_lowercase();

        if self.store.is_limited(ip, &addr_key).await? {
            tracing::info!(ip = %ip, addr = %addr_key, "Dispense refused: cooldown active");
            metrics::record_dispense("rate_limited");
            return Err(FaucetError::RateLimited(self.config.cooldown_hours));
        }

        if !valid_address(addr) {
            metrics::record_dispense("invalid_address");
            return Err(FaucetError::InvalidAddress);
        }

        let gas_price = self.client.get_gas_price().await?;
        let fee = U256::from(gas_price) * U256::from(TRANSFER_GAS);
        let amount = U256::from(self.config.amount_wei);

        let balance = self.client.get_balance(self.sender.address()).await?;
        metrics::record_faucet_balance(balance);

        if balance < amount + fee {
            tracing::warn!(
                balance_wei = %balance,
                required_wei = %(amount + fee),
                "Dispense refused: faucet underfunded"
            );
            metrics::record_dispense("underfunded");
            return Err(FaucetError::InsufficientFunds);
        }

        // Format already checked; parse cannot fail on shape.
        let to: Address = match addr.parse() {
            Ok(to) => to,
            Err(_) => {
                metrics::record_dispense("invalid_address");
                return Err(FaucetError::InvalidAddress);
            }
        };

        let tx_hash = self.sender.send_transfer(to, amount, gas_price).await?;

        // Recorded only after a successful broadcast.
        self.store
            .mark(ip, &addr_key, Duration::from_secs(self.config.cooldown_secs()))
            .await?;

        metrics::record_dispense("success");
        metrics::record_dispensed_wei(self.config.amount_wei);

        Ok(tx_hash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_addresses() {
        assert!(valid_address("0x0000000000000000000000000000000000000000"));
        assert!(valid_address("0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266"));
        assert!(valid_address("0xDEADBEEFDEADBEEFDEADBEEFDEADBEEFDEADBEEF"));
    }

    #[test]
    fn test_invalid_addresses() {
        // Non-hex suffix
        assert!(!valid_address("0x000000000000000000000000000000000000zz"));
        // Missing prefix
        assert!(!valid_address("f39Fd6e51aad88F6F4ce6aB8827279cffFb92266"));
        // Wrong prefix
        assert!(!valid_address("1x0000000000000000000000000000000000000000"));
        // Too short / too long
        assert!(!valid_address("0x00000000000000000000000000000000000000"));
        assert!(!valid_address("0x000000000000000000000000000000000000000000"));
        // Empty and garbage
        assert!(!valid_address(""));
        assert!(!valid_address("0x"));
        assert!(!valid_address("hello world"));
    }

    #[test]
    fn test_valid_format_always_parses() {
        // Everything the format check accepts must parse as an address, so
        // the dispense path cannot reach its parse fallback.
        for addr in [
            "0x0000000000000000000000000000000000000000",
            "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266",
            "0xDEADBEEFDEADBEEFDEADBEEFDEADBEEFDEADBEEF",
            "0xffffffffffffffffffffffffffffffffffffffff",
            "0xAbCdEf0123456789aBcDeF0123456789AbCdEf01",
        ] {
            assert!(valid_address(addr));
            assert!(addr.parse::<Address>().is_ok(), "failed for {addr}");
        }
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            FaucetError::InvalidAddress.to_string(),
            "Invalid Ethereum address"
        );
        assert_eq!(
            FaucetError::RateLimited(12).to_string(),
            "IPs and addresses can request only once per 12 hours"
        );
        assert_eq!(
            FaucetError::InsufficientFunds.to_string(),
            "Faucet balance is too low"
        );
    }
}
