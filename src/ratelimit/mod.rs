//! Cooldown rate limiting.
//!
//! # Data Flow
//! ```text
//! dispense request
//!     → is_limited(ip, addr)   (two key-existence checks)
//!     → ... transfer broadcast ...
//!     → mark(ip, addr, ttl)    (two keys written with expiry)
//! ```
//!
//! # Key Patterns
//! ```text
//! {client_ip}            → "1" (auto-expires after the cooldown)
//! {address_lowercase}    → "1" (auto-expires after the cooldown)
//! ```
//!
//! Entries are only created or allowed to expire; they are never updated
//! or explicitly deleted. Callers pass the address already lowercased.

pub mod memory;
pub mod redis;

pub use memory::MemoryCooldownStore;
pub use redis::RedisCooldownStore;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

use crate::config::StoreConfig;

/// Error type produced by cooldown store backends.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Backend-level failure (connection, command).
    #[error("Store backend failure: {0}")]
    Backend(String),
}

/// Presence-with-expiry store backing the per-IP and per-address cooldown.
#[async_trait]
pub trait CooldownStore: Send + Sync {
    /// True if either key currently exists.
    async fn is_limited(&self, ip: &str, addr: &str) -> Result<bool, StoreError>;

    /// Create both keys with the given time-to-live.
    async fn mark(&self, ip: &str, addr: &str, ttl: Duration) -> Result<(), StoreError>;
}

/// Build the configured store: Redis when a URL is set, in-process otherwise.
pub async fn connect(config: &StoreConfig) -> Result<Arc<dyn CooldownStore>, StoreError> {
    match &config.redis_url {
        Some(url) => {
            let store = RedisCooldownStore::connect(url).await?;
            tracing::info!(url = %url, "Cooldown store: redis");
            Ok(Arc::new(store))
        }
        None => {
            tracing::warn!("Cooldown store: in-process memory (state is lost on restart)");
            Ok(Arc::new(MemoryCooldownStore::new()))
        }
    }
}
