//! In-process cooldown store.
//!
//! Used when no Redis URL is configured, and by tests. Expiry is checked
//! lazily on lookup; stale entries for a key are overwritten on the next
//! mark, so the map stays bounded by the set of recent claimants.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use dashmap::DashMap;

use crate::ratelimit::{CooldownStore, StoreError};

/// DashMap-backed store of key → expiry instant.
#[derive(Debug, Default)]
pub struct MemoryCooldownStore {
    entries: DashMap<String, Instant>,
}

impl MemoryCooldownStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    fn key_live(&self, key: &str) -> bool {
        match self.entries.get(key) {
            Some(expiry) => {
                if *expiry > Instant::now() {
                    true
                } else {
                    drop(expiry);
                    self.entries.remove(key);
                    false
                }
            }
            None => false,
        }
    }
}

#[async_trait]
impl CooldownStore for MemoryCooldownStore {
    async fn is_limited(&self, ip: &str, addr: &str) -> Result<bool, StoreError> {
        Ok(self.key_live(ip) || self.key_live(addr))
    }

    async fn mark(&self, ip: &str, addr: &str, ttl: Duration) -> Result<(), StoreError> {
        let expiry = Instant::now() + ttl;
        self.entries.insert(ip.to_string(), expiry);
        self.entries.insert(addr.to_string(), expiry);
        Ok(())
    }
}
