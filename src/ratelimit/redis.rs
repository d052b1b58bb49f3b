//! Redis-backed cooldown store.
//!
//! Keys carry a TTL set at write time (`SET ... EX`); expiry is handled
//! entirely by Redis. The existence check uses a single `EXISTS` over both
//! keys, which returns the count of keys present.

use std::time::Duration;

use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::AsyncCommands;

use crate::ratelimit::{CooldownStore, StoreError};

/// Cooldown store over a Redis connection.
#[derive(Clone)]
pub struct RedisCooldownStore {
    conn: ConnectionManager,
}

impl RedisCooldownStore {
    /// Connect to Redis at the given URL.
    pub async fn connect(url: &str) -> Result<Self, StoreError> {
        let client = redis::Client::open(url)
            .map_err(|e| StoreError::Backend(format!("Invalid redis URL: {}", e)))?;
        let conn = client
            .get_connection_manager()
            .await
            .map_err(|e| StoreError::Backend(format!("Redis connection failed: {}", e)))?;
        Ok(Self { conn })
    }
}

#[async_trait]
impl CooldownStore for RedisCooldownStore {
    async fn is_limited(&self, ip: &str, addr: &str) -> Result<bool, StoreError> {
        let mut conn = self.conn.clone();
        let present: i64 = redis::cmd("EXISTS")
            .arg(ip)
            .arg(addr)
            .query_async(&mut conn)
            .await
            .map_err(|e| StoreError::Backend(format!("EXISTS failed: {}", e)))?;
        Ok(present > 0)
    }

    async fn mark(&self, ip: &str, addr: &str, ttl: Duration) -> Result<(), StoreError> {
        let mut conn = self.conn.clone();
        let secs = ttl.as_secs();
        conn.set_ex::<_, _, ()>(ip, "1", secs)
            .await
            .map_err(|e| StoreError::Backend(format!("SET failed: {}", e)))?;
        conn.set_ex::<_, _, ()>(addr, "1", secs)
            .await
            .map_err(|e| StoreError::Backend(format!("SET failed: {}", e)))?;
        Ok(())
    }
}

impl std::fmt::Debug for RedisCooldownStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisCooldownStore").finish()
    }
}
