//! In-memory verification-code store
//!
//! Process-wide map from a scoped key (e.g. `"AuthCode a@x.com"`) to a
//! verification code. Safe for concurrent use from many requests
//! without external locking. Entries expire after the configured
//! lifetime: `get` treats a stale entry as absent and drops it on the
//! way out, so the store does not grow with dead codes.

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::debug;

use sn_core::services::member::CodeStoreTrait;

/// A stored code together with its write timestamp
#[derive(Debug, Clone)]
struct StoredCode {
    code: String,
    stored_at: DateTime<Utc>,
}

/// Thread-safe in-memory store for verification codes
pub struct InMemoryAuthCodeStore {
    entries: RwLock<HashMap<String, StoredCode>>,
    ttl: Duration,
}

impl InMemoryAuthCodeStore {
    /// Create a new store whose entries live for `ttl_millis`
    pub fn new(ttl_millis: u64) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            ttl: Duration::milliseconds(ttl_millis as i64),
        }
    }

    /// Store a code under a key, overwriting any prior value
    pub async fn save_code(&self, key: &str, code: &str) {
        let mut entries = self.entries.write().await;
        entries.insert(
            key.to_string(),
            StoredCode {
                code: code.to_string(),
                stored_at: Utc::now(),
            },
        );

        debug!(key = key, event = "code_saved", "Stored verification code");
    }

    /// Fetch the live code for a key
    ///
    /// Returns `None` for unknown keys and for entries older than the
    /// configured lifetime; a stale entry is removed when observed.
    pub async fn get_code(&self, key: &str) -> Option<String> {
        {
            let entries = self.entries.read().await;
            match entries.get(key) {
                None => return None,
                Some(stored) if !self.is_expired(stored) => return Some(stored.code.clone()),
                Some(_) => {}
            }
        }

        // Stale entry: re-check under the write lock before dropping it,
        // since a fresh code may have been saved in between.
        let mut entries = self.entries.write().await;
        match entries.get(key) {
            Some(stored) if self.is_expired(stored) => {
                entries.remove(key);
                debug!(key = key, event = "code_expired", "Dropped stale verification code");
                None
            }
            Some(stored) => Some(stored.code.clone()),
            None => None,
        }
    }

    /// Number of entries currently held, stale ones included
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Whether the store holds no entries
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    fn is_expired(&self, stored: &StoredCode) -> bool {
        Utc::now() - stored.stored_at > self.ttl
    }
}

#[async_trait]
impl CodeStoreTrait for InMemoryAuthCodeStore {
    async fn save(&self, key: &str, code: &str) -> Result<(), String> {
        self.save_code(key, code).await;
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<String>, String> {
        Ok(self.get_code(key).await)
    }
}
