use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::errors::ServiceError;
use crate::storage::kv_store::KvStore;

/// Process-local key-value store. Writes can be switched to fail, which
/// stands in for a full or unavailable storage area.
#[derive(Default)]
pub struct MemoryKvStore {
    entries: RwLock<HashMap<String, String>>,
    fail_writes: AtomicBool,
}

impl MemoryKvStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with pre-existing raw entries.
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: RwLock::new(entries.into_iter().map(|(k, v)| (k.into(), v.into())).collect()),
            fail_writes: AtomicBool::new(false),
        }
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl KvStore for MemoryKvStore {
    async fn get(&self, key: &str) -> Result<Option<String>, ServiceError> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> Result<(), ServiceError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(ServiceError::Storage(format!("write to {key} rejected")));
        }
        self.entries.write().await.insert(key.to_string(), value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn get_set_and_failure_toggle() -> Result<(), anyhow::Error> {
        let store = MemoryKvStore::with_entries([("reviews", "[]")]);
        assert_eq!(store.get("reviews").await?.as_deref(), Some("[]"));
        assert_eq!(store.get("businesses").await?, None);

        store.set_fail_writes(true);
        assert!(matches!(store.set("businesses", "[]".into()).await, Err(ServiceError::Storage(_))));
        assert_eq!(store.get("businesses").await?, None);

        store.set_fail_writes(false);
        store.set("businesses", "[]".into()).await?;
        assert_eq!(store.get("businesses").await?.as_deref(), Some("[]"));
        Ok(())
    }
}
