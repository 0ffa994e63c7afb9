use crate::errors::ServiceError;
use async_trait::async_trait;

/// Trait abstraction for the directory's key-value persistence.
/// Implementations can be file-backed, in-memory, or remote KV.
#[async_trait]
pub trait KvStore: Send + Sync {
    /// Raw value stored under `key`, if any.
    async fn get(&self, key: &str) -> Result<Option<String>, ServiceError>;
    /// Replace the value under `key`; durable once this returns `Ok`.
    async fn set(&self, key: &str, value: String) -> Result<(), ServiceError>;
}
