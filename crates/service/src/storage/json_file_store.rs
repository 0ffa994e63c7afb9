use std::{collections::BTreeMap, path::PathBuf, sync::Arc};
use async_trait::async_trait;
use tokio::{fs, sync::RwLock};
use tracing::warn;

use crate::errors::ServiceError;
use crate::storage::kv_store::KvStore;

/// JSON file-backed key-value store.
///
/// Keeps every key in a single JSON object on disk and rewrites the whole
/// file on each `set`. Values are opaque strings.
#[derive(Clone)]
pub struct JsonFileKvStore {
    inner: Arc<RwLock<BTreeMap<String, String>>>,
    file_path: PathBuf,
}

impl JsonFileKvStore {
    /// Open the store at `path`. A missing file starts empty and is created on
    /// first write; an unreadable file is treated as empty.
    pub async fn open<P: Into<PathBuf>>(path: P) -> Result<Arc<Self>, ServiceError> {
        let file_path = path.into();
        if let Some(parent) = file_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await.map_err(|e| ServiceError::Storage(e.to_string()))?;
            }
        }

        let map = match fs::read(&file_path).await {
            Ok(bytes) => serde_json::from_slice(&bytes).unwrap_or_else(|e| {
                warn!(path = %file_path.display(), error = %e, "kv file is not a JSON object; starting empty");
                BTreeMap::new()
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(ServiceError::Storage(e.to_string())),
        };

        Ok(Arc::new(Self { inner: Arc::new(RwLock::new(map)), file_path }))
    }

    pub fn path(&self) -> &std::path::Path {
        &self.file_path
    }

    async fn save(&self, map: &BTreeMap<String, String>) -> Result<(), ServiceError> {
        let data = serde_json::to_vec_pretty(map).map_err(|e| ServiceError::Storage(e.to_string()))?;
        fs::write(&self.file_path, data).await.map_err(|e| ServiceError::Storage(e.to_string()))?;
        Ok(())
    }
}

#[async_trait]
impl KvStore for JsonFileKvStore {
    async fn get(&self, key: &str) -> Result<Option<String>, ServiceError> {
        let map = self.inner.read().await;
        Ok(map.get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> Result<(), ServiceError> {
        // hold the write lock across the file write so saves never interleave
        let mut map = self.inner.write().await;
        map.insert(key.to_string(), value);
        self.save(&map).await
    }
}
