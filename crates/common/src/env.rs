//! Environment/runtime helpers
//!
//! Sanity checks to ensure the data directory exists at startup.

use std::path::Path;
use tracing::{debug, warn};

/// Ensure the parent directory of the persisted data file exists.
pub async fn ensure_data_dir(data_file: &str) -> anyhow::Result<()> {
    let Some(parent) = Path::new(data_file).parent() else {
        warn!(%data_file, "data file has no parent directory");
        return Ok(());
    };
    if parent.as_os_str().is_empty() {
        return Ok(());
    }
    tokio::fs::create_dir_all(parent)
        .await
        .map_err(|e| anyhow::anyhow!("cannot create {}: {e}", parent.display()))?;
    debug!(dir = %parent.display(), "data directory ready");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn creates_missing_parent_dir() -> anyhow::Result<()> {
        let root = std::env::temp_dir().join(format!("directory_env_{}", uuid::Uuid::new_v4()));
        let file = root.join("nested").join("directory.json");
        ensure_data_dir(file.to_str().unwrap()).await?;
        assert!(tokio::fs::metadata(root.join("nested")).await?.is_dir());

        let _ = tokio::fs::remove_dir_all(&root).await;
        Ok(())
    }

    #[tokio::test]
    async fn bare_file_name_needs_no_dir() -> anyhow::Result<()> {
        ensure_data_dir("directory.json").await?;
        Ok(())
    }
}
