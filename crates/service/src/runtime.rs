//! Runtime environment helpers
//!
//! Thin wrapper around `common::env` so binary crates can prepare storage
//! through `service` alone.

/// Ensure the directory holding the data file exists.
pub async fn ensure_data_dir(data_file: &str) -> anyhow::Result<()> {
    common::env::ensure_data_dir(data_file).await
}
