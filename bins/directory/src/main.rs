use std::sync::Arc;

use common::utils::logging::{init_logging_default, init_logging_json};
use configs::{AppConfig, LogFormat, StorageBackend, StorageConfig};
use dotenvy::dotenv;
use models::StarRating;
use service::{
    runtime,
    storage::{JsonFileKvStore, KvStore, MemoryKvStore},
    DirectoryStore,
};
use tracing::info;

fn init_logging(cfg: &AppConfig) {
    match cfg.logging.format {
        LogFormat::Compact => init_logging_default(&cfg.logging.filter),
        LogFormat::Json => init_logging_json(&cfg.logging.filter),
    }
}

async fn open_storage(cfg: &StorageConfig) -> anyhow::Result<Arc<dyn KvStore>> {
    let kv: Arc<dyn KvStore> = match cfg.backend {
        StorageBackend::File => {
            runtime::ensure_data_dir(&cfg.path).await?;
            JsonFileKvStore::open(&cfg.path).await? as Arc<dyn KvStore>
        }
        StorageBackend::Memory => Arc::new(MemoryKvStore::new()) as Arc<dyn KvStore>,
    };
    Ok(kv)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let cfg = AppConfig::load_and_validate()?;
    init_logging(&cfg);
    info!(backend = ?cfg.storage.backend, path = %cfg.storage.path, "opening directory storage");

    let kv = open_storage(&cfg.storage).await?;
    let store = DirectoryStore::initialize(kv).await?;

    for b in store.list_businesses().await {
        let reviews = store.review_count_for(b.id).await;
        info!(
            id = b.id,
            name = %b.name,
            category = b.category.label(),
            location = b.location.label(),
            stars = %StarRating::from_rating(b.rating),
            rating = b.rating,
            reviews,
            "listing"
        );
    }
    Ok(())
}
