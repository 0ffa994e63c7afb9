use std::path::PathBuf;
use std::sync::Arc;

use models::{BusinessInput, Category, Location, StarRating};
use service::directory::{DirectoryStore, BUSINESSES_KEY, REVIEWS_KEY};
use service::storage::{JsonFileKvStore, KvStore};
use service::{DirectoryQuery, ServiceError};
use uuid::Uuid;

fn temp_file() -> PathBuf {
    std::env::temp_dir()
        .join("directory-tests")
        .join(format!("{}.json", Uuid::new_v4()))
}

fn bakery() -> BusinessInput {
    BusinessInput {
        name: "Crumb & Co".into(),
        category: Category::from("bakery"),
        location: Location::Miami,
        description: "Sourdough, pastries and espresso.".into(),
        phone: String::new(),
        hours: "6 AM - 2 PM, Tue-Sun".into(),
    }
}

#[tokio::test]
async fn state_round_trips_through_file_storage() -> Result<(), anyhow::Error> {
    let path = temp_file();

    let kv = JsonFileKvStore::open(&path).await?;
    let store = DirectoryStore::initialize(kv).await?;
    let bakery = store.register_business(bakery()).await?;
    store.submit_review(bakery.id, 5, "Best croissant in town").await?;
    store.submit_review(bakery.id, 2, "Sold out by 10").await?;
    store.submit_review(1, 4, "Solid slice").await?;

    let businesses = store.list_businesses().await;
    let bakery_reviews = store.reviews_for(bakery.id).await;
    drop(store);

    let reopened = DirectoryStore::initialize(JsonFileKvStore::open(&path).await?).await?;
    assert_eq!(reopened.list_businesses().await, businesses);
    assert_eq!(reopened.reviews_for(bakery.id).await, bakery_reviews);

    let reloaded = reopened.business(bakery.id).await.unwrap();
    assert_eq!(reloaded.rating, 3.5);
    assert_eq!(reloaded.review_count, 2);
    assert_eq!(reloaded.category.label(), "bakery");
    assert_eq!(StarRating::from_rating(reloaded.rating).to_string(), "★★★½☆");

    // ids keep increasing after a reload
    let next = reopened.submit_review(bakery.id, 3, "Fine").await?;
    assert_eq!(next.id, 4);

    let _ = tokio::fs::remove_file(&path).await;
    Ok(())
}

#[tokio::test]
async fn first_start_writes_seed_to_disk() -> Result<(), anyhow::Error> {
    let path = temp_file();
    let kv = JsonFileKvStore::open(&path).await?;
    let store = DirectoryStore::initialize(kv.clone()).await?;
    assert_eq!(store.list_businesses().await.len(), 3);

    let raw = kv.get(BUSINESSES_KEY).await?.expect("seed persisted");
    let value: serde_json::Value = serde_json::from_str(&raw)?;
    assert_eq!(value[0]["name"], "Joe's Pizza");
    assert_eq!(value[2]["reviewCount"], 203);
    assert!(kv.get(REVIEWS_KEY).await?.is_none());

    let _ = tokio::fs::remove_file(&path).await;
    Ok(())
}

#[tokio::test]
async fn reads_data_written_by_the_browser_app() -> Result<(), anyhow::Error> {
    let path = temp_file();
    let businesses = r#"[{"id":1712345678901,"name":"Harbor Clinic","category":"healthcare","location":"miami","description":"Walk-in care","phone":"","hours":"","rating":4,"reviewCount":1}]"#;
    let reviews = r#"[{"id":1712345679000,"businessId":1712345678901,"rating":4,"comment":"Quick","author":"Anonymous User","date":"4/5/2024"}]"#;
    let kv = JsonFileKvStore::open(&path).await?;
    kv.set(BUSINESSES_KEY, businesses.into()).await?;
    kv.set(REVIEWS_KEY, reviews.into()).await?;

    let store = DirectoryStore::initialize(JsonFileKvStore::open(&path).await?).await?;
    let list = store.list_businesses().await;
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].location.label(), "Miami");
    assert_eq!(store.review_count_for(1712345678901).await, 1);

    let created = store.register_business(bakery()).await?;
    assert_eq!(created.id, 1712345678902);

    let _ = tokio::fs::remove_file(&path).await;
    Ok(())
}

#[tokio::test]
async fn concurrent_reviews_keep_aggregates_consistent() -> Result<(), anyhow::Error> {
    let path = temp_file();
    let store = DirectoryStore::initialize(JsonFileKvStore::open(&path).await?).await?;

    let mut handles = Vec::new();
    for i in 0..20u8 {
        let store = Arc::clone(&store);
        handles.push(tokio::spawn(async move { store.submit_review(3, i % 5 + 1, format!("visit {i}")).await }));
    }
    for h in handles {
        h.await??;
    }

    let cafe = store.business(3).await.unwrap();
    assert_eq!(cafe.review_count, 20);
    assert_eq!(cafe.rating, 3.0);
    let mut ids: Vec<u64> = store.reviews_for(3).await.iter().map(|r| r.id).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 20);

    let _ = tokio::fs::remove_file(&path).await;
    Ok(())
}

#[tokio::test]
async fn errors_surface_to_the_caller() -> Result<(), anyhow::Error> {
    let path = temp_file();
    let store = DirectoryStore::initialize(JsonFileKvStore::open(&path).await?).await?;

    assert!(matches!(store.submit_review(42, 3, "").await, Err(ServiceError::NotFound(_))));
    assert!(matches!(store.submit_review(1, 0, "").await, Err(ServiceError::Validation(_))));
    let mut nameless = bakery();
    nameless.name.clear();
    assert!(matches!(store.register_business(nameless).await, Err(ServiceError::Validation(_))));

    let q = DirectoryQuery::filter(Some(Location::NewYork), Some(Category::Restaurant));
    assert_eq!(store.query(&q).await.len(), 1);
    assert_eq!(store.query(&DirectoryQuery::search("organic")).await[0].id, 3);

    let _ = tokio::fs::remove_file(&path).await;
    Ok(())
}
