use std::sync::Arc;

use chrono::Local;
use models::{Business, BusinessInput, Category, Location, Review, ReviewStats};
use serde::{de::DeserializeOwned, Serialize};
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::directory::query::{self, DirectoryQuery};
use crate::directory::seed::demo_businesses;
use crate::errors::ServiceError;
use crate::storage::kv_store::KvStore;

pub const BUSINESSES_KEY: &str = "businesses";
pub const REVIEWS_KEY: &str = "reviews";

#[derive(Debug, Default)]
struct Collections {
    businesses: Vec<Business>,
    reviews: Vec<Review>,
}

impl Collections {
    fn position(&self, business_id: u64) -> Option<usize> {
        self.businesses.iter().position(|b| b.id == business_id)
    }

    fn reviews_for(&self, business_id: u64) -> impl Iterator<Item = &Review> {
        self.reviews.iter().filter(move |r| r.business_id == business_id)
    }
}

/// Owns the business and review collections and writes them through to a
/// [`KvStore`] on every mutation.
///
/// Both collections sit behind one lock; mutations keep it held until their
/// persistence writes finish, so readers always observe completed writes.
pub struct DirectoryStore {
    state: RwLock<Collections>,
    kv: Arc<dyn KvStore>,
}

impl DirectoryStore {
    /// Restore persisted state, falling back to empty collections when it is
    /// unreadable, and seed demonstration businesses when none exist.
    ///
    /// After a fallback both keys are rewritten so the unreadable value does
    /// not trigger another fallback on the next start. Only a failed write is
    /// returned as an error.
    pub async fn initialize(kv: Arc<dyn KvStore>) -> Result<Arc<Self>, ServiceError> {
        let (collections, fell_back) = match load_collections(kv.as_ref()).await {
            Ok(c) => (c, false),
            Err(e) => {
                warn!(error = %e, "persisted directory unreadable; starting empty");
                (Collections::default(), true)
            }
        };

        let store = Self { state: RwLock::new(collections), kv };
        {
            let mut state = store.state.write().await;
            if state.businesses.is_empty() {
                state.businesses = demo_businesses();
                info!(count = state.businesses.len(), "seeded demonstration businesses");
                store.persist_businesses(&state).await?;
            }
            if fell_back {
                store.persist_reviews(&state).await?;
            }
            info!(businesses = state.businesses.len(), reviews = state.reviews.len(), "directory ready");
        }
        Ok(Arc::new(store))
    }

    /// All businesses in insertion order.
    pub async fn list_businesses(&self) -> Vec<Business> {
        self.state.read().await.businesses.clone()
    }

    pub async fn business(&self, id: u64) -> Option<Business> {
        let state = self.state.read().await;
        state.position(id).map(|i| state.businesses[i].clone())
    }

    pub async fn search(&self, term: &str) -> Vec<Business> {
        query::search(&self.state.read().await.businesses, term)
    }

    pub async fn filter(&self, location: Option<&Location>, category: Option<&Category>) -> Vec<Business> {
        query::filter(&self.state.read().await.businesses, location, category)
    }

    pub async fn query(&self, q: &DirectoryQuery) -> Vec<Business> {
        q.apply(&self.state.read().await.businesses)
    }

    /// `(id, name)` pairs for the review form's business selector.
    pub async fn business_options(&self) -> Vec<(u64, String)> {
        let state = self.state.read().await;
        state.businesses.iter().map(|b| (b.id, b.name.clone())).collect()
    }

    pub async fn register_business(&self, input: BusinessInput) -> Result<Business, ServiceError> {
        let mut state = self.state.write().await;
        let id = next_id(state.businesses.iter().map(|b| b.id))?;
        let business = Business::register(id, input)?;
        state.businesses.push(business.clone());
        info!(id, name = %business.name, "business registered");
        self.persist_businesses(&state).await?;
        Ok(business)
    }

    /// Record a review and refresh the business's derived rating fields.
    pub async fn submit_review(&self, business_id: u64, rating: u8, comment: impl Into<String>) -> Result<Review, ServiceError> {
        let mut state = self.state.write().await;
        let idx = state.position(business_id).ok_or_else(|| ServiceError::not_found("business"))?;
        let id = next_id(state.reviews.iter().map(|r| r.id))?;
        let review = Review::new(id, business_id, rating, comment.into(), Local::now().date_naive())?;
        state.reviews.push(review.clone());

        let stats = ReviewStats::from_ratings(state.reviews_for(business_id).map(|r| r.rating));
        state.businesses[idx].apply_stats(stats);
        info!(id, business_id, rating, average = stats.average, count = stats.count, "review submitted");

        self.persist_reviews(&state).await?;
        self.persist_businesses(&state).await?;
        Ok(review)
    }

    pub async fn reviews_for(&self, business_id: u64) -> Vec<Review> {
        self.state.read().await.reviews_for(business_id).cloned().collect()
    }

    /// Counted from the review collection, not the cached business field.
    pub async fn review_count_for(&self, business_id: u64) -> u32 {
        let state = self.state.read().await;
        ReviewStats::from_ratings(state.reviews_for(business_id).map(|r| r.rating)).count
    }

    async fn persist_businesses(&self, state: &Collections) -> Result<(), ServiceError> {
        save_collection(self.kv.as_ref(), BUSINESSES_KEY, &state.businesses).await
    }

    async fn persist_reviews(&self, state: &Collections) -> Result<(), ServiceError> {
        save_collection(self.kv.as_ref(), REVIEWS_KEY, &state.reviews).await
    }
}

/// Next identifier after the largest one in use; ids start at 1.
fn next_id<I: Iterator<Item = u64>>(ids: I) -> Result<u64, ServiceError> {
    match ids.max() {
        None => Ok(1),
        Some(max) => max.checked_add(1).ok_or_else(|| ServiceError::Storage("id space exhausted".into())),
    }
}

async fn load_collections(kv: &dyn KvStore) -> Result<Collections, ServiceError> {
    Ok(Collections {
        businesses: load_collection(kv, BUSINESSES_KEY).await?,
        reviews: load_collection(kv, REVIEWS_KEY).await?,
    })
}

async fn load_collection<T: DeserializeOwned>(kv: &dyn KvStore, key: &str) -> Result<Vec<T>, ServiceError> {
    let Some(raw) = kv.get(key).await? else {
        return Ok(Vec::new());
    };
    // a stored `null` reads as an empty collection
    let items: Option<Vec<T>> =
        serde_json::from_str(&raw).map_err(|e| ServiceError::Deserialization(format!("{key}: {e}")))?;
    Ok(items.unwrap_or_default())
}

async fn save_collection<T: Serialize>(kv: &dyn KvStore, key: &str, items: &[T]) -> Result<(), ServiceError> {
    let raw = serde_json::to_string(items).map_err(|e| ServiceError::Storage(format!("{key}: {e}")))?;
    kv.set(key, raw).await?;
    debug!(key, items = items.len(), "collection persisted");
    Ok(())
}
