//! The business directory: collections, queries, and seeding.

pub mod query;
pub mod seed;
pub mod store;

pub use query::DirectoryQuery;
pub use store::{DirectoryStore, BUSINESSES_KEY, REVIEWS_KEY};
