//! Service layer for the business directory.
//! - `directory` owns businesses and reviews and keeps derived ratings current.
//! - `storage` provides the key-value backends the directory persists into.
//! - `contact_service` accepts contact-page messages.

pub mod errors;
pub mod runtime;
pub mod storage;
pub mod directory;
pub mod contact_service;

pub use directory::{DirectoryQuery, DirectoryStore};
pub use errors::ServiceError;
