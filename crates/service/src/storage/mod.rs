//! Storage abstractions for the service layer
//!
//! The directory persists into a string-keyed, string-valued store, the same
//! shape as browser local storage. Backends are interchangeable behind
//! [`KvStore`].

pub mod kv_store;
pub mod json_file_store;
pub mod memory_store;

pub use json_file_store::JsonFileKvStore;
pub use kv_store::KvStore;
pub use memory_store::MemoryKvStore;
