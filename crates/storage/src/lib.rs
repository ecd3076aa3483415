#![forbid(unsafe_code)]

pub mod repository;
pub mod session_store;
pub mod sqlite;

pub use repository::{InMemoryRepository, KeyValueStore, Storage, StorageError};
pub use session_store::{HISTORY_CAPACITY, HISTORY_KEY, SessionStore};
