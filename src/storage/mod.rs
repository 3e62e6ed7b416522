//! Key-value persistence for the saved-location history

pub mod error;
pub mod history;
pub mod memory;
pub mod store;

pub use error::{StorageError, StorageResult};
pub use history::{decode_history, encode_history, load_history, store_history};
pub use memory::InMemoryStore;
pub use store::KeyValueStore;
