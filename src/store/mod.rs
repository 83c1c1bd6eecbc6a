pub mod favorites;
pub mod memory;
pub mod sqlite;

use crate::app::Result;

pub use favorites::{FavoritesStore, FAVORITES_KEY};
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

/// A durable string-keyed, string-valued store.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    /// Overwrite the value under `key` wholesale.
    fn set(&self, key: &str, value: &str) -> Result<()>;
}
