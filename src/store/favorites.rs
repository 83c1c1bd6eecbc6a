use std::sync::Arc;

use crate::app::Result;
use crate::domain::{FavoriteSet, RecordId};
use crate::store::KeyValueStore;

/// Key under which the favorite ids are persisted.
pub const FAVORITES_KEY: &str = "favoriteIds";

/// Favorite ids held in memory and mirrored to a [`KeyValueStore`].
///
/// The persisted value is a JSON array of ids. It is read once when the store
/// is opened and overwritten wholesale after every toggle.
pub struct FavoritesStore {
    backend: Arc<dyn KeyValueStore + Send + Sync>,
    favorites: FavoriteSet,
}

impl FavoritesStore {
    /// Open the store and restore the persisted set.
    pub fn open(backend: Arc<dyn KeyValueStore + Send + Sync>) -> Self {
        let mut store = Self {
            backend,
            favorites: FavoriteSet::new(),
        };
        store.favorites = store.load();
        store
    }

    /// Read the persisted set. Absent or unreadable values yield an empty set.
    pub fn load(&self) -> FavoriteSet {
        let raw = match self.backend.get(FAVORITES_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return FavoriteSet::new(),
            Err(e) => {
                tracing::warn!("Could not read favorites, starting empty: {}", e);
                return FavoriteSet::new();
            }
        };

        match serde_json::from_str::<FavoriteSet>(&raw) {
            Ok(set) => set,
            Err(e) => {
                tracing::debug!("Ignoring malformed favorites value: {}", e);
                FavoriteSet::new()
            }
        }
    }

    /// Serialize `set` and overwrite the persisted value.
    pub fn save(&self, set: &FavoriteSet) -> Result<()> {
        let raw = serde_json::to_string(set)?;
        self.backend.set(FAVORITES_KEY, &raw)
    }

    /// Flip membership of `id` and persist the result.
    ///
    /// A failed write is logged; the in-memory change stands.
    pub fn toggle(&mut self, id: RecordId) -> &FavoriteSet {
        let now_favorite = self.favorites.toggle(id);
        tracing::debug!(id, now_favorite, "Toggled favorite");

        if let Err(e) = self.save(&self.favorites) {
            tracing::error!("Failed to save favorites: {}", e);
        }

        &self.favorites
    }

    pub fn favorites(&self) -> &FavoriteSet {
        &self.favorites
    }

    pub fn is_favorite(&self, id: RecordId) -> bool {
        self.favorites.contains(id)
    }
}
