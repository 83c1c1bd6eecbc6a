use serde::{Deserialize, Serialize};

use crate::domain::RecordId;

/// The ids a user has marked as favorite, in the order they were added.
///
/// Ids of records that are no longer loaded are kept as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<RecordId>", into = "Vec<RecordId>")]
pub struct FavoriteSet {
    ids: Vec<RecordId>,
}

impl FavoriteSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: RecordId) -> bool {
        self.ids.contains(&id)
    }

    /// Flip membership of `id`. Returns `true` if it is now a favorite.
    pub fn toggle(&mut self, id: RecordId) -> bool {
        if let Some(pos) = self.ids.iter().position(|&existing| existing == id) {
            self.ids.remove(pos);
            false
        } else {
            self.ids.push(id);
            true
        }
    }

    pub fn ids(&self) -> &[RecordId] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl From<Vec<RecordId>> for FavoriteSet {
    fn from(ids: Vec<RecordId>) -> Self {
        let mut set = Self::new();
        for id in ids {
            if !set.contains(id) {
                set.ids.push(id);
            }
        }
        set
    }
}

impl From<FavoriteSet> for Vec<RecordId> {
    fn from(set: FavoriteSet) -> Self {
        set.ids
    }
}
