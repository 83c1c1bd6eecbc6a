use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::app::error::{DeckError, Result};
use crate::config::Config;
use crate::controller::{load_items, Controller};
use crate::source::{FileSource, HttpSource, ItemSource, LiteralSource};
use crate::store::{FavoritesStore, KeyValueStore, MemoryStore, SqliteStore};

/// Which source to read records from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceChoice {
    Builtin,
    File(PathBuf),
    Url(String),
}

impl SourceChoice {
    /// Resolve the source from an explicit choice, falling back to config.
    pub fn resolve(explicit: Option<SourceChoice>, config: &Config) -> Self {
        if let Some(choice) = explicit {
            return choice;
        }
        if let Some(url) = &config.source.url {
            return SourceChoice::Url(url.clone());
        }
        if let Some(path) = &config.source.path {
            return SourceChoice::File(path.clone());
        }
        SourceChoice::Builtin
    }

    pub fn build(&self) -> Result<Arc<dyn ItemSource + Send + Sync>> {
        let source: Arc<dyn ItemSource + Send + Sync> = match self {
            SourceChoice::Builtin => Arc::new(LiteralSource::builtin()),
            SourceChoice::File(path) => Arc::new(FileSource::new(path.clone())),
            SourceChoice::Url(url) => Arc::new(HttpSource::new(url)?),
        };
        Ok(source)
    }
}

/// Wires the record source to the favorites store.
pub struct AppContext {
    pub store: Arc<dyn KeyValueStore + Send + Sync>,
    pub source: Arc<dyn ItemSource + Send + Sync>,
}

impl AppContext {
    /// Open the favorites database and build the record source.
    ///
    /// A database that cannot be opened or migrated is replaced by a
    /// process-local store: favorites still toggle but are not kept.
    pub fn new(source: SourceChoice, db_path: Option<PathBuf>) -> Result<Self> {
        let store: Arc<dyn KeyValueStore + Send + Sync> = match Self::open_store(db_path) {
            Ok(store) => Arc::new(store),
            Err(e) => {
                tracing::warn!("Favorites database unavailable, not persisting: {}", e);
                Arc::new(MemoryStore::new())
            }
        };

        Ok(Self {
            store,
            source: source.build()?,
        })
    }

    pub fn in_memory(source: SourceChoice) -> Result<Self> {
        Ok(Self {
            store: Arc::new(SqliteStore::in_memory()?),
            source: source.build()?,
        })
    }

    /// Run both startup phases and hand back a ready controller.
    ///
    /// A failed load is logged and yields an empty deck.
    pub async fn open_controller(&self) -> Controller {
        let loaded = load_items(self.source.as_ref()).await;
        Controller::initialize(loaded, FavoritesStore::open(self.store.clone()))
    }

    pub fn default_data_dir() -> Result<PathBuf> {
        let data_dir = dirs::data_dir()
            .ok_or_else(|| DeckError::Config("Could not find data directory".into()))?;
        Ok(data_dir.join("quotedeck"))
    }

    fn open_store(db_path: Option<PathBuf>) -> Result<SqliteStore> {
        let db_path = match db_path {
            Some(p) => p,
            None => Self::default_db_path()?,
        };
        Self::ensure_parent(&db_path)?;
        SqliteStore::new(&db_path)
    }

    fn default_db_path() -> Result<PathBuf> {
        Ok(Self::default_data_dir()?.join("quotedeck.db"))
    }

    fn ensure_parent(path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_prefers_explicit_choice() {
        let mut config = Config::default();
        config.source.url = Some("https://example.com/q.json".into());

        let choice = SourceChoice::resolve(Some(SourceChoice::Builtin), &config);
        assert_eq!(choice, SourceChoice::Builtin);
    }

    #[test]
    fn test_resolve_url_before_path() {
        let mut config = Config::default();
        config.source.path = Some(PathBuf::from("/tmp/q.json"));
        assert_eq!(
            SourceChoice::resolve(None, &config),
            SourceChoice::File(PathBuf::from("/tmp/q.json"))
        );

        config.source.url = Some("https://example.com/q.json".into());
        assert_eq!(
            SourceChoice::resolve(None, &config),
            SourceChoice::Url("https://example.com/q.json".into())
        );
    }

    #[test]
    fn test_resolve_defaults_to_builtin() {
        assert_eq!(
            SourceChoice::resolve(None, &Config::default()),
            SourceChoice::Builtin
        );
    }

    #[test]
    fn test_invalid_url_fails_to_build() {
        assert!(matches!(
            SourceChoice::Url("::".into()).build(),
            Err(DeckError::Fetch(_))
        ));
    }

    #[tokio::test]
    async fn test_open_controller_with_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = AppContext::in_memory(SourceChoice::File(dir.path().join("none.json"))).unwrap();

        let controller = ctx.open_controller().await;
        assert!(controller.view().is_empty());
    }

    #[tokio::test]
    async fn test_favorites_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let db = dir.path().join("data").join("deck.db");

        {
            let ctx = AppContext::new(SourceChoice::Builtin, Some(db.clone())).unwrap();
            let mut controller = ctx.open_controller().await;
            controller.toggle_favorite(2);
        }

        let ctx = AppContext::new(SourceChoice::Builtin, Some(db)).unwrap();
        let controller = ctx.open_controller().await;
        assert!(controller.favorites().contains(2));
        assert!(controller.view().cards[1].favorite.active);
    }

    #[tokio::test]
    async fn test_corrupt_database_falls_back_to_memory() {
        let dir = tempfile::tempdir().unwrap();
        let db = dir.path().join("deck.db");
        std::fs::write(&db, b"this is not a sqlite database at all, just some bytes").unwrap();

        let ctx = AppContext::new(SourceChoice::Builtin, Some(db)).unwrap();
        let mut controller = ctx.open_controller().await;
        assert!(!controller.view().is_empty());
        assert!(controller.favorites().ids().is_empty());

        assert!(controller.toggle_favorite(1).favorited);
        assert!(controller.view().cards[0].favorite.active);
    }

    #[tokio::test]
    async fn test_directory_as_database_falls_back_to_memory() {
        let dir = tempfile::tempdir().unwrap();

        let ctx = AppContext::new(SourceChoice::Builtin, Some(dir.path().to_path_buf())).unwrap();
        let controller = ctx.open_controller().await;
        assert!(!controller.view().is_empty());
    }
}
