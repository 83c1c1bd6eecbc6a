//! Owns the loaded records, favorites and current criteria, and keeps the
//! rendered view in step with them.

use chrono::NaiveDate;

use crate::domain::{AuthorFilter, FavoriteSet, FilterCriteria, Record, RecordId, SearchScope};
use crate::filter;
use crate::index::distinct_authors;
use crate::render::{render, CardList};
use crate::source::{FetchError, ItemSource};
use crate::store::FavoritesStore;

/// A single control on the filter surface changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlChange {
    Text(String),
    Scope(SearchScope),
    Author(AuthorFilter),
    StartDate(Option<NaiveDate>),
    EndDate(Option<NaiveDate>),
    FavoritesOnly(bool),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleOutcome {
    /// Whether the record is a favorite after the toggle.
    pub favorited: bool,
    /// Whether the whole view was re-filtered and re-rendered.
    pub rerendered: bool,
}

/// First startup phase: pull the record list from `source`.
pub async fn load_items(source: &(dyn ItemSource + Send + Sync)) -> Result<Vec<Record>, FetchError> {
    let result = source.load().await;
    match &result {
        Ok(records) => tracing::info!("Loaded {} records from {}", records.len(), source.describe()),
        Err(e) => tracing::error!("Failed to load records from {}: {}", source.describe(), e),
    }
    result
}

pub struct Controller {
    records: Vec<Record>,
    authors: Vec<String>,
    favorites: FavoritesStore,
    criteria: FilterCriteria,
    view: CardList,
}

impl Controller {
    /// Second startup phase. A failed load leaves the deck empty.
    pub fn initialize(loaded: Result<Vec<Record>, FetchError>, favorites: FavoritesStore) -> Self {
        let records = loaded.unwrap_or_default();
        let authors = distinct_authors(&records);
        let view = render(&records, favorites.favorites());

        Self {
            records,
            authors,
            favorites,
            criteria: FilterCriteria::default(),
            view,
        }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn record(&self, id: RecordId) -> Option<&Record> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn authors(&self) -> &[String] {
        &self.authors
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn favorites(&self) -> &FavoriteSet {
        self.favorites.favorites()
    }

    pub fn view(&self) -> &CardList {
        &self.view
    }

    pub fn apply_change(&mut self, change: ControlChange) -> &CardList {
        match change {
            ControlChange::Text(text) => self.criteria.text = text,
            ControlChange::Scope(scope) => self.criteria.scope = scope,
            ControlChange::Author(author) => self.criteria.author = author,
            ControlChange::StartDate(date) => self.criteria.start_date = date,
            ControlChange::EndDate(date) => self.criteria.end_date = date,
            ControlChange::FavoritesOnly(on) => self.criteria.favorites_only = on,
        }
        self.refresh();
        &self.view
    }

    pub fn set_criteria(&mut self, criteria: FilterCriteria) -> &CardList {
        self.criteria = criteria;
        self.refresh();
        &self.view
    }

    pub fn reset_filters(&mut self) -> &CardList {
        self.set_criteria(FilterCriteria::default())
    }

    /// The author selection after the current one: all, then each author in
    /// index order, then back to all.
    pub fn next_author(&self) -> AuthorFilter {
        let next = match &self.criteria.author {
            AuthorFilter::All => self.authors.first(),
            AuthorFilter::Only(current) => self
                .authors
                .iter()
                .position(|a| a == current)
                .and_then(|pos| self.authors.get(pos + 1)),
        };
        next.map_or(AuthorFilter::All, |a| AuthorFilter::Only(a.clone()))
    }

    /// Flip the favorite state of `id` and persist it.
    ///
    /// The visible card is patched in place; the view is only rebuilt while
    /// favorites-only is active.
    pub fn toggle_favorite(&mut self, id: RecordId) -> ToggleOutcome {
        let favorited = self.favorites.toggle(id).contains(id);

        let rerendered = if self.criteria.favorites_only {
            self.refresh();
            true
        } else {
            self.view.set_favorite(id, favorited);
            false
        };

        ToggleOutcome {
            favorited,
            rerendered,
        }
    }

    fn refresh(&mut self) {
        let visible = filter::apply(&self.records, self.favorites.favorites(), &self.criteria);
        self.view = render(&visible, self.favorites.favorites());
    }
}
