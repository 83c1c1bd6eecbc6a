//! Declarative view-model for the card list.
//!
//! [`render`] turns records into plain [`Card`] values. Binding them to an
//! actual surface (terminal, HTML page, stdout) lives in the front ends.

pub mod html;
pub mod text;

use crate::domain::record::non_empty;
use crate::domain::{FavoriteSet, Record, RecordId};

/// Where a link is opened when followed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkTarget {
    /// A separate browsing context (new tab/window, external browser).
    NewContext,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardLink {
    pub href: String,
    pub target: LinkTarget,
}

/// The favorite affordance of one card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FavoriteToggle {
    pub record_id: RecordId,
    pub active: bool,
}

/// One display unit. Optional lines are `None` when the field is absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub title: String,
    pub favorite: FavoriteToggle,
    pub author: Option<String>,
    pub content: Option<String>,
    pub platform: Option<String>,
    pub date: Option<String>,
    pub link: Option<CardLink>,
}

impl Card {
    pub fn record_id(&self) -> RecordId {
        self.favorite.record_id
    }

    /// Body lines in display order, without the title.
    pub fn body_lines(&self) -> Vec<&str> {
        [&self.author, &self.content, &self.platform, &self.date]
            .into_iter()
            .filter_map(|line| line.as_deref())
            .collect()
    }
}

/// Fully rendered output. Each render replaces the previous one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardList {
    pub cards: Vec<Card>,
}

impl CardList {
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// Flip the favorite affordance of the card showing `id`, if visible.
    ///
    /// Returns `true` when a card was updated.
    pub fn set_favorite(&mut self, id: RecordId, active: bool) -> bool {
        let mut touched = false;
        for card in self.cards.iter_mut().filter(|c| c.record_id() == id) {
            card.favorite.active = active;
            touched = true;
        }
        touched
    }
}

/// Project records into cards, preserving order.
pub fn render(records: &[Record], favorites: &FavoriteSet) -> CardList {
    CardList {
        cards: records.iter().map(|r| card_for(r, favorites)).collect(),
    }
}

pub fn card_for(record: &Record, favorites: &FavoriteSet) -> Card {
    let line = |value: &Option<String>, prefix: &str| {
        non_empty(value.as_deref()).map(|v| format!("{}{}", prefix, v))
    };

    Card {
        title: record.display_title().to_string(),
        favorite: FavoriteToggle {
            record_id: record.id,
            active: favorites.contains(record.id),
        },
        author: line(&record.author, "By: "),
        content: line(&record.content, ""),
        platform: line(&record.platform, "Platform: "),
        date: line(&record.date, "Date: "),
        link: non_empty(record.link.as_deref()).map(|href| CardLink {
            href: href.to_string(),
            target: LinkTarget::NewContext,
        }),
    }
}
