//! # quotedeck
//!
//! A browsable, filterable deck of quoted items with search, author and date
//! filters, and persisted favorites.
//!
//! ## Architecture
//!
//! ```text
//! Source → Controller (Filter → Render) → Front end
//!                 ↕
//!          FavoritesStore → KeyValueStore
//! ```
//!
//! Startup is two-phase: the record list is loaded once from a [`source`],
//! then [`controller::Controller::initialize`] restores favorites, builds the
//! author index and renders the full list. A failed load yields an empty deck.
//!
//! ## Quick Start
//!
//! ```bash
//! # List every card from the built-in deck
//! quotedeck list
//!
//! # Search titles only, one author, a date window
//! quotedeck list --search wall --scope title --author "A" --from 2024-06-01
//!
//! # Toggle a favorite, then list favorites only
//! quotedeck favorite 2
//! quotedeck list --favorites
//!
//! # Fetch records from a URL and browse them
//! quotedeck --url https://example.com/quotes.json tui
//! ```

/// Application context and error handling.
///
/// [`AppContext`](app::AppContext) wires the record source to the favorites
/// store and runs startup.
pub mod app;

/// Configuration management.
///
/// Loads from `~/.config/quotedeck/config.toml`: record source, storage path,
/// colors and keybindings.
pub mod config;

/// Command-line interface using clap.
///
/// - `list` - Print the cards matching the filter flags
/// - `authors` - Print distinct authors
/// - `favorite <id>` - Toggle a favorite
/// - `export --out <file>` - Write a static HTML page
/// - `tui` - Launch the TUI
pub mod cli;

/// Owner of records, favorites, criteria and the current view.
pub mod controller;

/// Core domain models.
///
/// - [`Record`](domain::Record): one quoted item
/// - [`FavoriteSet`](domain::FavoriteSet): favorited record ids
/// - [`FilterCriteria`](domain::FilterCriteria): current search and selection
pub mod domain;

/// Record visibility predicates.
pub mod filter;

/// Distinct author names for the author selector.
pub mod index;

/// Card view-model plus HTML and plain-text bindings.
pub mod render;

/// Record sources: built-in list, JSON file, HTTP.
pub mod source;

/// Key-value persistence and the favorites store.
///
/// - [`KeyValueStore`](store::KeyValueStore): storage trait
/// - [`SqliteStore`](store::SqliteStore): SQLite implementation
/// - [`FavoritesStore`](store::FavoritesStore): favorites mirrored to a store
pub mod store;

/// Terminal user interface.
///
/// Filter bar, card list, card detail and status bar built with ratatui.
pub mod tui;
