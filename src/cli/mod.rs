pub mod commands;

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

use crate::app::SourceChoice;
use crate::domain::{parse_calendar_date, AuthorFilter, FilterCriteria, RecordId, SearchScope};

#[derive(Parser)]
#[command(name = "quotedeck")]
#[command(about = "Browse, search and favorite a deck of quoted items", long_about = None)]
pub struct Cli {
    /// Fetch records from this URL (JSON array)
    #[arg(long, global = true, conflicts_with_all = ["file", "builtin"])]
    pub url: Option<String>,

    /// Read records from this JSON file
    #[arg(long, global = true, conflicts_with = "builtin")]
    pub file: Option<PathBuf>,

    /// Use the built-in sample records
    #[arg(long, global = true)]
    pub builtin: bool,

    /// SQLite database holding favorites
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// The source chosen on the command line, if any.
    pub fn source_choice(&self) -> Option<SourceChoice> {
        if let Some(url) = &self.url {
            Some(SourceChoice::Url(url.clone()))
        } else if let Some(path) = &self.file {
            Some(SourceChoice::File(path.clone()))
        } else if self.builtin {
            Some(SourceChoice::Builtin)
        } else {
            None
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the cards that match the filters
    List {
        #[command(flatten)]
        filter: FilterArgs,
    },
    /// List distinct authors in first-seen order
    Authors,
    /// Toggle the favorite mark on a record
    Favorite {
        /// Id of the record
        id: RecordId,
    },
    /// Write the matching cards to a static HTML page
    Export {
        /// Output file
        #[arg(short, long)]
        out: PathBuf,

        /// Page heading
        #[arg(long, default_value = "Quotes")]
        title: String,

        #[command(flatten)]
        filter: FilterArgs,
    },
    /// Launch the TUI
    Tui,
}

/// Filter controls shared by `list` and `export`.
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Case-insensitive text to search for
    #[arg(short, long, default_value = "")]
    pub search: String,

    /// Fields the search applies to: title, content or both
    #[arg(long, default_value_t = SearchScope::Both)]
    pub scope: SearchScope,

    /// Only show this author ("all" for every author)
    #[arg(short, long, default_value_t = AuthorFilter::All)]
    pub author: AuthorFilter,

    /// Earliest date to include (YYYY-MM-DD, inclusive)
    #[arg(long, value_parser = parse_date_arg)]
    pub from: Option<NaiveDate>,

    /// Latest date to include (YYYY-MM-DD, inclusive)
    #[arg(long, value_parser = parse_date_arg)]
    pub to: Option<NaiveDate>,

    /// Only show favorites
    #[arg(long)]
    pub favorites: bool,
}

impl FilterArgs {
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            text: self.search.clone(),
            scope: self.scope,
            author: self.author.clone(),
            start_date: self.from,
            end_date: self.to,
            favorites_only: self.favorites,
        }
    }
}

fn parse_date_arg(s: &str) -> Result<NaiveDate, String> {
    parse_calendar_date(s).ok_or_else(|| format!("Invalid date: {} (expected YYYY-MM-DD)", s))
}
