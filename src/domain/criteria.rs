use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;

/// Which record fields a text query is matched against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchScope {
    Title,
    Content,
    #[default]
    Both,
}

impl SearchScope {
    pub fn next(self) -> Self {
        match self {
            SearchScope::Title => SearchScope::Content,
            SearchScope::Content => SearchScope::Both,
            SearchScope::Both => SearchScope::Title,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SearchScope::Title => "title",
            SearchScope::Content => "content",
            SearchScope::Both => "both",
        }
    }
}

impl fmt::Display for SearchScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchScope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "title" => Ok(SearchScope::Title),
            "content" => Ok(SearchScope::Content),
            "both" => Ok(SearchScope::Both),
            other => Err(format!(
                "Unknown search scope: {} (expected title, content or both)",
                other
            )),
        }
    }
}

/// Author selection: either every author or exactly one name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AuthorFilter {
    #[default]
    All,
    Only(String),
}

impl AuthorFilter {
    pub const ALL: &'static str = "all";

    pub fn label(&self) -> &str {
        match self {
            AuthorFilter::All => Self::ALL,
            AuthorFilter::Only(name) => name,
        }
    }
}

impl fmt::Display for AuthorFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for AuthorFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == Self::ALL {
            Ok(AuthorFilter::All)
        } else {
            Ok(AuthorFilter::Only(s.to_string()))
        }
    }
}

/// The combined search/selection state that decides which records are visible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub text: String,
    pub scope: SearchScope,
    pub author: AuthorFilter,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub favorites_only: bool,
}

impl FilterCriteria {
    /// The query as matched: trimmed and lowercased. `None` when blank.
    pub fn needle(&self) -> Option<String> {
        let needle = self.text.trim().to_lowercase();
        if needle.is_empty() {
            None
        } else {
            Some(needle)
        }
    }

    pub fn has_date_bounds(&self) -> bool {
        self.start_date.is_some() || self.end_date.is_some()
    }

    /// True when no predicate can exclude anything.
    pub fn is_unfiltered(&self) -> bool {
        self.needle().is_none()
            && self.author == AuthorFilter::All
            && !self.has_date_bounds()
            && !self.favorites_only
    }
}
