//! User-selected filter and sort criteria.
//!
//! A `FilterSelection` is a plain value: the owner (a store, a UI) mutates
//! it, and hands a reference to the pipeline on every derive. The pipeline
//! never keeps it.

use catalog::GenreId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Which attribute to order movies by
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    #[default]
    Popularity,
    ReleaseDate,
    VoteAverage,
    Title,
    /// Any key this build does not know; keeps the filtered order as is
    #[serde(other)]
    Unsorted,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Popularity => "popularity",
            SortKey::ReleaseDate => "release_date",
            SortKey::VoteAverage => "vote_average",
            SortKey::Title => "title",
            SortKey::Unsorted => "unsorted",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "popularity" => Ok(SortKey::Popularity),
            "release_date" | "date" => Ok(SortKey::ReleaseDate),
            "vote_average" | "rating" => Ok(SortKey::VoteAverage),
            "title" => Ok(SortKey::Title),
            "unsorted" | "none" => Ok(SortKey::Unsorted),
            other => Err(format!("unknown sort key: {}", other)),
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortOrder::Asc),
            "desc" | "descending" => Ok(SortOrder::Desc),
            other => Err(format!("unknown sort order: {}", other)),
        }
    }
}

/// Complete set of user-chosen filter and sort criteria.
///
/// An empty set on a dimension means "no restriction" on that dimension.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterSelection {
    pub genres: BTreeSet<GenreId>,
    pub languages: BTreeSet<String>,
    pub years: BTreeSet<i32>,
    pub sort_by: SortKey,
    pub sort_order: SortOrder,
}

impl FilterSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style sort setter
    pub fn sorted_by(mut self, sort_by: SortKey, sort_order: SortOrder) -> Self {
        self.sort_by = sort_by;
        self.sort_order = sort_order;
        self
    }

    pub fn with_genre(mut self, genre: GenreId) -> Self {
        self.genres.insert(genre);
        self
    }

    pub fn with_language(mut self, code: impl Into<String>) -> Self {
        self.languages.insert(code.into());
        self
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.years.insert(year);
        self
    }

    /// Add the genre if absent, remove it if present
    pub fn toggle_genre(&mut self, genre: GenreId) {
        if !self.genres.remove(&genre) {
            self.genres.insert(genre);
        }
    }

    pub fn toggle_language(&mut self, code: &str) {
        if !self.languages.remove(code) {
            self.languages.insert(code.to_string());
        }
    }

    pub fn toggle_year(&mut self, year: i32) {
        if !self.years.remove(&year) {
            self.years.insert(year);
        }
    }

    /// Drop every filter; sort settings are kept
    pub fn clear_filters(&mut self) {
        self.genres.clear();
        self.languages.clear();
        self.years.clear();
    }
}
