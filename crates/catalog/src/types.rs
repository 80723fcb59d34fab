//! Core domain types for the movie catalog.
//!
//! `CanonicalMovie` is the one record shape every other crate works with,
//! independent of the upstream API's field names. Records are built by the
//! normalizer (or by test fixtures) and are only ever borrowed afterwards.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

// =============================================================================
// Type Aliases
// =============================================================================

/// Unique identifier for a movie (the upstream IMDb id, e.g. `tt1375666`)
pub type MovieId = String;

/// Numeric genre identifier (TMDB-style, e.g. 28 = Action)
pub type GenreId = u32;

/// Poster path used whenever the upstream has no usable image
pub const POSTER_PLACEHOLDER: &str = "/images/no-poster.png";

/// Label shown in place of a release year that cannot be parsed
pub const UNKNOWN_YEAR: &str = "N/A";

// =============================================================================
// Movie-related Types
// =============================================================================

/// Kind of title, from the upstream `Type` field
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaType {
    #[default]
    Movie,
    Series,
    Episode,
    Game,
    Other,
}

impl MediaType {
    /// Map the upstream type string; anything unknown becomes `Other`
    pub fn from_upstream(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "movie" => MediaType::Movie,
            "series" => MediaType::Series,
            "episode" => MediaType::Episode,
            "game" => MediaType::Game,
            _ => MediaType::Other,
        }
    }
}

/// The internal, normalized movie record.
///
/// Fields are public for reading and for fixtures, but nothing downstream
/// mutates a record: filtering and sorting hand out `&CanonicalMovie`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalMovie {
    pub id: MovieId,
    pub title: String,
    pub overview: String,
    pub poster_path: String,
    pub backdrop_path: String,
    /// `YYYY-MM-DD` when known; may be empty or malformed in fixtures
    pub release_date: String,
    /// 0.0 - 10.0, 0.0 when the upstream has no rating
    pub vote_average: f64,
    pub vote_count: u64,
    pub popularity: f64,
    pub genre_ids: BTreeSet<GenreId>,
    /// ISO 639-1-like code, empty when unknown
    pub original_language: String,
    pub original_title: String,
    pub adult: bool,
    pub video: bool,
    pub media_type: MediaType,
    /// Only set on records built from a detail lookup
    pub tagline: Option<String>,
}

impl CanonicalMovie {
    /// A record with the given id and title and every other field defaulted
    pub fn new(id: impl Into<MovieId>, title: impl Into<String>) -> Self {
        let title = title.into();
        Self {
            id: id.into(),
            original_title: title.clone(),
            title,
            ..Self::default()
        }
    }

    /// Parsed release date, `None` when empty or malformed
    pub fn release_day(&self) -> Option<NaiveDate> {
        parse_release_date(&self.release_date)
    }

    /// Calendar year of the release date
    pub fn release_year(&self) -> Option<i32> {
        self.release_day().map(|date| date.year())
    }

    /// Release year for display; `"N/A"` when it cannot be parsed
    pub fn year_label(&self) -> String {
        self.release_year()
            .map(|year| year.to_string())
            .unwrap_or_else(|| UNKNOWN_YEAR.to_string())
    }

    pub fn has_poster(&self) -> bool {
        self.poster_path != POSTER_PLACEHOLDER
    }
}

impl Default for CanonicalMovie {
    fn default() -> Self {
        Self {
            id: MovieId::new(),
            title: String::new(),
            overview: String::new(),
            poster_path: POSTER_PLACEHOLDER.to_string(),
            backdrop_path: POSTER_PLACEHOLDER.to_string(),
            release_date: String::new(),
            vote_average: 0.0,
            vote_count: 0,
            popularity: 0.0,
            genre_ids: BTreeSet::new(),
            original_language: String::new(),
            original_title: String::new(),
            adult: false,
            video: false,
            media_type: MediaType::Movie,
            tagline: None,
        }
    }
}

/// Parse a release date the way the catalog stores it.
///
/// Accepts a full `YYYY-MM-DD` date or a bare four-digit year (read as
/// January 1st). Anything else is `None`.
pub fn parse_release_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date);
    }
    if value.len() == 4 && value.bytes().all(|b| b.is_ascii_digit()) {
        let year: i32 = value.parse().ok()?;
        return NaiveDate::from_ymd_opt(year, 1, 1);
    }
    None
}
