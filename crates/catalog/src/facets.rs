//! Genre and language facets.
//!
//! A facet is a selectable filter value with a stable code and a display
//! name. The built-in catalogs below are what the normalizer uses to turn
//! upstream names ("Sci-Fi", "English") into codes, and what a consumer
//! passes to the pipeline's facet views.

use crate::types::GenreId;
use serde::{Deserialize, Serialize};

/// A `(code, display name)` pair
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Facet<C> {
    pub code: C,
    pub name: String,
}

impl<C> Facet<C> {
    pub fn new(code: C, name: impl Into<String>) -> Self {
        Self {
            code,
            name: name.into(),
        }
    }
}

pub type GenreFacet = Facet<GenreId>;
pub type LanguageFacet = Facet<String>;

const GENRES: &[(GenreId, &str)] = &[
    (28, "Action"),
    (12, "Adventure"),
    (16, "Animation"),
    (35, "Comedy"),
    (80, "Crime"),
    (99, "Documentary"),
    (18, "Drama"),
    (10751, "Family"),
    (14, "Fantasy"),
    (36, "History"),
    (27, "Horror"),
    (10402, "Music"),
    (9648, "Mystery"),
    (10749, "Romance"),
    (878, "Science Fiction"),
    (10770, "TV Movie"),
    (53, "Thriller"),
    (10752, "War"),
    (37, "Western"),
];

/// Upstream genre names that differ from the catalog's display names
const GENRE_ALIASES: &[(&str, GenreId)] = &[
    ("sci-fi", 878),
    ("musical", 10402),
    ("biography", 36),
    ("film-noir", 80),
];

const LANGUAGES: &[(&str, &str)] = &[
    ("en", "English"),
    ("es", "Spanish"),
    ("fr", "French"),
    ("de", "German"),
    ("it", "Italian"),
    ("pt", "Portuguese"),
    ("ru", "Russian"),
    ("ja", "Japanese"),
    ("ko", "Korean"),
    ("zh", "Chinese"),
    ("hi", "Hindi"),
    ("ar", "Arabic"),
    ("sv", "Swedish"),
    ("da", "Danish"),
    ("no", "Norwegian"),
    ("nl", "Dutch"),
    ("pl", "Polish"),
    ("tr", "Turkish"),
];

const LANGUAGE_ALIASES: &[(&str, &str)] = &[("mandarin", "zh"), ("cantonese", "zh")];

/// The genre catalog, in display order
pub fn default_genres() -> Vec<GenreFacet> {
    GENRES
        .iter()
        .map(|&(id, name)| Facet::new(id, name))
        .collect()
}

/// The language catalog, in display order
pub fn default_languages() -> Vec<LanguageFacet> {
    LANGUAGES
        .iter()
        .map(|&(code, name)| Facet::new(code.to_string(), name))
        .collect()
}

/// Resolve a genre name (case-insensitive, upstream aliases included)
pub fn genre_id_for_name(name: &str) -> Option<GenreId> {
    let needle = name.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }
    GENRES
        .iter()
        .find(|(_, display)| display.to_lowercase() == needle)
        .map(|&(id, _)| id)
        .or_else(|| {
            GENRE_ALIASES
                .iter()
                .find(|(alias, _)| *alias == needle)
                .map(|&(_, id)| id)
        })
}

/// Resolve a language name, or an already-coded value, to its code
pub fn language_code_for_name(name: &str) -> Option<&'static str> {
    let needle = name.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }
    LANGUAGES
        .iter()
        .find(|(code, display)| display.to_lowercase() == needle || *code == needle)
        .map(|&(code, _)| code)
        .or_else(|| {
            LANGUAGE_ALIASES
                .iter()
                .find(|(alias, _)| *alias == needle)
                .map(|&(_, code)| code)
        })
}
