//! Normalize upstream records into `CanonicalMovie`.
//!
//! Pure mapping, no I/O. Every sentinel the upstream uses for "nothing"
//! (`"N/A"`, `"null"`, empty, absent) becomes a type-appropriate default,
//! so these functions cannot fail.

use crate::facets::{genre_id_for_name, language_code_for_name};
use crate::payload::{RawDetailResult, RawSearchResult};
use crate::types::{CanonicalMovie, GenreId, MediaType, POSTER_PLACEHOLDER};
use chrono::NaiveDate;
use std::collections::BTreeSet;

/// Normalize one hit from a search page
pub fn normalize_search_result(raw: &RawSearchResult) -> CanonicalMovie {
    let title = text(&raw.title);
    let poster = image(&raw.poster);

    CanonicalMovie {
        id: text(&raw.imdb_id),
        original_title: title.clone(),
        title,
        backdrop_path: poster.clone(),
        poster_path: poster,
        release_date: year_to_date(raw.year.as_deref()),
        vote_average: parse_rating(raw.imdb_rating.as_deref()),
        media_type: media_type(&raw.kind),
        ..CanonicalMovie::default()
    }
}

/// Normalize a single-title lookup; this variant carries a tagline
pub fn normalize_detail_result(raw: &RawDetailResult) -> CanonicalMovie {
    let title = text(&raw.title);
    let poster = image(&raw.poster);
    let overview = text(&raw.plot);
    let genre_names = list(&raw.genre);
    let vote_count = parse_votes(raw.imdb_votes.as_deref());

    let release_date = present(&raw.released)
        .and_then(parse_released)
        .map(|date| date.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| year_to_date(raw.year.as_deref()));

    let genre_ids: BTreeSet<GenreId> = genre_names
        .iter()
        .filter_map(|name| genre_id_for_name(name))
        .collect();

    let original_language = list(&raw.language)
        .first()
        .and_then(|name| language_code_for_name(name))
        .unwrap_or_default()
        .to_string();

    CanonicalMovie {
        id: text(&raw.imdb_id),
        original_title: title.clone(),
        title,
        tagline: Some(first_sentence(&overview)),
        overview,
        backdrop_path: poster.clone(),
        poster_path: poster,
        release_date,
        vote_average: parse_rating(raw.imdb_rating.as_deref()),
        vote_count,
        popularity: vote_count as f64 / 1000.0,
        genre_ids,
        original_language,
        adult: genre_names
            .iter()
            .any(|name| name.eq_ignore_ascii_case("adult")),
        video: false,
        media_type: media_type(&raw.kind),
    }
}

/// Rating text to 0.0 - 10.0; anything unparseable is 0.0
pub fn parse_rating(value: Option<&str>) -> f64 {
    value
        .filter(|v| !is_sentinel(v))
        .and_then(|v| v.trim().parse::<f64>().ok())
        .filter(|rating| rating.is_finite())
        .map(|rating| rating.clamp(0.0, 10.0))
        .unwrap_or(0.0)
}

/// Vote count text such as `"2,451,214"`; anything unparseable is 0
pub fn parse_votes(value: Option<&str>) -> u64 {
    value
        .filter(|v| !is_sentinel(v))
        .map(|v| v.chars().filter(|c| !matches!(*c, ',' | '_' | ' ')).collect::<String>())
        .and_then(|digits| digits.parse().ok())
        .unwrap_or(0)
}

fn is_sentinel(value: &str) -> bool {
    let value = value.trim();
    value.is_empty() || value.eq_ignore_ascii_case("n/a") || value.eq_ignore_ascii_case("null")
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !is_sentinel(v)).map(str::trim)
}

fn text(value: &Option<String>) -> String {
    present(value).unwrap_or_default().to_string()
}

fn image(value: &Option<String>) -> String {
    present(value).unwrap_or(POSTER_PLACEHOLDER).to_string()
}

fn list(value: &Option<String>) -> Vec<String> {
    present(value)
        .map(|v| {
            v.split(',')
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

fn media_type(value: &Option<String>) -> MediaType {
    present(value)
        .map(MediaType::from_upstream)
        .unwrap_or_default()
}

/// `Released` comes as `16 Jul 2010`; ISO dates are accepted as well
fn parse_released(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%d %b %Y")
        .or_else(|_| NaiveDate::parse_from_str(value, "%Y-%m-%d"))
        .ok()
}

/// Leading four-digit year of `Year` (`"2010"`, `"2008–2013"`) as Jan 1st
fn year_to_date(value: Option<&str>) -> String {
    let Some(value) = value.filter(|v| !is_sentinel(v)) else {
        return String::new();
    };
    let digits: String = value.trim().chars().take(4).collect();
    if digits.len() == 4 && digits.chars().all(|c| c.is_ascii_digit()) {
        format!("{}-01-01", digits)
    } else {
        String::new()
    }
}

fn first_sentence(text: &str) -> String {
    match text.find(". ") {
        Some(end) => text[..=end].to_string(),
        None => text.to_string(),
    }
}
