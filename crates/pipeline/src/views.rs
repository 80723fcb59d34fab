//! Auxiliary views derived from a movie collection or a selection.
//!
//! These back the pick-lists and badges around a filtered list: which
//! facets are worth offering for the movies in view, how many filters are
//! active, and a one-line description of the current selection.

use crate::filter_pipeline::FilterPipeline;
use crate::selection::FilterSelection;
use catalog::{CanonicalMovie, GenreFacet, GenreId, LanguageFacet};
use std::collections::{BTreeSet, HashSet};

/// Summary shown when no filter dimension is active
pub const NO_FILTER_SUMMARY: &str = "All movies";

/// Separator between the genre, language and year groups of a summary
pub const SUMMARY_GROUP_SEPARATOR: &str = " | ";

/// Genres from `all_genres` that at least one movie carries, in catalog order
pub fn available_genres(movies: &[CanonicalMovie], all_genres: &[GenreFacet]) -> Vec<GenreFacet> {
    let present: HashSet<GenreId> = movies
        .iter()
        .flat_map(|movie| movie.genre_ids.iter().copied())
        .collect();

    all_genres
        .iter()
        .filter(|facet| present.contains(&facet.code))
        .cloned()
        .collect()
}

/// Languages from `all_languages` used by at least one movie, in catalog order
pub fn available_languages(
    movies: &[CanonicalMovie],
    all_languages: &[LanguageFacet],
) -> Vec<LanguageFacet> {
    let present: HashSet<&str> = movies
        .iter()
        .map(|movie| movie.original_language.as_str())
        .collect();

    all_languages
        .iter()
        .filter(|facet| present.contains(facet.code.as_str()))
        .cloned()
        .collect()
}

/// Distinct parseable release years, newest first
pub fn available_years(movies: &[CanonicalMovie]) -> Vec<i32> {
    let years: BTreeSet<i32> = movies.iter().filter_map(CanonicalMovie::release_year).collect();
    years.into_iter().rev().collect()
}

/// Number of movies passing the standard filters; the sort is ignored
pub fn filtered_count(movies: &[CanonicalMovie], selection: &FilterSelection) -> usize {
    FilterPipeline::standard().count(movies, selection)
}

/// True iff any genre, language or year is selected
pub fn has_active_filters(selection: &FilterSelection) -> bool {
    !selection.genres.is_empty() || !selection.languages.is_empty() || !selection.years.is_empty()
}

/// Number of selected values across all three dimensions (sort excluded)
pub fn filter_count(selection: &FilterSelection) -> usize {
    selection.genres.len() + selection.languages.len() + selection.years.len()
}

/// Human-readable description of the active filters.
///
/// ## Algorithm
/// 1. Selected genres that exist in the catalog, named, in catalog order
/// 2. Selected languages that exist in the catalog, named, in catalog order
/// 3. Selected years, newest first
/// 4. Each non-empty group is comma-joined; groups are joined by
///    `SUMMARY_GROUP_SEPARATOR`
///
/// Returns `NO_FILTER_SUMMARY` when no dimension is active.
pub fn filter_summary(
    selection: &FilterSelection,
    genre_catalog: &[GenreFacet],
    language_catalog: &[LanguageFacet],
) -> String {
    if !has_active_filters(selection) {
        return NO_FILTER_SUMMARY.to_string();
    }

    let genres: Vec<&str> = genre_catalog
        .iter()
        .filter(|facet| selection.genres.contains(&facet.code))
        .map(|facet| facet.name.as_str())
        .collect();

    let languages: Vec<&str> = language_catalog
        .iter()
        .filter(|facet| selection.languages.contains(&facet.code))
        .map(|facet| facet.name.as_str())
        .collect();

    let years: Vec<String> = selection.years.iter().rev().map(i32::to_string).collect();

    let groups: Vec<String> = [genres.join(", "), languages.join(", "), years.join(", ")]
        .into_iter()
        .filter(|group| !group.is_empty())
        .collect();

    if groups.is_empty() {
        // Only unknown genre/language codes were selected
        return NO_FILTER_SUMMARY.to_string();
    }
    groups.join(SUMMARY_GROUP_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::Facet;

    fn genre_catalog() -> Vec<GenreFacet> {
        vec![
            Facet::new(1, "Action"),
            Facet::new(2, "Comedy"),
            Facet::new(3, "Drama"),
        ]
    }

    fn language_catalog() -> Vec<LanguageFacet> {
        vec![
            Facet::new("en".to_string(), "English"),
            Facet::new("fr".to_string(), "French"),
        ]
    }

    #[test]
    fn test_summary_orders_groups_and_years() {
        let selection = FilterSelection::new()
            .with_genre(3)
            .with_genre(1)
            .with_language("fr")
            .with_year(2019)
            .with_year(2024);

        assert_eq!(
            filter_summary(&selection, &genre_catalog(), &language_catalog()),
            "Action, Drama | French | 2024, 2019"
        );
    }

    #[test]
    fn test_summary_skips_unknown_codes() {
        let selection = FilterSelection::new().with_genre(99);
        assert_eq!(
            filter_summary(&selection, &genre_catalog(), &language_catalog()),
            NO_FILTER_SUMMARY
        );

        let selection = FilterSelection::new().with_genre(99).with_year(2001);
        assert_eq!(
            filter_summary(&selection, &genre_catalog(), &language_catalog()),
            "2001"
        );
    }

    #[test]
    fn test_counts_ignore_sort() {
        let selection = FilterSelection::new()
            .with_genre(1)
            .with_genre(2)
            .with_language("en")
            .sorted_by(crate::SortKey::Title, crate::SortOrder::Asc);

        assert!(has_active_filters(&selection));
        assert_eq!(filter_count(&selection), 3);

        let sort_only = FilterSelection::new().sorted_by(crate::SortKey::Title, crate::SortOrder::Asc);
        assert!(!has_active_filters(&sort_only));
        assert_eq!(filter_count(&sort_only), 0);
    }

    #[test]
    fn test_available_languages_in_catalog_order() {
        let movies = vec![
            CanonicalMovie {
                original_language: "fr".to_string(),
                ..CanonicalMovie::new("1", "Amélie")
            },
            CanonicalMovie {
                original_language: "en".to_string(),
                ..CanonicalMovie::new("2", "Heat")
            },
            CanonicalMovie {
                original_language: "xx".to_string(),
                ..CanonicalMovie::new("3", "Unknown")
            },
        ];

        let languages = available_languages(&movies, &language_catalog());
        let codes: Vec<_> = languages.iter().map(|l| l.code.as_str()).collect();
        assert_eq!(codes, vec!["en", "fr"]);
    }

    #[test]
    fn test_available_years_descending_and_distinct() {
        let dates = ["2001-01-01", "1999-12-31", "2001-06-01", "garbage"];
        let movies: Vec<_> = dates
            .iter()
            .enumerate()
            .map(|(i, date)| CanonicalMovie {
                release_date: date.to_string(),
                ..CanonicalMovie::new(i.to_string(), "")
            })
            .collect();

        assert_eq!(available_years(&movies), vec![2001, 1999]);
    }
}
