//! The FilterPipeline orchestrates multiple filters and the final sort.
//!
//! This module provides the main FilterPipeline struct that chains
//! multiple filters together using the builder pattern.

use crate::filters::{GenreFilter, LanguageFilter, ReleaseYearFilter};
use crate::selection::FilterSelection;
use crate::sort::sort_movies;
use crate::traits::Filter;
use catalog::CanonicalMovie;

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(GenreFilter)
///     .add_filter(LanguageFilter)
///     .add_filter(ReleaseYearFilter);
///
/// let view = pipeline.apply(&movies, &selection);
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// The genre, language and release-year filters, in that order
    pub fn standard() -> Self {
        Self::new()
            .add_filter(GenreFilter)
            .add_filter(LanguageFilter)
            .add_filter(ReleaseYearFilter)
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Whether `movie` passes every filter (logical AND)
    pub fn matches(&self, movie: &CanonicalMovie, selection: &FilterSelection) -> bool {
        self.filters
            .iter()
            .all(|filter| filter.matches(movie, selection))
    }

    /// Filter, then stable-sort, into a new sequence.
    ///
    /// ## Algorithm
    /// 1. Borrow every input movie, in input order
    /// 2. For each filter in order, keep the movies that pass
    /// 3. Sort the survivors by the selection's key and direction
    ///
    /// The input is untouched; the result borrows the same records.
    pub fn apply<'a, I>(&self, movies: I, selection: &FilterSelection) -> Vec<&'a CanonicalMovie>
    where
        I: IntoIterator<Item = &'a CanonicalMovie>,
    {
        let mut current: Vec<&'a CanonicalMovie> = movies.into_iter().collect();
        for filter in &self.filters {
            let before = current.len();
            current = filter.apply(current, selection);
            tracing::debug!(
                "Filter applied: {} ({} -> {} movies)",
                filter.name(),
                before,
                current.len()
            );
        }
        sort_movies(&mut current, selection.sort_by, selection.sort_order);
        tracing::debug!(
            "Sorted {} movies by {} ({:?})",
            current.len(),
            selection.sort_by,
            selection.sort_order
        );
        current
    }

    /// Number of movies passing every filter; sorting is skipped
    pub fn count<'a, I>(&self, movies: I, selection: &FilterSelection) -> usize
    where
        I: IntoIterator<Item = &'a CanonicalMovie>,
    {
        movies
            .into_iter()
            .filter(|movie| self.matches(movie, selection))
            .count()
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}

/// Apply the standard pipeline: filter by genre, language and year, then sort
pub fn apply_filters<'a, I>(movies: I, selection: &FilterSelection) -> Vec<&'a CanonicalMovie>
where
    I: IntoIterator<Item = &'a CanonicalMovie>,
{
    FilterPipeline::standard().apply(movies, selection)
}

/// Decide inclusion of a single movie under the standard filters
pub fn matches(movie: &CanonicalMovie, selection: &FilterSelection) -> bool {
    FilterPipeline::standard().matches(movie, selection)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::MinimumRatingFilter;
    use crate::selection::{SortKey, SortOrder};

    fn movie(id: &str, vote_average: f64) -> CanonicalMovie {
        CanonicalMovie {
            vote_average,
            ..CanonicalMovie::new(id, id)
        }
    }

    #[test]
    fn test_empty_pipeline() {
        let pipeline = FilterPipeline::new();
        let movies = vec![movie("1", 5.0), movie("2", 8.0)];
        let selection = FilterSelection::new().sorted_by(SortKey::Unsorted, SortOrder::Asc);

        let filtered = pipeline.apply(&movies, &selection);
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].id, "1");
    }

    #[test]
    fn test_single_filter() {
        let pipeline = FilterPipeline::new().add_filter(MinimumRatingFilter::new(7.0));
        let movies = vec![movie("1", 5.0), movie("2", 8.0)];

        let filtered = pipeline.apply(&movies, &FilterSelection::new());
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "2");
        assert_eq!(pipeline.count(&movies, &FilterSelection::new()), 1);
    }

    #[test]
    fn test_apply_returns_references_to_input_records() {
        let movies = vec![movie("1", 5.0)];
        let filtered = apply_filters(&movies, &FilterSelection::new());
        assert!(std::ptr::eq(filtered[0], &movies[0]));
    }

    #[test]
    fn test_matches_is_a_logical_and() {
        let record = CanonicalMovie {
            genre_ids: [28].into_iter().collect(),
            original_language: "en".to_string(),
            release_date: "2024-03-01".to_string(),
            ..CanonicalMovie::new("1", "One")
        };

        assert!(matches(&record, &FilterSelection::new().with_genre(28).with_year(2024)));
        assert!(!matches(&record, &FilterSelection::new().with_genre(28).with_language("fr")));
    }
}
