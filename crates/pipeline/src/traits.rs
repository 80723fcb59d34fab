//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! extensible filters to be applied to a movie collection.

use crate::selection::FilterSelection;
use catalog::CanonicalMovie;

/// Core trait for filtering movies.
///
/// A filter decides inclusion for one movie at a time. Filters borrow both
/// the movie and the selection and never mutate either, so one pipeline can
/// be shared across threads.
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Whether `movie` passes this filter under `selection`
    fn matches(&self, movie: &CanonicalMovie, selection: &FilterSelection) -> bool;

    /// Keep the movies that pass, preserving their order
    fn apply<'a>(
        &self,
        movies: Vec<&'a CanonicalMovie>,
        selection: &FilterSelection,
    ) -> Vec<&'a CanonicalMovie> {
        movies
            .into_iter()
            .filter(|movie| self.matches(movie, selection))
            .collect()
    }
}
