//! Filter on release year.

use crate::selection::FilterSelection;
use crate::traits::Filter;
use catalog::CanonicalMovie;

/// Keeps movies released in one of the selected calendar years.
///
/// ## Algorithm
/// 1. If no year is selected, keep every movie
/// 2. Extract the year from the movie's release date
/// 3. A movie whose date cannot be parsed has no year and is dropped
pub struct ReleaseYearFilter;

impl Filter for ReleaseYearFilter {
    fn name(&self) -> &str {
        "ReleaseYearFilter"
    }

    fn matches(&self, movie: &CanonicalMovie, selection: &FilterSelection) -> bool {
        if selection.years.is_empty() {
            return true;
        }
        movie
            .release_year()
            .is_some_and(|year| selection.years.contains(&year))
    }
}
