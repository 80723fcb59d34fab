//! Filter to ensure minimum quality threshold.
//!
//! Removes movies rated below a fixed average, independent of the user's
//! selection. Used to build "top rated" lists out of a plain search page.

use crate::selection::FilterSelection;
use crate::traits::Filter;
use catalog::CanonicalMovie;

/// Removes movies whose `vote_average` is below `min_rating`.
pub struct MinimumRatingFilter {
    min_rating: f64,
}

impl MinimumRatingFilter {
    /// Create a new MinimumRatingFilter.
    ///
    /// # Arguments
    /// * `min_rating` - Minimum average rating on the 0-10 scale (typically 7.0)
    pub fn new(min_rating: f64) -> Self {
        Self { min_rating }
    }
}

impl Filter for MinimumRatingFilter {
    fn name(&self) -> &str {
        "MinimumRatingFilter"
    }

    fn matches(&self, movie: &CanonicalMovie, _selection: &FilterSelection) -> bool {
        movie.vote_average >= self.min_rating
    }
}
