//! Filter implementations for the movie pipeline.
//!
//! One filter per selection dimension, plus the rating threshold used for
//! top-rated lists. All of them compose into a FilterPipeline.

pub mod genre;
pub mod language;
pub mod minimum_rating;
pub mod release_year;

// Re-export for convenience
pub use genre::GenreFilter;
pub use language::LanguageFilter;
pub use minimum_rating::MinimumRatingFilter;
pub use release_year::ReleaseYearFilter;
