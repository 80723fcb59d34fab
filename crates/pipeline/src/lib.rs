//! Pipeline for filtering and sorting canonical movies.
//!
//! This crate provides:
//! - FilterSelection, the user's filter and sort criteria
//! - Filter trait and one implementation per selection dimension
//! - FilterPipeline for composing filters, followed by a stable sort
//! - Views derived from a collection or a selection (facets, counts, summary)
//!
//! ## Architecture
//! Every derive runs in two stages:
//! 1. Filters drop movies that fail any active dimension (logical AND)
//! 2. The survivors are stable-sorted by the selection's key and direction
//!
//! Nothing here owns state. Movies and the selection are borrowed, and the
//! result is a new `Vec` of references into the caller's collection.
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{apply_filters, filter_summary, FilterSelection, SortKey, SortOrder};
//!
//! let selection = FilterSelection::new()
//!     .with_genre(28)
//!     .with_year(2024)
//!     .sorted_by(SortKey::Title, SortOrder::Asc);
//!
//! let view = apply_filters(&movies, &selection);
//! let summary = filter_summary(&selection, &catalog::default_genres(), &catalog::default_languages());
//! ```

pub mod filter_pipeline;
pub mod filters;
pub mod selection;
pub mod sort;
pub mod traits;
pub mod views;

// Re-export main types
pub use filter_pipeline::{apply_filters, matches, FilterPipeline};
pub use selection::{FilterSelection, SortKey, SortOrder};
pub use sort::{compare, sort_movies};
pub use traits::Filter;
pub use views::{
    available_genres, available_languages, available_years, filter_count, filter_summary,
    filtered_count, has_active_filters, NO_FILTER_SUMMARY, SUMMARY_GROUP_SEPARATOR,
};
