//! Discovery crate for the movie browser.
//!
//! This crate ties the upstream client, the normalizer and the filter
//! pipeline together:
//! - `MovieService` answers popular / top rated / upcoming / search /
//!   details queries with normalized movies
//! - `MovieStore` owns the current movie list and selection and derives
//!   filtered views from them

pub mod error;
pub mod service;
pub mod store;

pub use error::{DiscoveryError, Result};
pub use service::{MoviePage, MovieService, DISCOVERY_TERM, RESULTS_PER_PAGE, TOP_RATED_THRESHOLD};
pub use store::MovieStore;
