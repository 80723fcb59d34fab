//! # Catalog Crate
//!
//! The canonical movie record and everything needed to build it from the
//! upstream OMDb API.
//!
//! ## Main Components
//!
//! - **types**: `CanonicalMovie`, id aliases, release-date helpers
//! - **facets**: genre/language `(code, name)` catalogs and name lookups
//! - **payload**: raw upstream shapes and the `OmdbResponse` tagged union
//! - **normalizer**: raw record -> `CanonicalMovie`, with default substitution
//! - **error**: errors for payloads that are not upstream responses at all
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::{OmdbResponse, normalize_search_result};
//!
//! let response = OmdbResponse::from_slice(&body)?;
//! if let OmdbResponse::SearchPage { results, .. } = response {
//!     let movies: Vec<_> = results.iter().map(normalize_search_result).collect();
//! }
//! ```

pub mod error;
pub mod facets;
pub mod normalizer;
pub mod payload;
pub mod types;

pub use error::{CatalogError, Result};
pub use facets::{
    default_genres, default_languages, genre_id_for_name, language_code_for_name, Facet,
    GenreFacet, LanguageFacet,
};
pub use normalizer::{normalize_detail_result, normalize_search_result};
pub use payload::{OmdbResponse, RawDetailResult, RawSearchResult};
pub use types::{
    parse_release_date, CanonicalMovie, GenreId, MediaType, MovieId, POSTER_PLACEHOLDER,
    UNKNOWN_YEAR,
};
