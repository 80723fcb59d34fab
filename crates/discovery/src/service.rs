//! # Movie Service
//!
//! Maps the logical queries a discovery UI needs onto the two endpoints the
//! upstream actually has (title search and single-title lookup):
//!
//! - popular: search a generic term, scoped to the current year
//! - top rated: the same single search, filtered to a rating threshold and
//!   sorted by rating, with no per-result detail fetches
//! - upcoming: the generic search scoped to next year
//! - search: the user's term, passed through
//! - details: one lookup by IMDb id
//!
//! Every result is normalized into `CanonicalMovie` before it leaves here.
//! Upstream "no results" style failures become empty pages; transport
//! failures propagate untouched.

use std::time::Instant;

use chrono::Datelike;
use tracing::{debug, info, warn};

use catalog::{normalize_detail_result, normalize_search_result, CanonicalMovie, OmdbResponse};
use omdb_client::{LookupQuery, OmdbClient, OmdbConfig, Plot, SearchQuery};
use pipeline::filters::MinimumRatingFilter;
use pipeline::{FilterPipeline, FilterSelection, SortKey, SortOrder};

use crate::error::{DiscoveryError, Result};

/// Generic search term standing in for a "browse everything" endpoint
pub const DISCOVERY_TERM: &str = "movie";

/// Minimum `vote_average` for the top-rated list
pub const TOP_RATED_THRESHOLD: f64 = 7.0;

/// Page size of the upstream search endpoint
pub const RESULTS_PER_PAGE: u32 = 10;

/// One page of normalized results
#[derive(Debug, Clone, PartialEq)]
pub struct MoviePage {
    pub movies: Vec<CanonicalMovie>,
    /// 1-based
    pub page: u32,
    /// Total hits the upstream reported for the whole query
    pub total_results: u32,
}

impl MoviePage {
    pub fn empty(page: u32) -> Self {
        Self {
            movies: Vec::new(),
            page,
            total_results: 0,
        }
    }

    pub fn total_pages(&self) -> u32 {
        self.total_results.div_ceil(RESULTS_PER_PAGE)
    }

    pub fn has_next_page(&self) -> bool {
        self.page < self.total_pages()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}

/// The API adaptation layer
#[derive(Clone)]
pub struct MovieService {
    client: OmdbClient,
}

impl MovieService {
    pub fn new(client: OmdbClient) -> Self {
        Self { client }
    }

    pub fn from_config(config: &OmdbConfig) -> Result<Self> {
        Ok(Self::new(OmdbClient::new(config)?))
    }

    /// Movies from the current calendar year
    pub async fn popular(&self, page: u32) -> Result<MoviePage> {
        self.discover_year(current_year(), page).await
    }

    /// Movies from the current year rated at least `TOP_RATED_THRESHOLD`.
    ///
    /// Only the requested search page is considered, so this is not a true
    /// top-N over the whole catalog. The rating comes from the search hits
    /// themselves: the public OMDb search endpoint does not send
    /// `imdbRating`, every hit then normalizes to 0.0 and the page comes
    /// back empty. Only mirrors that include ratings on hits fill it.
    pub async fn top_rated(&self, page: u32) -> Result<MoviePage> {
        self.top_rated_in(current_year(), page).await
    }

    /// Movies scheduled for next calendar year
    pub async fn upcoming(&self, page: u32) -> Result<MoviePage> {
        self.discover_year(current_year() + 1, page).await
    }

    /// Search by the user's term.
    ///
    /// A blank term is answered locally with an empty page.
    pub async fn search(&self, query: &str, page: u32) -> Result<MoviePage> {
        let term = query.trim();
        if term.is_empty() {
            debug!("Blank search term, skipping upstream call");
            return Ok(MoviePage::empty(page));
        }
        self.search_page(SearchQuery::new(term).page(page)).await
    }

    /// Full record for one title, including the tagline.
    ///
    /// A logical upstream failure ("Incorrect IMDb ID.") is an error here
    /// because there is no movie to return.
    pub async fn details(&self, id: &str) -> Result<CanonicalMovie> {
        let query = LookupQuery::ById {
            id: id.to_string(),
            plot: Plot::Full,
        };

        match self.client.lookup(&query).await? {
            OmdbResponse::Item(raw) => {
                let movie = normalize_detail_result(&raw);
                info!("Fetched details for {} ({})", movie.id, movie.title);
                Ok(movie)
            }
            OmdbResponse::Failure { message } => {
                warn!("Detail lookup for {} failed upstream: {}", id, message);
                Err(DiscoveryError::NotFound {
                    id: id.to_string(),
                    message,
                })
            }
            OmdbResponse::SearchPage { .. } => {
                Err(DiscoveryError::UnexpectedResponse(format!("details of {}", id)))
            }
        }
    }

    /// The generic search scoped to `year`
    pub async fn discover_year(&self, year: i32, page: u32) -> Result<MoviePage> {
        let query = SearchQuery::new(DISCOVERY_TERM)
            .kind("movie")
            .year(year)
            .page(page);
        self.search_page(query).await
    }

    /// Top rated within `year`; one upstream call per page
    pub async fn top_rated_in(&self, year: i32, page: u32) -> Result<MoviePage> {
        let discovered = self.discover_year(year, page).await?;

        let pipeline = FilterPipeline::new().add_filter(MinimumRatingFilter::new(TOP_RATED_THRESHOLD));
        let selection = FilterSelection::new().sorted_by(SortKey::VoteAverage, SortOrder::Desc);
        let movies: Vec<CanonicalMovie> = pipeline
            .apply(&discovered.movies, &selection)
            .into_iter()
            .cloned()
            .collect();

        info!(
            "Top rated {}: kept {} of {} movies at >= {}",
            year,
            movies.len(),
            discovered.movies.len(),
            TOP_RATED_THRESHOLD
        );

        Ok(MoviePage {
            movies,
            ..discovered
        })
    }

    async fn search_page(&self, query: SearchQuery) -> Result<MoviePage> {
        let start_time = Instant::now();
        let page = query.page.unwrap_or(1);

        let result = match self.client.search(&query).await? {
            OmdbResponse::SearchPage {
                results,
                total_results,
            } => MoviePage {
                movies: results.iter().map(normalize_search_result).collect(),
                page,
                total_results,
            },
            OmdbResponse::Failure { message } => {
                warn!(
                    "Search for '{}' returned no results upstream: {}",
                    query.term, message
                );
                MoviePage::empty(page)
            }
            OmdbResponse::Item(raw) => MoviePage {
                movies: vec![normalize_detail_result(&raw)],
                page,
                total_results: 1,
            },
        };

        info!(
            "Search '{}' (year {:?}, page {}) -> {} movies in {:.2?}",
            query.term,
            query.year,
            page,
            result.movies.len(),
            start_time.elapsed()
        );
        Ok(result)
    }
}

fn current_year() -> i32 {
    chrono::Local::now().year()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_counts() {
        let page = MoviePage {
            movies: vec![CanonicalMovie::new("tt1", "One")],
            page: 2,
            total_results: 21,
        };
        assert_eq!(page.total_pages(), 3);
        assert!(page.has_next_page());

        let empty = MoviePage::empty(1);
        assert_eq!(empty.total_pages(), 0);
        assert!(!empty.has_next_page());
        assert!(empty.is_empty());
    }

    #[test]
    fn test_from_config_rejects_missing_key() {
        let result = MovieService::from_config(&OmdbConfig::default());
        assert!(matches!(result, Err(DiscoveryError::Upstream(_))));
    }
}
