//! Explicit owner of the current movie list and filter selection.
//!
//! The store holds state; the pipeline derives views from it on demand and
//! keeps nothing. A consumer fills the store after a fetch, edits the
//! selection as the user clicks, and asks for `view()` on every render.

use catalog::{default_genres, default_languages, CanonicalMovie, GenreFacet, LanguageFacet};
use pipeline::{FilterPipeline, FilterSelection};
use std::collections::HashSet;
use tracing::debug;

use crate::service::MoviePage;

pub struct MovieStore {
    movies: Vec<CanonicalMovie>,
    selection: FilterSelection,
    pipeline: FilterPipeline,
    genre_catalog: Vec<GenreFacet>,
    language_catalog: Vec<LanguageFacet>,
}

impl MovieStore {
    /// Empty store using the built-in genre and language catalogs
    pub fn new() -> Self {
        Self::with_catalogs(default_genres(), default_languages())
    }

    pub fn with_catalogs(genre_catalog: Vec<GenreFacet>, language_catalog: Vec<LanguageFacet>) -> Self {
        Self {
            movies: Vec::new(),
            selection: FilterSelection::default(),
            pipeline: FilterPipeline::standard(),
            genre_catalog,
            language_catalog,
        }
    }

    pub fn movies(&self) -> &[CanonicalMovie] {
        &self.movies
    }

    pub fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    pub fn selection_mut(&mut self) -> &mut FilterSelection {
        &mut self.selection
    }

    pub fn set_selection(&mut self, selection: FilterSelection) {
        self.selection = selection;
    }

    pub fn genre_catalog(&self) -> &[GenreFacet] {
        &self.genre_catalog
    }

    pub fn language_catalog(&self) -> &[LanguageFacet] {
        &self.language_catalog
    }

    /// Replace the collection (new navigation / fresh fetch); the
    /// selection is kept
    pub fn replace_movies(&mut self, movies: Vec<CanonicalMovie>) {
        debug!("Store: replacing {} movies with {}", self.movies.len(), movies.len());
        self.movies = movies;
    }

    /// Append a further page, skipping ids already held.
    ///
    /// Records without an id cannot be matched against anything, so they
    /// are always appended.
    ///
    /// Returns how many movies were added.
    pub fn append_page(&mut self, page: MoviePage) -> usize {
        let mut known: HashSet<String> = self.movies.iter().map(|m| m.id.clone()).collect();
        let before = self.movies.len();
        self.movies.extend(
            page.movies
                .into_iter()
                .filter(|movie| movie.id.is_empty() || known.insert(movie.id.clone())),
        );
        let added = self.movies.len() - before;
        debug!("Store: appended page {} (+{} movies)", page.page, added);
        added
    }

    /// Drop all movies and all filters
    pub fn clear(&mut self) {
        self.movies.clear();
        self.selection.clear_filters();
    }

    pub fn find(&self, id: &str) -> Option<&CanonicalMovie> {
        self.movies.iter().find(|movie| movie.id == id)
    }

    /// The filtered, sorted view of the current collection
    pub fn view(&self) -> Vec<&CanonicalMovie> {
        self.pipeline.apply(&self.movies, &self.selection)
    }

    pub fn filtered_count(&self) -> usize {
        self.pipeline.count(&self.movies, &self.selection)
    }

    pub fn available_genres(&self) -> Vec<GenreFacet> {
        pipeline::available_genres(&self.movies, &self.genre_catalog)
    }

    pub fn available_languages(&self) -> Vec<LanguageFacet> {
        pipeline::available_languages(&self.movies, &self.language_catalog)
    }

    pub fn available_years(&self) -> Vec<i32> {
        pipeline::available_years(&self.movies)
    }

    pub fn has_active_filters(&self) -> bool {
        pipeline::has_active_filters(&self.selection)
    }

    pub fn filter_count(&self) -> usize {
        pipeline::filter_count(&self.selection)
    }

    pub fn summary(&self) -> String {
        pipeline::filter_summary(&self.selection, &self.genre_catalog, &self.language_catalog)
    }
}

impl Default for MovieStore {
    fn default() -> Self {
        Self::new()
    }
}
