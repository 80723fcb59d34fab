//! Filter to keep only movies in one of the selected genres.

use crate::selection::FilterSelection;
use crate::traits::Filter;
use catalog::CanonicalMovie;

/// Keeps movies whose genre set intersects the selected genres.
///
/// An empty genre selection imposes no constraint.
pub struct GenreFilter;

impl Filter for GenreFilter {
    fn name(&self) -> &str {
        "GenreFilter"
    }

    fn matches(&self, movie: &CanonicalMovie, selection: &FilterSelection) -> bool {
        selection.genres.is_empty()
            || movie
                .genre_ids
                .iter()
                .any(|genre| selection.genres.contains(genre))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn movie(id: &str, genres: &[u32]) -> CanonicalMovie {
        CanonicalMovie {
            genre_ids: genres.iter().copied().collect::<BTreeSet<_>>(),
            ..CanonicalMovie::new(id, id)
        }
    }

    #[test]
    fn test_genre_filter() {
        let movies = vec![
            movie("action-adventure", &[28, 12]), // should match
            movie("drama", &[18]),                // should match
            movie("sci-fi", &[878]),              // should NOT match
            movie("no-genres", &[]),              // should NOT match
        ];
        let selection = FilterSelection::new().with_genre(28).with_genre(18);

        let filtered = GenreFilter.apply(movies.iter().collect(), &selection);

        let ids: Vec<_> = filtered.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["action-adventure", "drama"]);
    }

    #[test]
    fn test_empty_genre_selection_keeps_everything() {
        let movies = vec![movie("a", &[28]), movie("b", &[])];
        let filtered = GenreFilter.apply(movies.iter().collect(), &FilterSelection::new());
        assert_eq!(filtered.len(), 2);
    }
}
