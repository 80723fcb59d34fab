//! Ordering of canonical movies by a sort key and direction.

use crate::selection::{SortKey, SortOrder};
use catalog::CanonicalMovie;
use rayon::prelude::*;
use std::cmp::Ordering;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Compare two movies by `sort_by`, then apply `sort_order`.
///
/// - `Popularity`, `VoteAverage`: numeric; NaN compares equal
/// - `ReleaseDate`: parsed date; an unparseable date sorts before every
///   parseable one and equal to other unparseable dates
/// - `Title`: accent- and case-folded first (`Émilie` sorts with `E`), then
///   case-insensitive, raw text as the final tie-break
/// - `Unsorted`: always `Equal`, so a stable sort keeps the input order
pub fn compare(
    a: &CanonicalMovie,
    b: &CanonicalMovie,
    sort_by: SortKey,
    sort_order: SortOrder,
) -> Ordering {
    let ascending = match sort_by {
        SortKey::Popularity => compare_f64(a.popularity, b.popularity),
        SortKey::VoteAverage => compare_f64(a.vote_average, b.vote_average),
        SortKey::ReleaseDate => a.release_day().cmp(&b.release_day()),
        SortKey::Title => compare_titles(&a.title, &b.title),
        SortKey::Unsorted => Ordering::Equal,
    };
    match sort_order {
        SortOrder::Asc => ascending,
        SortOrder::Desc => ascending.reverse(),
    }
}

/// Stable in-place sort of borrowed movies.
///
/// `par_sort_by` is a stable merge sort, so ties keep their relative order
/// in both directions.
pub fn sort_movies(movies: &mut [&CanonicalMovie], sort_by: SortKey, sort_order: SortOrder) {
    if sort_by == SortKey::Unsorted {
        return;
    }
    movies.par_sort_by(|a, b| compare(a, b, sort_by, sort_order));
}

fn compare_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

fn compare_titles(a: &str, b: &str) -> Ordering {
    fold_title(a)
        .cmp(&fold_title(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| a.cmp(b))
}

/// Canonical decomposition with combining marks dropped, then lowercased
fn fold_title(title: &str) -> String {
    title
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(id: &str, title: &str, vote_average: f64, release_date: &str) -> CanonicalMovie {
        CanonicalMovie {
            vote_average,
            release_date: release_date.to_string(),
            ..CanonicalMovie::new(id, title)
        }
    }

    #[test]
    fn test_descending_negates_ascending() {
        let a = movie("a", "A", 9.0, "2020-01-01");
        let b = movie("b", "B", 7.0, "2021-01-01");

        for key in [SortKey::Popularity, SortKey::VoteAverage, SortKey::ReleaseDate, SortKey::Title] {
            assert_eq!(
                compare(&a, &b, key, SortOrder::Desc),
                compare(&a, &b, key, SortOrder::Asc).reverse(),
                "direction should flip {}",
                key
            );
        }
    }

    #[test]
    fn test_title_comparison_ignores_case() {
        let lower = movie("1", "alien", 0.0, "");
        let upper = movie("2", "Brazil", 0.0, "");
        assert_eq!(compare(&lower, &upper, SortKey::Title, SortOrder::Asc), Ordering::Less);
    }

    #[test]
    fn test_accented_titles_sort_with_their_base_letter() {
        let zorro = movie("z", "Zorro", 0.0, "");
        let emilie = movie("e", "Émilie", 0.0, "");
        let leon = movie("l", "Léon", 0.0, "");
        let lemming = movie("m", "Lemming", 0.0, "");

        let mut movies = vec![&zorro, &emilie, &leon, &lemming];
        sort_movies(&mut movies, SortKey::Title, SortOrder::Asc);

        let titles: Vec<_> = movies.iter().map(|m| m.title.as_str()).collect();
        assert_eq!(titles, vec!["Émilie", "Lemming", "Léon", "Zorro"]);
    }

    #[test]
    fn test_folded_ties_fall_back_to_raw_text() {
        let plain = movie("1", "Leon", 0.0, "");
        let accented = movie("2", "Léon", 0.0, "");
        assert_eq!(compare(&plain, &accented, SortKey::Title, SortOrder::Asc), Ordering::Less);
        assert_ne!(compare(&accented, &plain, SortKey::Title, SortOrder::Asc), Ordering::Equal);
    }

    #[test]
    fn test_unparseable_dates_sort_earliest() {
        let dated = movie("dated", "", 0.0, "1950-06-01");
        let undated = movie("undated", "", 0.0, "TBA");
        assert_eq!(
            compare(&undated, &dated, SortKey::ReleaseDate, SortOrder::Asc),
            Ordering::Less
        );

        let mut movies = vec![&dated, &undated];
        sort_movies(&mut movies, SortKey::ReleaseDate, SortOrder::Asc);
        assert_eq!(movies[0].id, "undated");
    }

    #[test]
    fn test_unsorted_key_keeps_input_order() {
        let a = movie("a", "Zulu", 1.0, "");
        let b = movie("b", "Alpha", 9.0, "");
        assert_eq!(compare(&a, &b, SortKey::Unsorted, SortOrder::Desc), Ordering::Equal);

        let mut movies = vec![&a, &b];
        sort_movies(&mut movies, SortKey::Unsorted, SortOrder::Asc);
        assert_eq!(movies[0].id, "a");
    }

    #[test]
    fn test_nan_ratings_do_not_panic() {
        let a = movie("a", "", f64::NAN, "");
        let b = movie("b", "", 5.0, "");
        let mut movies = vec![&a, &b];
        sort_movies(&mut movies, SortKey::VoteAverage, SortOrder::Desc);
        assert_eq!(movies.len(), 2);
    }
}
