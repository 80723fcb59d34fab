//! Filter on original language.

use crate::selection::FilterSelection;
use crate::traits::Filter;
use catalog::CanonicalMovie;

/// Keeps movies whose original-language code is one of the selected codes.
///
/// Codes are compared exactly; an empty selection imposes no constraint.
pub struct LanguageFilter;

impl Filter for LanguageFilter {
    fn name(&self) -> &str {
        "LanguageFilter"
    }

    fn matches(&self, movie: &CanonicalMovie, selection: &FilterSelection) -> bool {
        selection.languages.is_empty() || selection.languages.contains(&movie.original_language)
    }
}
