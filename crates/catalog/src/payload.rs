//! Upstream (OMDb) payload shapes.
//!
//! OMDb answers every request with HTTP 200 and a JSON object whose
//! `Response` flag says whether it worked. The body is then either a page of
//! search hits, a single title, or an error message. `OmdbResponse::decode`
//! turns that duck-typed object into an explicit enum so the rest of the
//! code never has to probe for optional fields.

use crate::error::{CatalogError, Result};
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// One hit from a `?s=` search
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawSearchResult {
    #[serde(rename = "Title", default, deserialize_with = "lenient_string")]
    pub title: Option<String>,
    #[serde(rename = "Year", default, deserialize_with = "lenient_string")]
    pub year: Option<String>,
    #[serde(rename = "imdbID", default, deserialize_with = "lenient_string")]
    pub imdb_id: Option<String>,
    #[serde(rename = "Type", default, deserialize_with = "lenient_string")]
    pub kind: Option<String>,
    #[serde(rename = "Poster", default, deserialize_with = "lenient_string")]
    pub poster: Option<String>,
    /// Not sent by the public API, but some mirrors include it on hits
    #[serde(rename = "imdbRating", default, deserialize_with = "lenient_string")]
    pub imdb_rating: Option<String>,
}

/// A single title from an `?i=` / `?t=` lookup.
///
/// Only the fields the normalizer reads; the rest of the body is ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawDetailResult {
    #[serde(rename = "Title", default, deserialize_with = "lenient_string")]
    pub title: Option<String>,
    #[serde(rename = "Year", default, deserialize_with = "lenient_string")]
    pub year: Option<String>,
    #[serde(rename = "Released", default, deserialize_with = "lenient_string")]
    pub released: Option<String>,
    #[serde(rename = "Genre", default, deserialize_with = "lenient_string")]
    pub genre: Option<String>,
    #[serde(rename = "Plot", default, deserialize_with = "lenient_string")]
    pub plot: Option<String>,
    #[serde(rename = "Language", default, deserialize_with = "lenient_string")]
    pub language: Option<String>,
    #[serde(rename = "Poster", default, deserialize_with = "lenient_string")]
    pub poster: Option<String>,
    #[serde(rename = "imdbRating", default, deserialize_with = "lenient_string")]
    pub imdb_rating: Option<String>,
    #[serde(rename = "imdbVotes", default, deserialize_with = "lenient_string")]
    pub imdb_votes: Option<String>,
    #[serde(rename = "imdbID", default, deserialize_with = "lenient_string")]
    pub imdb_id: Option<String>,
    #[serde(rename = "Type", default, deserialize_with = "lenient_string")]
    pub kind: Option<String>,
}

/// A decoded upstream response
#[derive(Debug, Clone, PartialEq)]
pub enum OmdbResponse {
    /// `Response: "True"` with a `Search` array
    SearchPage {
        results: Vec<RawSearchResult>,
        total_results: u32,
    },
    /// `Response: "True"` with a single title
    Item(Box<RawDetailResult>),
    /// `Response: "False"`; "Movie not found!", "Invalid API key!", ...
    Failure { message: String },
}

impl OmdbResponse {
    /// Decode a parsed JSON body.
    ///
    /// The `Response` flag decides success or failure. On success the
    /// presence of a `Search` array means a search page, an `imdbID` or
    /// `Title` means a single item; anything else is `UnexpectedShape`.
    pub fn decode(value: Value) -> Result<Self> {
        let Value::Object(mut map) = value else {
            return Err(CatalogError::UnexpectedShape {
                reason: "expected a JSON object".to_string(),
            });
        };

        if response_flag(&map) == Some(false) {
            let message = map
                .get("Error")
                .and_then(Value::as_str)
                .unwrap_or("Unknown upstream error")
                .to_string();
            return Ok(OmdbResponse::Failure { message });
        }

        if let Some(search) = map.remove("Search") {
            let results: Vec<RawSearchResult> = serde_json::from_value(search)?;
            let total_results = map
                .get("totalResults")
                .and_then(value_as_u32)
                .unwrap_or(results.len() as u32);
            return Ok(OmdbResponse::SearchPage {
                results,
                total_results,
            });
        }

        if map.contains_key("imdbID") || map.contains_key("Title") {
            let item: RawDetailResult = serde_json::from_value(Value::Object(map))?;
            return Ok(OmdbResponse::Item(Box::new(item)));
        }

        Err(CatalogError::UnexpectedShape {
            reason: "neither a search page nor a single title".to_string(),
        })
    }

    /// Parse and decode a raw response body
    pub fn from_slice(body: &[u8]) -> Result<Self> {
        let value: Value = serde_json::from_slice(body)?;
        Self::decode(value)
    }
}

fn response_flag(map: &Map<String, Value>) -> Option<bool> {
    match map.get("Response")? {
        Value::String(flag) => Some(flag.eq_ignore_ascii_case("true")),
        Value::Bool(flag) => Some(*flag),
        _ => None,
    }
}

fn value_as_u32(value: &Value) -> Option<u32> {
    match value {
        Value::String(s) => s.trim().parse().ok(),
        Value::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        _ => None,
    }
}

/// Accept a string, number or bool as text; null and nested values as absent
fn lenient_string<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Bool(b)) => Some(b.to_string()),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_search_page() {
        let body = json!({
            "Search": [
                {"Title": "Inception", "Year": "2010", "imdbID": "tt1375666", "Type": "movie", "Poster": "N/A"},
                {"Title": "Interstellar", "Year": "2014", "imdbID": "tt0816692", "Type": "movie"}
            ],
            "totalResults": "42",
            "Response": "True"
        });

        match OmdbResponse::decode(body).unwrap() {
            OmdbResponse::SearchPage {
                results,
                total_results,
            } => {
                assert_eq!(results.len(), 2);
                assert_eq!(total_results, 42);
                assert_eq!(results[0].imdb_id.as_deref(), Some("tt1375666"));
                assert_eq!(results[1].poster, None);
            }
            other => panic!("expected a search page, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_failure() {
        let body = json!({"Response": "False", "Error": "Movie not found!"});
        assert_eq!(
            OmdbResponse::decode(body).unwrap(),
            OmdbResponse::Failure {
                message: "Movie not found!".to_string()
            }
        );
    }

    #[test]
    fn test_decode_item_with_numeric_fields() {
        let body = json!({
            "Title": "Inception",
            "imdbRating": 8.8,
            "imdbVotes": null,
            "imdbID": "tt1375666",
            "Response": "True"
        });

        let OmdbResponse::Item(item) = OmdbResponse::decode(body).unwrap() else {
            panic!("expected a single item");
        };
        assert_eq!(item.imdb_rating.as_deref(), Some("8.8"));
        assert_eq!(item.imdb_votes, None);
    }

    #[test]
    fn test_decode_item_ignores_unread_fields() {
        let body = json!({
            "Title": "Inception",
            "Rated": "PG-13",
            "Runtime": "148 min",
            "Director": "Christopher Nolan",
            "Ratings": [{"Source": "Internet Movie Database", "Value": "8.8/10"}],
            "imdbID": "tt1375666",
            "Response": "True"
        });

        let OmdbResponse::Item(item) = OmdbResponse::decode(body).unwrap() else {
            panic!("expected a single item");
        };
        assert_eq!(item.title.as_deref(), Some("Inception"));
        assert_eq!(item.imdb_id.as_deref(), Some("tt1375666"));
    }

    #[test]
    fn test_decode_rejects_unknown_shapes() {
        assert!(matches!(
            OmdbResponse::decode(json!([1, 2, 3])),
            Err(CatalogError::UnexpectedShape { .. })
        ));
        assert!(matches!(
            OmdbResponse::decode(json!({"Response": "True"})),
            Err(CatalogError::UnexpectedShape { .. })
        ));
        assert!(matches!(
            OmdbResponse::from_slice(b"<html>"),
            Err(CatalogError::Malformed(_))
        ));
    }
}
