//! Typed records for the catalog's JSON responses.
//!
//! A response is decoded once into a [`SearchResult`] and never mutated
//! afterwards; the query functions only borrow from it.

use crate::error::DecodeError;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::fmt;

/// Decoded response envelope for one catalog query.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SearchResult {
    /// Total number of matches reported by the server (all pages).
    #[serde(default)]
    pub count: u64,

    /// URL of the next page, if any. Never followed.
    #[serde(default)]
    pub next: Option<String>,

    /// URL of the previous page, if any. Never followed.
    #[serde(default)]
    pub previous: Option<String>,

    /// Books on this page, in server order.
    pub results: Vec<BookRecord>,
}

/// One catalog entry.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BookRecord {
    #[serde(default)]
    pub id: u64,

    pub title: String,

    /// Empty when the server omits the field or sends null.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub authors: Vec<AuthorRecord>,

    #[serde(default)]
    pub download_count: u64,

    #[serde(default)]
    pub languages: Vec<String>,

    #[serde(default)]
    pub subjects: Vec<String>,

    #[serde(default)]
    pub bookshelves: Vec<String>,
}

/// An author nested in a [`BookRecord`].
///
/// Equality is by value over every field, which is what de-duplication
/// across books relies on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
pub struct AuthorRecord {
    pub name: String,

    #[serde(default)]
    pub birth_year: Year,

    #[serde(default)]
    pub death_year: Year,
}

/// A year field as the server sent it: string-or-absent.
///
/// Numbers are kept as their decimal text and strings verbatim. Null,
/// a missing field, or any other JSON shape is absent. Turning the text
/// into a number is left to [`Year::as_year`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Year(Option<String>);

impl Year {
    /// Creates a year from its raw text.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(Some(raw.into()))
    }

    /// A year the server did not report.
    pub fn unknown() -> Self {
        Self(None)
    }

    /// Returns the raw text, if present.
    pub fn raw(&self) -> Option<&str> {
        self.0.as_deref()
    }

    /// Parses the raw text as an integer year.
    ///
    /// Absent and non-numeric values are `None`.
    pub fn as_year(&self) -> Option<i32> {
        self.0.as_deref().and_then(|s| s.parse().ok())
    }
}

impl<'de> Deserialize<'de> for Year {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = match Value::deserialize(deserializer)? {
            Value::String(s) => Some(s),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        };
        Ok(Self(raw))
    }
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.raw().unwrap_or("?"))
    }
}

impl fmt::Display for AuthorRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.birth_year.raw().is_none() && self.death_year.raw().is_none() {
            return f.write_str(&self.name);
        }
        write!(f, "{} ({}-{})", self.name, self.birth_year, self.death_year)
    }
}

impl fmt::Display for BookRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let authors = if self.authors.is_empty() {
            "Unknown".to_string()
        } else {
            self.authors
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; ")
        };

        writeln!(f, "Title: {}", self.title)?;
        writeln!(f, "Authors: {}", authors)?;
        writeln!(f, "Languages: {}", self.languages.join(", "))?;
        write!(f, "Downloads: {}", self.download_count)
    }
}

/// Decodes one response body.
pub fn decode(text: &str) -> Result<SearchResult, DecodeError> {
    Ok(serde_json::from_str(text)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_full_record() {
        let json = r#"{
            "count": 1,
            "next": "https://gutendex.com/books/?page=2",
            "previous": null,
            "results": [{
                "id": 84,
                "title": "Frankenstein; Or, The Modern Prometheus",
                "authors": [{"name": "Shelley, Mary Wollstonecraft", "birth_year": 1797, "death_year": 1851}],
                "translators": [],
                "subjects": ["Science fiction"],
                "bookshelves": ["Gothic Fiction"],
                "languages": ["en"],
                "copyright": false,
                "media_type": "Text",
                "formats": {"text/html": "https://www.gutenberg.org/ebooks/84.html.images"},
                "download_count": 103534
            }]
        }"#;

        let result = decode(json).unwrap();
        assert_eq!(result.count, 1);
        assert_eq!(result.next.as_deref(), Some("https://gutendex.com/books/?page=2"));
        assert_eq!(result.previous, None);

        let book = &result.results[0];
        assert_eq!(book.id, 84);
        assert_eq!(book.download_count, 103534);
        assert_eq!(book.languages, vec!["en"]);
        assert_eq!(book.subjects, vec!["Science fiction"]);
        assert_eq!(book.authors[0].birth_year.as_year(), Some(1797));
        assert_eq!(book.authors[0].death_year.raw(), Some("1851"));
    }

    #[test]
    fn test_decode_zero_results() {
        let result = decode(r#"{"count": 0, "next": null, "previous": null, "results": []}"#).unwrap();
        assert_eq!(result.count, 0);
        assert!(result.results.is_empty());
    }

    #[test]
    fn test_absent_authors_is_empty() {
        let result = decode(r#"{"count": 1, "results": [{"title": "Anonymous", "download_count": 3}]}"#).unwrap();
        assert!(result.results[0].authors.is_empty());
        assert!(result.results[0].languages.is_empty());
    }

    #[test]
    fn test_null_authors_is_empty() {
        let json = r#"{"count": 2, "results": [
            {"title": "T", "download_count": 1, "authors": null},
            {"title": "U", "download_count": 2, "authors": [{"name": "A"}]}
        ]}"#;

        let result = decode(json).unwrap();
        assert!(result.results[0].authors.is_empty());
        assert_eq!(result.results[1].authors[0].name, "A");
    }

    #[test]
    fn test_padded_year_is_not_numeric() {
        let year = Year::new(" 1920");
        assert_eq!(year.as_year(), None);
        assert_eq!(year.raw(), Some(" 1920"));
        assert_eq!(Year::new("1920").as_year(), Some(1920));
    }

    #[test]
    fn test_year_shapes_never_fail() {
        let json = r#"{"count": 5, "results": [{"title": "T", "download_count": 1, "authors": [
            {"name": "Number", "birth_year": 1920},
            {"name": "Text", "birth_year": "1920"},
            {"name": "Null", "birth_year": null},
            {"name": "Missing"},
            {"name": "Garbage", "birth_year": "c. 1500"},
            {"name": "Negative", "birth_year": -384},
            {"name": "Odd", "birth_year": {"circa": 1500}}
        ]}]}"#;

        let authors = &decode(json).unwrap().results[0].authors;
        let years: Vec<Option<i32>> = authors.iter().map(|a| a.birth_year.as_year()).collect();
        assert_eq!(
            years,
            vec![Some(1920), Some(1920), None, None, None, Some(-384), None]
        );
        assert_eq!(authors[4].birth_year.raw(), Some("c. 1500"));
        assert_eq!(authors[6].birth_year, Year::unknown());
    }

    #[test]
    fn test_number_and_text_years_are_equal() {
        let json = r#"{"results": [{"title": "T", "authors": [
            {"name": "A", "birth_year": 1920},
            {"name": "A", "birth_year": "1920"}
        ]}]}"#;

        let authors = &decode(json).unwrap().results[0].authors;
        assert_eq!(authors[0], authors[1]);
    }

    #[test]
    fn test_missing_results_is_error() {
        assert!(decode(r#"{"count": 0}"#).is_err());
    }

    #[test]
    fn test_wrong_types_are_errors() {
        assert!(decode(r#"{"count": 0, "results": {}}"#).is_err());
        assert!(decode(r#"{"results": [{"title": 42}]}"#).is_err());
        assert!(decode(r#"{"results": [{"title": "T", "download_count": "many"}]}"#).is_err());
    }

    #[test]
    fn test_not_json_is_error() {
        let err = decode("<html>Service Unavailable</html>").unwrap_err();
        assert!(err.to_string().contains("Failed to parse catalog response"));
    }

    #[test]
    fn test_display_book() {
        let book = BookRecord {
            id: 1,
            title: "Dune".to_string(),
            authors: vec![AuthorRecord {
                name: "Frank Herbert".to_string(),
                birth_year: Year::new("1920"),
                death_year: Year::new("1986"),
            }],
            download_count: 500,
            languages: vec!["en".to_string()],
            subjects: vec![],
            bookshelves: vec![],
        };

        assert_eq!(
            book.to_string(),
            "Title: Dune\nAuthors: Frank Herbert (1920-1986)\nLanguages: en\nDownloads: 500"
        );
    }

    #[test]
    fn test_display_author_without_years() {
        let author = AuthorRecord {
            name: "Anonymous".to_string(),
            birth_year: Year::unknown(),
            death_year: Year::unknown(),
        };
        assert_eq!(author.to_string(), "Anonymous");
    }
}
