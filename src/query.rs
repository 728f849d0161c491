//! Pure query operations over a decoded [`SearchResult`].
//!
//! Nothing here performs I/O. The two URL builders are the exception to
//! "operates on results": the server does the filtering for those queries,
//! so building the URL is the whole operation.

use crate::model::{AuthorRecord, BookRecord, SearchResult};
use std::collections::HashSet;
use url::Url;

/// How many titles the popularity ranking returns.
pub const TOP_LIMIT: usize = 10;

/// Returns the first book whose title contains `query`, ignoring case.
///
/// An empty query matches the first book.
pub fn search_by_title<'a>(results: &'a SearchResult, query: &str) -> Option<&'a BookRecord> {
    let needle = query.to_uppercase();
    results
        .results
        .iter()
        .find(|book| book.title.to_uppercase().contains(&needle))
}

/// Returns every title in server order.
pub fn list_titles(results: &SearchResult) -> Vec<&str> {
    results.results.iter().map(|book| book.title.as_str()).collect()
}

/// Returns each distinct author once, in first-seen order.
pub fn distinct_authors(results: &SearchResult) -> Vec<&AuthorRecord> {
    dedup(all_authors(results))
}

/// Returns the distinct authors born in or before `year`.
///
/// Authors without a numeric birth year are left out.
pub fn authors_alive_in_year(results: &SearchResult, year: i32) -> Vec<&AuthorRecord> {
    dedup(all_authors(results).filter(|author| {
        author
            .birth_year
            .as_year()
            .is_some_and(|born| born <= year)
    }))
}

/// Returns up to [`TOP_LIMIT`] upper-cased titles, most downloaded first.
///
/// Books with equal download counts keep their server order.
pub fn top10_by_downloads(results: &SearchResult) -> Vec<String> {
    let mut books: Vec<&BookRecord> = results.results.iter().collect();
    // sort_by is stable
    books.sort_by(|a, b| b.download_count.cmp(&a.download_count));
    books
        .into_iter()
        .take(TOP_LIMIT)
        .map(|book| book.title.to_uppercase())
        .collect()
}

/// Builds the URL that asks the server for books matching `title`.
///
/// Spaces are sent as `+`.
pub fn title_query_url(base: &Url, title: &str) -> Url {
    with_query(base, "search", title)
}

/// Builds the URL that asks the server for books in `language`.
pub fn language_query_url(base: &Url, language: &str) -> Url {
    with_query(base, "languages", language)
}

fn with_query(base: &Url, key: &str, value: &str) -> Url {
    let mut url = base.clone();
    url.query_pairs_mut().append_pair(key, value);
    url
}

fn all_authors(results: &SearchResult) -> impl Iterator<Item = &AuthorRecord> {
    results.results.iter().flat_map(|book| book.authors.iter())
}

fn dedup<'a>(authors: impl Iterator<Item = &'a AuthorRecord>) -> Vec<&'a AuthorRecord> {
    let mut seen = HashSet::new();
    authors.filter(|author| seen.insert(*author)).collect()
}
