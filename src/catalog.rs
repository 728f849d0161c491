//! Fetch-and-decode for one catalog endpoint.

use crate::error::CatalogError;
use crate::fetcher::Fetcher;
use crate::model::{SearchResult, decode};
use crate::query::{language_query_url, title_query_url};
use url::Url;

/// A catalog endpoint plus the fetcher used to reach it.
pub struct Catalog<F> {
    base_url: Url,
    fetcher: F,
}

impl<F: Fetcher> Catalog<F> {
    pub fn new(base_url: Url, fetcher: F) -> Self {
        Self { base_url, fetcher }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    #[cfg(test)]
    pub(crate) fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// First page of the unfiltered listing.
    pub async fn books(&self) -> Result<SearchResult, CatalogError> {
        self.get(&self.base_url).await
    }

    /// First page of the server-side title search.
    pub async fn search(&self, title: &str) -> Result<SearchResult, CatalogError> {
        self.get(&title_query_url(&self.base_url, title)).await
    }

    /// First page of books in the given language code.
    pub async fn by_language(&self, language: &str) -> Result<SearchResult, CatalogError> {
        self.get(&language_query_url(&self.base_url, language)).await
    }

    async fn get(&self, url: &Url) -> Result<SearchResult, CatalogError> {
        let body = self.fetcher.fetch(url.as_str()).await?;
        Ok(decode(&body)?)
    }
}
