//! HTTP fetcher for catalog queries.
//!
//! The [`Fetcher`] trait is the seam between the catalog and the network;
//! [`HttpFetcher`] is the only production implementation.

use crate::config::Config;
use crate::error::FetchError;
use async_trait::async_trait;
use reqwest::Client;

/// Something that can turn a URL into a response body.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Issues one GET and returns the body as text, whatever the status.
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

/// Fetcher backed by a single shared `reqwest` client.
pub struct HttpFetcher {
    client: Client,
    debug: bool,
}

impl HttpFetcher {
    /// Creates a fetcher from the API and output settings.
    pub fn new(config: &Config) -> Result<Self, FetchError> {
        Ok(Self {
            client: create_http_client(&config.api.user_agent)?,
            debug: config.output.debug,
        })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        if self.debug {
            eprintln!("[Fetch Debug] GET {}", url);
        }

        let response = self.client.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if self.debug {
            eprintln!(
                "[Fetch Debug] status={} body_len={}",
                status,
                body.len()
            );
        }

        Ok(body)
    }
}

/// HTTP client used for every catalog request.
///
/// No timeout is set; requests wait as long as the platform allows.
pub fn create_http_client(user_agent: &str) -> Result<Client, reqwest::Error> {
    Client::builder().user_agent(user_agent).build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_http_client() {
        assert!(create_http_client("bookworm/test").is_ok());
    }

    #[test]
    fn test_http_fetcher_from_default_config() {
        let config = Config::default();
        assert!(HttpFetcher::new(&config).is_ok());
    }

    #[tokio::test]
    async fn test_error_status_still_returns_body() {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};
        use tokio::net::TcpListener;

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let server = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = [0u8; 1024];
            let _ = socket.read(&mut request).await.unwrap();
            socket
                .write_all(
                    b"HTTP/1.1 404 Not Found\r\nContent-Length: 9\r\nConnection: close\r\n\r\nnot found",
                )
                .await
                .unwrap();
        });

        let fetcher = HttpFetcher::new(&Config::default()).unwrap();
        let body = fetcher
            .fetch(&format!("http://{}/books/", addr))
            .await
            .unwrap();

        assert_eq!(body, "not found");
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_transport_failure_is_fetch_error() {
        let fetcher = HttpFetcher::new(&Config::default()).unwrap();
        // Nothing listens on the discard port.
        let err = fetcher.fetch("http://127.0.0.1:9/books/").await.unwrap_err();
        assert!(matches!(err, FetchError::Transport(_)));
        assert!(err.to_string().starts_with("HTTP request failed"));
    }
}
