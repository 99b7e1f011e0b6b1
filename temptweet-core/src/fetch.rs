use std::time::Duration;

use reqwest::Client;
use tracing::debug;

use crate::TempTweetError;

const USER_AGENT: &str = concat!("temptweet/", env!("CARGO_PKG_VERSION"));

/// HTTP client shared by the fetcher and the status publisher.
pub(crate) fn http_client(timeout: Duration) -> Result<Client, TempTweetError> {
    Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .build()
        .map_err(TempTweetError::Client)
}

/// Downloads the observation page. One attempt per call.
#[derive(Debug, Clone)]
pub struct PageFetcher {
    http: Client,
}

impl PageFetcher {
    pub fn new(timeout: Duration) -> Result<Self, TempTweetError> {
        Ok(Self { http: http_client(timeout)? })
    }

    pub async fn fetch(&self, url: &str) -> Result<String, TempTweetError> {
        debug!(%url, "fetching observation page");

        let res = self
            .http
            .get(url)
            .send()
            .await
            .map_err(TempTweetError::connection(url))?
            .error_for_status()
            .map_err(TempTweetError::connection(url))?;

        let body = res.text().await.map_err(TempTweetError::connection(url))?;
        debug!(bytes = body.len(), "observation page received");
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{closed_port_url, serve_once};

    #[tokio::test]
    async fn returns_the_page_body() {
        let (url, server) = serve_once("200 OK", "<html>observations</html>").await;
        let fetcher = PageFetcher::new(Duration::from_secs(5)).unwrap();

        let body = fetcher.fetch(&url).await.expect("fetch should succeed");
        assert_eq!(body, "<html>observations</html>");

        let request = server.await.unwrap();
        assert!(request.starts_with("GET / HTTP/1.1"));
    }

    #[tokio::test]
    async fn non_success_status_is_a_connection_error() {
        let (url, _server) = serve_once("503 Service Unavailable", "down").await;
        let fetcher = PageFetcher::new(Duration::from_secs(5)).unwrap();

        match fetcher.fetch(&url).await {
            Err(TempTweetError::Connection { url: failed, .. }) => assert_eq!(failed, url),
            other => panic!("expected connection error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn unreachable_host_names_the_url() {
        let url = closed_port_url().await;
        let fetcher = PageFetcher::new(Duration::from_secs(5)).unwrap();

        let err = fetcher.fetch(&url).await.unwrap_err();
        assert_eq!(err.to_string(), format!("Couldn't connect to {url}"));
        assert_eq!(err.exit_code(), 2);
    }
}
