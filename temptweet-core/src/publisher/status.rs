use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, header::AUTHORIZATION};
use tracing::debug;

use crate::{Credentials, TempTweetError, fetch::http_client};

use super::Publisher;

/// Posts `status=<text>` to a status-update endpoint with basic auth.
#[derive(Debug, Clone)]
pub struct StatusPublisher {
    url: String,
    credentials: Credentials,
    http: Client,
}

impl StatusPublisher {
    pub fn new(url: &str, credentials: Credentials, timeout: Duration) -> Result<Self, TempTweetError> {
        Ok(Self { url: url.to_string(), credentials, http: http_client(timeout)? })
    }
}

#[async_trait]
impl Publisher for StatusPublisher {
    async fn publish(&self, text: &str) -> Result<String, TempTweetError> {
        debug!(url = %self.url, user = %self.credentials.username(), "posting status update");

        let res = self
            .http
            .post(&self.url)
            .header(AUTHORIZATION, self.credentials.authorization())
            .form(&[("status", text)])
            .send()
            .await
            .map_err(TempTweetError::connection(&self.url))?
            .error_for_status()
            .map_err(TempTweetError::connection(&self.url))?;

        res.text().await.map_err(TempTweetError::connection(&self.url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{closed_port_url, serve_once};

    #[tokio::test]
    async fn posts_form_with_basic_auth_and_returns_raw_body() {
        let (url, server) = serve_once("200 OK", r#"{"id": 42, "text": "ok"}"#).await;
        let publisher =
            StatusPublisher::new(&url, Credentials::new("user", "pass"), Duration::from_secs(5)).unwrap();

        let body = publisher.publish("Current (14:30): 22.5°C").await.expect("publish should succeed");
        assert_eq!(body, r#"{"id": 42, "text": "ok"}"#);

        let request = server.await.unwrap();
        assert!(request.starts_with("POST / HTTP/1.1"));
        assert!(
            request.lines().any(|l| l.eq_ignore_ascii_case("authorization: Basic dXNlcjpwYXNz")),
            "missing auth header in:\n{request}"
        );
        assert!(request.to_lowercase().contains("content-type: application/x-www-form-urlencoded"));
        assert!(request.ends_with("status=Current+%2814%3A30%29%3A+22.5%C2%B0C"));
    }

    #[tokio::test]
    async fn rejected_credentials_are_a_connection_error() {
        let (url, _server) = serve_once("401 Unauthorized", "Could not authenticate you.").await;
        let publisher =
            StatusPublisher::new(&url, Credentials::new("user", "wrong"), Duration::from_secs(5)).unwrap();

        let err = publisher.publish("hello").await.unwrap_err();
        assert_eq!(err.to_string(), format!("Couldn't connect to {url}"));
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_a_connection_error() {
        let url = closed_port_url().await;
        let publisher =
            StatusPublisher::new(&url, Credentials::new("user", "pass"), Duration::from_secs(5)).unwrap();

        assert!(matches!(
            publisher.publish("hello").await,
            Err(TempTweetError::Connection { .. })
        ));
    }
}
