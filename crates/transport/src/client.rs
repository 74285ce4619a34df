//! JSON Network Client
//!
//! The [`NetworkClient`] trait is the seam between feature crates and the
//! wire. It covers exactly two shapes of call: a JSON GET and a JSON POST
//! with extra headers. Both deserialize the response body into the caller's
//! target type.

use http::HeaderMap;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Error raised by the transport layer
///
/// Consumers are expected to propagate these unmodified; the transport does
/// not retry and attaches no domain context.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The request could not be sent or the connection failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status
    #[error("HTTP status {status} from {path}")]
    Status { status: u16, path: String },

    /// The response body was not valid JSON for the expected type
    #[error("Failed to decode response from {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// JSON transport capability
#[trait_variant::make(NetworkClient: Send)]
pub trait LocalNetworkClient {
    /// GET `path` and deserialize the JSON response
    async fn get_json<T>(&self, path: &str) -> Result<T, TransportError>
    where
        T: DeserializeOwned;

    /// POST `body` as JSON to `path` with additional headers and
    /// deserialize the JSON response
    async fn post_json<B, T>(
        &self,
        body: &B,
        path: &str,
        headers: &HeaderMap,
    ) -> Result<T, TransportError>
    where
        B: Serialize + Sync,
        T: DeserializeOwned;
}

/// reqwest-backed [`NetworkClient`]
///
/// Joins request paths onto a base URL and maps non-success statuses to
/// [`TransportError::Status`] before attempting to decode the body.
#[derive(Debug, Clone)]
pub struct HttpNetworkClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpNetworkClient {
    /// Create a client for the given service base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    /// Build the full URL for a request path
    fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn decode<T: DeserializeOwned>(
        response: reqwest::Response,
        path: &str,
    ) -> Result<T, TransportError> {
        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status {
                status: status.as_u16(),
                path: path.to_string(),
            });
        }
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|source| TransportError::Decode {
            path: path.to_string(),
            source,
        })
    }
}

impl NetworkClient for HttpNetworkClient {
    async fn get_json<T>(&self, path: &str) -> Result<T, TransportError>
    where
        T: DeserializeOwned,
    {
        let url = self.url_for(path);
        tracing::debug!(%url, "GET");
        let response = self.client.get(&url).send().await?;
        Self::decode(response, path).await
    }

    async fn post_json<B, T>(
        &self,
        body: &B,
        path: &str,
        headers: &HeaderMap,
    ) -> Result<T, TransportError>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        let url = self.url_for(path);
        tracing::debug!(%url, "POST");
        let response = self
            .client
            .post(&url)
            .headers(headers.clone())
            .json(body)
            .send()
            .await?;
        Self::decode(response, path).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_join_plain() {
        let client = HttpNetworkClient::new("https://powbox.example.com/api/v1");
        assert_eq!(
            client.url_for("commands"),
            "https://powbox.example.com/api/v1/commands"
        );
    }

    #[test]
    fn test_url_join_trailing_slash() {
        let client = HttpNetworkClient::new("https://powbox.example.com/api/v1/");
        assert_eq!(
            client.url_for("jobs/abc"),
            "https://powbox.example.com/api/v1/jobs/abc"
        );
    }

    #[test]
    fn test_url_join_leading_slash() {
        let client = HttpNetworkClient::new("https://powbox.example.com");
        assert_eq!(
            client.url_for("/commands"),
            "https://powbox.example.com/commands"
        );
    }

    #[test]
    fn test_status_error_display() {
        let err = TransportError::Status {
            status: 503,
            path: "jobs/abc".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("503") && msg.contains("jobs/abc"));
    }
}
