//! HTTP client for the word-matching service

use super::error::QueryError;
use reqwest::Client;
use reqwest::header::ACCEPT;
use url::Url;

/// Endpoint used when no override is configured
pub const DEFAULT_API_URL: &str = "http://localhost:7071/api/WordleAssist";

/// `word` parameter sent when the pattern is empty
pub const PLACEHOLDER_WORD: &str = "_____";

/// Query parameters for one request, in wire order
#[must_use]
pub fn query_params<'a>(
    pattern: &'a str,
    include: &'a str,
    exclude: &'a str,
) -> [(&'static str, &'a str); 3] {
    let word = if pattern.is_empty() {
        PLACEHOLDER_WORD
    } else {
        pattern
    };
    [("word", word), ("include", include), ("exclude", exclude)]
}

/// Client for the remote matcher
///
/// Cloning is cheap; clones share one connection pool.
#[derive(Debug, Clone)]
pub struct QueryClient {
    http: Client,
    base_url: Url,
}

impl QueryClient {
    #[must_use]
    pub fn new(base_url: Url) -> Self {
        Self {
            http: Client::new(),
            base_url,
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Ask the service for words matching the three constraints
    ///
    /// The returned list is the service's answer as-is: no filtering,
    /// sorting or deduplication happens here.
    ///
    /// # Errors
    ///
    /// - [`QueryError::RequestFailed`] on a non-success status
    /// - [`QueryError::Decode`] when the body is not a JSON string array
    /// - [`QueryError::Network`] on any transport failure
    pub async fn find_matching_words(
        &self,
        pattern: &str,
        include: &str,
        exclude: &str,
    ) -> Result<Vec<String>, QueryError> {
        let params = query_params(pattern, include, exclude);
        tracing::debug!(url = %self.base_url, ?params, "querying word service");

        let response = self
            .http
            .get(self.base_url.clone())
            .query(&params)
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(QueryError::RequestFailed {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let words: Vec<String> = serde_json::from_str(&body)?;
        tracing::debug!(count = words.len(), "word service answered");
        Ok(words)
    }
}
