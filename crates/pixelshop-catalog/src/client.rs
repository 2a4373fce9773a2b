//! HTTP client for the remote catalog source.

use std::time::Duration;

use reqwest::Client;

use crate::error::CatalogError;
use crate::retry::retry_with_backoff;
use crate::types::{CatalogResponse, RemoteCategory, RemoteProduct};

/// HTTP client for a product catalog source.
///
/// Fetches the source's entire collection in one request — the `limit=0`
/// query form is the source's "no page cap" convention. Handles rate
/// limiting (429), not-found (404), and other non-2xx responses as typed
/// errors; transient failures (429, network) are retried with exponential
/// backoff up to `max_retries` additional attempts.
pub struct CatalogClient {
    client: Client,
    /// Maximum number of retry attempts after the first failure.
    max_retries: u32,
    /// Base delay in seconds for exponential backoff: `backoff_base_secs * 2^attempt`.
    backoff_base_secs: u64,
}

impl CatalogClient {
    /// Creates a `CatalogClient` with configured timeout, `User-Agent`, and
    /// retry policy.
    ///
    /// `max_retries` is the number of additional attempts after the first
    /// failure for retriable errors. Set to `0` to disable retries.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(
        timeout_secs: u64,
        user_agent: &str,
        max_retries: u32,
        backoff_base_secs: u64,
    ) -> Result<Self, CatalogError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            client,
            max_retries,
            backoff_base_secs,
        })
    }

    /// Fetches the complete product collection from `source_url`.
    ///
    /// Exactly one logical fetch: the source is asked for everything at
    /// once and any server-side filter/sort/page capability goes unused.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::RateLimited`] — HTTP 429 after all retries exhausted.
    /// - [`CatalogError::NotFound`] — HTTP 404 (not retried).
    /// - [`CatalogError::UnexpectedStatus`] — any other non-2xx status (not retried).
    /// - [`CatalogError::Http`] — network or TLS failure after all retries exhausted.
    /// - [`CatalogError::Deserialize`] — response body is not a valid catalog payload (not retried).
    /// - [`CatalogError::InvalidSourceUrl`] — `source_url` cannot form a request URL.
    pub async fn fetch_catalog(
        &self,
        source_url: &str,
    ) -> Result<Vec<RemoteProduct>, CatalogError> {
        let url = Self::collection_url(source_url)?;
        let response: CatalogResponse = self
            .get_json(&url, &format!("product collection from {source_url}"))
            .await?;
        Ok(response.products)
    }

    /// Fetches the source's category list (used to populate the category
    /// filter control).
    ///
    /// # Errors
    ///
    /// Same taxonomy as [`Self::fetch_catalog`].
    pub async fn fetch_categories(
        &self,
        source_url: &str,
    ) -> Result<Vec<RemoteCategory>, CatalogError> {
        let url = Self::categories_url(source_url)?;
        self.get_json(&url, &format!("category list from {source_url}"))
            .await
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
        context: &str,
    ) -> Result<T, CatalogError> {
        retry_with_backoff(self.max_retries, self.backoff_base_secs, || {
            let url = url.to_owned();
            let context = context.to_owned();
            async move {
                let response = self
                    .client
                    .get(&url)
                    .header(reqwest::header::ACCEPT, "application/json")
                    .send()
                    .await?;
                let status = response.status();

                if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
                    let retry_after_secs = response
                        .headers()
                        .get(reqwest::header::RETRY_AFTER)
                        .and_then(|v| v.to_str().ok())
                        .and_then(|s| s.parse::<u64>().ok())
                        .unwrap_or(60);
                    return Err(CatalogError::RateLimited { retry_after_secs });
                }

                if status == reqwest::StatusCode::NOT_FOUND {
                    return Err(CatalogError::NotFound { url });
                }

                if !status.is_success() {
                    return Err(CatalogError::UnexpectedStatus {
                        status: status.as_u16(),
                        url,
                    });
                }

                // Take the body as text first so decode failures can carry
                // context instead of a bare reqwest error.
                let body = response.text().await?;
                serde_json::from_str::<T>(&body)
                    .map_err(|e| CatalogError::Deserialize { context, source: e })
            }
        })
        .await
    }

    /// Builds the full-collection URL for the given source.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidSourceUrl`] if the source cannot be
    /// parsed as a valid URL base.
    fn collection_url(source_url: &str) -> Result<String, CatalogError> {
        let base = source_url.trim_end_matches('/');
        let mut url = reqwest::Url::parse(&format!("{base}/products")).map_err(|e| {
            CatalogError::InvalidSourceUrl {
                url: source_url.to_owned(),
                reason: e.to_string(),
            }
        })?;
        // limit=0 is the source's "return the entire collection" form.
        url.query_pairs_mut().append_pair("limit", "0");
        Ok(url.to_string())
    }

    fn categories_url(source_url: &str) -> Result<String, CatalogError> {
        let base = source_url.trim_end_matches('/');
        reqwest::Url::parse(&format!("{base}/products/categories"))
            .map(String::from)
            .map_err(|e| CatalogError::InvalidSourceUrl {
                url: source_url.to_owned(),
                reason: e.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collection_url_appends_no_cap_limit() {
        let url = CatalogClient::collection_url("https://dummyjson.com").unwrap();
        assert_eq!(url, "https://dummyjson.com/products?limit=0");
    }

    #[test]
    fn collection_url_strips_trailing_slash() {
        let url = CatalogClient::collection_url("https://dummyjson.com/").unwrap();
        assert_eq!(url, "https://dummyjson.com/products?limit=0");
    }

    #[test]
    fn collection_url_rejects_garbage() {
        let err = CatalogClient::collection_url("not a url").unwrap_err();
        assert!(matches!(err, CatalogError::InvalidSourceUrl { .. }));
    }

    #[test]
    fn categories_url_points_at_categories_endpoint() {
        let url = CatalogClient::categories_url("https://dummyjson.com").unwrap();
        assert_eq!(url, "https://dummyjson.com/products/categories");
    }
}
