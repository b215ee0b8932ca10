//! HTTP client for the remote listings table.
//!
//! The source is a PostgREST-style endpoint: every row of a table is read with
//! `GET {base_url}/rest/v1/{table}?select=*`, authenticated with the project
//! API key sent both as `apikey` header and as bearer token.

use std::fmt;
use std::time::Duration;

use tracing::{debug, warn};

use crate::error::{ApiError, Error, Result};
use crate::models::{Listing, ListingRow};

/// Table read when none is configured.
pub const DEFAULT_TABLE: &str = "insert_pg";

/// Default request timeout in seconds.
pub(crate) const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Path prefix of the REST endpoint.
const REST_PATH: &str = "/rest/v1";

/// Client for the remote listings table.
#[derive(Clone)]
pub struct ListingsClient {
    api_key: String,
    http_client: reqwest::Client,
    base_url: String,
    table: String,
    request_timeout: Duration,
}

/// Builder for [`ListingsClient`].
///
/// ```
/// use std::time::Duration;
/// use pgfind_api::client::ListingsClient;
///
/// let client = ListingsClient::builder("https://example.supabase.co", "anon-key")
///     .table("insert_pg")
///     .request_timeout(Duration::from_secs(10))
///     .build()
///     .unwrap();
/// assert_eq!(client.table(), "insert_pg");
/// ```
#[derive(Debug, Clone)]
pub struct ListingsClientBuilder {
    base_url: String,
    api_key: String,
    table: String,
    request_timeout: Duration,
}

impl ListingsClientBuilder {
    /// Creates a builder for the given project URL and API key.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            table: DEFAULT_TABLE.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Sets the table to read listings from.
    pub fn table(mut self, table: impl Into<String>) -> Self {
        self.table = table.into();
        self
    }

    /// Sets the request timeout. A fetch that does not complete in time
    /// fails with a network error.
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// Returns a network error if the HTTP client cannot be constructed.
    pub fn build(self) -> Result<ListingsClient> {
        let http_client = reqwest::Client::builder()
            .timeout(self.request_timeout)
            .build()
            .map_err(|e| ApiError::Network {
                message: format!("failed to build HTTP client: {}", e),
            })?;

        Ok(ListingsClient {
            api_key: self.api_key,
            http_client,
            base_url: self.base_url.trim_end_matches('/').to_string(),
            table: self.table,
            request_timeout: self.request_timeout,
        })
    }
}

/// Result of a fetch that never fails the caller.
///
/// On failure `listings` is empty and `error` carries the reason.
#[derive(Debug)]
pub struct FetchOutcome {
    pub listings: Vec<Listing>,
    pub error: Option<Error>,
}

impl FetchOutcome {
    /// Returns true if the fetch failed.
    pub fn is_err(&self) -> bool {
        self.error.is_some()
    }
}

impl ListingsClient {
    /// Creates a client with the default table and timeout.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        ListingsClientBuilder::new(base_url, api_key).build()
    }

    /// Returns a builder for configuring the client.
    pub fn builder(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
    ) -> ListingsClientBuilder {
        ListingsClientBuilder::new(base_url, api_key)
    }

    /// Returns the API key.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Returns the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the table listings are read from.
    pub fn table(&self) -> &str {
        &self.table
    }

    /// Returns the request timeout.
    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    /// Returns the URL of the table endpoint.
    pub fn table_url(&self) -> String {
        format!("{}{}/{}", self.base_url, REST_PATH, self.table)
    }

    /// Fetches every row of the table and normalizes it into a [`Listing`].
    ///
    /// Performs exactly one request; there is no retry.
    ///
    /// # Errors
    ///
    /// Returns an error if the source is unreachable, times out, answers with
    /// a non-success status or returns a body that is not an array of rows.
    pub async fn fetch_listings(&self) -> Result<Vec<Listing>> {
        let url = self.table_url();
        debug!(%url, "fetching listings");

        let response = self
            .http_client
            .get(&url)
            .query(&[("select", "*")])
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(self.parse_error_response(response).await);
        }

        let rows: Vec<ListingRow> = response.json().await?;
        debug!(count = rows.len(), "fetched listing rows");

        Ok(rows.into_iter().map(ListingRow::into_listing).collect())
    }

    /// Fetches listings, turning any failure into an empty result plus the
    /// reported error.
    pub async fn fetch_or_empty(&self) -> FetchOutcome {
        match self.fetch_listings().await {
            Ok(listings) => FetchOutcome {
                listings,
                error: None,
            },
            Err(e) => {
                warn!(error = %e, "error fetching listings");
                FetchOutcome {
                    listings: Vec::new(),
                    error: Some(e),
                }
            }
        }
    }

    /// Parses an error response into our error types.
    async fn parse_error_response(&self, response: reqwest::Response) -> Error {
        let status = response.status();
        let status_code = status.as_u16();
        let message = response.text().await.unwrap_or_default();

        let api_error = match status_code {
            401 | 403 => ApiError::Auth {
                message: if message.is_empty() {
                    "API key rejected".to_string()
                } else {
                    message
                },
            },
            404 => ApiError::NotFound {
                resource: format!("table '{}'", self.table),
            },
            _ => ApiError::Http {
                status: status_code,
                message: if message.is_empty() {
                    status
                        .canonical_reason()
                        .unwrap_or("Unknown error")
                        .to_string()
                } else {
                    message
                },
            },
        };

        Error::Api(api_error)
    }
}

impl fmt::Debug for ListingsClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListingsClient")
            .field("api_key", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .field("table", &self.table)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
