//! HTTP client for the remote salt search endpoint.

use serde::Deserialize;
use thiserror::Error;

use crate::types::SaltRecord;

/// Search endpoint queried when no override is configured.
pub const DEFAULT_ENDPOINT: &str = "https://backend.cappsule.co.in/api/v1/new_search";

/// Pharmacy identifiers sent with every search when not overridden.
pub const DEFAULT_PHARMACY_IDS: &str = "1,2,3";

const USER_AGENT_VALUE: &str = concat!("saltscout/", env!("CARGO_PKG_VERSION"));

/// Failures surfaced by [`SearchClient::search`]. All of them are logged and
/// swallowed by the UI, which stays in its prior state.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request could not be sent or the transport failed mid-flight.
    #[error("search request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status.
    #[error("search endpoint returned {status}")]
    Status { status: reqwest::StatusCode },

    /// The response body was not the expected JSON envelope.
    #[error("failed to decode search response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Blocking client for `GET <endpoint>?q=<term>&pharmacyIds=<csv>`.
#[derive(Debug, Clone)]
pub struct SearchClient {
    client: reqwest::blocking::Client,
    endpoint: String,
    pharmacy_ids: String,
}

impl SearchClient {
    pub fn new(
        endpoint: impl Into<String>,
        pharmacy_ids: impl Into<String>,
    ) -> Result<Self, ApiError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT_VALUE)
            .build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
            pharmacy_ids: pharmacy_ids.into(),
        })
    }

    /// Fetch the salt suggestions matching `term`.
    pub fn search(&self, term: &str) -> Result<Vec<SaltRecord>, ApiError> {
        tracing::debug!(endpoint = %self.endpoint, term, "fetching salt suggestions");

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("q", term), ("pharmacyIds", self.pharmacy_ids.as_str())])
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status { status });
        }

        let body = response.text()?;
        let envelope: SearchResponse = serde_json::from_str(&body)?;
        Ok(envelope.data.salt_suggestions)
    }
}

/// Wire envelope: `{ "data": { "saltSuggestions": [...] } }`.
#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    data: ResponseData,
}

#[derive(Debug, Default, Deserialize)]
struct ResponseData {
    #[serde(default, rename = "saltSuggestions")]
    salt_suggestions: Vec<SaltRecord>,
}
