//! Retrieval of the raw DBLP feed over HTTP.
//!
//! One GET, no retries, no timeout and no caching. A failed request is
//! logged and reported as "no document", which the extractor turns into an
//! empty publication list.

use crate::{PublistError, Result};

/// Fetches a single DBLP feed document.
#[derive(Debug, Clone)]
pub struct DblpFetcher {
    client: reqwest::Client,
    url: String,
}

impl DblpFetcher {
    /// Creates a fetcher for `url` with a default HTTP client.
    pub fn new(url: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(concat!("dblp-publist/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self::with_client(client, url)
    }

    /// Creates a fetcher that reuses an existing client.
    pub fn with_client(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    /// Retrieves the feed, returning `None` on any transport or HTTP error.
    pub async fn fetch(&self) -> Option<String> {
        tracing::info!(url = %self.url, "fetching DBLP data");
        match self.try_fetch().await {
            Ok(body) => {
                tracing::info!(bytes = body.len(), "DBLP data fetched successfully");
                Some(body)
            }
            Err(err) => {
                tracing::error!(url = %self.url, error = %err, "error fetching DBLP data");
                None
            }
        }
    }

    /// Retrieves the feed, reporting why it failed.
    ///
    /// # Errors
    ///
    /// Returns `PublistError::Http` for a non-success status and
    /// `PublistError::Transport` when the request or body read fails
    pub async fn try_fetch(&self) -> Result<String> {
        let resp = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| PublistError::Transport(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(PublistError::Http {
                status: status.as_u16(),
            });
        }

        resp.text()
            .await
            .map_err(|e| PublistError::Transport(e.to_string()))
    }
}
