//! Catalogs fetched over HTTP.

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::catalog::{eligible, parse_catalog, CardSource};
use crate::domain::{Card, CardKind, ContentRating};
use crate::errors::domain::DomainError;

/// Fetches `{base_url}/setups.csv` and `{base_url}/punchlines.csv`.
#[derive(Debug, Clone)]
pub struct HttpCardSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpCardSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn url_for(&self, kind: CardKind) -> String {
        format!("{}/{}", self.base_url, kind.file_name())
    }
}

#[async_trait]
impl CardSource for HttpCardSource {
    async fn fetch_cards(
        &self,
        kind: CardKind,
        rating: ContentRating,
    ) -> Result<Vec<Card>, DomainError> {
        let url = self.url_for(kind);
        let unavailable = |e: reqwest::Error| {
            warn!(url = %url, error = %e, "Card catalog fetch failed");
            DomainError::CardSourceUnavailable(format!("{url}: {e}"))
        };

        let body = self
            .client
            .get(&url)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(&unavailable)?
            .bytes()
            .await
            .map_err(&unavailable)?;

        let entries = parse_catalog(&body[..])?;
        debug!(url = %url, cards = entries.len(), "Fetched catalog");
        Ok(eligible(&entries, rating))
    }
}
