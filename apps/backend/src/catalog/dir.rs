//! Catalogs read from a local directory.

use std::path::PathBuf;

use async_trait::async_trait;
use tracing::debug;

use crate::catalog::{eligible, parse_catalog, CardSource};
use crate::domain::{Card, CardKind, ContentRating};
use crate::errors::domain::DomainError;

/// Reads `setups.csv` and `punchlines.csv` from `root` on every fetch.
#[derive(Debug, Clone)]
pub struct DirCardSource {
    root: PathBuf,
}

impl DirCardSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl CardSource for DirCardSource {
    async fn fetch_cards(
        &self,
        kind: CardKind,
        rating: ContentRating,
    ) -> Result<Vec<Card>, DomainError> {
        let path = self.root.join(kind.file_name());
        let bytes = tokio::fs::read(&path).await.map_err(|e| {
            DomainError::CardSourceUnavailable(format!("{}: {e}", path.display()))
        })?;
        let entries = parse_catalog(bytes.as_slice())?;
        debug!(path = %path.display(), cards = entries.len(), "Loaded catalog");
        Ok(eligible(&entries, rating))
    }
}
