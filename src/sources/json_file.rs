use crate::models::Listing;
use crate::sources::traits::CatalogSource;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Catalog stored as a JSON array of listings on disk
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl CatalogSource for JsonFileSource {
    async fn load(&self) -> Result<Vec<Listing>> {
        info!("Reading catalog from {}", self.path.display());

        let json = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read catalog file {}", self.path.display()))?;

        debug!("Read {} bytes of catalog JSON", json.len());

        let listings: Vec<Listing> = serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse catalog file {}", self.path.display()))?;

        Ok(listings)
    }

    fn source_name(&self) -> &'static str {
        "json-file"
    }
}
