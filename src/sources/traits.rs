use crate::models::Listing;
use anyhow::Result;
use async_trait::async_trait;

/// Anything that can produce the listings for a catalog, in display order
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Load every listing, in catalog order
    async fn load(&self) -> Result<Vec<Listing>>;

    /// Get the name of the catalog source
    fn source_name(&self) -> &'static str;
}
