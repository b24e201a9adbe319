//! The read-only, ordered collection of listings the filter engine runs over.

use crate::filter;
use crate::models::Listing;
use crate::sources::CatalogSource;
use anyhow::{bail, Result};
use std::collections::HashSet;
use tracing::info;

/// Immutable catalog of listings, in the order the source produced them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    listings: Vec<Listing>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate listing ids.
    pub fn new(listings: Vec<Listing>) -> Result<Self> {
        let mut seen = HashSet::new();
        for listing in &listings {
            if !seen.insert(listing.id.as_str()) {
                bail!("Duplicate listing id in catalog: {}", listing.id);
            }
        }

        Ok(Self { listings })
    }

    /// Load a catalog from a source.
    pub async fn load(source: &dyn CatalogSource) -> Result<Self> {
        let listings = source.load().await?;
        let catalog = Self::new(listings)?;
        info!(
            "Loaded {} listings from {} source",
            catalog.len(),
            source.source_name()
        );
        Ok(catalog)
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    /// Look up a single listing by id.
    pub fn get(&self, id: &str) -> Option<&Listing> {
        self.listings.iter().find(|l| l.id == id)
    }

    /// Featured listings in catalog order, at most `limit`.
    pub fn featured(&self, limit: usize) -> Vec<&Listing> {
        self.listings
            .iter()
            .filter(|l| l.is_featured)
            .take(limit)
            .collect()
    }

    /// Other listings to suggest next to `id`, in catalog order, at most `limit`.
    ///
    /// There is no similarity scoring; this is simply "everything else".
    pub fn similar_to(&self, id: &str, limit: usize) -> Vec<&Listing> {
        self.listings
            .iter()
            .filter(|l| l.id != id)
            .take(limit)
            .collect()
    }

    /// Distinct tags across the whole catalog. See [`filter::tag_vocabulary`].
    pub fn tags(&self) -> Vec<&str> {
        filter::tag_vocabulary(&self.listings)
    }
}
