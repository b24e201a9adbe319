use serde::{Deserialize, Serialize};

/// Core listing data model
///
/// Listings are read-only once loaded into a catalog; filtering only ever
/// selects a subset of them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: String,
    pub title: String,
    pub description: String,
    pub location: String,
    pub price: u64,
    /// Fractional values load as-is; catalogs are not required to use whole numbers
    pub beds: f64,
    /// Half baths are common, so this is fractional (e.g. 3.5)
    pub baths: f64,
    pub sqft: u32,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub is_new_listing: bool,
}

impl Listing {
    /// True if any of the listing's tags equals `tag`, ignoring case
    pub fn has_tag_ignore_case(&self, tag: &str) -> bool {
        let tag = tag.to_lowercase();
        self.tags.iter().any(|t| t.to_lowercase() == tag)
    }
}
