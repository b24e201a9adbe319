//! Property catalog search for a real-estate listing site.
//!
//! Listings come from a [`sources::CatalogSource`], are held in an immutable
//! [`catalog::Catalog`], and are narrowed down by the [`filter`] engine.

pub mod catalog;
pub mod filter;
pub mod format;
pub mod models;
pub mod sources;

pub use catalog::Catalog;
pub use filter::{evaluate, FilterController, FilterState};
pub use models::Listing;
