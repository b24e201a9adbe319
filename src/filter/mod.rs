//! Search and filter engine for the listing catalog.
//!
//! A [`FilterState`] holds the user's current selections; [`evaluate`] turns
//! it into the ordered subset of the catalog that satisfies every active
//! predicate:
//!
//! - **Search term** - case-insensitive substring of title, location or description
//! - **Min/max price** - inclusive bounds on `price`
//! - **Min beds / min baths** - inclusive lower bounds
//! - **Tags** - at least one selected tag matches a listing tag, ignoring case
//!
//! Categories are AND-ed together; selected tags are OR-ed among themselves.
//! Inactive fields (empty term, `None` bound, no tags) always match.
//!
//! [`FilterController`] owns a state and a catalog and keeps the result
//! current across mutations.
//!
//! # Example
//!
//! ```
//! use listing_scout::filter::{evaluate, FilterState};
//! use listing_scout::sources::BuiltinSource;
//!
//! let listings = BuiltinSource::listings();
//! let mut state = FilterState::from_query("?type=pool");
//! state.set_min_price("3000000");
//!
//! let results = evaluate(&listings, &state);
//! assert_eq!(results.len(), 2);
//! ```

mod controller;
mod state;

pub use controller::FilterController;
pub use state::{parse_bound, FilterState, TYPE_PARAM};

use crate::models::Listing;
use std::collections::HashSet;

/// Filters `listings`, returning the matches in their original order.
///
/// Every call is a full linear scan. That is fine for catalogs of tens or
/// hundreds of listings; anything much larger would want an index on tags
/// and a sorted view on price.
pub fn evaluate<'a>(listings: &'a [Listing], state: &FilterState) -> Vec<&'a Listing> {
    let predicates = Predicates::new(state);
    listings
        .iter()
        .filter(|listing| predicates.matches(listing))
        .collect()
}

/// Returns true if a single listing satisfies every active predicate.
pub fn matches(listing: &Listing, state: &FilterState) -> bool {
    Predicates::new(state).matches(listing)
}

/// Positions of the matching listings within `listings`, ascending.
pub(crate) fn matching_indices(listings: &[Listing], state: &FilterState) -> Vec<usize> {
    let predicates = Predicates::new(state);
    listings
        .iter()
        .enumerate()
        .filter(|(_, listing)| predicates.matches(listing))
        .map(|(i, _)| i)
        .collect()
}

/// A filter state with its query side lower-cased once per scan.
struct Predicates<'s> {
    state: &'s FilterState,
    term: String,
    tags: Vec<String>,
}

impl<'s> Predicates<'s> {
    fn new(state: &'s FilterState) -> Self {
        Self {
            state,
            term: state.search_term.to_lowercase(),
            tags: state
                .selected_tags
                .iter()
                .map(|t| t.to_lowercase())
                .collect(),
        }
    }

    fn matches(&self, listing: &Listing) -> bool {
        let state = self.state;
        matches_search(listing, &self.term)
            && state.min_price.map_or(true, |min| listing.price as f64 >= min)
            && state.max_price.map_or(true, |max| listing.price as f64 <= max)
            && state.min_beds.map_or(true, |min| listing.beds >= min)
            && state.min_baths.map_or(true, |min| listing.baths >= min)
            && matches_tags(listing, &self.tags)
    }
}

/// `term` must already be lower-cased; empty matches everything.
fn matches_search(listing: &Listing, term: &str) -> bool {
    term.is_empty()
        || listing.title.to_lowercase().contains(term)
        || listing.location.to_lowercase().contains(term)
        || listing.description.to_lowercase().contains(term)
}

/// `selected` must already be lower-cased; empty matches everything.
fn matches_tags(listing: &Listing, selected: &[String]) -> bool {
    if selected.is_empty() {
        return true;
    }

    listing
        .tags
        .iter()
        .any(|tag| selected.contains(&tag.to_lowercase()))
}

/// Distinct tags across every listing, in first-seen order.
///
/// Unlike tag matching, this is case-sensitive: `"Pool"` and `"pool"` would
/// both appear if the catalog stored both spellings.
pub fn tag_vocabulary(listings: &[Listing]) -> Vec<&str> {
    let mut seen = HashSet::new();
    listings
        .iter()
        .flat_map(|listing| listing.tags.iter())
        .map(String::as_str)
        .filter(|tag| seen.insert(*tag))
        .collect()
}
