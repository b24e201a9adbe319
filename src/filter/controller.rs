use super::{matching_indices, FilterState};
use crate::catalog::Catalog;
use crate::models::Listing;
use std::sync::Arc;
use tracing::debug;

/// Single owner of a [`FilterState`] over a shared catalog
///
/// Readers get borrowed views; every mutation goes through a method here and
/// recomputes the visible listings before returning.
#[derive(Debug, Clone)]
pub struct FilterController {
    catalog: Arc<Catalog>,
    state: FilterState,
    /// Indices into `catalog.listings()`, ascending
    visible: Vec<usize>,
}

impl FilterController {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self::with_state(catalog, FilterState::default())
    }

    /// Seed the state from a page query string, e.g. `?type=Pool`
    pub fn with_query(catalog: Arc<Catalog>, query: &str) -> Self {
        Self::with_state(catalog, FilterState::from_query(query))
    }

    pub fn with_state(catalog: Arc<Catalog>, state: FilterState) -> Self {
        let mut controller = Self {
            catalog,
            state,
            visible: Vec::new(),
        };
        controller.recompute();
        controller
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Visible listings in catalog order
    pub fn results(&self) -> Vec<&Listing> {
        let listings = self.catalog.listings();
        self.visible.iter().map(|&i| &listings[i]).collect()
    }

    pub fn result_count(&self) -> usize {
        self.visible.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }

    /// Tag vocabulary of the whole catalog, not just the visible listings
    pub fn tags(&self) -> Vec<&str> {
        self.catalog.tags()
    }

    pub fn has_active_filters(&self) -> bool {
        self.state.has_active_filters()
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.state.set_search_term(term);
        self.recompute();
    }

    pub fn set_min_price(&mut self, input: &str) {
        self.state.set_min_price(input);
        self.recompute();
    }

    pub fn set_max_price(&mut self, input: &str) {
        self.state.set_max_price(input);
        self.recompute();
    }

    pub fn set_min_beds(&mut self, input: &str) {
        self.state.set_min_beds(input);
        self.recompute();
    }

    pub fn set_min_baths(&mut self, input: &str) {
        self.state.set_min_baths(input);
        self.recompute();
    }

    /// Returns true if the tag is now selected
    pub fn toggle_tag(&mut self, tag: &str) -> bool {
        let selected = self.state.toggle_tag(tag);
        self.recompute();
        selected
    }

    pub fn clear_filters(&mut self) {
        self.state.clear();
        self.recompute();
    }

    /// Swap in a new catalog, keeping the current selections
    pub fn replace_catalog(&mut self, catalog: Arc<Catalog>) {
        self.catalog = catalog;
        self.recompute();
    }

    fn recompute(&mut self) {
        self.visible = matching_indices(self.catalog.listings(), &self.state);

        debug!(
            "Filters updated: {} of {} listings visible",
            self.visible.len(),
            self.catalog.len()
        );
    }
}
