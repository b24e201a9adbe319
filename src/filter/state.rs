use crate::format::format_amount;
use serde::Serialize;
use std::collections::BTreeSet;
use url::Url;

/// Name of the only query parameter the filter state is seeded from
pub const TYPE_PARAM: &str = "type";

/// Current search and filter selections
///
/// `None` bounds and an empty search term or tag set mean the matching
/// predicate is inactive.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FilterState {
    /// Matched as a raw, untrimmed substring
    pub search_term: String,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub min_beds: Option<f64>,
    pub min_baths: Option<f64>,
    pub selected_tags: BTreeSet<String>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed from a URL query string such as `?type=Pool` or `type=Pool&x=1`
    ///
    /// Only the first `type` parameter is read. A non-empty value becomes the
    /// sole selected tag, verbatim; it is not checked against the catalog.
    pub fn from_query(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let type_param = url::form_urlencoded::parse(query.as_bytes())
            .find(|(key, _)| key == TYPE_PARAM)
            .map(|(_, value)| value.into_owned());

        let mut state = Self::default();
        if let Some(tag) = type_param.filter(|t| !t.is_empty()) {
            state.selected_tags.insert(tag);
        }
        state
    }

    /// Seed from the query part of a full page URL
    pub fn from_url(url: &Url) -> Self {
        Self::from_query(url.query().unwrap_or(""))
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// Numeric setters take raw text input; anything unparseable clears the bound
    pub fn set_min_price(&mut self, input: &str) {
        self.min_price = parse_bound(input);
    }

    pub fn set_max_price(&mut self, input: &str) {
        self.max_price = parse_bound(input);
    }

    pub fn set_min_beds(&mut self, input: &str) {
        self.min_beds = parse_bound(input);
    }

    pub fn set_min_baths(&mut self, input: &str) {
        self.min_baths = parse_bound(input);
    }

    /// Select `tag` if it isn't selected, deselect it if it is
    ///
    /// Membership here is exact (case-sensitive); only matching against
    /// listings ignores case. Returns true if the tag is now selected.
    pub fn toggle_tag(&mut self, tag: &str) -> bool {
        if self.selected_tags.remove(tag) {
            false
        } else {
            self.selected_tags.insert(tag.to_string());
            true
        }
    }

    /// Reset every field in one step
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn has_active_filters(&self) -> bool {
        !self.search_term.is_empty()
            || self.min_price.is_some()
            || self.max_price.is_some()
            || self.min_beds.is_some()
            || self.min_baths.is_some()
            || !self.selected_tags.is_empty()
    }

    /// One label per active filter, for an "active filters" row
    pub fn active_filter_labels(&self) -> Vec<String> {
        let mut labels = Vec::new();

        if !self.search_term.is_empty() {
            labels.push(format!("Search: \"{}\"", self.search_term));
        }
        if let Some(min) = self.min_price {
            labels.push(format!("Min: {}", format_amount(min)));
        }
        if let Some(max) = self.max_price {
            labels.push(format!("Max: {}", format_amount(max)));
        }
        if let Some(beds) = self.min_beds {
            labels.push(format!("{}+ beds", beds));
        }
        if let Some(baths) = self.min_baths {
            labels.push(format!("{}+ baths", baths));
        }
        labels.extend(self.selected_tags.iter().cloned());

        labels
    }
}

/// Normalize raw numeric input into an optional bound
///
/// Empty, non-numeric, non-finite and negative input all mean "no bound".
pub fn parse_bound(input: &str) -> Option<f64> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    input
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite() && *value >= 0.0)
}
