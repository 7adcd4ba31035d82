//! Listing filtering and grouping ahead of concurrent resolution

use std::collections::BTreeMap;
use tracing::debug;

use super::types::Listing;

/// Filtered listings partitioned into per-key candidate sets.
///
/// Keys iterate in sorted order, so the same input always produces the same
/// partition regardless of harvest order. Every retained listing appears in
/// exactly one candidate set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PreparedListings {
    groups: BTreeMap<String, Vec<Listing>>,
}

impl PreparedListings {
    /// Number of distinct group keys.
    #[must_use]
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Total listings retained across all candidate sets.
    #[must_use]
    pub fn listing_count(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Iterate candidate sets in key order.
    pub fn groups(&self) -> impl Iterator<Item = (&str, &[Listing])> {
        self.groups.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Consume into the underlying key-sorted partition.
    #[must_use]
    pub fn into_groups(self) -> BTreeMap<String, Vec<Listing>> {
        self.groups
    }
}

/// Filter and partition harvested listings.
///
/// Listings whose lowercased title contains any of `excluded_terms` are
/// dropped; the rest are grouped by [`super::group_key`]. Candidate order
/// within a group follows input order.
#[must_use]
pub fn prepare(listings: Vec<Listing>, excluded_terms: &[String]) -> PreparedListings {
    let mut groups: BTreeMap<String, Vec<Listing>> = BTreeMap::new();
    let mut dropped = 0usize;

    for listing in listings {
        let title = listing.title.to_lowercase();
        if excluded_terms.iter().any(|term| title.contains(term.as_str())) {
            dropped += 1;
            continue;
        }
        let key = listing.group_key().to_string();
        groups.entry(key).or_default().push(listing);
    }

    debug!(
        "Prepared {} candidate groups ({dropped} listings excluded by title)",
        groups.len()
    );
    PreparedListings { groups }
}
