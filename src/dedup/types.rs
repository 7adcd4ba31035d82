//! Core types for the deduplication stage

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single storefront listing harvested by the collector.
///
/// Immutable once captured; the dedup stage only reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    pub url: String,
    pub title: String,
}

impl Listing {
    #[must_use]
    pub fn new(url: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            title: title.into(),
        }
    }

    /// Grouping identifier for this listing (see [`group_key`]).
    #[must_use]
    pub fn group_key(&self) -> &str {
        group_key(&self.url)
    }
}

/// Derive the grouping identifier from a listing URL.
///
/// The storefront encodes the catalog id after the last `:` of an item URL;
/// listings sharing it are presumed to be the same physical item listed more
/// than once. A URL without a colon is its own key, and re-deriving a key
/// from itself yields the same key.
#[must_use]
pub fn group_key(url: &str) -> &str {
    url.rsplit(':').next().unwrap_or(url)
}

/// Failures surfaced by the deduplication driver.
#[derive(Debug, Error)]
pub enum DedupError {
    /// One or more group workers failed; the batch result is invalid even
    /// though the remaining workers ran to completion.
    #[error("{failed} of {total} listing groups failed to resolve")]
    GroupFailures { failed: usize, total: usize },

    /// The admission-control semaphore was closed while workers waited.
    #[error("admission control closed: {0}")]
    AdmissionClosed(String),
}
