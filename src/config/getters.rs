//! Getter methods for `ScrapeConfig`
//!
//! Accessor methods for retrieving configuration values, resolving defaults
//! for unset optional fields.

use std::path::{Path, PathBuf};

use super::types::ScrapeConfig;
use crate::utils::{
    DEFAULT_CURRENCY_MARKER, DEFAULT_EXCLUDED_TITLE_TERMS, DEFAULT_MAX_CONCURRENT_SESSIONS,
    DEFAULT_PAGE_LOAD_TIMEOUT_SECS, LISTINGS_FILE, RESULTS_FILE,
};

impl ScrapeConfig {
    #[must_use]
    pub fn storage_dir(&self) -> &Path {
        &self.storage_dir
    }

    #[must_use]
    pub fn seller_url(&self) -> &str {
        &self.seller_url
    }

    #[must_use]
    pub fn headless(&self) -> bool {
        self.headless
    }

    #[must_use]
    pub fn page_load_timeout_secs(&self) -> u64 {
        self.page_load_timeout_secs
            .unwrap_or(DEFAULT_PAGE_LOAD_TIMEOUT_SECS)
    }

    #[must_use]
    pub fn max_concurrent_sessions(&self) -> usize {
        self.max_concurrent_sessions
            .unwrap_or(DEFAULT_MAX_CONCURRENT_SESSIONS)
    }

    /// Lowercase title substrings that exclude a listing before grouping
    #[must_use]
    pub fn excluded_title_terms(&self) -> Vec<String> {
        self.excluded_title_terms.clone().unwrap_or_else(|| {
            DEFAULT_EXCLUDED_TITLE_TERMS
                .iter()
                .map(|t| (*t).to_string())
                .collect()
        })
    }

    /// Substring the displayed price must contain for acceptance
    #[must_use]
    pub fn currency_marker(&self) -> &str {
        self.currency_marker
            .as_deref()
            .unwrap_or(DEFAULT_CURRENCY_MARKER)
    }

    #[must_use]
    pub fn chrome_data_dir(&self) -> Option<&PathBuf> {
        self.chrome_data_dir.as_ref()
    }

    /// Path of the harvested-listings file inside the storage directory
    #[must_use]
    pub fn listings_path(&self) -> PathBuf {
        self.storage_dir.join(LISTINGS_FILE)
    }

    /// Path of the accepted-listings CSV inside the storage directory
    #[must_use]
    pub fn results_path(&self) -> PathBuf {
        self.storage_dir.join(RESULTS_FILE)
    }
}
