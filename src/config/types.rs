//! Core configuration types for storefront scraping

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::utils::{
    DEFAULT_MAX_CONCURRENT_SESSIONS, DEFAULT_PAGE_LOAD_TIMEOUT_SECS, DEFAULT_SELLER_URL,
};

/// Main configuration struct for a scrape run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapeConfig {
    /// Directory receiving the harvested-listings file and the results CSV.
    pub(crate) storage_dir: PathBuf,

    /// Storefront entry page of the seller being scraped.
    pub(crate) seller_url: String,

    pub(crate) headless: bool,

    /// Timeout in seconds for page navigation and settle waits.
    ///
    /// Applied per operation; a page that never responds fails the worker
    /// instead of stalling it.
    pub(crate) page_load_timeout_secs: Option<u64>,

    /// Maximum number of group workers actively browsing at once.
    pub(crate) max_concurrent_sessions: Option<usize>,

    /// Lowercase title substrings; a match drops the listing before grouping.
    pub(crate) excluded_title_terms: Option<Vec<String>>,

    /// Substring the displayed price must contain for acceptance.
    pub(crate) currency_marker: Option<String>,

    /// Chrome user data directory for browser profile isolation.
    /// When unset, a per-process temp directory is used.
    #[serde(skip)]
    pub(crate) chrome_data_dir: Option<PathBuf>,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            storage_dir: PathBuf::from("./output"),
            seller_url: DEFAULT_SELLER_URL.to_string(),
            headless: true,
            page_load_timeout_secs: Some(DEFAULT_PAGE_LOAD_TIMEOUT_SECS),
            max_concurrent_sessions: Some(DEFAULT_MAX_CONCURRENT_SESSIONS),
            excluded_title_terms: None,
            currency_marker: None,
            chrome_data_dir: None,
        }
    }
}

impl ScrapeConfig {
    /// Use a specific Chrome user data directory for browser profile
    /// isolation instead of the per-process temp directory fallback.
    #[must_use]
    pub fn with_chrome_data_dir(mut self, dir: PathBuf) -> Self {
        self.chrome_data_dir = Some(dir);
        self
    }
}
