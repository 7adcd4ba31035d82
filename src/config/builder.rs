//! Type-safe builder for `ScrapeConfig` using the typestate pattern
//!
//! The two required fields, storage directory and seller URL, must be set
//! before `build` becomes available.

use anyhow::{Result, anyhow};
use std::marker::PhantomData;
use std::path::PathBuf;

use super::types::ScrapeConfig;
use crate::utils::{DEFAULT_MAX_CONCURRENT_SESSIONS, DEFAULT_PAGE_LOAD_TIMEOUT_SECS};

// Type states for the builder
pub struct WithStorageDir;
pub struct WithSellerUrl;

pub struct ScrapeConfigBuilder<State = ()> {
    pub(crate) storage_dir: Option<PathBuf>,
    pub(crate) seller_url: Option<String>,
    pub(crate) headless: bool,
    pub(crate) page_load_timeout_secs: Option<u64>,
    pub(crate) max_concurrent_sessions: Option<usize>,
    pub(crate) excluded_title_terms: Option<Vec<String>>,
    pub(crate) currency_marker: Option<String>,
    pub(crate) _phantom: PhantomData<State>,
}

impl Default for ScrapeConfigBuilder<()> {
    fn default() -> Self {
        Self {
            storage_dir: None,
            seller_url: None,
            headless: true,
            page_load_timeout_secs: Some(DEFAULT_PAGE_LOAD_TIMEOUT_SECS),
            max_concurrent_sessions: Some(DEFAULT_MAX_CONCURRENT_SESSIONS),
            excluded_title_terms: None,
            currency_marker: None,
            _phantom: PhantomData,
        }
    }
}

impl ScrapeConfig {
    /// Create a builder for configuring a `ScrapeConfig` with a fluent interface
    #[must_use]
    pub fn builder() -> ScrapeConfigBuilder<()> {
        ScrapeConfigBuilder::default()
    }
}

impl ScrapeConfigBuilder<()> {
    pub fn storage_dir(self, dir: impl Into<PathBuf>) -> ScrapeConfigBuilder<WithStorageDir> {
        ScrapeConfigBuilder {
            storage_dir: Some(dir.into()),
            seller_url: self.seller_url,
            headless: self.headless,
            page_load_timeout_secs: self.page_load_timeout_secs,
            max_concurrent_sessions: self.max_concurrent_sessions,
            excluded_title_terms: self.excluded_title_terms,
            currency_marker: self.currency_marker,
            _phantom: PhantomData,
        }
    }
}

impl ScrapeConfigBuilder<WithStorageDir> {
    pub fn seller_url(self, url: impl Into<String>) -> ScrapeConfigBuilder<WithSellerUrl> {
        let url_string = url.into();

        // Normalize URL: add https:// if no scheme is present
        let normalized_url =
            if url_string.starts_with("http://") || url_string.starts_with("https://") {
                url_string
            } else {
                format!("https://{url_string}")
            };

        ScrapeConfigBuilder {
            storage_dir: self.storage_dir,
            seller_url: Some(normalized_url),
            headless: self.headless,
            page_load_timeout_secs: self.page_load_timeout_secs,
            max_concurrent_sessions: self.max_concurrent_sessions,
            excluded_title_terms: self.excluded_title_terms,
            currency_marker: self.currency_marker,
            _phantom: PhantomData,
        }
    }
}

// Optional fields can be set from any state
impl<State> ScrapeConfigBuilder<State> {
    #[must_use]
    pub fn headless(mut self, headless: bool) -> Self {
        self.headless = headless;
        self
    }

    /// Set the per-operation timeout for page navigation and settle waits
    #[must_use]
    pub fn page_load_timeout_secs(mut self, secs: u64) -> Self {
        self.page_load_timeout_secs = Some(secs);
        self
    }

    /// Set the admission-control width for concurrent group workers
    #[must_use]
    pub fn max_concurrent_sessions(mut self, sessions: usize) -> Self {
        self.max_concurrent_sessions = Some(sessions);
        self
    }

    /// Set the title substrings that exclude a listing before grouping.
    ///
    /// Matching is done against lowercased titles, so the terms are
    /// lowercased here.
    #[must_use]
    pub fn excluded_title_terms(mut self, terms: Vec<String>) -> Self {
        self.excluded_title_terms = Some(terms.into_iter().map(|t| t.to_lowercase()).collect());
        self
    }

    /// Set the substring an accepted listing's price text must contain
    #[must_use]
    pub fn currency_marker(mut self, marker: impl Into<String>) -> Self {
        self.currency_marker = Some(marker.into());
        self
    }
}

// Build method only available when both required fields are set
impl ScrapeConfigBuilder<WithSellerUrl> {
    pub fn build(self) -> Result<ScrapeConfig> {
        Ok(ScrapeConfig {
            storage_dir: self
                .storage_dir
                .ok_or_else(|| anyhow!("storage_dir is required"))?,
            seller_url: self
                .seller_url
                .ok_or_else(|| anyhow!("seller_url is required"))?,
            headless: self.headless,
            page_load_timeout_secs: self.page_load_timeout_secs,
            max_concurrent_sessions: self.max_concurrent_sessions,
            excluded_title_terms: self.excluded_title_terms,
            currency_marker: self.currency_marker,
            chrome_data_dir: None,
        })
    }
}
