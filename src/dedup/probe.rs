//! Candidate probing: fetch a listing's displayed price text

use anyhow::{Context, Result};
use async_trait::async_trait;
use chromiumoxide::browser::Browser;
use chromiumoxide::page::Page;
use std::sync::Arc;
use tracing::debug;

use crate::utils::{PRICE_SELECTOR, with_page_timeout};

/// Fetches the primary displayed price text of a listing's detail page.
///
/// The resolver only depends on this trait, keeping it free of CDP plumbing;
/// tests substitute table-backed stubs.
#[async_trait]
pub trait ListingProbe: Send + Sync {
    /// Raw text of the listing's primary price element.
    async fn price_text(&self, url: &str) -> Result<String>;
}

/// [`ListingProbe`] backed by a shared chromiumoxide browser.
///
/// Every probe opens its own page and closes it afterwards, so concurrent
/// workers never share session state. Navigation and settling are bounded by
/// the configured page timeout.
pub struct PageProbe {
    browser: Arc<Browser>,
    page_load_timeout_secs: u64,
}

impl PageProbe {
    #[must_use]
    pub fn new(browser: Arc<Browser>, page_load_timeout_secs: u64) -> Self {
        Self {
            browser,
            page_load_timeout_secs,
        }
    }

    async fn read_price(&self, page: &Page, url: &str) -> Result<String> {
        with_page_timeout(
            async { page.goto(url).await.map_err(|e| anyhow::anyhow!("{e}")) },
            self.page_load_timeout_secs,
            "Listing navigation",
        )
        .await
        .with_context(|| format!("Failed to open listing {url}"))?;

        with_page_timeout(
            async {
                page.wait_for_navigation()
                    .await
                    .map_err(|e| anyhow::anyhow!("{e}"))
            },
            self.page_load_timeout_secs,
            "Listing load",
        )
        .await
        .with_context(|| format!("Listing never settled: {url}"))?;

        let text = page
            .find_element(PRICE_SELECTOR)
            .await
            .with_context(|| format!("Price element missing on {url}"))?
            .inner_text()
            .await
            .with_context(|| format!("Failed to read price text on {url}"))?
            .unwrap_or_default();

        Ok(text)
    }
}

#[async_trait]
impl ListingProbe for PageProbe {
    async fn price_text(&self, url: &str) -> Result<String> {
        let page = self
            .browser
            .new_page("about:blank")
            .await
            .context("Failed to open probe page")?;

        let price = self.read_price(&page, url).await;

        if let Err(e) = page.close().await {
            debug!("Failed to close probe page for {url}: {e}");
        }
        price
    }
}
