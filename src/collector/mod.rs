//! Storefront collection phase
//!
//! Drives a browser through the seller's paginated search results and
//! harvests (title, url) pairs. Pagination ends when the next-page control is
//! missing or advancing times out; both are the loop's normal exit, not
//! errors. The one-time storefront setup assumes a stable DOM and fails the
//! run on any mismatch.

mod extract;

use anyhow::{Context, Result, anyhow};
use chromiumoxide::browser::Browser;
use chromiumoxide::page::Page;
use tracing::{debug, info};
use url::Url;

use crate::config::ScrapeConfig;
use crate::dedup::Listing;
use crate::progress::ProgressReporter;
use crate::utils::{
    CONSENT_ACCEPT_SELECTOR, PAGE_SIZE_MENU_SELECTOR, PAGE_SIZE_OPTION_SELECTOR,
    PAGE_SIZE_OPTION_TEXT, SEE_ALL_LINK_SELECTOR, SEE_ALL_LINK_TEXT, with_page_timeout,
};

use extract::{
    advance_to_next_page, extract_page_listings, find_element_with_text, wait_for_listings,
};

/// Harvest every listing from the seller's storefront.
pub async fn collect_listings<R: ProgressReporter>(
    browser: &Browser,
    config: &ScrapeConfig,
    progress: &R,
) -> Result<Vec<Listing>> {
    let seller_url = Url::parse(config.seller_url())
        .with_context(|| format!("Invalid seller URL: {}", config.seller_url()))?;
    let timeout_secs = config.page_load_timeout_secs();

    let page = browser
        .new_page("about:blank")
        .await
        .context("Failed to open storefront page")?;

    with_page_timeout(
        async {
            page.goto(seller_url.as_str())
                .await
                .map_err(|e| anyhow!("{e}"))
        },
        timeout_secs,
        "Storefront navigation",
    )
    .await
    .with_context(|| format!("Failed to open storefront {seller_url}"))?;
    settle(&page, timeout_secs, "Storefront load").await?;

    prepare_results_view(&page, timeout_secs).await?;

    let mut listings = Vec::new();
    let mut page_no = 1usize;
    loop {
        settle(&page, timeout_secs, "Results page load").await?;
        wait_for_listings(&page).await?;

        let batch = extract_page_listings(&page).await?;
        debug!("Results page {page_no}: {} listings", batch.len());
        listings.extend(batch);
        progress.report_page_collected(page_no, listings.len());

        if !advance_to_next_page(&page, timeout_secs).await? {
            break;
        }
        page_no += 1;
    }

    info!(
        "Collected {} listings from {page_no} result pages",
        listings.len()
    );
    if let Err(e) = page.close().await {
        debug!("Failed to close storefront page: {e}");
    }
    Ok(listings)
}

/// One-time storefront setup: accept the consent dialog, open the expanded
/// results view, and select the largest items-per-page option.
async fn prepare_results_view(page: &Page, timeout_secs: u64) -> Result<()> {
    let consent = page
        .find_element(CONSENT_ACCEPT_SELECTOR)
        .await
        .context("Consent dialog button not found")?;
    consent
        .click()
        .await
        .context("Failed to accept consent dialog")?;
    settle(page, timeout_secs, "Post-consent load").await?;

    let see_all = find_element_with_text(page, SEE_ALL_LINK_SELECTOR, SEE_ALL_LINK_TEXT).await?;
    see_all
        .click()
        .await
        .context("Failed to open the expanded results view")?;
    settle(page, timeout_secs, "Results view load").await?;

    let menu = page
        .find_element(PAGE_SIZE_MENU_SELECTOR)
        .await
        .context("Items-per-page menu not found")?;
    menu.click()
        .await
        .context("Failed to open items-per-page menu")?;

    let option =
        find_element_with_text(page, PAGE_SIZE_OPTION_SELECTOR, PAGE_SIZE_OPTION_TEXT).await?;
    option
        .click()
        .await
        .context("Failed to select items-per-page option")?;
    settle(page, timeout_secs, "Resized results load").await?;

    Ok(())
}

/// Wait for the current navigation to settle, bounded by the page timeout.
async fn settle(page: &Page, timeout_secs: u64, operation: &'static str) -> Result<()> {
    with_page_timeout(
        async {
            page.wait_for_navigation()
                .await
                .map_err(|e| anyhow!("{e}"))?;
            Ok(())
        },
        timeout_secs,
        operation,
    )
    .await
}
