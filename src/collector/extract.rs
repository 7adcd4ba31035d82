//! Per-page DOM extraction and pagination for the storefront results view

use anyhow::{Context, Result, anyhow};
use chromiumoxide::element::Element;
use chromiumoxide::page::Page;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

use crate::dedup::Listing;
use crate::utils::{
    LISTING_LINK_SELECTOR, LISTING_RENDER_WAIT_SECS, LISTING_TILE_SELECTOR,
    LISTING_TITLE_SELECTOR, NEXT_PAGE_SELECTOR, is_timeout, with_page_timeout,
};

/// Wait until listing tiles are present in the DOM.
///
/// Navigation resolves when the response arrives, but the results river can
/// render afterwards; poll for tiles with a deadline.
pub(crate) async fn wait_for_listings(page: &Page) -> Result<()> {
    let deadline = Duration::from_secs(LISTING_RENDER_WAIT_SECS);
    let start = Instant::now();
    let poll_interval = Duration::from_millis(200);

    loop {
        if page.find_element(LISTING_TILE_SELECTOR).await.is_ok() {
            return Ok(());
        }
        if start.elapsed() >= deadline {
            let url = page.url().await.ok().flatten().unwrap_or_default();
            return Err(anyhow!(
                "No listing tiles appeared within {}s on {url}",
                deadline.as_secs()
            ));
        }
        tokio::time::sleep(poll_interval).await;
    }
}

/// Extract all listings visible on the current results page.
///
/// The item href is required; a tile without one (sponsored filler and the
/// like) is skipped. A missing title falls back to an empty string rather
/// than dropping the tile.
pub(crate) async fn extract_page_listings(page: &Page) -> Result<Vec<Listing>> {
    let tiles = page
        .find_elements(LISTING_TILE_SELECTOR)
        .await
        .context("Failed to query listing tiles")?;

    let mut listings = Vec::with_capacity(tiles.len());
    for tile in tiles {
        let url = match tile.find_element(LISTING_LINK_SELECTOR).await {
            Ok(link) => link
                .attribute("href")
                .await
                .context("Failed to read listing href")?,
            Err(_) => None,
        };
        let Some(url) = url else {
            warn!("Skipping listing tile without an item link");
            continue;
        };

        let title = match tile.find_element(LISTING_TITLE_SELECTOR).await {
            Ok(el) => el
                .inner_text()
                .await
                .context("Failed to read listing title")?
                .unwrap_or_default(),
            Err(_) => String::new(),
        };

        listings.push(Listing { url, title });
    }
    Ok(listings)
}

/// Find the first element matching `selector` whose rendered text contains
/// `needle`. CSS cannot express contains-text, so match in code.
pub(crate) async fn find_element_with_text(
    page: &Page,
    selector: &str,
    needle: &str,
) -> Result<Element> {
    let elements = page
        .find_elements(selector)
        .await
        .with_context(|| format!("No elements match '{selector}'"))?;

    for element in elements {
        if let Ok(Some(text)) = element.inner_text().await
            && text.contains(needle)
        {
            return Ok(element);
        }
    }
    Err(anyhow!("No '{selector}' element contains '{needle}'"))
}

/// Advance to the next results page.
///
/// Returns `false` on the two normal end-of-pagination signals: the
/// next-page control is absent, or advancing timed out. Every other failure
/// is a DOM mismatch and propagates.
pub(crate) async fn advance_to_next_page(page: &Page, timeout_secs: u64) -> Result<bool> {
    let next = match page.find_element(NEXT_PAGE_SELECTOR).await {
        Ok(el) => el,
        Err(_) => {
            debug!("No next-page control; pagination complete");
            return Ok(false);
        }
    };

    let advanced = with_page_timeout(
        async {
            next.click().await.map_err(|e| anyhow!("{e}"))?;
            page.wait_for_navigation()
                .await
                .map_err(|e| anyhow!("{e}"))?;
            Ok(())
        },
        timeout_secs,
        "Next-page advance",
    )
    .await;

    match advanced {
        Ok(()) => Ok(true),
        Err(e) if is_timeout(&e) => {
            debug!("Next-page advance timed out; pagination complete");
            Ok(false)
        }
        Err(e) => Err(e),
    }
}
