// Storefront batch scraper
//
// Two independent phases behind one binary:
//   storescrape list [seller-url]   harvest listings into listings.jsonl
//   storescrape sort                dedupe listings.jsonl into sorted.csv

use anyhow::{Context, Result, bail};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use storescrape::config::ScrapeConfig;
use storescrape::dedup::{PageProbe, prepare, resolve_listings};
use storescrape::progress::{LogProgress, ProgressReporter};
use storescrape::utils::DEFAULT_SELLER_URL;
use storescrape::{browser_setup, collector, listing_store};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut args = std::env::args().skip(1);
    match args.next().as_deref() {
        Some("list") => run_list(args.next()).await,
        Some("sort") => run_sort().await,
        _ => bail!("usage: storescrape <list|sort> [seller-url]"),
    }
}

fn build_config(seller_url: Option<String>) -> Result<ScrapeConfig> {
    let seller = seller_url.unwrap_or_else(|| DEFAULT_SELLER_URL.to_string());
    ScrapeConfig::builder()
        .storage_dir("./output")
        .seller_url(seller)
        .build()
}

/// Collector phase: harvest the storefront and persist the raw listings.
async fn run_list(seller_url: Option<String>) -> Result<()> {
    let config = build_config(seller_url)?;
    let progress = LogProgress;

    progress.report_initializing();
    let (browser, handler_task, data_dir) =
        browser_setup::launch_browser(config.headless(), config.chrome_data_dir().cloned())
            .await
            .context("Failed to launch browser")?;
    progress.report_browser_launched();

    let collected = collector::collect_listings(&browser, &config, &progress).await;
    browser_setup::shutdown_browser(browser, handler_task, data_dir).await;

    let listings = collected?;
    listing_store::save_listings(&config.listings_path(), &listings).await?;
    progress.report_completed();
    Ok(())
}

/// Deduplicator phase: load the harvested listings, resolve one accepted
/// listing per group, and persist the result CSV.
async fn run_sort() -> Result<()> {
    let config = build_config(None)?;

    let listings = listing_store::load_listings(&config.listings_path()).await?;
    info!("Loaded {} harvested listings", listings.len());

    let prepared = prepare(listings, &config.excluded_title_terms());
    if prepared.is_empty() {
        info!("Nothing to resolve after filtering");
        return Ok(());
    }
    info!(
        "{} candidate groups across {} listings",
        prepared.group_count(),
        prepared.listing_count()
    );

    let progress = Arc::new(LogProgress);
    progress.report_initializing();
    let (browser, handler_task, data_dir) =
        browser_setup::launch_browser(config.headless(), config.chrome_data_dir().cloned())
            .await
            .context("Failed to launch browser")?;
    progress.report_browser_launched();

    let browser = Arc::new(browser);
    let probe = Arc::new(PageProbe::new(
        Arc::clone(&browser),
        config.page_load_timeout_secs(),
    ));

    let resolved = resolve_listings(
        prepared,
        probe,
        Arc::clone(&progress),
        config.currency_marker(),
        config.max_concurrent_sessions(),
    )
    .await;

    match Arc::try_unwrap(browser) {
        Ok(owned) => browser_setup::shutdown_browser(owned, handler_task, data_dir).await,
        Err(arc) => warn!(
            "Browser still has {} references; skipping shutdown",
            Arc::strong_count(&arc)
        ),
    }

    let accepted = resolved?;
    listing_store::save_accepted(&config.results_path(), &accepted)?;
    progress.report_completed();
    Ok(())
}
