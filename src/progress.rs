//! Progress reporting abstraction for scrape and dedupe runs
//!
//! Defines the `ProgressReporter` trait for lifecycle event reporting, a
//! no-op implementation for tests and embedding, and the tracing-backed
//! reporter the binary uses.

use tracing::{info, warn};

/// Trait for reporting run progress at key lifecycle events
///
/// Implementations can log to the console, update a UI, or record events for
/// assertions in tests.
pub trait ProgressReporter: Send + Sync {
    /// Report that browser initialization has started
    fn report_initializing(&self);

    /// Report that the browser has launched successfully
    fn report_browser_launched(&self);

    /// Report that a results page has been harvested.
    /// `total_listings` is the running count across all pages so far.
    fn report_page_collected(&self, page_no: usize, total_listings: usize);

    /// Report that a candidate group finished resolving.
    /// `accepted` is the current accepted-listing count, `total_groups` the
    /// number of distinct groups in the batch.
    fn report_group_resolved(&self, accepted: usize, total_groups: usize);

    /// Report that the run has completed successfully
    fn report_completed(&self);

    /// Report an error that occurred during the run
    fn report_error(&self, error: &str);
}

/// Progress reporter that does nothing
#[derive(Debug, Clone, Copy)]
pub struct NoOpProgress;

impl ProgressReporter for NoOpProgress {
    #[inline(always)]
    fn report_initializing(&self) {}

    #[inline(always)]
    fn report_browser_launched(&self) {}

    #[inline(always)]
    fn report_page_collected(&self, _page_no: usize, _total_listings: usize) {}

    #[inline(always)]
    fn report_group_resolved(&self, _accepted: usize, _total_groups: usize) {}

    #[inline(always)]
    fn report_completed(&self) {}

    #[inline(always)]
    fn report_error(&self, _error: &str) {}
}

/// Progress reporter that logs lifecycle events through `tracing`
#[derive(Debug, Clone, Copy)]
pub struct LogProgress;

impl ProgressReporter for LogProgress {
    fn report_initializing(&self) {
        info!("Initializing browser");
    }

    fn report_browser_launched(&self) {
        info!("Browser launched");
    }

    fn report_page_collected(&self, page_no: usize, total_listings: usize) {
        info!("Results page {page_no}: {total_listings} listings collected so far");
    }

    fn report_group_resolved(&self, accepted: usize, total_groups: usize) {
        info!("Number of items: {accepted}/{total_groups}");
    }

    fn report_completed(&self) {
        info!("Run completed");
    }

    fn report_error(&self, error: &str) {
        warn!("{error}");
    }
}
