//! Concurrent group resolution driver
//!
//! Spawns one worker per distinct group key, gated by a counting semaphore,
//! and drains every worker before returning.

use anyhow::Result;
use futures::StreamExt;
use futures::stream::FuturesUnordered;
use std::sync::Arc;
use tokio::sync::{Mutex, Semaphore};
use tracing::{error, info, warn};

use super::prepare::PreparedListings;
use super::probe::ListingProbe;
use super::resolver::resolve_group;
use super::types::{DedupError, Listing};
use crate::progress::ProgressReporter;

/// Resolve every candidate group concurrently under admission control.
///
/// One task is spawned per group. Each task acquires one of `max_sessions`
/// semaphore permits before it starts browsing and holds it for the whole
/// group, so at most `max_sessions` workers are actively probing at any
/// instant; the rest wait for a slot. The accepted-listing accumulator is the
/// only state shared between workers.
///
/// After each group completes, the current accepted count versus the total
/// group count is reported. Completion order across groups is unconstrained.
///
/// All workers are drained before returning. If any worker failed or
/// panicked, the batch is invalid: the remaining workers still run to
/// completion, then [`DedupError::GroupFailures`] is returned.
pub async fn resolve_listings<P, R>(
    prepared: PreparedListings,
    probe: Arc<P>,
    progress: Arc<R>,
    currency_marker: &str,
    max_sessions: usize,
) -> Result<Vec<Listing>>
where
    P: ListingProbe + ?Sized + 'static,
    R: ProgressReporter + ?Sized + 'static,
{
    let total = prepared.group_count();
    let accepted: Arc<Mutex<Vec<Listing>>> = Arc::new(Mutex::new(Vec::new()));
    let semaphore = Arc::new(Semaphore::new(max_sessions.max(1)));
    let marker = currency_marker.to_string();

    let mut workers = FuturesUnordered::new();
    for (key, candidates) in prepared.into_groups() {
        let probe = Arc::clone(&probe);
        let progress = Arc::clone(&progress);
        let accepted = Arc::clone(&accepted);
        let semaphore = Arc::clone(&semaphore);
        let marker = marker.clone();

        workers.push(tokio::spawn(async move {
            let _permit = semaphore
                .acquire_owned()
                .await
                .map_err(|e| DedupError::AdmissionClosed(e.to_string()))?;

            match resolve_group(probe.as_ref(), &candidates, &marker).await {
                Ok(resolved) => {
                    let mut acc = accepted.lock().await;
                    if let Some(listing) = resolved {
                        acc.push(listing);
                    }
                    let count = acc.len();
                    drop(acc);
                    progress.report_group_resolved(count, total);
                    Ok(())
                }
                Err(e) => {
                    progress.report_error(&format!("Group {key} failed: {e:#}"));
                    Err(e)
                }
            }
        }));
    }

    let mut failed = 0usize;
    while let Some(joined) = workers.next().await {
        match joined {
            Ok(Ok(())) => {}
            Ok(Err(e)) => {
                failed += 1;
                warn!("Group worker failed: {e:#}");
            }
            Err(e) => {
                failed += 1;
                error!("Group worker panicked: {e}");
            }
        }
    }

    let results = match Arc::try_unwrap(accepted) {
        Ok(mutex) => mutex.into_inner(),
        // All workers are joined, so their clones are gone; lock as a fallback.
        Err(arc) => arc.lock().await.clone(),
    };

    if failed > 0 {
        return Err(DedupError::GroupFailures { failed, total }.into());
    }

    info!(
        "Resolved {}/{} groups with an accepted listing",
        results.len(),
        total
    );
    Ok(results)
}
