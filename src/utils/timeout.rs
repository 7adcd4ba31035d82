//! Timeout utilities for page operations
//!
//! Wraps async browser operations with explicit deadlines so a stalled page
//! never hangs a worker indefinitely, and lets callers distinguish an elapsed
//! timeout from an operation failure.

use anyhow::Result;
use std::future::Future;
use std::time::Duration;

/// Marker error for an elapsed page-operation timeout.
///
/// The collector treats an elapsed timeout while advancing pagination as its
/// normal termination signal, so it must be distinguishable from every other
/// browsing failure.
#[derive(Debug, thiserror::Error)]
#[error("{operation} timed out after {timeout_secs}s")]
pub struct PageTimeout {
    pub operation: &'static str,
    pub timeout_secs: u64,
}

/// Run an async page operation with an explicit timeout.
///
/// # Returns
/// * `Ok(T)` - Operation completed in time
/// * `Err` - Either the operation failed, or a [`PageTimeout`] elapsed
pub async fn with_page_timeout<F, T>(
    operation: F,
    timeout_secs: u64,
    operation_name: &'static str,
) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    match tokio::time::timeout(Duration::from_secs(timeout_secs), operation).await {
        Ok(result) => result,
        Err(_) => Err(PageTimeout {
            operation: operation_name,
            timeout_secs,
        }
        .into()),
    }
}

/// Whether an error chain bottoms out in an elapsed [`PageTimeout`].
#[must_use]
pub fn is_timeout(err: &anyhow::Error) -> bool {
    err.chain()
        .any(|cause| cause.downcast_ref::<PageTimeout>().is_some())
}
