//! Flat-file persistence for harvested and accepted listings
//!
//! Harvested listings are stored as JSON Lines rather than parallel url/title
//! text files: titles can contain any characters, and a single
//! self-describing record per line cannot desynchronize the pairing.

use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

use crate::dedup::Listing;

/// Write harvested listings as one JSON object per line.
pub async fn save_listings(path: &Path, listings: &[Listing]) -> Result<()> {
    let mut out = String::new();
    for listing in listings {
        let line = serde_json::to_string(listing).context("Failed to encode listing")?;
        out.push_str(&line);
        out.push('\n');
    }

    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    tokio::fs::write(path, out)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;

    info!("Saved {} listings to {}", listings.len(), path.display());
    Ok(())
}

/// Load listings written by [`save_listings`].
pub async fn load_listings(path: &Path) -> Result<Vec<Listing>> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let mut listings = Vec::new();
    for (line_no, line) in raw.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let listing: Listing = serde_json::from_str(line).with_context(|| {
            format!("Malformed listing on line {} of {}", line_no + 1, path.display())
        })?;
        listings.push(listing);
    }
    Ok(listings)
}

/// Write accepted listings as CSV.
///
/// Keeps the leading row-index column of the legacy output format so
/// downstream consumers of the old files keep working.
pub fn save_accepted(path: &Path, accepted: &[Listing]) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;

    writer
        .write_record(["", "url", "title"])
        .context("Failed to write CSV header")?;
    for (index, listing) in accepted.iter().enumerate() {
        writer
            .write_record([
                index.to_string().as_str(),
                listing.url.as_str(),
                listing.title.as_str(),
            ])
            .context("Failed to write CSV row")?;
    }
    writer.flush().context("Failed to flush CSV")?;

    info!(
        "Saved {} accepted listings to {}",
        accepted.len(),
        path.display()
    );
    Ok(())
}
