//! Per-group candidate resolution

use anyhow::Result;
use rand::seq::SliceRandom;
use tracing::debug;

use super::probe::ListingProbe;
use super::types::Listing;

/// Resolve one candidate set to at most one accepted listing.
///
/// Candidates are probed in randomized order: any member of a group is an
/// acceptable representative, and shuffling avoids systematically favoring
/// the first-crawled instance. The first candidate whose price text contains
/// `currency_marker` wins and probing stops immediately. A group where no
/// candidate matches resolves to `None`, which is a normal outcome.
///
/// Any probe failure aborts the group and propagates.
pub async fn resolve_group<P>(
    probe: &P,
    candidates: &[Listing],
    currency_marker: &str,
) -> Result<Option<Listing>>
where
    P: ListingProbe + ?Sized,
{
    let mut order: Vec<&Listing> = candidates.iter().collect();
    order.shuffle(&mut rand::rng());

    for candidate in order {
        let price = probe.price_text(&candidate.url).await?;
        if price.contains(currency_marker) {
            debug!("Accepted {} ({price})", candidate.url);
            return Ok(Some(candidate.clone()));
        }
    }
    Ok(None)
}
