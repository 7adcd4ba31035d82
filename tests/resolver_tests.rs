//! First-match-wins group resolution against a table-backed probe

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use storescrape::dedup::{Listing, ListingProbe, resolve_group};

/// Probe answering from a fixed url -> price-text table, counting calls.
struct TableProbe {
    prices: HashMap<String, String>,
    probes: AtomicUsize,
}

impl TableProbe {
    fn new(entries: &[(&str, &str)]) -> Self {
        Self {
            prices: entries
                .iter()
                .map(|(url, price)| ((*url).to_string(), (*price).to_string()))
                .collect(),
            probes: AtomicUsize::new(0),
        }
    }

    fn probe_count(&self) -> usize {
        self.probes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ListingProbe for TableProbe {
    async fn price_text(&self, url: &str) -> Result<String> {
        self.probes.fetch_add(1, Ordering::SeqCst);
        self.prices
            .get(url)
            .cloned()
            .ok_or_else(|| anyhow!("unknown url {url}"))
    }
}

fn candidates(urls: &[&str]) -> Vec<Listing> {
    urls.iter()
        .map(|url| Listing::new(*url, format!("Listing {url}")))
        .collect()
}

#[tokio::test]
async fn single_matching_candidate_is_accepted_regardless_of_order() {
    let probe = TableProbe::new(&[
        ("https://s/itm/1:eu:100", "US $12.00"),
        ("https://s/itm/2:eu:100", "GBP 9.50"),
        ("https://s/itm/3:eu:100", "EUR 11,00"),
    ]);
    let group = candidates(&[
        "https://s/itm/1:eu:100",
        "https://s/itm/2:eu:100",
        "https://s/itm/3:eu:100",
    ]);

    // Candidate order is shuffled per run; the only GBP listing must win
    // every time.
    for _ in 0..10 {
        let accepted = resolve_group(&probe, &group, "GBP").await.unwrap();
        assert_eq!(accepted.unwrap().url, "https://s/itm/2:eu:100");
    }
}

#[tokio::test]
async fn group_without_a_match_resolves_to_none() {
    let probe = TableProbe::new(&[
        ("https://s/itm/1:eu:100", "US $12.00"),
        ("https://s/itm/2:eu:100", "EUR 11,00"),
    ]);
    let group = candidates(&["https://s/itm/1:eu:100", "https://s/itm/2:eu:100"]);

    let accepted = resolve_group(&probe, &group, "GBP").await.unwrap();
    assert!(accepted.is_none());
    // Every candidate was tried before giving up
    assert_eq!(probe.probe_count(), 2);
}

#[tokio::test]
async fn probing_stops_at_the_first_match() {
    let probe = TableProbe::new(&[
        ("https://s/itm/1:eu:100", "GBP 5.00"),
        ("https://s/itm/2:eu:100", "GBP 6.00"),
        ("https://s/itm/3:eu:100", "GBP 7.00"),
    ]);
    let group = candidates(&[
        "https://s/itm/1:eu:100",
        "https://s/itm/2:eu:100",
        "https://s/itm/3:eu:100",
    ]);

    let accepted = resolve_group(&probe, &group, "GBP").await.unwrap();

    // All candidates match, so whichever came first in this run's order is
    // accepted after exactly one probe.
    assert!(accepted.is_some());
    assert_eq!(probe.probe_count(), 1);
}

#[tokio::test]
async fn empty_group_resolves_to_none_without_probing() {
    let probe = TableProbe::new(&[]);
    let accepted = resolve_group(&probe, &[], "GBP").await.unwrap();
    assert!(accepted.is_none());
    assert_eq!(probe.probe_count(), 0);
}

#[tokio::test]
async fn probe_failure_aborts_the_group() {
    let probe = TableProbe::new(&[]);
    let group = candidates(&["https://s/itm/1:eu:100"]);

    let result = resolve_group(&probe, &group, "GBP").await;
    assert!(result.is_err());
}
