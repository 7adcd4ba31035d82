//! Filtering and grouping behavior ahead of concurrent resolution

use storescrape::dedup::{Listing, prepare};

fn terms(list: &[&str]) -> Vec<String> {
    list.iter().map(|t| (*t).to_string()).collect()
}

fn default_terms() -> Vec<String> {
    terms(&["poly", "poli", "pole"])
}

#[test]
fn excluded_titles_are_dropped_case_insensitively() {
    let listings = vec![
        Listing::new("https://s/itm/1:eu:100", "Polyester Necklace"),
        Listing::new("https://s/itm/2:eu:200", "POLI design"),
        Listing::new("https://s/itm/3:eu:300", "Pole lamp"),
        Listing::new("https://s/itm/4:eu:400", "Solid Gold Ring"),
    ];

    let prepared = prepare(listings, &default_terms());

    assert_eq!(prepared.listing_count(), 1);
    let (key, candidates) = prepared.groups().next().unwrap();
    assert_eq!(key, "400");
    assert_eq!(candidates[0].title, "Solid Gold Ring");
}

#[test]
fn filter_matches_substrings_anywhere_in_the_title() {
    let listings = vec![
        Listing::new("https://s/itm/1:eu:100", "Vintage Polypropylene Box"),
        Listing::new("https://s/itm/2:eu:200", "Napoli postcard"),
    ];

    let prepared = prepare(listings, &default_terms());

    // "Polypropylene" contains "poly", "Napoli" contains "poli"
    assert!(prepared.is_empty());
}

#[test]
fn grouping_partitions_without_loss_or_duplication() {
    let listings = vec![
        Listing::new("https://s/itm/1:eu:100", "Ring A"),
        Listing::new("https://s/itm/2:eu:100", "Ring B"),
        Listing::new("https://s/itm/3:eu:200", "Pendant"),
        Listing::new("https://s/itm/4:eu:300", "Brooch"),
        Listing::new("https://s/itm/5:eu:100", "Ring C"),
    ];

    let prepared = prepare(listings.clone(), &[]);

    assert_eq!(prepared.group_count(), 3);
    assert_eq!(prepared.listing_count(), listings.len());

    // Every listing lands in exactly one candidate set, under its own key
    let mut seen = Vec::new();
    for (key, candidates) in prepared.groups() {
        for candidate in candidates {
            assert_eq!(candidate.group_key(), key);
            seen.push(candidate.clone());
        }
    }
    assert_eq!(seen.len(), listings.len());
    for listing in &listings {
        assert_eq!(seen.iter().filter(|l| l == &listing).count(), 1);
    }
}

#[test]
fn candidate_order_within_a_group_follows_input_order() {
    let listings = vec![
        Listing::new("https://s/itm/1:eu:100", "First"),
        Listing::new("https://s/itm/2:eu:100", "Second"),
        Listing::new("https://s/itm/3:eu:100", "Third"),
    ];

    let prepared = prepare(listings, &[]);
    let (_, candidates) = prepared.groups().next().unwrap();
    let titles: Vec<&str> = candidates.iter().map(|l| l.title.as_str()).collect();
    assert_eq!(titles, ["First", "Second", "Third"]);
}

#[test]
fn groups_iterate_in_sorted_key_order() {
    let listings = vec![
        Listing::new("https://s/itm/1:eu:300", "C"),
        Listing::new("https://s/itm/2:eu:100", "A"),
        Listing::new("https://s/itm/3:eu:200", "B"),
    ];

    let prepared = prepare(listings, &[]);
    let keys: Vec<&str> = prepared.groups().map(|(k, _)| k).collect();
    assert_eq!(keys, ["100", "200", "300"]);
}

#[test]
fn prepare_is_deterministic() {
    let listings = vec![
        Listing::new("https://s/itm/1:eu:100", "Ring A"),
        Listing::new("https://s/itm/2:eu:100", "Ring B"),
        Listing::new("https://s/itm/3:eu:200", "Polyester Pendant"),
        Listing::new("https://s/itm/4:eu:300", "Brooch"),
    ];

    let first = prepare(listings.clone(), &default_terms());
    let second = prepare(listings, &default_terms());
    assert_eq!(first, second);
}

#[test]
fn empty_input_prepares_to_empty() {
    let prepared = prepare(Vec::new(), &default_terms());
    assert!(prepared.is_empty());
    assert_eq!(prepared.group_count(), 0);
    assert_eq!(prepared.listing_count(), 0);
}
