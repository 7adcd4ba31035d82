//! Flat-file persistence round trips

use storescrape::dedup::Listing;
use storescrape::listing_store::{load_listings, save_accepted, save_listings};
use tempfile::TempDir;

#[tokio::test]
async fn listings_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("listings.jsonl");

    let listings = vec![
        Listing::new("https://s/itm/1:eu:100", "Gold Ring"),
        Listing::new("https://s/itm/2:eu:200", "Silver Pendant, boxed"),
    ];

    save_listings(&path, &listings).await.unwrap();
    let loaded = load_listings(&path).await.unwrap();
    assert_eq!(loaded, listings);
}

#[tokio::test]
async fn titles_with_embedded_newlines_survive_the_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("listings.jsonl");

    let listings = vec![
        Listing::new("https://s/itm/1:eu:100", "Gold Ring\nwith line break"),
        Listing::new("https://s/itm/2:eu:200", "Plain title"),
    ];

    save_listings(&path, &listings).await.unwrap();
    let loaded = load_listings(&path).await.unwrap();

    // One JSON record per line: the embedded newline must not split the
    // pairing the way raw newline-joined files would.
    assert_eq!(loaded.len(), 2);
    assert_eq!(loaded, listings);
}

#[tokio::test]
async fn empty_listing_set_round_trips() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("listings.jsonl");

    save_listings(&path, &[]).await.unwrap();
    let loaded = load_listings(&path).await.unwrap();
    assert!(loaded.is_empty());
}

#[tokio::test]
async fn malformed_line_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("listings.jsonl");
    tokio::fs::write(&path, "{\"url\":\"https://s/1\",\"title\":\"ok\"}\nnot json\n")
        .await
        .unwrap();

    let result = load_listings(&path).await;
    let message = format!("{:#}", result.unwrap_err());
    assert!(message.contains("line 2"));
}

#[tokio::test]
async fn missing_listings_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let result = load_listings(&dir.path().join("absent.jsonl")).await;
    assert!(result.is_err());
}

#[test]
fn accepted_csv_has_header_and_index_column() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("sorted.csv");

    let accepted = vec![
        Listing::new("https://s/itm/1:eu:100", "Gold Ring"),
        Listing::new("https://s/itm/2:eu:200", "Pendant, with comma"),
    ];

    save_accepted(&path, &accepted).unwrap();

    let raw = std::fs::read_to_string(&path).unwrap();
    let mut lines = raw.lines();
    assert_eq!(lines.next().unwrap(), ",url,title");
    assert_eq!(lines.next().unwrap(), "0,https://s/itm/1:eu:100,Gold Ring");
    // The comma-bearing title must be quoted
    assert_eq!(
        lines.next().unwrap(),
        "1,https://s/itm/2:eu:200,\"Pendant, with comma\""
    );
    assert!(lines.next().is_none());
}

#[test]
fn empty_result_set_writes_just_the_header() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("sorted.csv");

    save_accepted(&path, &[]).unwrap();

    let raw = std::fs::read_to_string(&path).unwrap();
    assert_eq!(raw.trim_end(), ",url,title");
}
