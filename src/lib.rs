pub mod browser_setup;
pub mod collector;
pub mod config;
pub mod dedup;
pub mod listing_store;
pub mod progress;
pub mod utils;

pub use browser_setup::{find_browser_executable, launch_browser, shutdown_browser};
pub use collector::collect_listings;
pub use config::ScrapeConfig;
pub use dedup::{
    DedupError, Listing, ListingProbe, PageProbe, PreparedListings, group_key, prepare,
    resolve_group, resolve_listings,
};
pub use listing_store::{load_listings, save_accepted, save_listings};
pub use progress::{LogProgress, NoOpProgress, ProgressReporter};
