//! Shared configuration constants for storescrape
//!
//! This module contains default values and the DOM selectors used against the
//! storefront markup, kept in one place so a selector change after a site
//! redesign is a one-line fix.

/// Storefront entry page scraped when no seller URL is given on the CLI.
pub const DEFAULT_SELLER_URL: &str = "https://www.ebay.com/usr/royaltex10";

/// File name of the harvested-listings JSON Lines file inside the storage dir.
pub const LISTINGS_FILE: &str = "listings.jsonl";

/// File name of the accepted-listings CSV inside the storage dir.
pub const RESULTS_FILE: &str = "sorted.csv";

// =============================================================================
// Storefront DOM selectors
// =============================================================================

/// Accept button of the privacy consent dialog shown on first visit.
pub const CONSENT_ACCEPT_SELECTOR: &str =
    "button[aria-label='Accept privacy terms and settings']";

/// Links in the storefront footer; the one whose text contains
/// [`SEE_ALL_LINK_TEXT`] leads to the expanded search-results view.
pub const SEE_ALL_LINK_SELECTOR: &str = "div.str-marginals.str-marginals__footer a";

/// Text marking the expanded-results link (CSS cannot match on text).
pub const SEE_ALL_LINK_TEXT: &str = "See All";

/// Trigger button of the items-per-page dropdown on the results page.
pub const PAGE_SIZE_MENU_SELECTOR: &str = "span#srp-ipp-menu button";

/// Options inside the expanded items-per-page menu.
pub const PAGE_SIZE_OPTION_SELECTOR: &str = "span#srp-ipp-menu-content span";

/// Largest page size the results view offers.
pub const PAGE_SIZE_OPTION_TEXT: &str = "240";

/// One listing tile inside the search-results river.
pub const LISTING_TILE_SELECTOR: &str = "div#srp-river-results div.s-item__info.clearfix";

/// Title element within a listing tile.
pub const LISTING_TITLE_SELECTOR: &str = "span[role='heading']";

/// Item link within a listing tile; its href is the listing URL.
pub const LISTING_LINK_SELECTOR: &str = "a.s-item__link";

/// Pagination control; absent on the last results page.
pub const NEXT_PAGE_SELECTOR: &str = "a[aria-label='Go to next search page']";

/// Primary displayed price on an item detail page.
pub const PRICE_SELECTOR: &str = "div[data-testid='x-price-primary']";

// =============================================================================
// Defaults
// =============================================================================

/// Substring the displayed price text must contain for a listing to be
/// accepted as its group's representative.
pub const DEFAULT_CURRENCY_MARKER: &str = "GBP";

/// Lowercase title substrings identifying a known false-positive product
/// family; matching listings are dropped before grouping.
pub const DEFAULT_EXCLUDED_TITLE_TERMS: [&str; 3] = ["poly", "poli", "pole"];

/// Default admission-control width.
///
/// Each active group worker holds a live browsing session (renderer memory,
/// network sockets), so simultaneously active workers are capped.
pub const DEFAULT_MAX_CONCURRENT_SESSIONS: usize = 16;

/// Default timeout in seconds for page navigation and settle waits.
pub const DEFAULT_PAGE_LOAD_TIMEOUT_SECS: u64 = 30;

/// How long to wait for listing tiles to render after navigation.
pub const LISTING_RENDER_WAIT_SECS: u64 = 10;

/// Chrome user agent string presented by launched browsers.
///
/// Matches a current stable Chrome on Windows; revisit when the pinned major
/// version falls too far behind the release channel.
pub const CHROME_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/132.0.6834.160 Safari/537.36";
