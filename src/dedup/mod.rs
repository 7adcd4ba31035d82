//! Deduplication engine
//!
//! Groups harvested listings by their URL-derived catalog id and resolves
//! each group to at most one accepted listing via concurrent, admission-
//! controlled browser probes.

// Sub-modules
pub mod orchestrator;
pub mod prepare;
pub mod probe;
pub mod resolver;
pub mod types;

// Re-exports for public API
pub use orchestrator::resolve_listings;
pub use prepare::{PreparedListings, prepare};
pub use probe::{ListingProbe, PageProbe};
pub use resolver::resolve_group;
pub use types::{DedupError, Listing, group_key};
