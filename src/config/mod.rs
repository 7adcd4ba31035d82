//! Configuration module for storefront scraping
//!
//! Provides the `ScrapeConfig` struct and its type-safe builder with
//! validation and sensible defaults.

// Sub-modules
pub mod builder;
pub mod getters;
pub mod types;

// Re-exports for public API
pub use builder::{ScrapeConfigBuilder, WithSellerUrl, WithStorageDir};
pub use types::ScrapeConfig;
