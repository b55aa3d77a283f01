//! Roblox game scraper
//!
//! Collects game records from the Roblox listing and search pages, follows
//! each card to its detail page and exports the results as CSV and JSON.

// Module declarations
pub mod application;
pub mod domain;
pub mod infrastructure;

#[cfg(test)]
mod test_utils;

pub use application::{CardExtractor, ListingCollector, SearchCollector};
pub use domain::{GameDetail, GameRecord};
pub use infrastructure::{FetchError, Pacer, PacingWindow, Transport};
