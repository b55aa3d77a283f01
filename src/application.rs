//! Application layer module
//!
//! Collection use cases: card extraction and the listing/search collectors
//! built on one shared collection loop.

pub mod card_extractor;
pub mod collection;
pub mod listing_collector;
pub mod search_collector;

pub use card_extractor::CardExtractor;
pub use collection::{CollectionEndpoint, CollectionSummary};
pub use listing_collector::ListingCollector;
pub use search_collector::SearchCollector;
