//! Category listing collector

use super::card_extractor::CardExtractor;
use super::collection::{CollectionEndpoint, CollectionSummary};
use crate::domain::GameRecord;
use crate::domain::constants::collection::DEFAULT_CATEGORY;
use crate::infrastructure::config::ScraperConfig;
use crate::infrastructure::http_client::Transport;
use crate::infrastructure::pacing::{Pacer, RandomPacer};
use crate::infrastructure::parsing::{ConfigError, DocumentParser, HtmlDocumentParser};
use tracing::info;

/// Collects games from the listing page.
///
/// The `category` argument is accepted and logged but does not select a
/// different endpoint: every category reads the same listing page.
pub struct ListingCollector<T, P = RandomPacer, D = HtmlDocumentParser> {
    extractor: CardExtractor<T, D>,
    endpoint: CollectionEndpoint,
    pacer: P,
}

impl<T: Transport, P: Pacer> ListingCollector<T, P> {
    pub fn new(config: &ScraperConfig, transport: T, pacer: P) -> Result<Self, ConfigError> {
        let extractor = CardExtractor::from_config(config, transport)?;
        Self::with_extractor(config, extractor, pacer)
    }
}

impl<T: Transport, P: Pacer, D: DocumentParser> ListingCollector<T, P, D> {
    pub fn with_extractor(
        config: &ScraperConfig,
        extractor: CardExtractor<T, D>,
        pacer: P,
    ) -> Result<Self, ConfigError> {
        let endpoint = CollectionEndpoint::from_config(&config.listing, extractor.context())?;
        Ok(Self {
            extractor,
            endpoint,
            pacer,
        })
    }

    /// Up to `max_games` records in card order
    pub fn collect(&self, category: &str, max_games: usize) -> Vec<GameRecord> {
        self.collect_with_summary(category, max_games).0
    }

    /// Default category and configured cap
    pub fn collect_default(&self) -> Vec<GameRecord> {
        self.collect(DEFAULT_CATEGORY, self.endpoint.default_cap())
    }

    pub fn collect_with_summary(
        &self,
        category: &str,
        max_games: usize,
    ) -> (Vec<GameRecord>, CollectionSummary) {
        info!("Collecting up to {} '{}' games from {}", max_games, category, self.endpoint.url());
        self.endpoint
            .collect(&self.extractor, &self.pacer, None, max_games, "Scraped")
    }

    pub const fn extractor(&self) -> &CardExtractor<T, D> {
        &self.extractor
    }
}
