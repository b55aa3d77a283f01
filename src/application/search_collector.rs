//! Keyword search collector

use super::card_extractor::CardExtractor;
use super::collection::{CollectionEndpoint, CollectionSummary};
use crate::domain::GameRecord;
use crate::infrastructure::config::ScraperConfig;
use crate::infrastructure::http_client::Transport;
use crate::infrastructure::pacing::{Pacer, RandomPacer};
use crate::infrastructure::parsing::{ConfigError, DocumentParser, HtmlDocumentParser};
use tracing::info;

/// Collects games from the search results page for a free-text query
pub struct SearchCollector<T, P = RandomPacer, D = HtmlDocumentParser> {
    extractor: CardExtractor<T, D>,
    endpoint: CollectionEndpoint,
    pacer: P,
}

impl<T: Transport, P: Pacer> SearchCollector<T, P> {
    pub fn new(config: &ScraperConfig, transport: T, pacer: P) -> Result<Self, ConfigError> {
        let extractor = CardExtractor::from_config(config, transport)?;
        Self::with_extractor(config, extractor, pacer)
    }
}

impl<T: Transport, P: Pacer, D: DocumentParser> SearchCollector<T, P, D> {
    pub fn with_extractor(
        config: &ScraperConfig,
        extractor: CardExtractor<T, D>,
        pacer: P,
    ) -> Result<Self, ConfigError> {
        let endpoint = CollectionEndpoint::from_config(&config.search, extractor.context())?;
        Ok(Self {
            extractor,
            endpoint,
            pacer,
        })
    }

    /// Up to `max_results` records in result order
    pub fn collect(&self, query: &str, max_results: usize) -> Vec<GameRecord> {
        self.collect_with_summary(query, max_results).0
    }

    /// Configured cap (20 by default)
    pub fn collect_default(&self, query: &str) -> Vec<GameRecord> {
        self.collect(query, self.endpoint.default_cap())
    }

    pub fn collect_with_summary(
        &self,
        query: &str,
        max_results: usize,
    ) -> (Vec<GameRecord>, CollectionSummary) {
        info!("Searching for '{}' (up to {} results)", query, max_results);
        self.endpoint
            .collect(&self.extractor, &self.pacer, Some(query), max_results, "Found")
    }

    pub const fn extractor(&self) -> &CardExtractor<T, D> {
        &self.extractor
    }
}
