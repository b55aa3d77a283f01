//! Shared collection loop for listing and search pages
//!
//! fetch → parse → enumerate cards (capped) → extract each card → pace.
//! The pause follows every card, the last one included.
//! A failed top-level fetch or parse yields no records at all; a failed card
//! is logged and skipped without touching the others.

use super::card_extractor::CardExtractor;
use crate::domain::GameRecord;
use crate::infrastructure::config::CollectionConfig;
use crate::infrastructure::http_client::Transport;
use crate::infrastructure::pacing::{Pacer, PacingWindow};
use crate::infrastructure::parsing::{ConfigError, DocumentParser, ExtractionContext};
use scraper::{ElementRef, Selector};
use tracing::{debug, error, info};
use url::Url;

/// A resolved collection endpoint with its card selector and pacing
#[derive(Debug)]
pub struct CollectionEndpoint {
    url: Url,
    query_param: Option<String>,
    card_selector: Selector,
    pacing: PacingWindow,
    default_cap: usize,
}

/// What a collection run produced
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CollectionSummary {
    /// Cards considered after applying the cap
    pub cards: usize,
    /// Cards skipped because extraction failed
    pub skipped: usize,
}

impl CollectionEndpoint {
    pub fn from_config(
        config: &CollectionConfig,
        context: &ExtractionContext,
    ) -> Result<Self, ConfigError> {
        let url = context.endpoint(&config.path).map_err(|e| {
            ConfigError::validation("path", format!("invalid endpoint '{}': {e}", config.path))
        })?;

        let card_selector =
            Selector::parse(&config.card_selector).map_err(|e| ConfigError::InvalidSelector {
                selector: config.card_selector.clone(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            url,
            query_param: config.query_param.clone(),
            card_selector,
            pacing: config.pacing,
            default_cap: config.default_cap,
        })
    }

    pub const fn url(&self) -> &Url {
        &self.url
    }

    pub const fn pacing(&self) -> PacingWindow {
        self.pacing
    }

    pub const fn default_cap(&self) -> usize {
        self.default_cap
    }

    /// Run one collection. `label` prefixes the per-record progress line.
    pub fn collect<T, D, P>(
        &self,
        extractor: &CardExtractor<T, D>,
        pacer: &P,
        query: Option<&str>,
        cap: usize,
        label: &str,
    ) -> (Vec<GameRecord>, CollectionSummary)
    where
        T: Transport,
        D: DocumentParser,
        P: Pacer,
    {
        let query_pairs: Vec<(&str, &str)> = match (self.query_param.as_deref(), query) {
            (Some(param), Some(text)) => vec![(param, text)],
            _ => Vec::new(),
        };

        let bytes = match extractor.transport().fetch(self.url.as_str(), &query_pairs) {
            Ok(bytes) => bytes,
            Err(e) => {
                error!("Error fetching games page {}: {}", self.url, e);
                return (Vec::new(), CollectionSummary::default());
            }
        };

        let document = match extractor.documents().parse(&bytes) {
            Ok(document) => document,
            Err(e) => {
                error!("Error parsing games page {}: {}", self.url, e);
                return (Vec::new(), CollectionSummary::default());
            }
        };

        let cards: Vec<ElementRef<'_>> = document.select(&self.card_selector).take(cap).collect();
        debug!("Found {} cards on {} (cap {})", cards.len(), self.url, cap);

        let mut records = Vec::with_capacity(cards.len());
        let mut summary = CollectionSummary {
            cards: cards.len(),
            skipped: 0,
        };

        for (index, card) in cards.iter().enumerate() {
            match extractor.extract(*card) {
                Ok(record) => {
                    info!("{}: {}", label, record.name);
                    records.push(record);
                }
                Err(e) => {
                    error!("Error extracting game info from card {}: {}", index + 1, e);
                    summary.skipped += 1;
                }
            }

            pacer.pause(self.pacing);
        }

        info!(
            "Collected {} records from {} cards ({} skipped)",
            records.len(),
            summary.cards,
            summary.skipped
        );
        (records, summary)
    }
}
