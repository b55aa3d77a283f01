//! Card extraction use case
//!
//! Turns one card fragment into a `GameRecord`: card-level fields first,
//! then the detail page behind the card link. A detail page that cannot be
//! fetched or parsed only costs that record its detail fields.

use crate::domain::{GameDetail, GameRecord};
use crate::infrastructure::config::ScraperConfig;
use crate::infrastructure::http_client::Transport;
use crate::infrastructure::parsing::{
    ConfigError, DocumentParser, ExtractionContext, FragmentParser, GameCardParser,
    GameDetailParser, HtmlDocumentParser,
};
use crate::infrastructure::scraping_error::CardExtractionFailure;
use scraper::ElementRef;
use tracing::{debug, warn};
use url::Url;

/// Card extractor bound to a transport, a document parser and a detail parser
pub struct CardExtractor<T, D = HtmlDocumentParser> {
    transport: T,
    documents: D,
    cards: GameCardParser,
    details: GameDetailParser,
}

impl<T: Transport> CardExtractor<T> {
    /// Build from configuration with the default HTML document parser
    pub fn from_config(config: &ScraperConfig, transport: T) -> Result<Self, ConfigError> {
        Self::with_parser(config, transport, HtmlDocumentParser)
    }
}

impl<T: Transport, D: DocumentParser> CardExtractor<T, D> {
    pub fn with_parser(
        config: &ScraperConfig,
        transport: T,
        documents: D,
    ) -> Result<Self, ConfigError> {
        let context = ExtractionContext::from_base_url(&config.base_url)?;
        Ok(Self {
            transport,
            documents,
            cards: GameCardParser::with_config(&config.selectors.card, context)?,
            details: GameDetailParser::with_config(&config.selectors.detail)?,
        })
    }

    pub const fn transport(&self) -> &T {
        &self.transport
    }

    pub const fn documents(&self) -> &D {
        &self.documents
    }

    pub const fn context(&self) -> &ExtractionContext {
        self.cards.context()
    }

    /// Extract one record. Missing fields never fail; only a structural
    /// problem with the card itself does.
    pub fn extract(&self, card: ElementRef<'_>) -> Result<GameRecord, CardExtractionFailure> {
        let fields = self.cards.parse_fragment(card)?;

        let (url, detail) = match fields.detail_url {
            Some(detail_url) => {
                let detail = self.fetch_details(&detail_url);
                (detail_url.to_string(), detail)
            }
            None => (String::new(), GameDetail::default()),
        };

        Ok(GameRecord::from_parts(fields.name, url, detail))
    }

    /// Fetch and read a detail page; failures downgrade to empty details
    fn fetch_details(&self, detail_url: &Url) -> GameDetail {
        let bytes = match self.transport.fetch(detail_url.as_str(), &[]) {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!("Error getting game details: {}", e);
                return GameDetail::default();
            }
        };

        match self.documents.parse(&bytes) {
            Ok(document) => {
                debug!("Parsed detail page {}", detail_url);
                self.details.extract(&document)
            }
            Err(e) => {
                warn!("Error parsing game details from {}: {}", detail_url, e);
                GameDetail::default()
            }
        }
    }
}
