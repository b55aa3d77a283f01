//! Card fragment parser
//!
//! Reads the card-level fields (name and detail link) of one listing or
//! search card.

use super::config::GameCardSelectors;
use super::context::ExtractionContext;
use super::{ConfigError, FragmentParser, compile_selectors, element_text, first_match};
use crate::domain::constants::collection::UNKNOWN_NAME;
use crate::infrastructure::scraping_error::CardExtractionFailure;
use scraper::{ElementRef, Selector};
use tracing::debug;
use url::Url;

/// Fields read directly from a card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardFields {
    /// Card name, `"Unknown"` when unreadable
    pub name: String,

    /// Absolute detail URL, `None` when the card has no usable anchor
    pub detail_url: Option<Url>,
}

/// Parser for game card fragments
pub struct GameCardParser {
    name_selectors: Vec<Selector>,
    link_selectors: Vec<Selector>,
    context: ExtractionContext,
}

impl GameCardParser {
    pub fn with_config(
        selectors: &GameCardSelectors,
        context: ExtractionContext,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            name_selectors: compile_selectors(&selectors.name)?,
            link_selectors: compile_selectors(&selectors.link)?,
            context,
        })
    }

    pub const fn context(&self) -> &ExtractionContext {
        &self.context
    }

    fn extract_name(&self, card: ElementRef<'_>) -> String {
        first_match(card, &self.name_selectors)
            .map(element_text)
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| UNKNOWN_NAME.to_string())
    }

    /// An anchor without `href` (or with a blank one) counts as no anchor
    fn extract_detail_url(
        &self,
        card: ElementRef<'_>,
    ) -> Result<Option<Url>, CardExtractionFailure> {
        let Some(href) = first_match(card, &self.link_selectors)
            .and_then(|anchor| anchor.value().attr("href"))
            .map(str::trim)
            .filter(|href| !href.is_empty())
        else {
            debug!("Card has no detail link");
            return Ok(None);
        };

        self.context
            .resolve(href)
            .map(Some)
            .map_err(|e| CardExtractionFailure::UrlResolution {
                href: href.to_string(),
                base_url: self.context.base_url().to_string(),
                reason: e.to_string(),
            })
    }
}

impl<'a> FragmentParser<'a> for GameCardParser {
    type Output = CardFields;
    type Error = CardExtractionFailure;

    fn parse_fragment(
        &self,
        fragment: ElementRef<'a>,
    ) -> Result<CardFields, CardExtractionFailure> {
        Ok(CardFields {
            name: self.extract_name(fragment),
            detail_url: self.extract_detail_url(fragment)?,
        })
    }
}
