//! HTML parsing infrastructure for game listing and detail pages
//!
//! Trait-based parsing: raw bytes become a `scraper::Html` tree through
//! `DocumentParser`, cards and detail pages are read by selector fallback
//! chains compiled once from `ParsingConfig`.

pub mod config;
pub mod context;
pub mod document_parser;
pub mod error;
pub mod game_card_parser;
pub mod game_detail_parser;

// Re-export public types
pub use config::{GameCardSelectors, GameDetailSelectors, ParsingConfig};
pub use context::ExtractionContext;
pub use document_parser::{DocumentParser, HtmlDocumentParser};
pub use error::{ConfigError, ParseError};
pub use game_card_parser::{CardFields, GameCardParser};
pub use game_detail_parser::GameDetailParser;

use scraper::{ElementRef, Selector};
use tracing::{debug, warn};

/// Read a typed value out of a parsed fragment
pub trait FragmentParser<'a> {
    type Output;
    type Error;

    fn parse_fragment(&self, fragment: ElementRef<'a>) -> Result<Self::Output, Self::Error>;
}

/// Compile a fallback chain. Invalid entries are skipped with a warning;
/// a non-empty chain with no valid entry is a configuration error.
pub(crate) fn compile_selectors(selector_strings: &[String]) -> Result<Vec<Selector>, ConfigError> {
    let mut selectors = Vec::new();
    let mut errors = Vec::new();

    for selector_str in selector_strings {
        match Selector::parse(selector_str) {
            Ok(selector) => selectors.push(selector),
            Err(e) => {
                warn!("Failed to compile selector '{}': {}", selector_str, e);
                errors.push(format!("'{selector_str}': {e}"));
            }
        }
    }

    if selectors.is_empty() && !selector_strings.is_empty() {
        return Err(ConfigError::InvalidSelector {
            selector: selector_strings.join(", "),
            reason: errors.join("; "),
        });
    }

    if !errors.is_empty() {
        debug!("Some selectors failed to compile: {}", errors.join(", "));
    }

    Ok(selectors)
}

/// First descendant matched by the first selector that matches anything
pub(crate) fn first_match<'a>(
    root: ElementRef<'a>,
    selectors: &[Selector],
) -> Option<ElementRef<'a>> {
    selectors
        .iter()
        .find_map(|selector| root.select(selector).next())
}

/// Text content with surrounding whitespace trimmed
pub(crate) fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}
