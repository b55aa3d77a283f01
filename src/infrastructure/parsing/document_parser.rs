use super::ParseError;
use scraper::Html;
use std::borrow::Cow;
use tracing::warn;

/// Turns raw response bytes into a queryable document tree
pub trait DocumentParser {
    fn parse(&self, bytes: &[u8]) -> Result<Html, ParseError>;
}

impl<P: DocumentParser + ?Sized> DocumentParser for &P {
    fn parse(&self, bytes: &[u8]) -> Result<Html, ParseError> {
        (**self).parse(bytes)
    }
}

/// html5ever-backed parser. The tree builder itself recovers from any
/// markup, so only blank bodies are rejected. Bytes that are not UTF-8 are
/// replaced with U+FFFD and the rest of the page is still read.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlDocumentParser;

impl DocumentParser for HtmlDocumentParser {
    fn parse(&self, bytes: &[u8]) -> Result<Html, ParseError> {
        let text = String::from_utf8_lossy(bytes);
        if matches!(text, Cow::Owned(_)) {
            warn!("Document is not valid UTF-8; undecodable bytes replaced");
        }

        if text.trim().is_empty() {
            return Err(ParseError::EmptyDocument);
        }

        Ok(Html::parse_document(&text))
    }
}
