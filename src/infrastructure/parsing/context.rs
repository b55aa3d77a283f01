//! Extraction context shared by every card of a run

use crate::infrastructure::scraping_error::ConfigError;
use url::Url;

/// Base URL used to turn relative card links into absolute detail URLs.
/// Built once per run and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionContext {
    base_url: Url,
}

impl ExtractionContext {
    pub const fn new(base_url: Url) -> Self {
        Self { base_url }
    }

    /// Parse the base URL from configuration
    pub fn from_base_url(base_url: &str) -> Result<Self, ConfigError> {
        let base_url = Url::parse(base_url).map_err(|e| {
            ConfigError::validation("base_url", format!("invalid base URL '{base_url}': {e}"))
        })?;
        Ok(Self::new(base_url))
    }

    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Absolute URL for an endpoint path such as `/games`
    pub fn endpoint(&self, path: &str) -> Result<Url, url::ParseError> {
        self.base_url.join(path)
    }

    /// Resolve an `href` the way a browser would
    pub fn resolve(&self, href: &str) -> Result<Url, url::ParseError> {
        self.base_url.join(href)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("/games/920587237/Adopt-Me", "https://www.roblox.com/games/920587237/Adopt-Me")]
    #[case("https://cdn.example.com/x", "https://cdn.example.com/x")]
    #[case("games/1", "https://www.roblox.com/games/1")]
    #[case("//web.roblox.com/games/2", "https://web.roblox.com/games/2")]
    fn test_resolve(#[case] href: &str, #[case] expected: &str) {
        let context = ExtractionContext::from_base_url("https://www.roblox.com").unwrap();
        assert_eq!(context.resolve(href).unwrap().as_str(), expected);
    }

    #[test]
    fn test_endpoint() {
        let context = ExtractionContext::from_base_url("https://www.roblox.com").unwrap();
        assert_eq!(
            context.endpoint("/search/games").unwrap().as_str(),
            "https://www.roblox.com/search/games"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(ExtractionContext::from_base_url("not a url").is_err());
    }
}
