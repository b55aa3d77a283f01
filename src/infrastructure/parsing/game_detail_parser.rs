//! Game detail page parser
//!
//! Reads the seven detail attributes of a game page. Layouts differ between
//! games, so each attribute has its own fallback chain and a missing element
//! simply yields an empty string.

use super::config::GameDetailSelectors;
use super::{ConfigError, compile_selectors, element_text, first_match};
use crate::domain::GameDetail;
use scraper::{Html, Selector};
use tracing::debug;

/// Parser for extracting detail attributes from game pages
pub struct GameDetailParser {
    description_selectors: Vec<Selector>,
    genre_selectors: Vec<Selector>,
    sub_genre_selectors: Vec<Selector>,
    creator_selectors: Vec<Selector>,
    players_selectors: Vec<Selector>,
    likes_selectors: Vec<Selector>,
    dislikes_selectors: Vec<Selector>,
}

impl GameDetailParser {
    /// Create a new detail parser with default selectors
    pub fn new() -> Result<Self, ConfigError> {
        Self::with_config(&GameDetailSelectors::default())
    }

    /// Create parser with custom selector configuration
    pub fn with_config(selectors: &GameDetailSelectors) -> Result<Self, ConfigError> {
        Ok(Self {
            description_selectors: compile_selectors(&selectors.description)?,
            genre_selectors: compile_selectors(&selectors.genre)?,
            sub_genre_selectors: compile_selectors(&selectors.sub_genre)?,
            creator_selectors: compile_selectors(&selectors.creator)?,
            players_selectors: compile_selectors(&selectors.players)?,
            likes_selectors: compile_selectors(&selectors.likes)?,
            dislikes_selectors: compile_selectors(&selectors.dislikes)?,
        })
    }

    /// Extract every detail attribute. Never fails: absent attributes are empty.
    pub fn extract(&self, document: &Html) -> GameDetail {
        GameDetail {
            description: self.extract_field(document, "description", &self.description_selectors),
            genre: self.extract_field(document, "genre", &self.genre_selectors),
            sub_genre: self.extract_field(document, "sub_genre", &self.sub_genre_selectors),
            creator: self.extract_field(document, "creator", &self.creator_selectors),
            players: self.extract_field(document, "players", &self.players_selectors),
            likes: self.extract_field(document, "likes", &self.likes_selectors),
            dislikes: self.extract_field(document, "dislikes", &self.dislikes_selectors),
        }
    }

    /// The fallback is consulted only when the previous selector matched no element
    fn extract_field(&self, document: &Html, field_name: &str, selectors: &[Selector]) -> String {
        match first_match(document.root_element(), selectors) {
            Some(element) => {
                let text = element_text(element);
                debug!("Extracted {}: {}", field_name, text);
                text
            }
            None => {
                debug!("No element for {} ({} selectors tried)", field_name, selectors.len());
                String::new()
            }
        }
    }
}
