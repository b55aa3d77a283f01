//! Parsing configuration for HTML extraction
//!
//! Centralized CSS selectors. Each field holds an ordered fallback list: the
//! first selector that matches an element decides the value.

use serde::{Deserialize, Serialize};

/// Main parsing configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParsingConfig {
    /// Selectors applied inside a single listing/search card
    pub card: GameCardSelectors,

    /// Selectors applied to a detail page
    pub detail: GameDetailSelectors,
}

/// CSS selectors for card fragments
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameCardSelectors {
    /// Game name inside the card
    pub name: Vec<String>,

    /// Anchor linking to the detail page
    pub link: Vec<String>,
}

impl Default for GameCardSelectors {
    fn default() -> Self {
        Self {
            name: vec!["span.game-name".to_string()],
            link: vec!["a".to_string()],
        }
    }
}

/// CSS selectors for game detail pages
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameDetailSelectors {
    pub description: Vec<String>,
    pub genre: Vec<String>,
    pub sub_genre: Vec<String>,
    pub creator: Vec<String>,
    pub players: Vec<String>,
    pub likes: Vec<String>,
    pub dislikes: Vec<String>,
}

impl Default for GameDetailSelectors {
    fn default() -> Self {
        Self {
            description: vec![
                "pre.game-description".to_string(),
                "div.game-description".to_string(),
            ],
            genre: vec!["span.genre".to_string()],
            sub_genre: vec!["span.sub-genre".to_string()],
            creator: vec![
                "span.creator-name".to_string(),
                "a.creator-name".to_string(),
            ],
            players: vec!["span.playing-count".to_string()],
            likes: vec!["span.like-count".to_string()],
            dislikes: vec!["span.dislike-count".to_string()],
        }
    }
}
