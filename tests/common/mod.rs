//! Shared fixtures for integration tests

#![allow(dead_code)]

pub use roblox_scraper_lib::{FetchError, Pacer, PacingWindow, Transport};

#[path = "../../src/test_utils.rs"]
mod test_utils;

pub use test_utils::{FixtureTransport, RecordingPacer};

pub const BASE: &str = "https://www.roblox.com";

/// A listing card linking to `/games/{id}`
pub fn card(id: usize, name: &str) -> String {
    format!(r#"<div class="game-card"><a href="/games/{id}"><span class="game-name">{name}</span></a></div>"#)
}

pub fn page(cards: &[String]) -> String {
    format!("<html><body><div class=\"grid\">{}</div></body></html>", cards.concat())
}

/// A detail page with every primary selector present
pub fn detail_page(genre: &str, creator: &str) -> String {
    format!(
        r#"<html><body>
            <pre class="game-description">About {genre}</pre>
            <span class="genre">{genre}</span>
            <span class="sub-genre">Sub {genre}</span>
            <span class="creator-name">{creator}</span>
            <span class="playing-count">1.2K</span>
            <span class="like-count">3,401</span>
            <span class="dislike-count">12</span>
        </body></html>"#
    )
}
