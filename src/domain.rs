//! Domain module - scraped game entities and site constants
//!
//! Modern Rust module organization (Rust 2018+ style):
//! - Each module is its own file in the domain/ directory
//! - Public exports are defined here for convenience

pub mod constants;
pub mod game;

pub use game::{GameDetail, GameRecord};
