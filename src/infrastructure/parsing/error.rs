//! Parsing error re-export
//!
//! This module re-exports the error types used by the parsers.

pub use crate::infrastructure::scraping_error::{ConfigError, ParseError};
