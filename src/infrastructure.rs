//! Infrastructure layer for HTTP, HTML parsing, pacing, export and logging

pub mod config;
pub mod http_client;
pub mod logging;
pub mod pacing;
pub mod parsing;
pub mod record_exporter;
pub mod scraping_error;

// Re-export commonly used items
pub use config::{CollectionConfig, ExportConfig, LoggingConfig, ScraperConfig};
pub use http_client::{HttpClient, HttpClientConfig, Transport};
pub use logging::init_logging_with_config;
pub use pacing::{NoPacing, Pacer, PacingWindow, RandomPacer};
pub use parsing::{DocumentParser, ExtractionContext, HtmlDocumentParser, ParsingConfig};
pub use record_exporter::{write_csv, write_json};
pub use scraping_error::{CardExtractionFailure, ConfigError, ExportError, FetchError, ParseError};
