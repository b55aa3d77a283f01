//! Configuration infrastructure
//!
//! `ScraperConfig` gathers every tunable of a run: endpoints, selectors,
//! pacing windows, HTTP settings, export paths and logging. The defaults are
//! the values observed on the live site; `from_file` layers a config file and
//! `ROBLOX_SCRAPER__*` environment variables on top of them.

use crate::domain::constants::{collection, export, site};
use crate::infrastructure::http_client::HttpClientConfig;
use crate::infrastructure::pacing::PacingWindow;
use crate::infrastructure::parsing::ParsingConfig;
use crate::infrastructure::scraping_error::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::info;

/// Environment prefix for overrides, e.g. `ROBLOX_SCRAPER__LISTING__DEFAULT_CAP=5`
pub const ENV_PREFIX: &str = "ROBLOX_SCRAPER";

/// Complete scraper configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScraperConfig {
    /// Base URL for endpoints and relative card links
    pub base_url: String,

    /// HTTP transport settings
    pub http: HttpClientConfig,

    /// Category listing collection
    pub listing: CollectionConfig,

    /// Keyword search collection
    pub search: CollectionConfig,

    /// Card and detail page selectors
    pub selectors: ParsingConfig,

    /// Output files
    pub export: ExportConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            base_url: site::BASE_URL.to_string(),
            http: HttpClientConfig::default(),
            listing: CollectionConfig::listing(),
            search: CollectionConfig::search(),
            selectors: ParsingConfig::default(),
            export: ExportConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// One collection endpoint: where to fetch, which cards to read, how fast
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectionConfig {
    /// Endpoint path relative to the base URL
    pub path: String,

    /// Query parameter carrying free text, if the endpoint takes one
    pub query_param: Option<String>,

    /// Selector for the repeated card container
    pub card_selector: String,

    /// Cap used when the caller does not give one
    pub default_cap: usize,

    /// Pause after each card
    pub pacing: PacingWindow,
}

impl CollectionConfig {
    pub fn listing() -> Self {
        Self {
            path: site::LISTING_PATH.to_string(),
            query_param: None,
            card_selector: "div.game-card".to_string(),
            default_cap: collection::DEFAULT_MAX_GAMES,
            pacing: PacingWindow::new(
                collection::LISTING_PACING_MIN_MS,
                collection::LISTING_PACING_MAX_MS,
            ),
        }
    }

    pub fn search() -> Self {
        Self {
            path: site::SEARCH_PATH.to_string(),
            query_param: Some(site::SEARCH_QUERY_PARAM.to_string()),
            card_selector: "div.search-result".to_string(),
            default_cap: collection::DEFAULT_MAX_RESULTS,
            pacing: PacingWindow::new(
                collection::SEARCH_PACING_MIN_MS,
                collection::SEARCH_PACING_MAX_MS,
            ),
        }
    }

    fn validate(&self, section: &str) -> ConfigResult<()> {
        if self.card_selector.trim().is_empty() {
            return Err(ConfigError::validation(
                &format!("{section}.card_selector"),
                "card selector must not be empty",
            ));
        }
        if !self.pacing.is_valid() {
            return Err(ConfigError::validation(
                &format!("{section}.pacing"),
                format!(
                    "min_ms ({}) cannot be greater than max_ms ({})",
                    self.pacing.min_ms, self.pacing.max_ms
                ),
            ));
        }
        Ok(())
    }
}

impl Default for CollectionConfig {
    fn default() -> Self {
        Self::listing()
    }
}

/// Output file locations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    pub csv_path: PathBuf,
    pub json_path: PathBuf,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            csv_path: PathBuf::from(export::DEFAULT_CSV_FILE),
            json_path: PathBuf::from(export::DEFAULT_JSON_FILE),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: "error", "warn", "info", "debug", "trace"
    pub level: String,

    /// Enable JSON formatted logs
    pub json_format: bool,

    /// Enable console output
    pub console_output: bool,

    /// Enable file output
    pub file_output: bool,

    /// Directory for the log file
    pub log_dir: PathBuf,

    /// Log file name inside `log_dir`
    pub file_name: String,

    /// Module-specific log level filters (e.g., "reqwest": "warn")
    pub module_filters: HashMap<String, String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json_format: false,
            console_output: true,
            file_output: false,
            log_dir: PathBuf::from("logs"),
            file_name: "roblox-scraper.log".to_string(),
            module_filters: HashMap::new(),
        }
    }
}

impl ScraperConfig {
    /// Load from a config file (format from its extension) plus environment overrides
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let settings = config::Config::builder()
            .add_source(config::Config::try_from(&Self::default())?)
            .add_source(config::File::from(path))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: Self = settings.try_deserialize()?;
        config.validate()?;
        info!("Loaded scraper configuration from {}", path.display());
        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> ConfigResult<()> {
        url::Url::parse(&self.base_url).map_err(|e| {
            let message = format!("invalid base URL '{}': {e}", self.base_url);
            ConfigError::validation("base_url", message)
        })?;

        if self.http.timeout_seconds == 0 {
            return Err(ConfigError::validation("http.timeout_seconds", "must be greater than 0"));
        }

        self.listing.validate("listing")?;
        self.search.validate("search")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults_match_site() {
        let config = ScraperConfig::default();
        assert_eq!(config.base_url, "https://www.roblox.com");
        assert_eq!(config.listing.path, "/games");
        assert_eq!(config.listing.card_selector, "div.game-card");
        assert_eq!(config.listing.default_cap, 50);
        assert_eq!(config.listing.pacing, PacingWindow::new(1_000, 3_000));
        assert_eq!(config.search.path, "/search/games");
        assert_eq!(config.search.query_param.as_deref(), Some("keyword"));
        assert_eq!(config.search.card_selector, "div.search-result");
        assert_eq!(config.search.default_cap, 20);
        assert_eq!(config.search.pacing, PacingWindow::new(1_000, 2_000));
        assert_eq!(config.export.csv_path, PathBuf::from("roblox_games.csv"));
        assert_eq!(config.export.json_path, PathBuf::from("roblox_games.json"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_file_overrides_defaults() {
        let file = write_config(
            r#"
            base_url = "https://web.roblox.com"

            [listing]
            default_cap = 5

            [listing.pacing]
            min_ms = 0
            max_ms = 10

            [logging]
            level = "debug"
            "#,
        );

        let config = ScraperConfig::from_file(file.path()).unwrap();
        assert_eq!(config.base_url, "https://web.roblox.com");
        assert_eq!(config.listing.default_cap, 5);
        assert_eq!(config.listing.pacing, PacingWindow::new(0, 10));
        assert_eq!(config.listing.card_selector, "div.game-card");
        assert_eq!(config.search, CollectionConfig::search());
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_inverted_pacing_is_rejected() {
        let file = write_config(
            r#"
            [search.pacing]
            min_ms = 2000
            max_ms = 1000
            "#,
        );

        let err = ScraperConfig::from_file(file.path()).unwrap_err();
        assert!(
            matches!(err, ConfigError::Validation { ref field, .. } if field == "search.pacing")
        );
    }

    #[test]
    fn test_missing_file_is_a_load_error() {
        let err = ScraperConfig::from_file("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Load { .. }));
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        let config = ScraperConfig {
            base_url: "roblox".to_string(),
            ..ScraperConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
