//! Site characteristics and collection defaults
//!
//! Values observed on roblox.com. Everything here is also the default of the
//! corresponding `ScraperConfig` field.

/// roblox.com site constants
pub mod site {
    /// Base URL used to resolve relative card links
    pub const BASE_URL: &str = "https://www.roblox.com";

    /// Listing endpoint (relative to `BASE_URL`)
    pub const LISTING_PATH: &str = "/games";

    /// Search endpoint (relative to `BASE_URL`)
    pub const SEARCH_PATH: &str = "/search/games";

    /// Query parameter carrying the search text
    pub const SEARCH_QUERY_PARAM: &str = "keyword";

    /// Browser-identifying user agent; the site filters obvious bots
    pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";
}

/// Collection limits and pacing
pub mod collection {
    /// Category used when none is given. Only informational, see `ListingCollector`
    pub const DEFAULT_CATEGORY: &str = "popular";

    /// Default cap on listing cards
    pub const DEFAULT_MAX_GAMES: usize = 50;

    /// Default cap on search results
    pub const DEFAULT_MAX_RESULTS: usize = 20;

    /// Listing pacing window (milliseconds)
    pub const LISTING_PACING_MIN_MS: u64 = 1_000;
    pub const LISTING_PACING_MAX_MS: u64 = 3_000;

    /// Search pacing window (milliseconds)
    pub const SEARCH_PACING_MIN_MS: u64 = 1_000;
    pub const SEARCH_PACING_MAX_MS: u64 = 2_000;

    /// Placeholder name for cards without a readable name element
    pub const UNKNOWN_NAME: &str = "Unknown";
}

/// Output defaults
pub mod export {
    pub const DEFAULT_CSV_FILE: &str = "roblox_games.csv";
    pub const DEFAULT_JSON_FILE: &str = "roblox_games.json";
}
