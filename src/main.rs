//! Demo run: popular listing plus an "adventure" search, exported to CSV and JSON

use anyhow::Result;
use roblox_scraper_lib::domain::GameRecord;
use roblox_scraper_lib::infrastructure::{
    HttpClient, RandomPacer, ScraperConfig, init_logging_with_config, write_csv, write_json,
};
use roblox_scraper_lib::{ListingCollector, SearchCollector};
use tracing::error;

const LISTING_LIMIT: usize = 10;
const SEARCH_LIMIT: usize = 5;
const SEARCH_QUERY: &str = "adventure";
const SUMMARY_RECORDS: usize = 3;
const DESCRIPTION_PREVIEW_CHARS: usize = 100;

fn main() {
    if let Err(e) = run() {
        error!("Scraper run failed: {:#}", e);
        eprintln!("Error: {e:#}");
    }
}

fn run() -> Result<()> {
    let config = ScraperConfig::default();
    init_logging_with_config(&config.logging)?;

    let client = HttpClient::with_config(config.http.clone())?;
    let listing = ListingCollector::new(&config, &client, RandomPacer)?;
    let search = SearchCollector::new(&config, &client, RandomPacer)?;

    println!("Starting Roblox game scraper...");

    println!("\n1. Scraping popular games...");
    let mut games = listing.collect("popular", LISTING_LIMIT);

    println!("\n2. Searching for '{SEARCH_QUERY}' games...");
    games.extend(search.collect(SEARCH_QUERY, SEARCH_LIMIT));

    println!("\nTotal games scraped: {}", games.len());

    if !games.is_empty() {
        write_csv(&games, &config.export.csv_path)?;
        write_json(&games, &config.export.json_path)?;
        print_summary(&games);
    }

    println!("\nScraping completed!");
    Ok(())
}

fn print_summary(games: &[GameRecord]) {
    println!("\nSample of scraped games:");
    for (index, game) in games.iter().take(SUMMARY_RECORDS).enumerate() {
        print!("{}", summary_entry(index + 1, game));
    }
}

fn summary_entry(position: usize, game: &GameRecord) -> String {
    format!(
        "\n{position}. {}\n   Genre: {}\n   Creator: {}\n   Description: {}...\n",
        game.name,
        game.genre,
        game.creator,
        preview(&game.description)
    )
}

fn preview(text: &str) -> String {
    text.chars().take(DESCRIPTION_PREVIEW_CHARS).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_counts_characters() {
        let text = "é".repeat(150);
        assert_eq!(preview(&text).chars().count(), 100);
        assert_eq!(preview("short"), "short");
    }

    #[test]
    fn test_summary_entry_layout() {
        let game = GameRecord {
            name: "Jailbreak".to_string(),
            genre: "Action".to_string(),
            creator: "Badimo".to_string(),
            description: "Rob banks".to_string(),
            ..GameRecord::default()
        };

        assert_eq!(
            summary_entry(1, &game),
            "\n1. Jailbreak\n   Genre: Action\n   Creator: Badimo\n   Description: Rob banks...\n"
        );
    }
}
