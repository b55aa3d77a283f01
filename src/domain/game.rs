use serde::{Deserialize, Serialize};

/// One scraped game entry, as written to CSV/JSON.
///
/// Every field is always present. A source element that could not be found
/// is represented by an empty string, never by an omitted key. Counts such as
/// `players` and `likes` keep the site's display formatting ("1.2K", "3,401").
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub name: String,
    pub description: String,
    pub genre: String,
    pub sub_genre: String,
    pub url: String,
    pub creator: String,
    pub players: String,
    pub likes: String,
    pub dislikes: String,
}

impl GameRecord {
    /// Column order for every export format.
    pub const FIELD_NAMES: [&'static str; 9] = [
        "name",
        "description",
        "genre",
        "sub_genre",
        "url",
        "creator",
        "players",
        "likes",
        "dislikes",
    ];

    /// Compose a record from the card-level fields and the detail-page fields.
    pub fn from_parts(name: String, url: String, detail: GameDetail) -> Self {
        let GameDetail {
            description,
            genre,
            sub_genre,
            creator,
            players,
            likes,
            dislikes,
        } = detail;

        Self {
            name,
            description,
            genre,
            sub_genre,
            url,
            creator,
            players,
            likes,
            dislikes,
        }
    }

    /// Field values in `FIELD_NAMES` order.
    pub fn values(&self) -> [&str; 9] {
        [
            &self.name,
            &self.description,
            &self.genre,
            &self.sub_genre,
            &self.url,
            &self.creator,
            &self.players,
            &self.likes,
            &self.dislikes,
        ]
    }

    /// True when no detail-page attribute was populated.
    pub fn has_empty_details(&self) -> bool {
        self.values()
            .iter()
            .enumerate()
            .filter(|(i, _)| !matches!(Self::FIELD_NAMES[*i], "name" | "url"))
            .all(|(_, v)| v.is_empty())
    }
}

/// Attributes read from a game's detail page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameDetail {
    pub description: String,
    pub genre: String,
    pub sub_genre: String,
    pub creator: String,
    pub players: String,
    pub likes: String,
    pub dislikes: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_parts_keeps_every_field() {
        let detail = GameDetail {
            description: "Build a tycoon".to_string(),
            genre: "Simulation".to_string(),
            sub_genre: "Tycoon".to_string(),
            creator: "Studio".to_string(),
            players: "12.5K".to_string(),
            likes: "3,401".to_string(),
            dislikes: "120".to_string(),
        };

        let record = GameRecord::from_parts(
            "Tycoon".to_string(),
            "https://www.roblox.com/games/1".to_string(),
            detail,
        );

        assert_eq!(
            record.values(),
            [
                "Tycoon",
                "Build a tycoon",
                "Simulation",
                "Tycoon",
                "https://www.roblox.com/games/1",
                "Studio",
                "12.5K",
                "3,401",
                "120",
            ]
        );
        assert!(!record.has_empty_details());
    }

    #[test]
    fn test_default_detail_yields_empty_strings() {
        let record =
            GameRecord::from_parts("Unknown".to_string(), String::new(), GameDetail::default());
        assert!(record.has_empty_details());
        assert_eq!(record.url, "");
    }

    #[test]
    fn test_serialized_keys_match_field_names() {
        let value = serde_json::to_value(GameRecord::default()).unwrap();
        let mut keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
        let mut expected = GameRecord::FIELD_NAMES.to_vec();
        keys.sort_unstable();
        expected.sort_unstable();
        assert_eq!(keys, expected);
    }
}
