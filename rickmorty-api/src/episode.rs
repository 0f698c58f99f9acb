use chrono::{DateTime, Utc};
use getset::{CopyGetters, Getters};
use serde::Deserialize;

/// One episode record as served by the reference API. Immutable once
/// fetched. `code` is the wire field `episode` (e.g. `S01E01`).
#[derive(Clone, Debug, Deserialize, Getters, CopyGetters)]
pub struct Episode {
    #[get_copy = "pub"]
    id: u32,
    #[get = "pub"]
    name: String,
    #[get = "pub"]
    air_date: String,
    #[serde(rename = "episode")]
    #[get = "pub"]
    code: String,
    #[get = "pub"]
    characters: Vec<String>,
    #[get = "pub"]
    url: String,
    #[get_copy = "pub"]
    created: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_episode_record() {
        let episode: Episode = serde_json::from_value(json!({
            "id": 1,
            "name": "Pilot",
            "air_date": "December 2, 2013",
            "episode": "S01E01",
            "characters": ["https://rickandmortyapi.com/api/character/1"],
            "url": "https://rickandmortyapi.com/api/episode/1",
            "created": "2017-11-10T12:56:33.798Z"
        }))
        .unwrap();

        assert_eq!(episode.id(), 1);
        assert_eq!(episode.name(), "Pilot");
        assert_eq!(episode.code(), "S01E01");
        assert_eq!(episode.characters().len(), 1);
    }
}
