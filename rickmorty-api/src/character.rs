use chrono::{DateTime, Utc};
use getset::{CopyGetters, Getters};
use serde::Deserialize;
use strum_macros::Display;

/// One character record as served by the reference API.
///
/// Immutable once fetched; identified by its integer `id`. The ordered
/// `episode` URL list starts with the character's first appearance.
#[derive(Clone, Debug, Deserialize, Getters, CopyGetters)]
pub struct Character {
    #[get_copy = "pub"]
    id: u32,
    #[get = "pub"]
    name: String,
    #[get_copy = "pub"]
    status: CharacterStatus,
    #[get = "pub"]
    species: String,
    #[serde(rename = "type")]
    #[get = "pub"]
    kind: String,
    #[get = "pub"]
    gender: String,
    #[get = "pub"]
    origin: LocationRef,
    #[get = "pub"]
    location: LocationRef,
    #[get = "pub"]
    image: String,
    #[get = "pub"]
    episode: Vec<String>,
    #[get = "pub"]
    url: String,
    #[get_copy = "pub"]
    created: DateTime<Utc>,
}

impl Character {
    /// URL of the character's first appearance, if it has any episodes.
    pub fn first_episode_url(&self) -> Option<&str> {
        self.episode.first().map(String::as_str)
    }
}

/// Life status of a character. The wire value for the third variant is
/// the lowercase string `unknown`.
#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, PartialEq)]
pub enum CharacterStatus {
    Alive,
    Dead,
    #[serde(rename = "unknown")]
    Unknown,
}

/// A location as referenced from a character record (`origin` and
/// `location`). Only carried by name and URL; never fetched separately.
#[derive(Clone, Debug, Deserialize, Getters)]
#[get = "pub"]
pub struct LocationRef {
    name: String,
    url: String,
}

/// Envelope of the paginated character listing endpoint.
#[derive(Clone, Debug, Deserialize, Getters)]
#[get = "pub"]
pub struct CharacterPage {
    info: PageInfo,
    results: Vec<Character>,
}

impl CharacterPage {
    pub fn into_results(self) -> Vec<Character> {
        self.results
    }
}

/// Pagination metadata attached to every listing response.
#[derive(Clone, Debug, Deserialize, Getters, CopyGetters)]
pub struct PageInfo {
    #[get_copy = "pub"]
    count: u32,
    #[get_copy = "pub"]
    pages: u32,
    #[get = "pub"]
    next: Option<String>,
    #[get = "pub"]
    prev: Option<String>,
}
