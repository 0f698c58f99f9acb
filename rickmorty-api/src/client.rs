use crate::character::{Character, CharacterPage};
use crate::episode::Episode;
use crate::error::Error;
use serde::de::DeserializeOwned;
use surf::Client;
use utils::surf_logging::SurfLogging;

const BASE_URL: &str = "https://rickandmortyapi.com/api";

/// Typed client for the public Rick and Morty reference API.
///
/// Cheap to clone; the underlying [`surf::Client`] shares its connection
/// pool across clones.
#[derive(Clone)]
pub struct RickMortyClient {
    http: Client,
    base_url: String,
}

impl RickMortyClient {
    /// Client against the public deployment of the reference API.
    pub fn new() -> Self {
        Self::with_base_url(BASE_URL)
    }

    /// Client against an alternate deployment, e.g. a local fixture
    /// server in tests.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new().with(SurfLogging),
            base_url: base_url.into(),
        }
    }

    /// Fetch one page of the character listing, envelope included.
    pub async fn character_page(&self, page: u32) -> Result<CharacterPage, Error> {
        let url = format!("{}/character/?page={}", self.base_url, page);
        self.fetch(&url).await
    }

    /// Fetch one page of the character listing, results only.
    pub async fn characters_by_page(&self, page: u32) -> Result<Vec<Character>, Error> {
        Ok(self.character_page(page).await?.into_results())
    }

    /// Fetch a single episode by its canonical URL, as referenced from a
    /// character's `episode` list.
    pub async fn episode_by_url(&self, url: &str) -> Result<Episode, Error> {
        self.fetch(url).await
    }

    async fn fetch<T: DeserializeOwned>(&self, url: &str) -> Result<T, Error> {
        let mut res = self.http.get(url).await.map_err(Error::request)?;
        if !res.status().is_success() {
            return Err(Error::status(res.status()));
        }
        res.body_json().await.map_err(Error::decode)
    }
}

impl Default for RickMortyClient {
    fn default() -> Self {
        Self::new()
    }
}
