use async_trait::async_trait;
use rickmorty_api::{Character, Episode, Error, RickMortyClient};

/// The slice of the reference API the browser core depends on. These are
/// the only two network operations the store and the episode cache ever
/// issue; tests substitute a programmable stub at this seam.
#[async_trait]
pub trait CharacterApi: Send + Sync {
    /// One page of the character listing, in the server's order.
    async fn characters_by_page(&self, page: u32) -> Result<Vec<Character>, Error>;

    /// A single episode, addressed by the canonical URL a character
    /// record carries in its `episode` list.
    async fn episode_by_url(&self, url: &str) -> Result<Episode, Error>;
}

#[async_trait]
impl CharacterApi for RickMortyClient {
    async fn characters_by_page(&self, page: u32) -> Result<Vec<Character>, Error> {
        RickMortyClient::characters_by_page(self, page).await
    }

    async fn episode_by_url(&self, url: &str) -> Result<Episode, Error> {
        RickMortyClient::episode_by_url(self, url).await
    }
}
