use crate::api::CharacterApi;
use crate::cache::EpisodeCache;
use crate::store::CharacterStore;
use futures::future::join_all;
use getset::Getters;
use rickmorty_api::{Character, RickMortyClient};
use std::sync::Arc;

/// The listing always shows the first page; the source UI never
/// paginates past it.
const FIRST_PAGE: u32 = 1;

/// Ties one [`CharacterStore`] and one [`EpisodeCache`] to a shared API
/// client and drives the two fetch paths a listing needs: the page load
/// and the per-card first-appearance lookup.
#[derive(Getters)]
#[get = "pub"]
pub struct CharacterBrowser {
    store: CharacterStore,
    episodes: EpisodeCache,
}

impl CharacterBrowser {
    /// Browser over the public reference API.
    pub fn new() -> Self {
        Self::with_api(Arc::new(RickMortyClient::new()))
    }

    /// Browser over an injected API implementation.
    pub fn with_api(api: Arc<dyn CharacterApi>) -> Self {
        Self {
            store: CharacterStore::new(Arc::clone(&api)),
            episodes: EpisodeCache::new(api),
        }
    }

    /// Load the first character page into the store.
    ///
    /// Invoke once per logical mount of the listing; there is no guard
    /// against overlapping invocations, the trigger is caller-driven.
    pub async fn load_characters(&self) {
        self.store.load(FIRST_PAGE).await;
    }

    /// Resolve the first-appearance episode for one character.
    /// Idempotent per character id; see [`EpisodeCache::resolve`].
    pub async fn ensure_first_episode(&self, character: &Character) {
        self.episodes
            .resolve(character.id(), character.first_episode_url())
            .await;
    }

    /// Resolve first appearances for a batch of characters concurrently,
    /// with at most one in-flight fetch per character and no ordering
    /// between them. Headless stand-in for "once per list item
    /// materialized".
    pub async fn ensure_first_episodes(&self, characters: &[Character]) {
        join_all(
            characters
                .iter()
                .map(|character| self.ensure_first_episode(character)),
        )
        .await;
    }

    pub fn set_search(&self, query: impl Into<String>) {
        self.store.set_search(query);
    }

    pub fn visible_characters(&self) -> Vec<Character> {
        self.store.visible()
    }
}

impl Default for CharacterBrowser {
    fn default() -> Self {
        Self::new()
    }
}
