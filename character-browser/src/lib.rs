mod api;
mod browser;
mod cache;
mod store;


pub use api::CharacterApi;
pub use browser::CharacterBrowser;
pub use cache::{CacheStats, EpisodeCache};
pub use store::CharacterStore;

// Re-export the client crate's surface so drivers only need this crate.
pub use rickmorty_api::{
    Character, CharacterStatus, Episode, Error, ErrorKind, LocationRef, RickMortyClient,
};
