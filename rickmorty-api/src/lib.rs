mod character;
mod client;
mod episode;
mod error;

pub use character::{Character, CharacterPage, CharacterStatus, LocationRef, PageInfo};
pub use client::RickMortyClient;
pub use episode::Episode;
pub use error::{Error, ErrorKind};
