use crate::api::CharacterApi;
use rickmorty_api::Character;
use std::sync::{Arc, RwLock};
use tokio::sync::Notify;

/// Holds the most recently loaded page of characters plus the active
/// search string, and derives the visible (filtered) list from both.
///
/// Readers always observe a fully replaced list, never a partial load.
pub struct CharacterStore {
    api: Arc<dyn CharacterApi>,
    characters: RwLock<Vec<Character>>,
    search: RwLock<String>,
    changed: Arc<Notify>,
}

impl CharacterStore {
    pub fn new(api: Arc<dyn CharacterApi>) -> Self {
        Self {
            api,
            characters: RwLock::new(Vec::new()),
            search: RwLock::new(String::new()),
            changed: Arc::new(Notify::new()),
        }
    }

    /// Fetch one page and replace the stored list wholesale.
    ///
    /// A failed fetch is logged and swallowed, leaving the previous list
    /// in place; no error reaches the caller. This keeps whatever the
    /// driver last rendered renderable.
    pub async fn load(&self, page: u32) {
        match self.api.characters_by_page(page).await {
            Ok(characters) => {
                log::info!("Loaded {} characters from page {}", characters.len(), page);
                *self.characters.write().unwrap() = characters;
                self.changed.notify_waiters();
            }
            Err(err) => log::warn!("Character page {} load failed: {}", page, err),
        }
    }

    /// Snapshot of the full stored page, unfiltered, in server order.
    pub fn characters(&self) -> Vec<Character> {
        self.characters.read().unwrap().clone()
    }

    /// Replace the search string and wake subscribers.
    pub fn set_search(&self, query: impl Into<String>) {
        *self.search.write().unwrap() = query.into();
        self.changed.notify_waiters();
    }

    pub fn search(&self) -> String {
        self.search.read().unwrap().clone()
    }

    /// Characters whose name contains `query` case-insensitively, in
    /// stored order. An empty query matches everything. Synchronous and
    /// free of I/O.
    pub fn filter(&self, query: &str) -> Vec<Character> {
        let query = query.to_lowercase();
        self.characters
            .read()
            .unwrap()
            .iter()
            .filter(|character| query.is_empty() || character.name().to_lowercase().contains(&query))
            .cloned()
            .collect()
    }

    /// The filtered list under the current search string.
    pub fn visible(&self) -> Vec<Character> {
        self.filter(&self.search())
    }

    /// Notifier fired after every successful load and every search
    /// change. Subscription replaces the source UI's reactive bindings.
    pub fn change_notifier(&self) -> Arc<Notify> {
        Arc::clone(&self.changed)
    }
}
