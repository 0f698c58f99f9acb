use crate::api::CharacterApi;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use rickmorty_api::Episode;
use std::sync::Arc;
use tokio::sync::Notify;

/// State of one cache slot. `Pending` is inserted before the fetch
/// suspends, which is what deduplicates concurrent resolutions.
#[derive(Debug)]
enum EpisodeEntry {
    Pending,
    Resolved(Episode),
}

/// In-memory map from character id to that character's first-appearance
/// episode, populated on demand. A resolved entry is never overwritten
/// or evicted for the lifetime of the process.
pub struct EpisodeCache {
    api: Arc<dyn CharacterApi>,
    entries: DashMap<u32, EpisodeEntry>,
    changed: Arc<Notify>,
}

impl EpisodeCache {
    pub fn new(api: Arc<dyn CharacterApi>) -> Self {
        Self {
            api,
            entries: DashMap::new(),
            changed: Arc::new(Notify::new()),
        }
    }

    /// Resolve the episode behind `url` and remember it under
    /// `character_id`.
    ///
    /// At most one fetch is ever issued per character id: a second call
    /// while the first is in flight, or after it succeeded, is a no-op.
    /// A missing URL is a no-op. A failed fetch is logged, swallowed,
    /// and leaves the id unresolved so a later call retries.
    pub async fn resolve(&self, character_id: u32, url: Option<&str>) {
        let url = match url {
            Some(url) => url,
            None => {
                log::debug!("Character {} has no episodes, nothing to resolve", character_id);
                return;
            }
        };

        // The entry guard must drop before the await below.
        match self.entries.entry(character_id) {
            Entry::Occupied(_) => {
                log::debug!("Episode for character {} already resolved or in flight", character_id);
                return;
            }
            Entry::Vacant(vacant) => {
                vacant.insert(EpisodeEntry::Pending);
            }
        }

        match self.api.episode_by_url(url).await {
            Ok(episode) => {
                log::debug!("Resolved first episode {} for character {}", episode.name(), character_id);
                self.entries.insert(character_id, EpisodeEntry::Resolved(episode));
                self.changed.notify_waiters();
            }
            Err(err) => {
                log::warn!("Episode fetch for character {} failed: {}", character_id, err);
                self.entries.remove(&character_id);
            }
        }
    }

    /// The resolved episode for `character_id`, or `None` while the id
    /// is unresolved or still in flight.
    pub fn get(&self, character_id: u32) -> Option<Episode> {
        match self.entries.get(&character_id)?.value() {
            EpisodeEntry::Resolved(episode) => Some(episode.clone()),
            EpisodeEntry::Pending => None,
        }
    }

    pub fn stats(&self) -> CacheStats {
        let mut stats = CacheStats {
            resolved: 0,
            pending: 0,
        };
        for entry in self.entries.iter() {
            match entry.value() {
                EpisodeEntry::Resolved(_) => stats.resolved += 1,
                EpisodeEntry::Pending => stats.pending += 1,
            }
        }
        stats
    }

    /// Notifier fired after every successful resolution.
    pub fn change_notifier(&self) -> Arc<Notify> {
        Arc::clone(&self.changed)
    }
}

/// Point-in-time cache occupancy.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CacheStats {
    pub resolved: usize,
    pub pending: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{episode, StubApi};
    use std::time::Duration;

    #[tokio::test]
    async fn unresolved_ids_read_as_none() {
        let cache = EpisodeCache::new(Arc::new(StubApi::new()));
        assert!(cache.get(1).is_none());
    }

    #[tokio::test]
    async fn resolves_and_memoizes_an_episode() {
        let api = Arc::new(StubApi::new());
        api.insert_episode("/episode/1", episode("Pilot"));
        let cache = EpisodeCache::new(Arc::clone(&api) as Arc<dyn CharacterApi>);

        cache.resolve(1, Some("/episode/1")).await;

        let resolved = cache.get(1).expect("episode should be cached");
        assert_eq!(resolved.name(), "Pilot");
        // Reads are stable.
        assert_eq!(cache.get(1).unwrap().name(), "Pilot");
        assert_eq!(cache.stats(), CacheStats { resolved: 1, pending: 0 });
    }

    #[tokio::test]
    async fn missing_url_is_a_noop() {
        let api = Arc::new(StubApi::new());
        let cache = EpisodeCache::new(Arc::clone(&api) as Arc<dyn CharacterApi>);

        cache.resolve(2, None).await;

        assert_eq!(api.episode_calls(), 0);
        assert!(cache.get(2).is_none());
    }

    #[tokio::test]
    async fn sequential_resolves_fetch_at_most_once() {
        let api = Arc::new(StubApi::new());
        api.insert_episode("/episode/1", episode("Pilot"));
        let cache = EpisodeCache::new(Arc::clone(&api) as Arc<dyn CharacterApi>);

        cache.resolve(1, Some("/episode/1")).await;
        cache.resolve(1, Some("/episode/1")).await;

        assert_eq!(api.episode_calls(), 1);
    }

    #[tokio::test]
    async fn concurrent_resolves_fetch_at_most_once() {
        let api = Arc::new(StubApi::with_episode_delay(Duration::from_millis(50)));
        api.insert_episode("/episode/1", episode("Pilot"));
        let cache = EpisodeCache::new(Arc::clone(&api) as Arc<dyn CharacterApi>);

        tokio::join!(
            cache.resolve(1, Some("/episode/1")),
            cache.resolve(1, Some("/episode/1")),
        );

        assert_eq!(api.episode_calls(), 1);
        assert_eq!(cache.get(1).unwrap().name(), "Pilot");
    }

    #[tokio::test]
    async fn failed_resolve_leaves_the_id_retryable() {
        let api = Arc::new(StubApi::new());
        let cache = EpisodeCache::new(Arc::clone(&api) as Arc<dyn CharacterApi>);

        // No episode registered for the URL yet, so the first attempt
        // fails and must not leave a poisoned slot behind.
        cache.resolve(1, Some("/episode/1")).await;
        assert!(cache.get(1).is_none());
        assert_eq!(cache.stats(), CacheStats { resolved: 0, pending: 0 });

        api.insert_episode("/episode/1", episode("Pilot"));
        cache.resolve(1, Some("/episode/1")).await;

        assert_eq!(api.episode_calls(), 2);
        assert_eq!(cache.get(1).unwrap().name(), "Pilot");
    }

    #[tokio::test]
    async fn distinct_ids_resolve_independently() {
        let api = Arc::new(StubApi::new());
        api.insert_episode("/episode/1", episode("Pilot"));
        api.insert_episode("/episode/6", episode("Rick Potion #9"));
        let cache = EpisodeCache::new(Arc::clone(&api) as Arc<dyn CharacterApi>);

        tokio::join!(
            cache.resolve(1, Some("/episode/1")),
            cache.resolve(3, Some("/episode/6")),
        );

        assert_eq!(api.episode_calls(), 2);
        assert_eq!(cache.get(1).unwrap().name(), "Pilot");
        assert_eq!(cache.get(3).unwrap().name(), "Rick Potion #9");
    }
}
