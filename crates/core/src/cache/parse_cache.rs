use crate::{interfaces::BufferId, parser::ParseOutcome};
use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::Mutex;

const DEFAULT_CAPACITY: usize = 128;

/// Per-buffer parse cache, keyed by buffer identity.
///
/// Entries are evicted wholesale when the host signals a buffer change; the
/// md5 fingerprint is a second line of defense against a notification that
/// never arrived. A stale parse only risks an outdated suggestion, never a
/// corrupted edit, because edits are re-derived from the declaration the
/// current query returns.
#[derive(Debug)]
pub struct ParseCache {
    entries: Mutex<LruCache<BufferId, CacheEntry>>,
}

#[derive(Debug, Clone)]
struct CacheEntry {
    outcome: ParseOutcome,
    fingerprint: String,
}

impl ParseCache {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity.max(1)).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: Mutex::new(LruCache::new(capacity)),
        }
    }

    /// The cached outcome for `id`, provided `current_text` still matches
    /// what was parsed. A mismatch evicts the entry and misses.
    pub fn get(&self, id: BufferId, current_text: &str) -> Option<ParseOutcome> {
        let mut entries = self.lock();

        let fingerprint_matches = entries
            .get(&id)
            .map(|entry| entry.fingerprint == fingerprint(current_text));

        match fingerprint_matches {
            Some(true) => entries.get(&id).map(|entry| entry.outcome.clone()),
            Some(false) => {
                tracing::debug!(%id, "cached parse is stale, evicting");
                entries.pop(&id);
                None
            }
            None => None,
        }
    }

    pub fn insert(&self, id: BufferId, text: &str, outcome: ParseOutcome) {
        let entry = CacheEntry {
            outcome,
            fingerprint: fingerprint(text),
        };
        self.lock().put(id, entry);
    }

    /// Evict the entry for a changed buffer. No-op when nothing is cached.
    pub fn invalidate(&self, id: BufferId) {
        self.lock().pop(&id);
    }

    /// Drop every entry. Idempotent; used on engine disposal.
    pub fn clear(&self) {
        self.lock().clear();
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, LruCache<BufferId, CacheEntry>> {
        match self.entries.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl Default for ParseCache {
    fn default() -> Self {
        Self::new()
    }
}

fn fingerprint(text: &str) -> String {
    format!("{:x}", md5::compute(text.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{ParseOutcome, ParsedModule};

    fn outcome() -> ParseOutcome {
        ParseOutcome::Parsed(ParsedModule::default())
    }

    #[test]
    fn test_hit_requires_matching_text() {
        let cache = ParseCache::new();
        cache.insert(BufferId(1), "const a = 1", outcome());

        assert!(cache.get(BufferId(1), "const a = 1").is_some());
        // changed text evicts instead of serving a stale parse
        assert!(cache.get(BufferId(1), "const a = 2").is_none());
        assert!(cache.is_empty());
    }

    #[test]
    fn test_miss_on_unknown_buffer() {
        let cache = ParseCache::new();
        assert!(cache.get(BufferId(42), "").is_none());
    }

    #[test]
    fn test_invalidate_and_clear_are_idempotent() {
        let cache = ParseCache::new();
        cache.insert(BufferId(1), "x", outcome());
        cache.insert(BufferId(2), "y", ParseOutcome::Failed);
        assert_eq!(cache.len(), 2);

        cache.invalidate(BufferId(1));
        cache.invalidate(BufferId(1));
        assert_eq!(cache.len(), 1);

        cache.clear();
        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn test_failed_outcomes_are_cached_too() {
        let cache = ParseCache::new();
        cache.insert(BufferId(7), "not { valid", ParseOutcome::Failed);
        assert_eq!(cache.get(BufferId(7), "not { valid"), Some(ParseOutcome::Failed));
    }

    #[test]
    fn test_capacity_bound_evicts_least_recent() {
        let cache = ParseCache::with_capacity(2);
        cache.insert(BufferId(1), "a", outcome());
        cache.insert(BufferId(2), "b", outcome());
        cache.insert(BufferId(3), "c", outcome());

        assert_eq!(cache.len(), 2);
        assert!(cache.get(BufferId(1), "a").is_none());
        assert!(cache.get(BufferId(3), "c").is_some());
    }
}
