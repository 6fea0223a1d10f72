use serde::{Deserialize, Serialize};

use crate::kv::{load_json, persist, KeyValueStore};

const RECENT_KEY: &str = "bridal.recently_viewed";
pub const CAPACITY: usize = 8;

/// Most-recent-first list of viewed service ids.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecentlyViewed {
    ids: Vec<String>,
}

impl RecentlyViewed {
    pub fn load(store: &impl KeyValueStore) -> Self {
        load_json(store, RECENT_KEY).unwrap_or_default()
    }

    pub fn save(&self, store: &impl KeyValueStore) {
        persist(store, RECENT_KEY, self);
    }

    /// Record a visit: move the id to the front and trim to capacity.
    pub fn touch(&mut self, id: &str) {
        self.ids.retain(|existing| existing != id);
        self.ids.insert(0, id.to_string());
        self.ids.truncate(CAPACITY);
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;

    #[test]
    fn touch_moves_to_front_without_duplicates() {
        let mut recent = RecentlyViewed::default();
        recent.touch("a");
        recent.touch("b");
        recent.touch("a");
        assert_eq!(recent.ids(), ["a", "b"]);
    }

    #[test]
    fn capped_and_persisted() {
        let store = MemoryStore::new();
        let mut recent = RecentlyViewed::load(&store);
        for i in 0..12 {
            recent.touch(&i.to_string());
        }
        recent.save(&store);

        let loaded = RecentlyViewed::load(&store);
        assert_eq!(loaded.ids().len(), CAPACITY);
        assert_eq!(loaded.ids()[0], "11");
        assert_eq!(loaded.ids()[CAPACITY - 1], "4");
    }
}
