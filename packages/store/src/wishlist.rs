//! Per-user wishlist mirror.
//!
//! The backend owns the records; this keeps the list the UI renders and
//! refuses to add a url the user has already saved.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::kv::{load_json, persist, KeyValueStore};
use crate::models::WishlistItem;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{url} is already in the wishlist")]
pub struct DuplicateUrl {
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Wishlist {
    pub user_id: String,
    pub items: Vec<WishlistItem>,
}

impl Wishlist {
    pub fn new(user_id: &str) -> Self {
        Self {
            user_id: user_id.to_string(),
            items: Vec::new(),
        }
    }

    pub fn contains_url(&self, url: &str) -> bool {
        self.items.iter().any(|i| i.url == url)
    }

    pub fn find_by_url(&self, url: &str) -> Option<&WishlistItem> {
        self.items.iter().find(|i| i.url == url)
    }

    /// Check an add before it is sent to the backend.
    pub fn check_new(&self, url: &str) -> Result<(), DuplicateUrl> {
        if self.contains_url(url) {
            return Err(DuplicateUrl {
                url: url.to_string(),
            });
        }
        Ok(())
    }

    /// Insert a record the backend created.
    pub fn insert(&mut self, item: WishlistItem) -> Result<(), DuplicateUrl> {
        self.check_new(&item.url)?;
        self.items.push(item);
        Ok(())
    }

    /// Remove by id; returns whether anything was removed.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|i| i.id != id);
        self.items.len() != before
    }

    /// Replace the list with a fresh server fetch, keeping the first entry per url.
    pub fn replace_all(&mut self, items: Vec<WishlistItem>) {
        self.items.clear();
        for item in items {
            if item.user_id == self.user_id && !self.contains_url(&item.url) {
                self.items.push(item);
            }
        }
    }

    fn cache_key(user_id: &str) -> String {
        format!("bridal.wishlist.{user_id}")
    }

    pub fn load_cached(store: &impl KeyValueStore, user_id: &str) -> Self {
        load_json(store, &Self::cache_key(user_id)).unwrap_or_else(|| Self::new(user_id))
    }

    pub fn save_cached(&self, store: &impl KeyValueStore) {
        persist(store, &Self::cache_key(&self.user_id), self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MemoryStore, NewWishlistItem, Service};

    fn item(id: &str, user: &str, url: &str) -> WishlistItem {
        WishlistItem {
            id: id.into(),
            user_id: user.into(),
            url: url.into(),
            desc: "Bridal makeup".into(),
            rating: 4.5,
            price: 15000,
        }
    }

    #[test]
    fn adding_same_url_twice_does_not_duplicate() {
        let mut list = Wishlist::new("u1");
        list.insert(item("1", "u1", "/img/a.jpg")).unwrap();
        let err = list.insert(item("2", "u1", "/img/a.jpg")).unwrap_err();
        assert_eq!(err.url, "/img/a.jpg");
        assert_eq!(list.items.len(), 1);
        assert!(list.check_new("/img/b.jpg").is_ok());
    }

    #[test]
    fn remove_then_readd() {
        let mut list = Wishlist::new("u1");
        list.insert(item("1", "u1", "/img/a.jpg")).unwrap();
        assert!(list.remove("1"));
        assert!(!list.remove("1"));
        assert!(list.insert(item("3", "u1", "/img/a.jpg")).is_ok());
    }

    #[test]
    fn refetch_drops_duplicates_and_foreign_rows() {
        let mut list = Wishlist::new("u1");
        list.replace_all(vec![
            item("1", "u1", "/a"),
            item("2", "u1", "/a"),
            item("3", "u2", "/b"),
            item("4", "u1", "/c"),
        ]);
        let ids: Vec<_> = list.items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["1", "4"]);
    }

    #[test]
    fn imageless_services_are_saved_separately() {
        let service = |id: &str, name: &str| Service {
            id: id.into(),
            name: name.into(),
            category: String::new(),
            description: String::new(),
            price: 5000,
            image_url: String::new(),
            rating: 4.0,
        };
        let makeup = NewWishlistItem::from_service("u1", &service("s1", "Bridal Makeup"));
        let mehendi = NewWishlistItem::from_service("u1", &service("s2", "Mehendi"));
        assert_eq!(makeup.url, "/services/s1");

        let mut list = Wishlist::new("u1");
        list.insert(item("1", "u1", &makeup.url)).unwrap();
        assert!(list.check_new(&mehendi.url).is_ok());
        list.insert(item("2", "u1", &mehendi.url)).unwrap();
        assert_eq!(list.find_by_url(&mehendi.url).map(|i| i.id.as_str()), Some("2"));
    }

    #[test]
    fn cache_is_scoped_per_user() {
        let store = MemoryStore::new();
        let mut list = Wishlist::new("u1");
        list.insert(item("1", "u1", "/a")).unwrap();
        list.save_cached(&store);

        assert_eq!(Wishlist::load_cached(&store, "u1"), list);
        assert!(Wishlist::load_cached(&store, "u2").items.is_empty());
    }
}
