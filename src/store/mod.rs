//! The optional account backend seam: favorites and visit history.
//!
//! The occupancy model is independent of this store; everything else in
//! the crate behaves identically whether or not one is configured.

use crate::Result;
use async_trait::async_trait;
use chrono::{DateTime, Local};
use std::collections::HashMap;
use std::sync::Mutex;

/// One visit-history entry.
#[derive(Debug, Clone, PartialEq)]
pub struct VisitRecord {
    pub place: String,
    pub visited_at: DateTime<Local>,
}

/// Favorite and visit-history persistence, keyed by user id and place name.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn add_favorite(&self, user: &str, place: &str) -> Result<()>;

    async fn remove_favorite(&self, user: &str, place: &str) -> Result<()>;

    /// The user's favorites in insertion order.
    async fn favorites(&self, user: &str) -> Result<Vec<String>>;

    async fn append_visit(&self, user: &str, place: &str) -> Result<()>;

    /// The user's visit history, oldest first.
    async fn history(&self, user: &str) -> Result<Vec<VisitRecord>>;
}

#[derive(Debug, Default)]
struct UserData {
    favorites: Vec<String>,
    history: Vec<VisitRecord>,
}

/// In-process `UserStore`, used in tests and store-less sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    users: Mutex<HashMap<String, UserData>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn with_user<T>(&self, user: &str, f: impl FnOnce(&mut UserData) -> T) -> T {
        let mut users = self.users.lock().unwrap_or_else(|e| e.into_inner());
        f(users.entry(user.to_string()).or_default())
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn add_favorite(&self, user: &str, place: &str) -> Result<()> {
        self.with_user(user, |data| {
            if !data.favorites.iter().any(|f| f == place) {
                data.favorites.push(place.to_string());
            }
        });
        Ok(())
    }

    async fn remove_favorite(&self, user: &str, place: &str) -> Result<()> {
        self.with_user(user, |data| data.favorites.retain(|f| f != place));
        Ok(())
    }

    async fn favorites(&self, user: &str) -> Result<Vec<String>> {
        Ok(self.with_user(user, |data| data.favorites.clone()))
    }

    async fn append_visit(&self, user: &str, place: &str) -> Result<()> {
        self.with_user(user, |data| {
            data.history.push(VisitRecord {
                place: place.to_string(),
                visited_at: Local::now(),
            });
        });
        Ok(())
    }

    async fn history(&self, user: &str) -> Result<Vec<VisitRecord>> {
        Ok(self.with_user(user, |data| data.history.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn favorites_are_deduplicated_and_removable() {
        let store = MemoryStore::new();
        store.add_favorite("ana", "Monas").await.unwrap();
        store.add_favorite("ana", "Monas").await.unwrap();
        store.add_favorite("ana", "Kota Tua").await.unwrap();
        assert_eq!(store.favorites("ana").await.unwrap(), vec!["Monas", "Kota Tua"]);

        store.remove_favorite("ana", "Monas").await.unwrap();
        assert_eq!(store.favorites("ana").await.unwrap(), vec!["Kota Tua"]);
    }

    #[tokio::test]
    async fn history_appends_in_order() {
        let store = MemoryStore::new();
        store.append_visit("ana", "Monas").await.unwrap();
        store.append_visit("ana", "Kota Tua").await.unwrap();

        let history = store.history("ana").await.unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].place, "Monas");
        assert_eq!(history[1].place, "Kota Tua");
        assert!(history[0].visited_at <= history[1].visited_at);
    }

    #[tokio::test]
    async fn users_are_isolated() {
        let store = MemoryStore::new();
        store.add_favorite("ana", "Monas").await.unwrap();
        assert!(store.favorites("budi").await.unwrap().is_empty());
    }
}
