//! In-memory user store

use std::sync::RwLock;

use async_trait::async_trait;

use crate::error::StoreError;

use super::UserRecord;
use super::UserStore;

/// An in-memory [`UserStore`] backed by a `Vec` behind a lock.
///
/// Suits tests, examples and prototypes. Mutation takes `&self` so the store
/// can be shared as `Arc<InMemoryUserStore>` and seeded after handing clones
/// to forms.
///
/// # Example
///
/// ```
/// use taskboard_forms::store::{InMemoryUserStore, UserRecord};
///
/// let store = InMemoryUserStore::new();
/// store.add(UserRecord::new("nina", "nina@example.com"));
/// ```
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    users: RwLock<Vec<UserRecord>>,
}

impl InMemoryUserStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with the given users.
    pub fn seeded(users: impl IntoIterator<Item = UserRecord>) -> Self {
        Self {
            users: RwLock::new(users.into_iter().collect()),
        }
    }

    /// Adds a user record.
    pub fn add(&self, record: UserRecord) {
        let mut users = self
            .users
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        users.push(record);
    }

    /// Returns the number of stored users.
    pub fn len(&self) -> usize {
        self.users
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .len()
    }

    /// Returns `true` if the store holds no users.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_by_username(&self, username: &str) -> Result<Option<UserRecord>, StoreError> {
        let users = self
            .users
            .read()
            .map_err(|_| StoreError::unavailable("user store lock poisoned"))?;
        Ok(users.iter().find(|u| u.username == username).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, StoreError> {
        let users = self
            .users
            .read()
            .map_err(|_| StoreError::unavailable("user store lock poisoned"))?;
        Ok(users.iter().find(|u| u.email == email).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_find_by_username_is_exact() {
        let store = InMemoryUserStore::seeded([UserRecord::new("nina", "nina@example.com")]);

        let found = store.find_by_username("nina").await.unwrap();
        assert_eq!(found.map(|u| u.email), Some("nina@example.com".to_string()));

        assert!(store.find_by_username("Nina").await.unwrap().is_none());
        assert!(store.find_by_username("nobody").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_find_by_email() {
        let store = InMemoryUserStore::new();
        assert!(store.is_empty());

        store.add(UserRecord::new("nina", "nina@example.com"));
        assert_eq!(store.len(), 1);

        let found = store.find_by_email("nina@example.com").await.unwrap();
        assert_eq!(found.map(|u| u.username), Some("nina".to_string()));
    }

    #[tokio::test]
    async fn test_lookups_return_the_stored_row() {
        let id = uuid::Uuid::new_v4();
        let store =
            InMemoryUserStore::seeded([UserRecord::with_id(id, "nina", "nina@example.com")]);

        let found = store.find_by_username("nina").await.unwrap().unwrap();
        assert_eq!(found, UserRecord::with_id(id, "nina", "nina@example.com"));
    }
}
