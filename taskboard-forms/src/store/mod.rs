//! User store port for uniqueness checks

mod memory;

pub use memory::*;

use async_trait::async_trait;
use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

use crate::error::StoreError;

/// An existing user row, as the forms need to see it.
///
/// Registration only reads this to decide whether a username or email is
/// already claimed. Credential material stays in the application's own
/// user model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Stable identifier of the user.
    pub id: Uuid,
    /// Unique login name.
    pub username: String,
    /// Unique contact address.
    pub email: String,
}

impl UserRecord {
    /// Creates a record with a fresh random ID.
    pub fn new(username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            username: username.into(),
            email: email.into(),
        }
    }

    /// Creates a record with a known ID.
    pub fn with_id(id: Uuid, username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            email: email.into(),
        }
    }
}

/// Read-only lookup capability over the application's user datastore.
///
/// Forms take this as an `Arc<dyn UserStore>` so validation stays decoupled
/// from whatever persistence the application runs. Lookups are exact and
/// case-sensitive; normalization policy belongs to the application.
///
/// `Ok(None)` means the lookup completed and found nobody. `Err` is reserved
/// for infrastructure failures and makes the whole validation call fail
/// rather than letting a duplicate slip through as "not found".
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Finds a user by exact username.
    async fn find_by_username(&self, username: &str) -> Result<Option<UserRecord>, StoreError>;

    /// Finds a user by exact email.
    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, StoreError>;
}
