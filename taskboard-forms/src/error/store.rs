//! User store error types

/// Error type for user-store lookups.
///
/// These are infrastructure failures. A lookup that completes and finds
/// nothing is `Ok(None)` on the store trait, never an error.
#[derive(Debug, Clone, thiserror::Error)]
pub enum StoreError {
    /// The backend could not be reached or was shut down.
    #[error("User store unavailable: {0}")]
    Unavailable(String),

    /// The backend rejected or failed the query.
    #[error("User store query failed: {0}")]
    Query(String),
}

impl StoreError {
    /// Creates an unavailability error.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable(message.into())
    }

    /// Creates a query failure.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query(message.into())
    }
}
