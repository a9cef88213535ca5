//! Typed-access failures raised by FormData getters

/// Error type for the strict typed getters on `FormData`.
///
/// These mark handler bugs or malformed transport, not user input problems.
/// Verdicts on what the user typed belong to
/// [`ValidationError`](crate::error::ValidationError).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    /// The submission carries no value under this name.
    #[error("Submission has no field '{0}'")]
    Missing(String),

    /// The value exists but holds a different shape than requested.
    #[error("Field '{field}' holds {found}, not {requested}")]
    WrongType {
        field: String,
        requested: &'static str,
        found: &'static str,
    },
}

impl FieldError {
    /// Creates a missing-field error.
    pub fn missing(field: impl Into<String>) -> Self {
        Self::Missing(field.into())
    }

    /// Creates a wrong-shape error for a field that exists.
    pub fn wrong_type(
        field: impl Into<String>,
        requested: &'static str,
        found: &'static str,
    ) -> Self {
        Self::WrongType {
            field: field.into(),
            requested,
            found,
        }
    }

    /// Name of the field the access was aimed at.
    pub fn field(&self) -> &str {
        match self {
            Self::Missing(field) => field,
            Self::WrongType { field, .. } => field,
        }
    }
}
