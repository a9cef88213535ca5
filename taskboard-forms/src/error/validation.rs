//! Validation error types

/// Classifies a validation failure.
///
/// The kind is stable machine-readable data; the message on
/// [`ValidationError`] is what gets rendered next to the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Required value was absent or blank.
    Required,
    /// Text length fell outside the configured bounds.
    Length,
    /// Text was not a well-formed email address.
    Email,
    /// Value did not match the referenced sibling field.
    Equality,
    /// Value collides with an existing record.
    Unique,
    /// Value could not be read as the field's declared type.
    Conversion,
    /// Value is not one of the declared choices.
    Choice,
    /// A custom predicate rejected the value.
    Custom,
}

/// A single validation failure on one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// What class of rule failed.
    pub kind: ErrorKind,
    /// Human-readable message, ready for rendering.
    pub message: String,
}

impl ValidationError {
    /// Creates a validation error with an explicit kind and message.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// A missing required value.
    pub fn required() -> Self {
        Self::new(ErrorKind::Required, "This field is required.")
    }

    /// A length-bounds failure. The message depends on which bounds are set.
    pub fn length(min: Option<usize>, max: Option<usize>) -> Self {
        let message = match (min, max) {
            (Some(min), Some(max)) => {
                format!("Field must be between {min} and {max} characters long.")
            }
            (None, Some(max)) => format!("Field cannot be longer than {max} characters."),
            (Some(min), None) => format!("Field must be at least {min} characters long."),
            (None, None) => "Field length is invalid.".to_string(),
        };
        Self::new(ErrorKind::Length, message)
    }

    /// A malformed email address.
    pub fn email() -> Self {
        Self::new(ErrorKind::Email, "Invalid email address.")
    }

    /// A cross-field equality failure against the named sibling field.
    pub fn mismatch(other: &str) -> Self {
        Self::new(ErrorKind::Equality, format!("Field must be equal to {other}."))
    }

    /// A uniqueness collision, with the form's own message.
    pub fn taken(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unique, message)
    }

    /// A value that could not be read as the field's declared type.
    pub fn conversion(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Conversion, message)
    }

    /// A value outside the declared choices.
    pub fn invalid_choice() -> Self {
        Self::new(ErrorKind::Choice, "Not a valid choice.")
    }

    /// A custom-predicate failure with the rule's message.
    pub fn custom(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Custom, message)
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}
