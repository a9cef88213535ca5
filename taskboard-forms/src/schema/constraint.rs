//! Validation constraints

use std::fmt;
use std::sync::Arc;

use email_address::EmailAddress;

use crate::error::ValidationError;
use crate::model::FormData;
use crate::model::Value;

/// Shared predicate used by [`Constraint::Custom`] rules.
pub type Predicate = Arc<dyn Fn(&Value) -> bool + Send + Sync>;

/// A single declarative rule attached to a field.
///
/// Constraints are checked in declaration order. `Required` is the only
/// short-circuiting rule: when it fails, the rest of the field's chain is
/// skipped so a blank field reports one error, not a cascade.
#[derive(Clone)]
pub enum Constraint {
    /// Value must be present and non-blank.
    Required,
    /// Text length bounds, counted in characters.
    Length {
        min: Option<usize>,
        max: Option<usize>,
    },
    /// Text must be a well-formed email address. Blank text passes; combine
    /// with `Required` to force presence.
    Email,
    /// Value must equal the named sibling field's value.
    EqualsField(String),
    /// Custom predicate; a `false` return reports `message`.
    Custom { check: Predicate, message: String },
}

impl Constraint {
    /// Creates a custom constraint from a predicate and its failure message.
    pub fn custom<F>(check: F, message: impl Into<String>) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Self::Custom {
            check: Arc::new(check),
            message: message.into(),
        }
    }

    /// Returns `true` for the short-circuiting `Required` rule.
    pub fn is_required(&self) -> bool {
        matches!(self, Constraint::Required)
    }

    /// Checks `value` against this rule. `data` supplies sibling values for
    /// cross-field rules. Returns the violation, if any.
    ///
    /// Typed rules only fire on values of their shape: `Length` and `Email`
    /// ignore non-text values, which binding and the conversion gate have
    /// already dealt with.
    pub(crate) fn check(&self, value: &Value, data: &FormData) -> Option<ValidationError> {
        match self {
            Constraint::Required => {
                if value.is_blank() {
                    Some(ValidationError::required())
                } else {
                    None
                }
            }
            Constraint::Length { min, max } => {
                let Value::Text(text) = value else { return None };
                let len = text.chars().count();
                let too_short = min.is_some_and(|m| len < m);
                let too_long = max.is_some_and(|m| len > m);
                if too_short || too_long {
                    Some(ValidationError::length(*min, *max))
                } else {
                    None
                }
            }
            Constraint::Email => {
                let Value::Text(text) = value else { return None };
                if text.trim().is_empty() || EmailAddress::is_valid(text) {
                    None
                } else {
                    Some(ValidationError::email())
                }
            }
            Constraint::EqualsField(other) => {
                let other_value = data.get(other).unwrap_or(&Value::Null);
                if value == other_value {
                    None
                } else {
                    Some(ValidationError::mismatch(other))
                }
            }
            Constraint::Custom { check, message } => {
                if check(value) {
                    None
                } else {
                    Some(ValidationError::custom(message.clone()))
                }
            }
        }
    }
}

impl fmt::Debug for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Constraint::Required => write!(f, "Required"),
            Constraint::Length { min, max } => f
                .debug_struct("Length")
                .field("min", min)
                .field("max", max)
                .finish(),
            Constraint::Email => write!(f, "Email"),
            Constraint::EqualsField(other) => f.debug_tuple("EqualsField").field(other).finish(),
            Constraint::Custom { message, .. } => f
                .debug_struct("Custom")
                .field("message", message)
                .finish_non_exhaustive(),
        }
    }
}
