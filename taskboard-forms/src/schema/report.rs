//! Validation report types

use crate::error::ValidationError;
use crate::model::Value;

/// Validation outcome for one field: its bound value plus every error its
/// rules reported, in rule order.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldState {
    /// The field name.
    pub field: String,
    /// The value validation ran against.
    pub value: Value,
    /// Accumulated errors. Empty means the field passed.
    pub errors: Vec<ValidationError>,
}

impl FieldState {
    /// Creates a passing state for a field.
    pub fn new(field: impl Into<String>, value: Value) -> Self {
        Self {
            field: field.into(),
            value,
            errors: Vec::new(),
        }
    }

    /// Returns `true` if the field collected no errors.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Aggregate outcome of validating one submission.
///
/// A report holds one [`FieldState`] per declared field, in declaration
/// order, so it can be walked top-to-bottom to re-render a form with its
/// errors inline.
///
/// # Example
///
/// ```
/// use taskboard_forms::forms::LoginForm;
/// use taskboard_forms::model::FormData;
///
/// let form = LoginForm::bind(FormData::new().set("username", "x"));
/// let report = form.validate();
///
/// assert!(!report.is_valid());
/// assert!(!report.errors_for("password").is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormReport {
    entries: Vec<FieldState>,
}

impl FormReport {
    /// Creates an empty report.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Appends a field's outcome. Order of calls is rendering order.
    pub fn push(&mut self, state: FieldState) {
        self.entries.push(state);
    }

    /// Appends an error to the named field, creating the entry when the field
    /// is not in the report yet.
    ///
    /// This is the hook for checks that run after the schema pass, such as
    /// datastore uniqueness lookups or an authentication failure a handler
    /// wants rendered on a field.
    pub fn push_error(&mut self, field: &str, error: ValidationError) {
        match self.entries.iter_mut().find(|e| e.field == field) {
            Some(entry) => entry.errors.push(error),
            None => {
                let mut entry = FieldState::new(field, Value::Null);
                entry.errors.push(error);
                self.entries.push(entry);
            }
        }
    }

    /// Returns `true` if every field passed.
    pub fn is_valid(&self) -> bool {
        self.entries.iter().all(FieldState::is_valid)
    }

    /// Returns the state of the named field, if the report covers it.
    pub fn field(&self, name: &str) -> Option<&FieldState> {
        self.entries.iter().find(|e| e.field == name)
    }

    /// Returns the errors for the named field. Empty for passing or unknown
    /// fields.
    pub fn errors_for(&self, name: &str) -> &[ValidationError] {
        self.field(name).map_or(&[], |e| e.errors.as_slice())
    }

    /// Returns the first failing field in declaration order, if any.
    pub fn first_invalid(&self) -> Option<&FieldState> {
        self.entries.iter().find(|e| !e.is_valid())
    }

    /// Returns all field states in declaration order.
    pub fn entries(&self) -> &[FieldState] {
        &self.entries
    }

    /// Returns the total number of errors across all fields.
    pub fn error_count(&self) -> usize {
        self.entries.iter().map(|e| e.errors.len()).sum()
    }
}

impl<'a> IntoIterator for &'a FormReport {
    type Item = &'a FieldState;
    type IntoIter = std::slice::Iter<'a, FieldState>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
