//! Field specifications

use crate::model::Value;

use super::constraint::Constraint;

/// Semantic type of a form field.
///
/// The type drives binding (text-to-date coercion, checkbox defaulting) and
/// the conversion and choice-membership gates that run before the field's
/// constraint chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    /// Single- or multi-line free text.
    Text,
    /// Text that must never be echoed back (passwords).
    SecretText,
    /// Checkbox flag. Unsubmitted means unchecked.
    Boolean,
    /// Calendar date, bound from `YYYY-MM-DD` text.
    Date,
    /// Exactly one of the declared choices.
    SingleChoice,
    /// Any subset of the declared choices.
    MultiChoice,
}

impl FieldType {
    /// Returns the type name used in error messages and logs.
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldType::Text => "text",
            FieldType::SecretText => "secret_text",
            FieldType::Boolean => "boolean",
            FieldType::Date => "date",
            FieldType::SingleChoice => "single_choice",
            FieldType::MultiChoice => "multi_choice",
        }
    }
}

/// One selectable option of a choice field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    /// The stored value a client submits.
    pub value: String,
    /// Human-readable label for rendering.
    pub label: String,
}

impl Choice {
    /// Creates a choice from its stored value and display label.
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Declaration of a single form field.
///
/// A spec carries the field's semantic type, display label, default value,
/// declared choices and ordered constraint chain. Constructors cover the
/// semantic types; chainable methods attach constraints.
///
/// # Example
///
/// ```
/// use taskboard_forms::schema::FieldSpec;
///
/// let username = FieldSpec::text("username", "Username")
///     .required()
///     .length(2, 20);
///
/// assert_eq!(username.name(), "username");
/// assert_eq!(username.constraints().len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct FieldSpec {
    name: String,
    label: String,
    field_type: FieldType,
    constraints: Vec<Constraint>,
    choices: Vec<Choice>,
    default: Option<Value>,
}

impl FieldSpec {
    fn new(name: impl Into<String>, label: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            field_type,
            constraints: Vec::new(),
            choices: Vec::new(),
            default: None,
        }
    }

    // =========================================================================
    // Constructors, one per semantic type
    // =========================================================================

    /// A free-text field.
    pub fn text(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(name, label, FieldType::Text)
    }

    /// A secret-text field. Values validate like text but must not be
    /// rendered back into markup.
    pub fn secret(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(name, label, FieldType::SecretText)
    }

    /// A checkbox field. Defaults to `false`, matching how browsers omit
    /// unchecked boxes from submissions.
    pub fn boolean(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(name, label, FieldType::Boolean).default_value(false)
    }

    /// A calendar-date field.
    pub fn date(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(name, label, FieldType::Date)
    }

    /// A pick-one field over the given choices.
    pub fn single_choice(
        name: impl Into<String>,
        label: impl Into<String>,
        choices: Vec<Choice>,
    ) -> Self {
        let mut spec = Self::new(name, label, FieldType::SingleChoice);
        spec.choices = choices;
        spec
    }

    /// A pick-many field over the given choices.
    pub fn multi_choice(
        name: impl Into<String>,
        label: impl Into<String>,
        choices: Vec<Choice>,
    ) -> Self {
        let mut spec = Self::new(name, label, FieldType::MultiChoice);
        spec.choices = choices;
        spec
    }

    // =========================================================================
    // Chainable constraint and default builders
    // =========================================================================

    /// Requires a non-blank value.
    pub fn required(mut self) -> Self {
        self.constraints.push(Constraint::Required);
        self
    }

    /// Bounds text length to `min..=max` characters.
    pub fn length(mut self, min: usize, max: usize) -> Self {
        self.constraints.push(Constraint::Length {
            min: Some(min),
            max: Some(max),
        });
        self
    }

    /// Bounds text length to at most `max` characters.
    pub fn max_length(mut self, max: usize) -> Self {
        self.constraints.push(Constraint::Length {
            min: None,
            max: Some(max),
        });
        self
    }

    /// Requires a well-formed email address.
    pub fn email(mut self) -> Self {
        self.constraints.push(Constraint::Email);
        self
    }

    /// Requires the value to equal the named sibling field.
    pub fn equals_field(mut self, other: impl Into<String>) -> Self {
        self.constraints.push(Constraint::EqualsField(other.into()));
        self
    }

    /// Attaches a custom predicate with its failure message.
    pub fn rule<F>(mut self, check: F, message: impl Into<String>) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        self.constraints.push(Constraint::custom(check, message));
        self
    }

    /// Sets the value used when a submission omits this field.
    pub fn default_value(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Returns the field name, the key into submissions and reports.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the display label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the semantic type.
    pub fn field_type(&self) -> FieldType {
        self.field_type
    }

    /// Returns the ordered constraint chain.
    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    /// Returns the declared choices. Empty for non-choice fields.
    pub fn choices(&self) -> &[Choice] {
        &self.choices
    }

    /// Returns the default value, if one is declared.
    pub fn default(&self) -> Option<&Value> {
        self.default.as_ref()
    }

    /// Returns `true` if `value` is one of the declared choice values.
    pub fn is_declared_choice(&self, value: &str) -> bool {
        self.choices.iter().any(|c| c.value == value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builders_accumulate_constraints_in_order() {
        let spec = FieldSpec::text("username", "Username").required().length(2, 20);

        assert_eq!(spec.name(), "username");
        assert_eq!(spec.label(), "Username");
        assert_eq!(spec.field_type(), FieldType::Text);
        assert_eq!(spec.constraints().len(), 2);
        assert!(spec.constraints()[0].is_required());
    }

    #[test]
    fn test_boolean_fields_default_to_false() {
        let spec = FieldSpec::boolean("remember", "Remember Me");
        assert_eq!(spec.default(), Some(&Value::Bool(false)));
    }

    #[test]
    fn test_choice_membership() {
        let spec = FieldSpec::single_choice(
            "identifier_mode",
            "Identify task by",
            vec![Choice::new("by-id", "ID"), Choice::new("by-title", "Title")],
        );
        assert!(spec.is_declared_choice("by-id"));
        assert!(!spec.is_declared_choice("ID"));
    }
}
