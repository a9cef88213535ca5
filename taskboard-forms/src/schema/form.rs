//! Form schema: binding and evaluation

use chrono::NaiveDate;
use log::debug;
use log::trace;

use crate::error::ValidationError;
use crate::model::FormData;
use crate::model::Value;

use super::constraint::Constraint;
use super::field::FieldSpec;
use super::field::FieldType;
use super::report::FieldState;
use super::report::FormReport;

/// Date format accepted by date fields.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// An ordered set of field specifications making up one form.
///
/// A schema does two things with a submission:
///
/// 1. [`bind`](Self::bind) normalizes raw data into the declared shape:
///    unknown fields are dropped, missing fields take their default or
///    `Null`, and date-typed text is coerced to [`Value::Date`].
/// 2. [`evaluate`](Self::evaluate) runs every field's rules against bound
///    data and accumulates the failures into a [`FormReport`].
///
/// Evaluation never stops at the first failing field. Each field collects
/// its own errors so the caller can re-render the whole form at once.
///
/// # Example
///
/// ```
/// use taskboard_forms::model::FormData;
/// use taskboard_forms::schema::{FieldSpec, FormSchema};
///
/// let schema = FormSchema::new("signup")
///     .field(FieldSpec::text("username", "Username").required().length(2, 20))
///     .field(FieldSpec::text("email", "Email").required().email());
///
/// let data = schema.bind(FormData::new().set("username", "nina"));
/// let report = schema.evaluate(&data);
///
/// assert!(report.errors_for("username").is_empty());
/// assert!(!report.errors_for("email").is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct FormSchema {
    name: String,
    fields: Vec<FieldSpec>,
}

impl FormSchema {
    /// Creates an empty schema. The name only shows up in logs and panics.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Appends a field specification (builder pattern).
    ///
    /// # Panics
    ///
    /// Panics if `spec` reuses the name of a field already in the schema.
    /// Field names key submissions and reports, so a duplicate is a
    /// programming error in the form definition.
    pub fn field(mut self, spec: FieldSpec) -> Self {
        assert!(
            self.fields.iter().all(|f| f.name() != spec.name()),
            "duplicate field '{}' in form '{}'",
            spec.name(),
            self.name
        );
        self.fields.push(spec);
        self
    }

    /// Returns the schema name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the field specifications in declaration order.
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Returns the spec of the named field, if declared.
    pub fn field_spec(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name() == name)
    }

    /// Normalizes a raw submission into the declared shape.
    ///
    /// The result holds exactly the declared fields, in any order of access:
    ///
    /// - fields absent from `data` (or submitted as `Null`) take the spec's
    ///   default, falling back to `Null`;
    /// - fields the schema does not declare are dropped;
    /// - date-typed fields holding `YYYY-MM-DD` text become [`Value::Date`].
    ///   Unparseable text is kept as-is for [`evaluate`](Self::evaluate) to
    ///   report.
    pub fn bind(&self, data: FormData) -> FormData {
        let dropped = data
            .fields()
            .keys()
            .filter(|k| self.field_spec(k).is_none())
            .count();

        let mut bound = FormData::new();
        for spec in &self.fields {
            let value = match data.get(spec.name()) {
                None | Some(Value::Null) => spec.default().cloned().unwrap_or(Value::Null),
                Some(value) => coerce_value(spec, value.clone()),
            };
            bound.insert(spec.name(), value);
        }

        debug!(
            "form '{}': bound {} field(s), dropped {} unknown",
            self.name,
            self.fields.len(),
            dropped
        );
        bound
    }

    /// Validates bound data and reports per-field outcomes.
    ///
    /// Each field runs three stages, any of which can add errors:
    ///
    /// 1. a conversion gate rejecting values that do not fit the field's
    ///    declared type (a date field still holding unparseable text);
    /// 2. a choice-membership gate for choice fields;
    /// 3. the constraint chain, in declaration order. `Required` is the one
    ///    short-circuiting rule: when it fails, the rest of that field's
    ///    chain is skipped.
    ///
    /// A conversion failure skips the later stages for that field; there is
    /// no point measuring the length of a value that never converted.
    pub fn evaluate(&self, data: &FormData) -> FormReport {
        let mut report = FormReport::new();

        for spec in &self.fields {
            let value = data.get(spec.name()).cloned().unwrap_or(Value::Null);
            let mut state = FieldState::new(spec.name(), value);

            if let Some(err) = conversion_gate(spec, &state.value) {
                trace!(
                    "form '{}': field '{}' failed conversion as {}",
                    self.name,
                    spec.name(),
                    spec.field_type().type_name()
                );
                state.errors.push(err);
                report.push(state);
                continue;
            }

            if let Some(err) = choice_gate(spec, &state.value) {
                state.errors.push(err);
            }

            for constraint in spec.constraints() {
                if let Constraint::EqualsField(other) = constraint {
                    debug_assert!(
                        self.field_spec(other).is_some(),
                        "field '{}' compares against undeclared field '{}'",
                        spec.name(),
                        other
                    );
                }
                if let Some(err) = constraint.check(&state.value, data) {
                    let stop = constraint.is_required();
                    state.errors.push(err);
                    if stop {
                        break;
                    }
                }
            }

            report.push(state);
        }

        if report.is_valid() {
            debug!("form '{}' validated clean", self.name);
        } else {
            debug!(
                "form '{}' invalid: {} error(s)",
                self.name,
                report.error_count()
            );
        }
        report
    }
}

/// Coerces a submitted value toward the field's declared type. Only date
/// fields rewrite anything; all other shapes pass through untouched.
fn coerce_value(spec: &FieldSpec, value: Value) -> Value {
    match (spec.field_type(), value) {
        (FieldType::Date, Value::Text(text)) => {
            match NaiveDate::parse_from_str(text.trim(), DATE_FORMAT) {
                Ok(date) => {
                    trace!("field '{}': coerced '{}' to date", spec.name(), text.trim());
                    Value::Date(date)
                }
                Err(_) => Value::Text(text),
            }
        }
        (_, value) => value,
    }
}

/// Rejects values that cannot be read as the field's declared type.
/// `Null` always passes; absence is for `Required` to judge.
fn conversion_gate(spec: &FieldSpec, value: &Value) -> Option<ValidationError> {
    let ok = match spec.field_type() {
        FieldType::Text | FieldType::SecretText | FieldType::SingleChoice => {
            matches!(value, Value::Null | Value::Text(_))
        }
        FieldType::Boolean => matches!(value, Value::Null | Value::Bool(_)),
        FieldType::Date => match value {
            Value::Null | Value::Date(_) => true,
            Value::Text(text) => NaiveDate::parse_from_str(text.trim(), DATE_FORMAT).is_ok(),
            _ => false,
        },
        FieldType::MultiChoice => matches!(value, Value::Null | Value::List(_)),
    };

    if ok {
        None
    } else {
        Some(ValidationError::conversion(conversion_message(
            spec.field_type(),
        )))
    }
}

fn conversion_message(field_type: FieldType) -> &'static str {
    match field_type {
        FieldType::Date => "Not a valid date value.",
        _ => "Invalid value.",
    }
}

/// Enforces membership for choice fields.
///
/// A single-choice field must hold one declared value; an unanswered one is
/// as invalid as a made-up one. A multi-choice field may be empty, but every
/// selected value must be declared.
fn choice_gate(spec: &FieldSpec, value: &Value) -> Option<ValidationError> {
    match spec.field_type() {
        FieldType::SingleChoice => match value {
            Value::Text(text) if spec.is_declared_choice(text) => None,
            _ => Some(ValidationError::invalid_choice()),
        },
        FieldType::MultiChoice => match value {
            Value::List(items) if items.iter().any(|i| !spec.is_declared_choice(i)) => {
                Some(ValidationError::invalid_choice())
            }
            _ => None,
        },
        _ => None,
    }
}
