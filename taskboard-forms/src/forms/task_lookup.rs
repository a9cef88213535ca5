//! Task lookup form for the edit flow

use crate::error::ValidationError;
use crate::model::FormData;
use crate::schema::Choice;
use crate::schema::FieldSpec;
use crate::schema::FormReport;
use crate::schema::FormSchema;

/// How the edit flow identifies the task to load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierMode {
    /// Look the task up by its numeric ID.
    ById,
    /// Look the task up by its exact title.
    ByTitle,
}

impl IdentifierMode {
    /// The submitted value for this mode.
    pub fn as_value(&self) -> &'static str {
        match self {
            IdentifierMode::ById => "by-id",
            IdentifierMode::ByTitle => "by-title",
        }
    }

    /// Parses a submitted choice value.
    pub fn from_value(value: &str) -> Option<Self> {
        match value {
            "by-id" => Some(IdentifierMode::ById),
            "by-title" => Some(IdentifierMode::ByTitle),
            _ => None,
        }
    }
}

fn schema() -> FormSchema {
    FormSchema::new("task_lookup")
        .field(FieldSpec::single_choice(
            "identifier_mode",
            "Identify task by",
            vec![
                Choice::new(IdentifierMode::ById.as_value(), "ID"),
                Choice::new(IdentifierMode::ByTitle.as_value(), "Title"),
            ],
        ))
        .field(FieldSpec::text("value", "Value").required())
}

/// First step of editing: pick how to identify the task, then give the
/// identifier itself.
///
/// The mode must be one of the declared choices; a submission that leaves it
/// out is rejected rather than silently assuming a mode. When the mode is
/// [`IdentifierMode::ById`], the identifier must read as an integer.
pub struct TaskLookupForm {
    data: FormData,
}

impl TaskLookupForm {
    /// Binds a submission.
    pub fn bind(data: FormData) -> Self {
        Self {
            data: schema().bind(data),
        }
    }

    /// Validates the submission, including the mode-dependent integer check
    /// on the identifier.
    pub fn validate(&self) -> FormReport {
        let mut report = schema().evaluate(&self.data);
        self.check_value_matches_mode(&mut report);
        report
    }

    /// By-ID lookups need an integer. Blank identifiers already carry the
    /// required error, so they skip this check.
    fn check_value_matches_mode(&self, report: &mut FormReport) {
        if self.mode() != Some(IdentifierMode::ById) {
            return;
        }
        let Some(value) = self.data.as_text("value") else {
            return;
        };
        if value.trim().is_empty() {
            return;
        }
        if value.trim().parse::<i64>().is_err() {
            report.push_error(
                "value",
                ValidationError::conversion("The value in the field should be an integer"),
            );
        }
    }

    /// The submitted identifier mode, when it is a declared choice.
    pub fn mode(&self) -> Option<IdentifierMode> {
        self.data
            .as_text("identifier_mode")
            .and_then(IdentifierMode::from_value)
    }

    /// The submitted identifier.
    pub fn value(&self) -> Option<&str> {
        self.data.as_text("value")
    }

    /// The identifier as a task ID, for by-ID lookups that validated.
    pub fn task_id(&self) -> Option<i64> {
        if self.mode() != Some(IdentifierMode::ById) {
            return None;
        }
        self.value().and_then(|v| v.trim().parse().ok())
    }

    /// The bound submission, normalized to the form's fields.
    pub fn data(&self) -> &FormData {
        &self.data
    }
}
