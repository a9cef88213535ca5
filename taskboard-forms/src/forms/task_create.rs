//! Task creation form

use chrono::Local;
use chrono::NaiveDate;

use crate::model::FormData;
use crate::model::Value;
use crate::schema::FieldSpec;
use crate::schema::FormReport;
use crate::schema::FormSchema;

fn schema() -> FormSchema {
    FormSchema::new("task_create")
        .field(FieldSpec::text("title", "Task Title").required().max_length(60))
        .field(FieldSpec::text("description", "Description").required())
        .field(FieldSpec::date("due_date", "Due Date").required())
        .field(FieldSpec::date("created_date", "Date Created").required())
        .field(FieldSpec::boolean("completed", "Mark as Completed"))
}

/// New-task form: title, description, the two dates and a completed flag.
///
/// `created_date` defaults to the binding day when the submission leaves it
/// out, so ordinary clients never send it while imports can backdate it.
/// An explicitly submitted value, valid or not, is kept and validated.
pub struct TaskCreateForm {
    data: FormData,
}

impl TaskCreateForm {
    /// Binds a submission, defaulting `created_date` to today.
    pub fn bind(data: FormData) -> Self {
        Self::bind_at(data, Local::now().date_naive())
    }

    /// Binds a submission with an explicit "today" for the
    /// `created_date` default. Lets tests pin the calendar.
    pub fn bind_at(data: FormData, today: NaiveDate) -> Self {
        let mut data = schema().bind(data);
        if data.get("created_date") == Some(&Value::Null) {
            data.insert("created_date", today);
        }
        Self { data }
    }

    /// Validates the submission.
    pub fn validate(&self) -> FormReport {
        schema().evaluate(&self.data)
    }

    // =========================================================================
    // Bound-value accessors
    // =========================================================================

    /// The submitted title.
    pub fn title(&self) -> Option<&str> {
        self.data.as_text("title")
    }

    /// The submitted description.
    pub fn description(&self) -> Option<&str> {
        self.data.as_text("description")
    }

    /// The due date, when it bound cleanly.
    pub fn due_date(&self) -> Option<NaiveDate> {
        self.data.as_date("due_date")
    }

    /// The creation date: the submitted value, or the binding day.
    pub fn created_date(&self) -> Option<NaiveDate> {
        self.data.as_date("created_date")
    }

    /// The completed flag. Unsubmitted means `false`.
    pub fn completed(&self) -> bool {
        self.data.as_bool("completed").unwrap_or(false)
    }

    /// The bound submission, normalized to the form's fields.
    pub fn data(&self) -> &FormData {
        &self.data
    }
}
