//! Task edit form

use chrono::NaiveDate;

use crate::model::FormData;
use crate::schema::FieldSpec;
use crate::schema::FormReport;
use crate::schema::FormSchema;

fn schema() -> FormSchema {
    FormSchema::new("task_edit")
        .field(FieldSpec::text("title", "Task Title").required().max_length(60))
        .field(FieldSpec::text("description", "Description").required())
        .field(FieldSpec::date("due_date", "Due Date").required())
        .field(FieldSpec::boolean("completed", "Mark as Completed"))
}

/// Edit form for an existing task.
///
/// Same fields and rules as [`TaskCreateForm`](super::TaskCreateForm),
/// minus `created_date`: creation time is a fact about the task, not
/// something an edit gets to rewrite.
pub struct TaskEditForm {
    data: FormData,
}

impl TaskEditForm {
    /// Binds a submission.
    pub fn bind(data: FormData) -> Self {
        Self {
            data: schema().bind(data),
        }
    }

    /// Validates the submission.
    pub fn validate(&self) -> FormReport {
        schema().evaluate(&self.data)
    }

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

    /// The completed flag. Unsubmitted means `false`.
    pub fn completed(&self) -> bool {
        self.data.as_bool("completed").unwrap_or(false)
    }

    /// The bound submission, normalized to the form's fields.
    pub fn data(&self) -> &FormData {
        &self.data
    }
}
