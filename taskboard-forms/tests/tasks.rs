//! Integration tests for the task create, lookup and edit forms.

use chrono::NaiveDate;

use taskboard_forms::error::ErrorKind;
use taskboard_forms::forms::IdentifierMode;
use taskboard_forms::forms::TaskCreateForm;
use taskboard_forms::forms::TaskEditForm;
use taskboard_forms::forms::TaskLookupForm;
use taskboard_forms::model::FormData;
use taskboard_forms::model::Value;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn create_submission() -> FormData {
    FormData::new()
        .set("title", "Water the plants")
        .set("description", "The ficus first, it sulks when skipped.")
        .set("due_date", "2026-09-01")
}

// =============================================================================
// Task creation
// =============================================================================

#[test]
fn test_valid_creation_passes() {
    let form = TaskCreateForm::bind_at(create_submission(), date(2026, 8, 25));
    let report = form.validate();

    assert!(report.is_valid(), "unexpected errors: {report:?}");
    assert_eq!(form.title(), Some("Water the plants"));
    assert_eq!(form.due_date(), Some(date(2026, 9, 1)));
}

#[test]
fn test_created_date_defaults_to_the_binding_day() {
    let form = TaskCreateForm::bind_at(create_submission(), date(2026, 8, 25));

    assert_eq!(form.created_date(), Some(date(2026, 8, 25)));
    assert!(form.validate().is_valid());
}

#[test]
fn test_submitted_created_date_wins_over_the_default() {
    let form = TaskCreateForm::bind_at(
        create_submission().set("created_date", "2026-01-02"),
        date(2026, 8, 25),
    );

    assert_eq!(form.created_date(), Some(date(2026, 1, 2)));
    assert!(form.validate().is_valid());
}

#[test]
fn test_date_values_bind_from_text_and_from_dates() {
    let from_text = TaskCreateForm::bind_at(create_submission(), date(2026, 8, 25));
    let from_date = TaskCreateForm::bind_at(
        create_submission().set("due_date", date(2026, 9, 1)),
        date(2026, 8, 25),
    );

    assert_eq!(from_text.due_date(), from_date.due_date());
}

#[test]
fn test_title_length_boundary() {
    let at_limit = "t".repeat(60);
    let form = TaskCreateForm::bind_at(
        create_submission().set("title", at_limit),
        date(2026, 8, 25),
    );
    assert!(form.validate().is_valid());

    let over_limit = "t".repeat(61);
    let form = TaskCreateForm::bind_at(
        create_submission().set("title", over_limit),
        date(2026, 8, 25),
    );
    let report = form.validate();
    let errors = report.errors_for("title");
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].message, "Field cannot be longer than 60 characters.");
}

#[test]
fn test_unparseable_due_date_reports_conversion_only() {
    let form = TaskCreateForm::bind_at(
        create_submission().set("due_date", "tomorrow"),
        date(2026, 8, 25),
    );
    let report = form.validate();

    let errors = report.errors_for("due_date");
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind, ErrorKind::Conversion);
    assert_eq!(errors[0].message, "Not a valid date value.");
}

#[test]
fn test_wrong_date_order_is_rejected() {
    // Day-month-year is not the accepted format.
    let form = TaskCreateForm::bind_at(
        create_submission().set("due_date", "01-09-2026"),
        date(2026, 8, 25),
    );
    assert_eq!(
        form.validate().errors_for("due_date")[0].kind,
        ErrorKind::Conversion
    );
}

#[test]
fn test_missing_required_fields_each_report_once() {
    let form = TaskCreateForm::bind_at(FormData::new(), date(2026, 8, 25));
    let report = form.validate();

    for field in ["title", "description", "due_date"] {
        let errors = report.errors_for(field);
        assert_eq!(errors.len(), 1, "field {field}: {errors:?}");
        assert_eq!(errors[0].kind, ErrorKind::Required);
    }
    // created_date took the default, completed its checkbox default.
    assert!(report.errors_for("created_date").is_empty());
    assert!(report.errors_for("completed").is_empty());
}

#[test]
fn test_completed_defaults_to_false() {
    let form = TaskCreateForm::bind_at(create_submission(), date(2026, 8, 25));
    assert!(!form.completed());

    let form = TaskCreateForm::bind_at(
        create_submission().set("completed", true),
        date(2026, 8, 25),
    );
    assert!(form.completed());
}

// =============================================================================
// Task lookup
// =============================================================================

#[test]
fn test_lookup_by_id_with_integer_passes() {
    let form = TaskLookupForm::bind(
        FormData::new()
            .set("identifier_mode", "by-id")
            .set("value", "42"),
    );

    assert!(form.validate().is_valid());
    assert_eq!(form.mode(), Some(IdentifierMode::ById));
    assert_eq!(form.task_id(), Some(42));
}

#[test]
fn test_lookup_by_id_rejects_non_integers() {
    let form = TaskLookupForm::bind(
        FormData::new()
            .set("identifier_mode", "by-id")
            .set("value", "Groceries"),
    );
    let report = form.validate();

    let errors = report.errors_for("value");
    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors[0].message,
        "The value in the field should be an integer"
    );
    assert_eq!(form.task_id(), None);
}

#[test]
fn test_lookup_by_id_accepts_padded_and_negative_integers() {
    for raw in ["  42  ", "-7", "0"] {
        let form = TaskLookupForm::bind(
            FormData::new()
                .set("identifier_mode", "by-id")
                .set("value", raw),
        );
        assert!(form.validate().is_valid(), "value {raw:?}");
    }
}

#[test]
fn test_lookup_by_title_takes_any_text() {
    let form = TaskLookupForm::bind(
        FormData::new()
            .set("identifier_mode", "by-title")
            .set("value", "Groceries"),
    );

    assert!(form.validate().is_valid());
    assert_eq!(form.mode(), Some(IdentifierMode::ByTitle));
    assert_eq!(form.task_id(), None);
}

#[test]
fn test_lookup_without_mode_is_not_a_valid_choice() {
    let form = TaskLookupForm::bind(FormData::new().set("value", "42"));
    let report = form.validate();

    let errors = report.errors_for("identifier_mode");
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].message, "Not a valid choice.");
    assert_eq!(form.mode(), None);
}

#[test]
fn test_lookup_with_undeclared_mode_skips_the_integer_check() {
    let form = TaskLookupForm::bind(
        FormData::new()
            .set("identifier_mode", "by-color")
            .set("value", "Groceries"),
    );
    let report = form.validate();

    assert_eq!(report.errors_for("identifier_mode")[0].kind, ErrorKind::Choice);
    assert!(report.errors_for("value").is_empty());
}

#[test]
fn test_lookup_by_id_with_blank_value_is_required_only() {
    let form = TaskLookupForm::bind(FormData::new().set("identifier_mode", "by-id"));
    let report = form.validate();

    let errors = report.errors_for("value");
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind, ErrorKind::Required);
}

// =============================================================================
// Task edit
// =============================================================================

fn edit_submission() -> FormData {
    FormData::new()
        .set("title", "Water the plants")
        .set("description", "Now with plant food.")
        .set("due_date", "2026-09-08")
        .set("completed", true)
}

#[test]
fn test_valid_edit_passes() {
    let form = TaskEditForm::bind(edit_submission());
    let report = form.validate();

    assert!(report.is_valid());
    assert_eq!(form.due_date(), Some(date(2026, 9, 8)));
    assert!(form.completed());
}

#[test]
fn test_edit_has_no_created_date_field() {
    // An edit cannot rewrite when the task was created.
    let form = TaskEditForm::bind(edit_submission().set("created_date", "2020-01-01"));

    assert!(!form.data().contains("created_date"));
    assert!(form.validate().is_valid());
}

#[test]
fn test_edit_title_shares_the_creation_bound() {
    let over_limit = "t".repeat(61);
    let form = TaskEditForm::bind(edit_submission().set("title", over_limit));

    assert_eq!(
        form.validate().errors_for("title")[0].message,
        "Field cannot be longer than 60 characters."
    );
}

#[test]
fn test_edit_blank_submission_reports_required_fields() {
    let form = TaskEditForm::bind(FormData::new());
    let report = form.validate();

    for field in ["title", "description", "due_date"] {
        assert_eq!(report.errors_for(field)[0].kind, ErrorKind::Required);
    }
    assert!(!form.completed());
}

#[test]
fn test_bound_values_survive_a_json_round_trip() {
    // A handler can stash bound data in a session and rebind it later.
    let form = TaskEditForm::bind(edit_submission());
    let json = serde_json::to_string(form.data()).unwrap();
    let restored: FormData = serde_json::from_str(&json).unwrap();

    // Dates come back as text until they pass through bind again.
    assert_eq!(restored.get("due_date"), Some(&Value::Text("2026-09-08".into())));
    let rebound = TaskEditForm::bind(restored);
    assert_eq!(rebound.data(), form.data());
    assert!(rebound.validate().is_valid());
}
