//! Integration tests for the login form.

use taskboard_forms::error::ErrorKind;
use taskboard_forms::error::ValidationError;
use taskboard_forms::forms::LoginForm;
use taskboard_forms::model::FormData;

fn valid_submission() -> FormData {
    FormData::new()
        .set("username", "nina")
        .set("password", "hunter2")
}

#[test]
fn test_valid_login_passes() {
    let form = LoginForm::bind(valid_submission());
    let report = form.validate();

    assert!(report.is_valid());
    assert_eq!(form.username(), Some("nina"));
    assert_eq!(form.password(), Some("hunter2"));
}

#[test]
fn test_remember_defaults_to_false() {
    let form = LoginForm::bind(valid_submission());
    assert!(!form.remember());
    assert!(form.validate().is_valid());
}

#[test]
fn test_remember_is_kept_when_submitted() {
    let form = LoginForm::bind(valid_submission().set("remember", true));
    assert!(form.remember());
    assert!(form.validate().is_valid());
}

#[test]
fn test_missing_password_is_required() {
    let form = LoginForm::bind(FormData::new().set("username", "nina"));
    let report = form.validate();

    assert!(!report.is_valid());
    let errors = report.errors_for("password");
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].message, "This field is required.");
}

#[test]
fn test_short_username_reports_length() {
    let form = LoginForm::bind(valid_submission().set("username", "n"));
    let report = form.validate();

    let errors = report.errors_for("username");
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind, ErrorKind::Length);
    assert_eq!(
        errors[0].message,
        "Field must be between 2 and 20 characters long."
    );
}

#[test]
fn test_whitespace_username_is_required_not_length() {
    let form = LoginForm::bind(valid_submission().set("username", "  "));
    let report = form.validate();

    let errors = report.errors_for("username");
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind, ErrorKind::Required);
}

#[test]
fn test_unknown_fields_are_dropped() {
    let form = LoginForm::bind(valid_submission().set("next", "/dashboard"));
    assert!(!form.data().contains("next"));
}

#[test]
fn test_handler_can_attach_auth_failure_to_the_report() {
    // Structural validation passed; the authenticating handler still gets to
    // pin its own failure on a field for re-rendering.
    let form = LoginForm::bind(valid_submission());
    let mut report = form.validate();
    assert!(report.is_valid());

    report.push_error(
        "password",
        ValidationError::custom("Invalid username or password"),
    );
    assert!(!report.is_valid());
    assert_eq!(report.first_invalid().unwrap().field, "password");
}
