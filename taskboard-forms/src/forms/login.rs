//! Login form

use crate::model::FormData;
use crate::schema::FieldSpec;
use crate::schema::FormReport;
use crate::schema::FormSchema;

fn schema() -> FormSchema {
    FormSchema::new("login")
        .field(FieldSpec::text("username", "Username").required().length(2, 20))
        .field(FieldSpec::secret("password", "Password").required())
        .field(FieldSpec::boolean("remember", "Remember Me"))
}

/// Sign-in form: username, password and a remember-me flag.
///
/// Validation is purely structural. Whether the credentials are any good is
/// the authenticating handler's business; a failed login can be attached to
/// the report afterwards via
/// [`FormReport::push_error`](crate::schema::FormReport::push_error).
pub struct LoginForm {
    data: FormData,
}

impl LoginForm {
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

    /// The submitted username.
    pub fn username(&self) -> Option<&str> {
        self.data.as_text("username")
    }

    /// The submitted password.
    pub fn password(&self) -> Option<&str> {
        self.data.as_text("password")
    }

    /// The remember-me flag. Unsubmitted means `false`.
    pub fn remember(&self) -> bool {
        self.data.as_bool("remember").unwrap_or(false)
    }

    /// The bound submission, normalized to the form's fields.
    pub fn data(&self) -> &FormData {
        &self.data
    }
}
