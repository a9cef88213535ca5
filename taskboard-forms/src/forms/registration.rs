//! User registration form

use std::sync::Arc;

use log::debug;

use crate::error::StoreError;
use crate::error::ValidationError;
use crate::model::FormData;
use crate::schema::FieldSpec;
use crate::schema::FormReport;
use crate::schema::FormSchema;
use crate::store::UserStore;

fn schema() -> FormSchema {
    FormSchema::new("registration")
        .field(FieldSpec::text("username", "Username").required().length(2, 20))
        .field(FieldSpec::text("email", "Email").required().email())
        .field(FieldSpec::secret("password", "Password").required())
        .field(
            FieldSpec::secret("confirm_password", "Confirm Password")
                .required()
                .equals_field("password"),
        )
}

/// Sign-up form: username, email, password and its confirmation.
///
/// Beyond the static field rules, validation checks the username and email
/// against the injected [`UserStore`] and rejects values that already belong
/// to an account. Store lookups run after the schema pass, in field order.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use taskboard_forms::forms::RegistrationForm;
/// use taskboard_forms::model::FormData;
/// use taskboard_forms::store::InMemoryUserStore;
///
/// # async fn demo() -> Result<(), taskboard_forms::error::StoreError> {
/// let users = Arc::new(InMemoryUserStore::new());
/// let form = RegistrationForm::bind(
///     FormData::new()
///         .set("username", "nina")
///         .set("email", "nina@example.com")
///         .set("password", "hunter2")
///         .set("confirm_password", "hunter2"),
///     users,
/// );
///
/// let report = form.validate().await?;
/// assert!(report.is_valid());
/// # Ok(())
/// # }
/// ```
pub struct RegistrationForm {
    data: FormData,
    users: Arc<dyn UserStore>,
}

impl RegistrationForm {
    /// Binds a submission and injects the user-store capability.
    pub fn bind(data: FormData, users: Arc<dyn UserStore>) -> Self {
        Self {
            data: schema().bind(data),
            users,
        }
    }

    /// Validates the submission.
    ///
    /// Field rules run first, then the uniqueness lookups. A lookup failure
    /// aborts validation with `Err`; a duplicate is an ordinary field error
    /// in the report. Blank values skip their uniqueness lookup, the
    /// required error already covers them.
    pub async fn validate(&self) -> Result<FormReport, StoreError> {
        let mut report = schema().evaluate(&self.data);
        self.check_username_free(&mut report).await?;
        self.check_email_free(&mut report).await?;
        Ok(report)
    }

    async fn check_username_free(&self, report: &mut FormReport) -> Result<(), StoreError> {
        let Some(username) = self.data.as_text("username") else {
            return Ok(());
        };
        if username.trim().is_empty() {
            return Ok(());
        }
        if self.users.find_by_username(username).await?.is_some() {
            debug!("registration rejected: username '{username}' is taken");
            report.push_error("username", ValidationError::taken("Username taken"));
        }
        Ok(())
    }

    async fn check_email_free(&self, report: &mut FormReport) -> Result<(), StoreError> {
        let Some(email) = self.data.as_text("email") else {
            return Ok(());
        };
        if email.trim().is_empty() {
            return Ok(());
        }
        if self.users.find_by_email(email).await?.is_some() {
            debug!("registration rejected: email is already registered");
            report.push_error("email", ValidationError::taken("That email exists"));
        }
        Ok(())
    }

    // =========================================================================
    // Bound-value accessors
    // =========================================================================

    /// The submitted username.
    pub fn username(&self) -> Option<&str> {
        self.data.as_text("username")
    }

    /// The submitted email.
    pub fn email(&self) -> Option<&str> {
        self.data.as_text("email")
    }

    /// The submitted password.
    pub fn password(&self) -> Option<&str> {
        self.data.as_text("password")
    }

    /// The bound submission, normalized to the form's fields.
    pub fn data(&self) -> &FormData {
        &self.data
    }
}
