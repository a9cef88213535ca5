//! Form schemas and validation for the taskboard web application
//!
//! Declarative field specifications, submission binding and per-field error
//! accumulation for the registration, login and task forms.

pub mod error;
pub mod forms;
pub mod model;
pub mod schema;
pub mod store;

pub use forms::*;
