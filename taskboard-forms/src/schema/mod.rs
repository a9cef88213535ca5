//! Form schema types: fields, constraints, binding and reports

mod constraint;
mod field;
mod form;
mod report;

pub use constraint::*;
pub use field::*;
pub use form::*;
pub use report::*;
