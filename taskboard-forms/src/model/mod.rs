//! Data model for form submissions

mod submission;
mod value;

pub use submission::*;
pub use value::*;
