//! Error types

mod field;
mod store;
mod validation;

pub use field::*;
pub use store::*;
pub use validation::*;
