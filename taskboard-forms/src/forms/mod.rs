//! Concrete forms of the taskboard web layer

mod login;
mod registration;
mod task_create;
mod task_edit;
mod task_lookup;

pub use login::*;
pub use registration::*;
pub use task_create::*;
pub use task_edit::*;
pub use task_lookup::*;
