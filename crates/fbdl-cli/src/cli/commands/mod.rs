//! CLI command handlers, one per file.

mod check;
mod completions;
mod get;
mod info;
mod man;

pub use check::run_check;
pub use completions::run_completions;
pub use get::run_get;
pub use info::run_info;
pub use man::run_man;
