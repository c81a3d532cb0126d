//! CLI command handlers. Each command is in its own file for clarity.

mod completions;
mod detect;
mod fetch;
mod man;
mod session;

pub use completions::run_completions;
pub use detect::run_detect;
pub use fetch::run_fetch;
pub use man::run_man;
pub use session::run_session;
