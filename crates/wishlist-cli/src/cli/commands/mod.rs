//! CLI command handlers. Each command is in its own file.

mod add;
mod completions;
mod list;
mod open;
mod remove;
mod rewrite;
mod share;

pub use add::run_add;
pub use completions::{run_completions, run_man};
pub use list::run_list;
pub use open::run_open;
pub use remove::run_remove;
pub use rewrite::run_rewrite;
pub use share::run_share;
