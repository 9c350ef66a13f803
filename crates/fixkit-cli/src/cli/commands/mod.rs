//! CLI command handlers, one per file.

mod completions;
mod fetch;
mod locate;
mod normalize_user;
mod sum;

pub use completions::run_completions;
pub use fetch::run_fetch;
pub use locate::run_locate;
pub use normalize_user::run_normalize_user;
pub use sum::run_sum;
