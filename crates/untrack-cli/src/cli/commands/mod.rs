//! CLI command handlers, one per file.

mod resolve;
mod rules;
mod trackers;

pub use resolve::run_resolve;
pub use rules::run_rules;
pub use trackers::run_trackers;
