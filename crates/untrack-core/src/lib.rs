//! Resolve tracking and shortened URLs to their destination and strip
//! known tracking artifacts.

pub mod config;
pub mod logging;

pub mod error;
pub mod extract;
pub mod fetch;
pub mod follow;
pub mod registry;
pub mod rules;
pub mod untracker;
pub mod url_model;

pub use error::{ErrorKind, UntrackError};
pub use follow::MAX_REDIRECTS;
pub use registry::{ExtractTarget, Extractor};
pub use rules::CleanupRule;
pub use untracker::{untrack, Untracker};
