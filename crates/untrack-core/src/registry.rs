//! Per-host extractor registry.
//!
//! An extractor lets a tracker host bypass generic redirect-following: the
//! follower hands it the tracker URL and returns whatever it produces. The
//! registry is owned by an [`crate::Untracker`]; registration needs `&mut`,
//! so it cannot race with resolution.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use url::Url;

/// Custom target extraction for one tracker host.
pub trait ExtractTarget: Send + Sync {
    fn extract(&self, tracker: &Url) -> anyhow::Result<Url>;
}

impl<F> ExtractTarget for F
where
    F: Fn(&Url) -> anyhow::Result<Url> + Send + Sync,
{
    fn extract(&self, tracker: &Url) -> anyhow::Result<Url> {
        self(tracker)
    }
}

/// Shared handle to a registered extractor.
pub type Extractor = Arc<dyn ExtractTarget>;

/// Host key → extractor mapping.
#[derive(Default, Clone)]
pub struct TrackerRegistry {
    trackers: HashMap<String, Extractor>,
}

impl fmt::Debug for TrackerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrackerRegistry")
            .field("hosts", &self.known_trackers())
            .finish()
    }
}

impl TrackerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `extractor` for `host`, returning the one it replaces so
    /// the new extractor can delegate to it.
    pub fn register(&mut self, host: impl Into<String>, extractor: Extractor) -> Option<Extractor> {
        let host = host.into();
        tracing::debug!(%host, "registering tracker");
        self.trackers.insert(host, extractor)
    }

    pub fn get(&self, host: &str) -> Option<&Extractor> {
        self.trackers.get(host)
    }

    /// Hosts with a registered extractor, sorted.
    pub fn known_trackers(&self) -> Vec<String> {
        let mut hosts: Vec<String> = self.trackers.keys().cloned().collect();
        hosts.sort();
        hosts
    }
}
