//! Public resolution API: normalize, follow, clean.

use url::Url;

use crate::config::UntrackConfig;
use crate::error::UntrackError;
use crate::fetch::{CurlTransport, Transport};
use crate::follow;
use crate::registry::{Extractor, TrackerRegistry};
use crate::rules::{self, ShopRules};
use crate::url_model::{self, host_key};

/// Resolves tracking links to canonical destination URLs.
///
/// Owns the extractor registry and the cleanup table. Register extractors
/// first (`&mut self`), then share the instance for resolution (`&self`).
#[derive(Debug)]
pub struct Untracker<T = CurlTransport> {
    trackers: TrackerRegistry,
    shops: ShopRules,
    transport: T,
    base: Url,
}

impl Untracker<CurlTransport> {
    /// Default config, libcurl transport, no extractors.
    pub fn new() -> Result<Self, UntrackError> {
        Self::from_config(&UntrackConfig::default())
    }

    pub fn from_config(cfg: &UntrackConfig) -> Result<Self, UntrackError> {
        let transport = CurlTransport::from_config(cfg);
        Self::with_transport(transport, &cfg.default_scheme)
    }
}

impl<T: Transport> Untracker<T> {
    /// Uses `transport` for every hop; scheme-less input gets `default_scheme`.
    pub fn with_transport(transport: T, default_scheme: &str) -> Result<Self, UntrackError> {
        Ok(Self {
            trackers: TrackerRegistry::new(),
            shops: ShopRules::builtin(),
            transport,
            base: url_model::default_base(default_scheme)?,
        })
    }

    /// Registers a custom extractor for `host` (host key, see
    /// [`url_model::host_key`]) and returns the one it replaces.
    pub fn register_tracker(
        &mut self,
        host: impl Into<String>,
        extractor: Extractor,
    ) -> Option<Extractor> {
        self.trackers.register(host, extractor)
    }

    /// Hosts with a registered extractor, sorted.
    pub fn known_trackers(&self) -> Vec<String> {
        self.trackers.known_trackers()
    }

    pub fn shop_rules(&self) -> &ShopRules {
        &self.shops
    }

    /// Follows `raw_url` to its destination without cleanup.
    pub fn follow(&self, raw_url: &str) -> Result<Url, UntrackError> {
        let normalized = url_model::normalize_input(raw_url);
        let start = url_model::parse_with_base(&normalized, &self.base)?;
        follow::follow(&self.trackers, &self.transport, start)
    }

    /// Resolves `raw_url` and strips tracking artifacts for known shops.
    pub fn untrack(&self, raw_url: &str) -> Result<String, UntrackError> {
        let _span = tracing::debug_span!("untrack", input = raw_url).entered();
        let target = self.follow(raw_url)?;
        let rule = host_key(&target).and_then(|host| self.shops.get(&host));
        let target = match rule {
            Some(rule) => rules::apply(target, rule)?,
            None => target,
        };
        tracing::debug!(output = %target, cleaned = rule.is_some(), "untracked");
        Ok(target.to_string())
    }
}

/// One-off resolution with a default [`Untracker`] (no extractors).
pub fn untrack(raw_url: &str) -> Result<String, UntrackError> {
    Untracker::new()?.untrack(raw_url)
}
