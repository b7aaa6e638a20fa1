//! Per-destination-host cleanup rules.
//!
//! The table is compiled in and never changes after construction. Lookup is
//! an exact match on the host key (see [`crate::url_model::host_key`]); a
//! host without a rule is left untouched.

mod clean;

pub use clean::apply;

use serde::Serialize;
use std::collections::HashMap;

/// How to rewrite a destination URL on one host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CleanupRule {
    /// Query parameter names of interest.
    pub params: &'static [&'static str],
    /// false: `params` are removed. true: only `params` are kept.
    pub invert_params: bool,
    /// Clear the whole query; `params` is ignored.
    pub empty_params: bool,
    /// Clear the path.
    pub empty_path: bool,
    /// Replace the scheme when set.
    pub scheme: Option<&'static str>,
}

impl CleanupRule {
    const KEEP_SEARCH_TEXT: CleanupRule = CleanupRule {
        params: &["SearchText"],
        invert_params: true,
        empty_params: false,
        empty_path: false,
        scheme: None,
    };

    const EMPTY_QUERY: CleanupRule = CleanupRule {
        params: &[],
        invert_params: false,
        empty_params: true,
        empty_path: false,
        scheme: None,
    };
}

const KNOWN_SHOPS: &[(&str, CleanupRule)] = &[
    ("tmall.aliexpress.com", CleanupRule::KEEP_SEARCH_TEXT),
    ("ru.aliexpress.com", CleanupRule::KEEP_SEARCH_TEXT),
    ("www.gearbest.com", CleanupRule::EMPTY_QUERY),
    ("www.coolicool.com", CleanupRule::EMPTY_QUERY),
    ("www.tinydeal.com", CleanupRule::EMPTY_QUERY),
    ("www.banggood.com", CleanupRule::EMPTY_QUERY),
];

/// Immutable host → cleanup rule mapping.
#[derive(Debug, Clone)]
pub struct ShopRules {
    rules: HashMap<&'static str, CleanupRule>,
}

impl Default for ShopRules {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ShopRules {
    /// The compiled-in shop table.
    pub fn builtin() -> Self {
        Self {
            rules: KNOWN_SHOPS.iter().cloned().collect(),
        }
    }

    pub fn get(&self, host: &str) -> Option<&CleanupRule> {
        self.rules.get(host)
    }

    /// Hosts that have a rule, sorted.
    pub fn hosts(&self) -> Vec<&'static str> {
        let mut hosts: Vec<&'static str> = self.rules.keys().copied().collect();
        hosts.sort_unstable();
        hosts
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
