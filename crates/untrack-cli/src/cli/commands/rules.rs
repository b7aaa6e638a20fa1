//! `untrack rules` – list hosts with a cleanup rule.

use untrack_core::fetch::Transport;
use untrack_core::{CleanupRule, Untracker};

pub fn run_rules<T: Transport>(untracker: &Untracker<T>) {
    let rules = untracker.shop_rules();
    for host in rules.hosts() {
        if let Some(rule) = rules.get(host) {
            println!("{:<24}  {}", host, describe(rule));
        }
    }
}

/// One-line summary of a rule.
fn describe(rule: &CleanupRule) -> String {
    let mut parts = Vec::new();
    if rule.empty_params {
        parts.push("drop query".to_string());
    } else if !rule.params.is_empty() {
        let verb = if rule.invert_params { "keep only" } else { "drop" };
        parts.push(format!("{} {}", verb, rule.params.join(",")));
    }
    if rule.empty_path {
        parts.push("drop path".to_string());
    }
    if let Some(scheme) = rule.scheme {
        parts.push(format!("scheme {scheme}"));
    }
    if parts.is_empty() {
        "no-op".to_string()
    } else {
        parts.join("; ")
    }
}
