//! Apply a [`CleanupRule`] to a resolved destination URL.

use std::collections::HashMap;
use url::Url;

use super::CleanupRule;
use crate::error::UntrackError;

/// Rewrites query, path and scheme of `url` according to `rule`.
///
/// Kept query pairs are re-encoded sorted by key; the sort is stable so
/// repeated values of one key keep their relative order. Escaping is
/// `application/x-www-form-urlencoded` as done by the `url` crate
/// (`~` becomes `%7E`, `*` stays bare, space becomes `+`).
pub fn apply(mut url: Url, rule: &CleanupRule) -> Result<Url, UntrackError> {
    if rule.empty_params {
        url.set_query(None);
    } else if !rule.params.is_empty() {
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        let kept = retained_pairs(&pairs, rule);
        if kept.is_empty() {
            url.set_query(None);
        } else {
            url.query_pairs_mut().clear().extend_pairs(kept);
        }
    }

    if rule.empty_path {
        url.set_path("");
    }

    if let Some(scheme) = rule.scheme.filter(|s| !s.is_empty()) {
        url.set_scheme(scheme)
            .map_err(|()| UntrackError::SchemeOverride {
                scheme: scheme.to_string(),
            })?;
    }

    tracing::debug!(url = %url, "cleaned destination");
    Ok(url)
}

/// Pairs that survive the rule, sorted by key.
fn retained_pairs<'a>(pairs: &'a [(String, String)], rule: &CleanupRule) -> Vec<(&'a str, &'a str)> {
    let mut delete: HashMap<&str, bool> = pairs
        .iter()
        .map(|(k, _)| (k.as_str(), rule.invert_params))
        .collect();
    // Names absent from the query only add entries nothing looks at.
    for name in rule.params {
        delete.insert(*name, !rule.invert_params);
    }

    let mut kept: Vec<(&str, &str)> = pairs
        .iter()
        .filter(|(k, _)| !delete.get(k.as_str()).copied().unwrap_or(false))
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect();
    kept.sort_by(|a, b| a.0.cmp(b.0));
    kept
}
