//! Reusable extractors for registration with [`crate::Untracker::register_tracker`].

use anyhow::{Context, Result};
use url::Url;

use crate::registry::ExtractTarget;

/// Takes the target from a query parameter of the tracker URL, e.g.
/// `https://t.example/r?url=https%3A%2F%2Fshop.example%2Fitem`.
///
/// The value must be an absolute URL.
#[derive(Debug, Clone)]
pub struct QueryParamTarget {
    param: String,
}

impl QueryParamTarget {
    pub fn new(param: impl Into<String>) -> Self {
        Self {
            param: param.into(),
        }
    }
}

impl ExtractTarget for QueryParamTarget {
    fn extract(&self, tracker: &Url) -> Result<Url> {
        let value = tracker
            .query_pairs()
            .find(|(k, _)| k == self.param.as_str())
            .map(|(_, v)| v.into_owned())
            .with_context(|| format!("{tracker}: missing query parameter {:?}", self.param))?;
        Url::parse(value.trim())
            .with_context(|| format!("{tracker}: parameter {:?} is not a URL", self.param))
    }
}
