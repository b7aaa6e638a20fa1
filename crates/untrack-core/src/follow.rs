//! Redirect follower: walk `Location` headers hop by hop until a non-redirect
//! response, handing off to a registered extractor when one matches.

use url::Url;

use crate::error::UntrackError;
use crate::fetch::Transport;
use crate::registry::TrackerRegistry;
use crate::url_model::host_key;

/// Redirects followed before giving up with [`UntrackError::MaxRedirects`].
pub const MAX_REDIRECTS: usize = 10;

/// Resolves `start` to its destination.
///
/// The extractor check runs before every fetch, so an extractor registered
/// for an intermediate hop is honored too. An extractor's result is final.
pub fn follow<T: Transport + ?Sized>(
    trackers: &TrackerRegistry,
    transport: &T,
    start: Url,
) -> Result<Url, UntrackError> {
    let mut current = start;
    let mut redirects_followed = 0usize;

    loop {
        if let Some(host) = host_key(&current) {
            if let Some(extractor) = trackers.get(&host) {
                tracing::debug!(%host, url = %current, "delegating to extractor");
                return extractor
                    .extract(&current)
                    .map_err(|source| UntrackError::Extractor { host, source });
            }
        }

        let hop = transport.get(&current)?;
        tracing::debug!(url = %current, status = hop.status, location = ?hop.location, "hop");

        if !hop.is_redirect() {
            return Ok(current);
        }

        let location = hop.location.ok_or_else(|| UntrackError::MissingLocation {
            url: current.to_string(),
            status: hop.status,
        })?;
        let next = current
            .join(&location)
            .map_err(|e| UntrackError::parse(location.as_str(), e))?;

        redirects_followed += 1;
        if redirects_followed > MAX_REDIRECTS {
            tracing::debug!(url = %current, "giving up after {} redirects", MAX_REDIRECTS);
            return Err(UntrackError::MaxRedirects);
        }
        current = next;
    }
}
