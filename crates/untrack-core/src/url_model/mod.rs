//! URL modeling: input normalization, default-scheme parsing and host keys.

use url::Url;

use crate::error::UntrackError;

/// Prefixes `//` when the input has no scheme separator, so that
/// `example.com/x` parses as a host and path instead of a relative path.
pub fn normalize_input(raw: &str) -> String {
    if !raw.contains("://") && !raw.starts_with("//") {
        format!("//{raw}")
    } else {
        raw.to_string()
    }
}

/// Base used to resolve scheme-relative input (`//host/path`).
pub fn default_base(scheme: &str) -> Result<Url, UntrackError> {
    let base = format!("{scheme}://localhost/");
    Url::parse(&base).map_err(|e| UntrackError::parse(base, e))
}

/// Parses `raw`; scheme-relative input takes the scheme of `base`.
pub fn parse_with_base(raw: &str, base: &Url) -> Result<Url, UntrackError> {
    Url::options()
        .base_url(Some(base))
        .parse(raw)
        .map_err(|e| UntrackError::parse(raw, e))
}

/// Key used for every registry lookup: the host, plus `:port` when the URL
/// carries an explicit non-default port.
///
/// Returns `None` for URLs without a host (e.g. `data:`).
pub fn host_key(url: &Url) -> Option<String> {
    let host = url.host_str()?;
    Some(match url.port() {
        Some(port) => format!("{host}:{port}"),
        None => host.to_string(),
    })
}
