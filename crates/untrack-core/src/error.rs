//! Error type for resolution and cleanup, plus a coarse classification.

use thiserror::Error;

/// Everything that can abort an `untrack` call. There is no partial result:
/// the first failure is returned to the caller as-is.
#[derive(Debug, Error)]
pub enum UntrackError {
    /// Malformed input URL or `Location` header.
    #[error("invalid URL {input:?}: {source}")]
    Parse {
        input: String,
        #[source]
        source: url::ParseError,
    },

    /// Redirect status without a `Location` header.
    #[error("{url} returned HTTP {status} without a Location header")]
    MissingLocation { url: String, status: u32 },

    /// Connection, DNS or timeout failure during a GET.
    #[error("GET {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: curl::Error,
    },

    /// More than [`crate::follow::MAX_REDIRECTS`] redirects were followed.
    #[error("max redirects ({}) followed", crate::follow::MAX_REDIRECTS)]
    MaxRedirects,

    /// Failure reported by a registered extractor, passed through verbatim.
    #[error("{source}")]
    Extractor {
        host: String,
        #[source]
        source: anyhow::Error,
    },

    /// A cleanup rule asked for a scheme the URL cannot take.
    #[error("cannot switch URL scheme to {scheme:?}")]
    SchemeOverride { scheme: String },
}

/// High-level classification so callers can tell "link unresolvable" from
/// "network down" without matching every variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Parse,
    /// Network-level failure (connection refused, DNS, TLS, etc.).
    Network,
    /// Connect or transfer timed out.
    Timeout,
    /// Redirect loop or overly long tracker chain.
    RedirectLimit,
    Extractor,
    /// Cleanup rule could not be applied.
    Rule,
}

impl UntrackError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            UntrackError::Parse { .. } | UntrackError::MissingLocation { .. } => ErrorKind::Parse,
            UntrackError::Network { source, .. } => classify_curl_error(source),
            UntrackError::MaxRedirects => ErrorKind::RedirectLimit,
            UntrackError::Extractor { .. } => ErrorKind::Extractor,
            UntrackError::SchemeOverride { .. } => ErrorKind::Rule,
        }
    }

    pub(crate) fn parse(input: impl Into<String>, source: url::ParseError) -> Self {
        UntrackError::Parse {
            input: input.into(),
            source,
        }
    }
}

/// Classify a curl error: timeouts are split out, everything else is network.
pub fn classify_curl_error(e: &curl::Error) -> ErrorKind {
    if e.is_operation_timedout() {
        return ErrorKind::Timeout;
    }
    ErrorKind::Network
}
