//! Single-hop HTTP GET with redirects disabled.
//!
//! Uses the curl crate (libcurl). Only the status code and the `Location`
//! header matter; the body is never read: the write callback aborts the
//! transfer as soon as body bytes arrive.

mod parse;

use std::str;
use std::time::Duration;
use url::Url;

use crate::config::UntrackConfig;
use crate::error::UntrackError;

/// What one hop of the redirect chain told us.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HopResponse {
    pub status: u32,
    /// Raw `Location` header value, unresolved.
    pub location: Option<String>,
}

impl HopResponse {
    /// Any 3xx status counts as a redirect.
    pub fn is_redirect(&self) -> bool {
        self.status > 299 && self.status < 400
    }
}

/// Issues one GET without following redirects.
pub trait Transport: Send + Sync {
    fn get(&self, url: &Url) -> Result<HopResponse, UntrackError>;
}

/// libcurl-backed transport. One `Easy` handle per request.
#[derive(Debug, Clone)]
pub struct CurlTransport {
    pub connect_timeout: Duration,
    pub timeout: Duration,
    pub user_agent: Option<String>,
}

impl Default for CurlTransport {
    fn default() -> Self {
        Self::from_config(&UntrackConfig::default())
    }
}

impl CurlTransport {
    pub fn from_config(cfg: &UntrackConfig) -> Self {
        Self {
            connect_timeout: Duration::from_secs(cfg.connect_timeout_secs),
            timeout: Duration::from_secs(cfg.timeout_secs),
            user_agent: cfg.user_agent.clone(),
        }
    }
}

impl Transport for CurlTransport {
    fn get(&self, url: &Url) -> Result<HopResponse, UntrackError> {
        let network = |source: curl::Error| UntrackError::Network {
            url: url.to_string(),
            source,
        };
        let mut headers: Vec<String> = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(url.as_str()).map_err(network)?;
        easy.get(true).map_err(network)?;
        easy.follow_location(false).map_err(network)?;
        easy.connect_timeout(self.connect_timeout).map_err(network)?;
        easy.timeout(self.timeout).map_err(network)?;
        if let Some(agent) = &self.user_agent {
            easy.useragent(agent).map_err(network)?;
        }

        let performed = {
            let mut transfer = easy.transfer();
            transfer
                .header_function(|data| {
                    if let Ok(s) = str::from_utf8(data) {
                        headers.push(s.trim_end().to_string());
                    }
                    true
                })
                .map_err(network)?;
            // Returning 0 aborts with a write error once the body starts.
            transfer.write_function(|_| Ok(0)).map_err(network)?;
            transfer.perform()
        };
        match performed {
            Ok(()) => {}
            Err(e) if e.is_write_error() => {}
            Err(e) => return Err(network(e)),
        }

        let status = easy.response_code().map_err(network)?;
        Ok(parse::parse_headers(status, &headers))
    }
}
