//! Parse raw response header lines into a [`HopResponse`].

use super::HopResponse;

/// Picks the `Location` header of the last response block.
///
/// Interim responses (e.g. `100 Continue`) start their own block with a
/// status line, so anything collected before the final status line is dropped.
pub(crate) fn parse_headers(status: u32, lines: &[String]) -> HopResponse {
    let mut location = None;

    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line.starts_with("HTTP/") {
            location = None;
            continue;
        }
        if let Some((name, value)) = line.split_once(':') {
            if name.trim().eq_ignore_ascii_case("location") {
                let value = value.trim();
                if !value.is_empty() {
                    location = Some(value.to_string());
                }
            }
        }
    }

    HopResponse { status, location }
}
