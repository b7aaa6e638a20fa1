//! `untrack resolve <url>...` – resolve and clean each URL.

use anyhow::Result;
use serde::Serialize;
use untrack_core::fetch::Transport;
use untrack_core::Untracker;

#[derive(Debug, Serialize)]
struct Resolved<'a> {
    input: &'a str,
    url: &'a str,
}

/// Prints one result per URL. Failures go to stderr and fail the command
/// once every URL has been tried.
pub fn run_resolve<T: Transport>(untracker: &Untracker<T>, urls: &[String], json: bool) -> Result<()> {
    let mut failed = 0usize;
    for input in urls {
        match untracker.untrack(input) {
            Ok(url) => {
                if json {
                    let line = serde_json::to_string(&Resolved { input, url: &url })?;
                    println!("{line}");
                } else {
                    println!("{url}");
                }
            }
            Err(err) => {
                tracing::warn!(%input, kind = ?err.kind(), "resolution failed: {err}");
                eprintln!("{input}: {err}");
                failed += 1;
            }
        }
    }
    if failed > 0 {
        anyhow::bail!("{} of {} URLs could not be resolved", failed, urls.len());
    }
    Ok(())
}
