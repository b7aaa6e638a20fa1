//! Logging init: `~/.local/state/untrack/untrack.log`, or stderr when the
//! state dir is unusable. Hop, extractor and cleanup events are emitted at
//! `debug` inside an `untrack` span carrying the input URL.

use anyhow::{Context, Result};
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,untrack=debug,untrack_core=debug";
const LOG_FILE_NAME: &str = "untrack.log";

/// Where log output ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogDestination {
    File(PathBuf),
    Stderr,
}

/// Shares one append-mode handle; `&File` is itself a writer.
struct SharedFile(File);

impl<'a> MakeWriter<'a> for SharedFile {
    type Writer = &'a File;

    fn make_writer(&'a self) -> Self::Writer {
        &self.0
    }
}

/// Installs the global subscriber. Prefers the XDG log file and falls back
/// to stderr, logging why. Call once, before any resolution.
pub fn init_logging() -> LogDestination {
    let filter = env_filter(std::env::var("RUST_LOG").ok().as_deref());
    match open_log_file() {
        Ok((path, file)) => {
            install(filter, BoxMakeWriter::new(SharedFile(file)));
            tracing::info!("untrack logging initialized at {}", path.display());
            LogDestination::File(path)
        }
        Err(err) => {
            install(filter, BoxMakeWriter::new(std::io::stderr));
            tracing::warn!("file logging unavailable, using stderr: {:#}", err);
            LogDestination::Stderr
        }
    }
}

fn install(filter: EnvFilter, writer: BoxMakeWriter) {
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .init();
}

fn open_log_file() -> Result<(PathBuf, File)> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("untrack")?;
    let state_dir = xdg_dirs.get_state_home();
    fs::create_dir_all(&state_dir)
        .with_context(|| format!("create log dir {}", state_dir.display()))?;
    let path = log_file_path(&state_dir);
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("open log file {}", path.display()))?;
    Ok((path, file))
}

fn log_file_path(state_dir: &Path) -> PathBuf {
    state_dir.join(LOG_FILE_NAME)
}

/// `RUST_LOG` directives when set and valid, the crate default otherwise.
fn env_filter(directives: Option<&str>) -> EnvFilter {
    filter_directives(directives)
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

fn filter_directives(directives: Option<&str>) -> Option<&str> {
    directives.map(str::trim).filter(|d| !d.is_empty())
}
