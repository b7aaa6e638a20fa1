//! `untrack trackers` – list hosts with a custom extractor.

use untrack_core::fetch::Transport;
use untrack_core::Untracker;

pub fn run_trackers<T: Transport>(untracker: &Untracker<T>) {
    for host in untracker.known_trackers() {
        println!("{host}");
    }
}
