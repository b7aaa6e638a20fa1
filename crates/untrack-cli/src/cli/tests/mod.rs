//! CLI parse tests.

use super::{Cli, CliCommand};
use clap::Parser;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).unwrap()
}

#[test]
fn cli_parse_resolve_many() {
    let cli = parse(&["untrack", "resolve", "s.click.example/abc", "https://t.example/r"]);
    assert!(cli.config.is_none());
    match cli.command {
        CliCommand::Resolve { urls, json } => {
            assert_eq!(urls, vec!["s.click.example/abc", "https://t.example/r"]);
            assert!(!json);
        }
        _ => panic!("expected Resolve"),
    }
}

#[test]
fn cli_parse_resolve_json_and_config() {
    let cli = parse(&[
        "untrack",
        "resolve",
        "--json",
        "example.com/x",
        "--config",
        "/tmp/untrack.toml",
    ]);
    assert_eq!(
        cli.config.as_deref(),
        Some(std::path::Path::new("/tmp/untrack.toml"))
    );
    match cli.command {
        CliCommand::Resolve { urls, json } => {
            assert_eq!(urls, vec!["example.com/x"]);
            assert!(json);
        }
        _ => panic!("expected Resolve with --json"),
    }
}

#[test]
fn cli_parse_resolve_requires_url() {
    assert!(Cli::try_parse_from(["untrack", "resolve"]).is_err());
}

#[test]
fn cli_parse_trackers_and_rules() {
    match parse(&["untrack", "trackers"]).command {
        CliCommand::Trackers => {}
        _ => panic!("expected Trackers"),
    }
    match parse(&["untrack", "rules"]).command {
        CliCommand::Rules => {}
        _ => panic!("expected Rules"),
    }
}
