use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;

#[test]
fn cli_parse_sum() {
    match parse(&["fixkit", "sum", "2", "-3"]) {
        CliCommand::Sum { a, b, float } => {
            assert_eq!(a, "2");
            assert_eq!(b, "-3");
            assert!(!float);
        }
        _ => panic!("expected Sum"),
    }
}

#[test]
fn cli_parse_sum_float() {
    match parse(&["fixkit", "sum", "--float", "0.5", "1.25"]) {
        CliCommand::Sum { float, .. } => assert!(float),
        _ => panic!("expected Sum"),
    }
}

#[test]
fn cli_parse_locate() {
    match parse(&["fixkit", "locate", "1", "3", "1", "4", "1", "5"]) {
        CliCommand::Locate { target, items } => {
            assert_eq!(target, "1");
            assert_eq!(items, vec!["3", "1", "4", "1", "5"]);
        }
        _ => panic!("expected Locate"),
    }
}

#[test]
fn cli_parse_locate_empty_items() {
    match parse(&["fixkit", "locate", "x"]) {
        CliCommand::Locate { items, .. } => assert!(items.is_empty()),
        _ => panic!("expected Locate"),
    }
}

#[test]
fn cli_parse_fetch_with_headers() {
    match parse(&[
        "fixkit",
        "fetch",
        "https://example.com/api",
        "-H",
        "X-A: 1",
        "--header",
        "X-B: 2",
    ]) {
        CliCommand::Fetch { url, headers } => {
            assert_eq!(url, "https://example.com/api");
            assert_eq!(headers, vec!["X-A: 1", "X-B: 2"]);
        }
        _ => panic!("expected Fetch"),
    }
}

#[test]
fn cli_parse_normalize_user() {
    match parse(&["fixkit", "normalize-user", "-"]) {
        CliCommand::NormalizeUser { source, url } => {
            assert_eq!(source, "-");
            assert!(!url);
        }
        _ => panic!("expected NormalizeUser"),
    }
    match parse(&["fixkit", "normalize-user", "--url", "http://h/u"]) {
        CliCommand::NormalizeUser { url, .. } => assert!(url),
        _ => panic!("expected NormalizeUser"),
    }
}

#[test]
fn cli_parse_completions() {
    match parse(&["fixkit", "completions", "bash"]) {
        CliCommand::Completions { shell } => assert_eq!(shell, clap_complete::Shell::Bash),
        _ => panic!("expected Completions"),
    }
}

#[test]
fn cli_rejects_missing_args() {
    assert!(Cli::try_parse_from(["fixkit", "sum", "1"]).is_err());
    assert!(Cli::try_parse_from(["fixkit", "fetch"]).is_err());
}
