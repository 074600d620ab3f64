//! CLI parse tests.

use super::{Cli, CliCommand};
use clap::Parser;

pub(super) fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).unwrap()
}

pub(super) fn parse_err(args: &[&str]) -> clap::Error {
    Cli::try_parse_from(args).unwrap_err()
}

mod format;

#[test]
fn cli_requires_subcommand() {
    parse_err(&["ctfdl"]);
}

#[test]
fn cli_verbose_is_global_and_counted() {
    let cli = parse(&["ctfdl", "-vv", "format", "w"]);
    assert_eq!(cli.verbose, 2);
    let cli = parse(&["ctfdl", "format", "w", "-v"]);
    assert_eq!(cli.verbose, 1);
    assert!(matches!(cli.command, CliCommand::Format { .. }));
}
