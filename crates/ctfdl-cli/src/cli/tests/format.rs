//! Tests for the format subcommand.

use super::{parse, parse_err};
use crate::cli::CliCommand;
use std::path::Path;

#[test]
fn cli_parse_format() {
    match parse(&["ctfdl", "format", "writeups"]).command {
        CliCommand::Format {
            writeup_dir,
            link_images,
        } => {
            assert_eq!(writeup_dir, Path::new("writeups"));
            assert!(!link_images);
        }
        other => panic!("expected Format, got {:?}", other),
    }
}

#[test]
fn cli_parse_format_link_images() {
    match parse(&["ctfdl", "format", "--link-images", "w"]).command {
        CliCommand::Format { link_images, .. } => assert!(link_images),
        other => panic!("expected Format, got {:?}", other),
    }
}

#[test]
fn cli_parse_format_requires_dir() {
    parse_err(&["ctfdl", "format"]);
}
