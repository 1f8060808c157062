//! CLI tests: argument parsing and command handlers against a temp storage file.

use super::Cli;
use clap::Parser;

pub(super) fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).unwrap()
}

mod handlers;
