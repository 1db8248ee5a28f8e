use std::path::PathBuf;

use clap::Parser;

use crate::tests::Test;

#[derive(Parser, Debug)]
/// A simple CLI for validating and inspecting GameMaker data files using LibGM
pub struct Args {
    /// The GameMaker data file(s) to load (whitespace separated)
    ///
    /// Default: `./data.win`
    pub files: Vec<PathBuf>,

    #[arg(short, long, value_delimiter = ',')]
    /// The tests to execute (comma separated).
    pub tests: Vec<Test>,

    #[arg(short, long, value_delimiter = ',')]
    /// Names of CODE entries to print the decoded instruction stream of (comma separated).
    pub codes: Vec<String>,
}

#[must_use]
pub fn parse() -> Args {
    Args::parse()
}
