//! Sitekit - Command-line tool for building static-site assets

use std::process::ExitCode;

use sitekit::cli;

fn main() -> ExitCode {
    cli::run()
}
