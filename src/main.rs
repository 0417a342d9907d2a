//! Tintscan - command-line tool for image color and transparency analysis

use std::process::ExitCode;

use tintscan::cli;

fn main() -> ExitCode {
    cli::run()
}
