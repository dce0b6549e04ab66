mod cli;
mod config;
mod convert;
mod filter_cmd;
mod headless;
mod logging;
mod manifest_cmd;
mod month_cmd;
mod replay_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Month(args) => month_cmd::run(args),
        Command::Filter(args) => filter_cmd::run(args),
        Command::Manifest(args) => manifest_cmd::run(args),
        Command::Replay(args) => replay_cmd::run(args),
    }
}
