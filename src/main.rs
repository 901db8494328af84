mod cli;
mod clock;
mod config;
mod logging;
mod render;
mod show_cmd;
mod watch_cmd;

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
        Command::Watch(args) => watch_cmd::run(args),
        Command::Show(args) => show_cmd::run(args),
    }
}
