use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

/// Annum terminal year-progress clock.
#[derive(Parser)]
#[command(name = "annum", version, about = "Terminal year-progress clock")]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Run the live widget: clock and year grid, refreshed every minute.
    Watch(WatchArgs),
    /// Render a single frame to stdout and exit.
    Show(ShowArgs),
}

/// Arguments for the `watch` subcommand.
#[derive(clap::Args)]
pub struct WatchArgs {
    /// Path to TOML configuration file (defaults to annum.toml if present).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Clock-and-date layout, without the grid.
    #[arg(long)]
    pub compact: bool,
}

/// Arguments for the `show` subcommand.
#[derive(clap::Args)]
pub struct ShowArgs {
    /// Path to TOML configuration file (defaults to annum.toml if present).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Render for this date (YYYY-MM-DD) instead of today.
    #[arg(short, long)]
    pub date: Option<NaiveDate>,

    /// Clock-and-date layout, without the grid.
    #[arg(long)]
    pub compact: bool,

    /// Disable ANSI colour in the frame.
    #[arg(long)]
    pub no_color: bool,
}
