//! Command-line configuration.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

const KEYS_HELP: &str = "\
Interactive keys: 1-9 and 0 toggle pins, x selects all standing pins,
c clears, enter confirms, left/right move between frames, r resets, q quits.

Log level comes from PINFALL_LOG, then RUST_LOG (default: warn).";

#[derive(Debug, Parser)]
#[command(name = "pinfall", version)]
#[command(about = "Pin-by-pin ten-pin bowling scorecard")]
#[command(after_help = KEYS_HELP)]
pub struct Config {
    /// Without a subcommand the interactive scorecard opens
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Print the finished game's record as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Write log lines to this file
    #[arg(long, value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Score a list of pin counts and print the card
    Score {
        /// Pin counts in bowling order; `X` for a strike
        #[arg(required = true, value_parser = parse_roll)]
        rolls: Vec<u8>,
    },
}

/// A pin count, or `X` for a strike.
fn parse_roll(arg: &str) -> Result<u8, String> {
    if arg.eq_ignore_ascii_case("x") {
        return Ok(10);
    }
    arg.parse::<u8>()
        .map_err(|_| format!("expected a pin count 0-10 or X, got '{arg}'"))
}
