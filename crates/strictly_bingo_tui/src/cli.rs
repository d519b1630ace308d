//! Command-line interface for strictly_bingo.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Strictly Bingo - deal and play bingo cards from show phrase pools
#[derive(Parser, Debug)]
#[command(name = "strictly_bingo")]
#[command(about = "Deal and play bingo cards from show phrase pools", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file
    #[arg(short, long, global = true, default_value = "bingo.toml")]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Where to find the show and how to deal it.
#[derive(Args, Debug, Clone)]
pub struct ShowArgs {
    /// Id of the show to deal a card from
    pub show_id: String,

    /// Directory of show files (overrides config)
    #[arg(long)]
    pub shows_dir: Option<PathBuf>,

    /// Show server base URL (overrides config; takes precedence over the directory)
    #[arg(long)]
    pub server_url: Option<String>,

    /// Seed for a reproducible deal (overrides config)
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a card interactively in the terminal
    Play(ShowArgs),

    /// Deal a card and print it as text
    Print(ShowArgs),
}

impl Command {
    /// Returns the show arguments shared by every subcommand.
    pub fn show_args(&self) -> &ShowArgs {
        match self {
            Command::Play(args) | Command::Print(args) => args,
        }
    }
}
