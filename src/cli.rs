//! Command-line interface for guryongtu.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Guryongtu - hot-seat nine-tile duel for two players at one terminal
#[derive(Parser, Debug)]
#[command(name = "guryongtu")]
#[command(about = "Hot-seat nine-tile duel for the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a match in the terminal
    Play {
        /// Path to a TOML config file (defaults to guryongtu.toml if present)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Seed for the first-player draw
        #[arg(long)]
        seed: Option<u64>,

        /// Skip the background picture fetch
        #[arg(long)]
        no_background: bool,

        /// Seconds the round result stays on screen
        #[arg(long)]
        dwell: Option<f64>,

        /// Let Enter skip the round result screen
        #[arg(long)]
        click_through: bool,
    },

    /// Print the rules and exit
    Rules,
}

impl Default for Command {
    fn default() -> Self {
        Command::Play {
            config: None,
            seed: None,
            no_background: false,
            dwell: None,
            click_through: false,
        }
    }
}
