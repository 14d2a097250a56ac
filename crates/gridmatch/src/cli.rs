//! Command-line interface for gridmatch.

use clap::{Parser, Subcommand, ValueEnum};
use gridmatch_core::Mode;

/// Gridmatch - tic-tac-toe against a friend or the computer
#[derive(Parser, Debug)]
#[command(name = "gridmatch")]
#[command(about = "Terminal tic-tac-toe with a greedy computer opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (missing file means defaults)
    #[arg(short, long, default_value = "gridmatch.toml", global = true)]
    pub config: std::path::PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// Starting mode (overrides config)
        #[arg(long, value_enum)]
        mode: Option<ModeArg>,

        /// Delay before the computer answers, in milliseconds (overrides config)
        #[arg(long)]
        delay_ms: Option<u64>,

        /// Seed for the computer's random moves (overrides config)
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Let the computer play both sides and print the score
    Simulate {
        /// Number of rounds to play
        #[arg(short, long, default_value = "100")]
        rounds: u32,

        /// Seed for reproducible runs (overrides config)
        #[arg(long)]
        seed: Option<u64>,
    },
}

/// Mode as spelled on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// Two humans at one keyboard
    Human,
    /// Play X against the computer
    Computer,
}

impl From<ModeArg> for Mode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Human => Mode::HumanVsHuman,
            ModeArg::Computer => Mode::HumanVsAutomated,
        }
    }
}
