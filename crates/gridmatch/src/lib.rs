//! Gridmatch - terminal tic-tac-toe
//!
//! The presentation layer and ambient stack around [`gridmatch_core`]:
//!
//! - **Config**: TOML settings with command-line overrides ([`config`])
//! - **Scheduler**: delayed, cancellable computer replies ([`scheduler`])
//! - **TUI**: board, scoreboard and key handling ([`tui`])
//! - **Simulate**: headless self-play ([`simulate`])

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod logging;
pub mod scheduler;
pub mod simulate;
pub mod tui;

pub use config::{ConfigError, GameConfig};
pub use scheduler::{AppEvent, AutomatedTurn};
