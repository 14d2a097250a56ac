//! Config file, CLI overrides and self-play through the public API.

use clap::Parser;
use gridmatch::cli::{Cli, Command};
use gridmatch::{GameConfig, simulate};
use gridmatch_core::Mode;
use std::io::Write;
use std::time::Duration;

#[test]
fn test_cli_overrides_config_file() {
    let mut file = tempfile::NamedTempFile::new().expect("Temp file");
    writeln!(file, "mode = \"human_vs_human\"\nautomated_delay_ms = 250\nseed = 1").expect("Write");

    let path = file.path().to_string_lossy().to_string();
    let cli = Cli::try_parse_from(["gridmatch", "--config", &path, "play", "--mode", "computer"])
        .expect("Valid args");

    let config = GameConfig::load_or_default(&cli.config).expect("Valid config");
    let Command::Play { mode, delay_ms, seed } = cli.command else {
        panic!("Expected play command");
    };
    let config = config.with_overrides(mode.map(Into::into), delay_ms, seed);

    assert_eq!(*config.mode(), Mode::HumanVsAutomated);
    assert_eq!(config.automated_delay(), Duration::from_millis(250));
    assert_eq!(*config.seed(), Some(1));
}

#[test]
fn test_self_play_is_reproducible() {
    let first = simulate::simulate(60, 2024);
    let second = simulate::simulate(60, 2024);

    assert_eq!(first, second);
    assert_eq!(first.total(), 60);
    assert!(simulate::summary(&first).ends_with("(rounds: 60)"));
}
