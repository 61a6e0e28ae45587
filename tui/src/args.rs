//! Command-line arguments.

use clap::{command, value_parser, Arg, ArgAction};
use std::path::PathBuf;
use std::time::Duration;

/// Parsed command-line arguments.
pub struct Args {
    /// Number of cells scattered at startup.
    pub count: usize,
    /// Half-width of the square the seed is scattered over.
    pub spread: i64,
    /// Step interval while playing.
    pub interval: Duration,
    /// RNG seed for a reproducible scatter.
    pub seed: Option<u64>,
    /// Number of generations to run in batch mode.
    pub generations: u64,
    /// Run in batch mode instead of the TUI.
    pub no_tui: bool,
    /// Seed from a saved snapshot instead of a random scatter.
    pub load: Option<PathBuf>,
    /// Write a snapshot of the final state to this file.
    pub save: Option<PathBuf>,
}

pub fn parse() -> Args {
    let matches = command!()
        .arg(
            Arg::new("COUNT")
                .help("Number of cells scattered at startup")
                .short('n')
                .long("count")
                .value_parser(value_parser!(usize))
                .default_value("100"),
        )
        .arg(
            Arg::new("SPREAD")
                .help("Half-width of the square the seed is scattered over")
                .short('s')
                .long("spread")
                .value_parser(value_parser!(i64).range(1..))
                .default_value("25"),
        )
        .arg(
            Arg::new("INTERVAL")
                .help("Step interval in milliseconds while playing")
                .short('i')
                .long("interval")
                .value_parser(value_parser!(u64).range(1..))
                .default_value("250"),
        )
        .arg(
            Arg::new("SEED")
                .help("RNG seed for a reproducible scatter")
                .long("seed")
                .value_parser(value_parser!(u64)),
        )
        .arg(
            Arg::new("GENERATIONS")
                .help("Number of generations to run in batch mode")
                .short('g')
                .long("generations")
                .value_parser(value_parser!(u64))
                .default_value("20"),
        )
        .arg(
            Arg::new("NO_TUI")
                .help("Run in batch mode and print the final pattern")
                .long("no-tui")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("LOAD")
                .help("Seed from a saved snapshot instead of a random scatter")
                .long("load")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("SAVE")
                .help("Write a snapshot of the final state to this file")
                .long("save")
                .value_parser(value_parser!(PathBuf)),
        )
        .get_matches();

    Args {
        count: *matches.get_one::<usize>("COUNT").unwrap(),
        spread: *matches.get_one::<i64>("SPREAD").unwrap(),
        interval: Duration::from_millis(*matches.get_one::<u64>("INTERVAL").unwrap()),
        seed: matches.get_one::<u64>("SEED").copied(),
        generations: *matches.get_one::<u64>("GENERATIONS").unwrap(),
        no_tui: matches.get_flag("NO_TUI"),
        load: matches.get_one::<PathBuf>("LOAD").cloned(),
        save: matches.get_one::<PathBuf>("SAVE").cloned(),
    }
}
