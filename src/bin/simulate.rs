//! Headless batch of matches, every turn rolled without waiting for input.
//!
//! Run with:
//! `cargo run --release --bin simulate -- [games] [max_turns] [seed]`

use std::process::ExitCode;

use ludo::simulation::{SimulationConfig, run_series};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let config = match parse_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(message) => {
            eprintln!("{message}");
            eprintln!("usage: simulate [games] [max_turns] [seed]");
            return ExitCode::FAILURE;
        }
    };

    let start = std::time::Instant::now();
    let report = run_series(config);
    println!("{report}");
    println!("Simulation took: {:?}", start.elapsed());
    ExitCode::SUCCESS
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<SimulationConfig, String> {
    let defaults = SimulationConfig::default();
    let mut next = |name: &str| -> Result<Option<u64>, String> {
        args.next()
            .map(|arg| {
                arg.parse::<u64>()
                    .map_err(|_| format!("{name} must be a number, got '{arg}'"))
            })
            .transpose()
    };

    let games = next("games")?.map_or(Ok(defaults.games), |n| {
        u32::try_from(n).map_err(|_| "games is too large".to_owned())
    })?;
    let max_turns = next("max_turns")?.map_or(Ok(defaults.max_turns), |n| {
        u32::try_from(n).map_err(|_| "max_turns is too large".to_owned())
    })?;
    let base_seed = next("seed")?.unwrap_or(defaults.base_seed);

    Ok(SimulationConfig { games, max_turns, base_seed })
}
