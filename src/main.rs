use std::{io, process::ExitCode};

use ludo::{ludo::Game, session::Session};
use log::warn;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp_millis()
        .init();

    let mut game = Game::new();
    let stdin = io::stdin();
    let mut session = Session::new(stdin.lock(), io::stdout());

    match session.play(&mut game) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            warn!("game stopped after {} turns: {err}", game.turn());
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
