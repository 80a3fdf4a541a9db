use std::fmt::Display;

use hashbrown::HashMap;
use log::{debug, info, warn};
use rayon::iter::{IntoParallelIterator, ParallelIterator};

use crate::ludo::{Action, Cell, Game, RandomDie, Seat};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationConfig {
    pub games: u32,
    /// Matches still running after this many turns are counted as undecided.
    pub max_turns: u32,
    /// Match `i` plays with a die seeded by `base_seed + i`.
    pub base_seed: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            games: 1000,
            max_turns: 2000,
            base_seed: 0,
        }
    }
}

/// What happened in one headless match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchSummary {
    pub seed: u64,
    pub winner: Option<Seat>,
    pub turns: u32,
    pub entries: [u32; Seat::COUNT],
    pub captures: [u32; Seat::COUNT],
    pub landings: HashMap<Cell, u32>,
}

/// Plays one match without input, pressing Enter on every turn.
pub fn simulate_match(seed: u64, max_turns: u32) -> MatchSummary {
    let mut game = Game::with_die(RandomDie::seeded(seed));
    let mut summary = MatchSummary {
        seed,
        winner: None,
        turns: 0,
        entries: [0; Seat::COUNT],
        captures: [0; Seat::COUNT],
        landings: HashMap::new(),
    };

    while summary.turns < max_turns {
        let report = match game.play_turn() {
            Ok(report) => report,
            Err(err) => {
                warn!("match {seed} stopped after {} turns: {err}", summary.turns);
                break;
            }
        };
        summary.turns = report.turn;

        let seat = report.seat.index();
        match report.action {
            Action::Entered { .. } => summary.entries[seat] += 1,
            Action::Moved(mv) => {
                summary.captures[seat] += mv.captures.len() as u32;
                *summary.landings.entry(mv.to).or_insert(0) += 1;
            }
            Action::Passed => (),
        }

        if report.outcome.is_over() {
            summary.winner = report.outcome.winner();
            break;
        }
    }

    debug!("match {seed}: {} turns, winner {:?}", summary.turns, summary.winner);
    summary
}

/// Totals over many matches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeriesReport {
    pub games: u32,
    pub wins: [u32; Seat::COUNT],
    pub undecided: u32,
    pub turns: u64,
    pub entries: [u64; Seat::COUNT],
    pub captures: [u64; Seat::COUNT],
    pub landings: HashMap<Cell, u64>,
}

impl SeriesReport {
    pub fn add(&mut self, summary: &MatchSummary) {
        self.games += 1;
        match summary.winner {
            Some(seat) => self.wins[seat.index()] += 1,
            None => self.undecided += 1,
        }
        self.turns += summary.turns as u64;
        for seat in 0..Seat::COUNT {
            self.entries[seat] += summary.entries[seat] as u64;
            self.captures[seat] += summary.captures[seat] as u64;
        }
        for (&cell, &count) in summary.landings.iter() {
            *self.landings.entry(cell).or_insert(0) += count as u64;
        }
    }

    pub fn merge(mut self, other: SeriesReport) -> SeriesReport {
        self.games += other.games;
        self.undecided += other.undecided;
        self.turns += other.turns;
        for seat in 0..Seat::COUNT {
            self.wins[seat] += other.wins[seat];
            self.entries[seat] += other.entries[seat];
            self.captures[seat] += other.captures[seat];
        }
        for (cell, count) in other.landings {
            *self.landings.entry(cell).or_insert(0) += count;
        }
        self
    }

    pub fn average_turns(&self) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        self.turns as f64 / self.games as f64
    }

    /// The `n` cells landed on most often, ties broken by cell order.
    pub fn hottest_cells(&self, n: usize) -> Vec<(Cell, u64)> {
        let mut cells = self
            .landings
            .iter()
            .map(|(&cell, &count)| (cell, count))
            .collect::<Vec<_>>();
        cells.sort_unstable_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        cells.truncate(n);
        cells
    }
}

impl Display for SeriesReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "============================================")?;
        writeln!(
            f,
            "Games: {}, Undecided: {}, Average turns: {:.1}",
            self.games,
            self.undecided,
            self.average_turns()
        )?;
        for seat in Seat::ALL {
            let i = seat.index();
            writeln!(
                f,
                "{seat}: Wins: {}, Entries: {}, Captures: {}",
                self.wins[i], self.entries[i], self.captures[i]
            )?;
        }
        write!(f, "Most landed cells:")?;
        for (cell, count) in self.hottest_cells(5) {
            write!(f, " {cell} x{count}")?;
        }
        writeln!(f)?;
        write!(f, "============================================")
    }
}

/// Plays `config.games` independent matches across the rayon pool.
pub fn run_series(config: SimulationConfig) -> SeriesReport {
    let report = (0..config.games)
        .into_par_iter()
        .map(|i| simulate_match(config.base_seed.wrapping_add(i as u64), config.max_turns))
        .fold(SeriesReport::default, |mut report, summary| {
            report.add(&summary);
            report
        })
        .reduce(SeriesReport::default, SeriesReport::merge);

    info!(
        "series of {} games done, {} undecided after {} turns",
        report.games, report.undecided, config.max_turns
    );
    report
}
