use std::{fmt::Display, num::NonZeroU8};

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::ludo::GameError;

/// The value of a single die, always between 1 and 6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Roll {
    value: NonZeroU8,
}

impl Roll {
    pub const ALL: [Roll; 6] = [
        Roll::from_const(1),
        Roll::from_const(2),
        Roll::from_const(3),
        Roll::from_const(4),
        Roll::from_const(5),
        Roll::from_const(6),
    ];

    /// The only roll that brings a piece out of home.
    pub const SIX: Roll = Roll::from_const(6);

    const fn from_const(value: u8) -> Self {
        match NonZeroU8::new(value) {
            Some(value) if value.get() <= 6 => Roll { value },
            _ => panic!("a die shows 1 to 6"),
        }
    }

    pub fn new(value: u8) -> Result<Self, GameError> {
        match NonZeroU8::new(value) {
            Some(value) if value.get() <= 6 => Ok(Roll { value }),
            _ => Err(GameError::InvalidRoll(value)),
        }
    }

    pub fn get(&self) -> u8 {
        self.value.get()
    }

    pub fn is_six(&self) -> bool {
        *self == Roll::SIX
    }
}

impl Display for Roll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Source of die rolls for a game.
pub trait Die {
    fn roll(&mut self) -> Roll;
}

/// A fair six-sided die.
#[derive(Debug, Clone)]
pub struct RandomDie {
    rng: StdRng,
}

impl RandomDie {
    pub fn from_entropy() -> Self {
        RandomDie { rng: StdRng::from_os_rng() }
    }

    /// Same seed, same sequence of rolls.
    pub fn seeded(seed: u64) -> Self {
        RandomDie { rng: StdRng::seed_from_u64(seed) }
    }
}

impl Die for RandomDie {
    fn roll(&mut self) -> Roll {
        Roll::ALL[self.rng.random_range(0..Roll::ALL.len())]
    }
}

/// Plays back a fixed list of rolls, starting over once the list runs out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedDie {
    rolls: Vec<Roll>,
    next: usize,
}

impl LoadedDie {
    pub fn new(values: &[u8]) -> Result<Self, GameError> {
        if values.is_empty() {
            return Err(GameError::EmptyRollScript);
        }
        let rolls = values
            .iter()
            .map(|&value| Roll::new(value))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(LoadedDie { rolls, next: 0 })
    }
}

impl Die for LoadedDie {
    fn roll(&mut self) -> Roll {
        let roll = self.rolls[self.next];
        self.next = (self.next + 1) % self.rolls.len();
        roll
    }
}

impl<D: Die + ?Sized> Die for Box<D> {
    fn roll(&mut self) -> Roll {
        (**self).roll()
    }
}
