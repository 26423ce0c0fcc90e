//! Choosing who leads the first round.

use super::Player;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::instrument;

/// Source of the round-1 leader.
pub trait FirstPlayerPicker: std::fmt::Debug + Send {
    /// Picks the player who commits first in round 1.
    fn pick(&mut self) -> Player;
}

/// Uniform random choice between the two players.
#[derive(Debug)]
pub struct RandomPicker<R = StdRng> {
    rng: R,
}

impl RandomPicker<StdRng> {
    /// Picker seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic picker for reproducible matches.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng + std::fmt::Debug + Send> RandomPicker<R> {
    /// Wraps an existing generator.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng + std::fmt::Debug + Send> FirstPlayerPicker for RandomPicker<R> {
    #[instrument(skip(self))]
    fn pick(&mut self) -> Player {
        if self.rng.gen_bool(0.5) {
            Player::One
        } else {
            Player::Two
        }
    }
}

/// Always picks the same player.
#[derive(Debug, Clone, Copy)]
pub struct FixedPicker(pub Player);

impl FirstPlayerPicker for FixedPicker {
    fn pick(&mut self) -> Player {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_picker_is_reproducible() {
        let mut a = RandomPicker::seeded(7);
        let mut b = RandomPicker::seeded(7);
        let left: Vec<Player> = (0..16).map(|_| a.pick()).collect();
        let right: Vec<Player> = (0..16).map(|_| b.pick()).collect();
        assert_eq!(left, right);
    }

    #[test]
    fn test_random_picker_picks_both() {
        let mut picker = RandomPicker::seeded(42);
        let picks: Vec<Player> = (0..64).map(|_| picker.pick()).collect();
        assert!(picks.contains(&Player::One));
        assert!(picks.contains(&Player::Two));
    }

    #[test]
    fn test_fixed_picker() {
        let mut picker = FixedPicker(Player::Two);
        assert_eq!(picker.pick(), Player::Two);
        assert_eq!(picker.pick(), Player::Two);
    }
}
