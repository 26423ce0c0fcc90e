//! Core domain types for the nine-tile duel.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One of the two hot-seat players.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum Player {
    /// Player 1.
    #[display("Player 1")]
    One,
    /// Player 2.
    #[display("Player 2")]
    Two,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Index into per-player arrays (0 or 1).
    pub fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }

    /// Player number as shown to humans (1 or 2).
    pub fn number(self) -> u8 {
        self.index() as u8 + 1
    }
}

/// Colour class of a tile's back, derived from its parity.
///
/// Odd tiles have white backs, even tiles black backs. The colour is the
/// only thing an opponent learns about a committed tile before the reveal.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Parity {
    /// Odd number, white back.
    #[display("white")]
    Odd,
    /// Even number, black back.
    #[display("black")]
    Even,
}

/// A numbered tile in `1..=9`.
///
/// Only valid tiles can be constructed, so everything downstream can treat
/// the number as trusted.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(try_from = "u8", into = "u8")]
#[display("{_0}")]
pub struct Tile(u8);

impl Tile {
    /// Lowest tile; beats [`Tile::MAX`].
    pub const MIN: Tile = Tile(1);
    /// Highest tile; loses to [`Tile::MIN`].
    pub const MAX: Tile = Tile(9);

    /// The full inventory each player starts a match with.
    pub const ALL: [Tile; 9] = [
        Tile(1),
        Tile(2),
        Tile(3),
        Tile(4),
        Tile(5),
        Tile(6),
        Tile(7),
        Tile(8),
        Tile(9),
    ];

    /// Creates a tile, rejecting numbers outside `1..=9`.
    #[instrument]
    pub fn new(number: u8) -> Result<Self, TileError> {
        if (1..=9).contains(&number) {
            Ok(Self(number))
        } else {
            Err(TileError::OutOfRange(number))
        }
    }

    /// The tile's number.
    pub fn value(self) -> u8 {
        self.0
    }

    /// Colour class of the tile's back.
    pub fn parity(self) -> Parity {
        classify(self)
    }
}

impl TryFrom<u8> for Tile {
    type Error = TileError;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        Tile::new(number)
    }
}

impl From<Tile> for u8 {
    fn from(tile: Tile) -> Self {
        tile.0
    }
}

/// Classifies a tile by parity.
pub fn classify(tile: Tile) -> Parity {
    if tile.0 % 2 == 1 {
        Parity::Odd
    } else {
        Parity::Even
    }
}

/// Error constructing a [`Tile`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum TileError {
    /// Number is not in `1..=9`.
    #[display("Tile {} is out of range (must be 1-9)", _0)]
    OutOfRange(u8),
}

impl std::error::Error for TileError {}

/// A per-player pair of counters (round scores or cumulative wins).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Tally([u32; 2]);

impl Tally {
    /// Creates a tally from explicit counts.
    pub fn new(player_one: u32, player_two: u32) -> Self {
        Self([player_one, player_two])
    }

    /// Count for one player.
    pub fn get(&self, player: Player) -> u32 {
        self.0[player.index()]
    }

    /// Adds one to a player's count.
    pub fn increment(&mut self, player: Player) {
        self.0[player.index()] += 1;
    }

    /// Sum of both counts.
    pub fn total(&self) -> u32 {
        self.0[0] + self.0[1]
    }

    /// The player strictly ahead, or `None` when level.
    pub fn leader(&self) -> Option<Player> {
        match self.0[0].cmp(&self.0[1]) {
            std::cmp::Ordering::Greater => Some(Player::One),
            std::cmp::Ordering::Less => Some(Player::Two),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// Absolute difference between the two counts.
    pub fn margin(&self) -> u32 {
        self.0[0].abs_diff(self.0[1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tile_range() {
        assert!(Tile::new(0).is_err());
        assert!(Tile::new(10).is_err());
        assert_eq!(Tile::new(1), Ok(Tile::MIN));
        assert_eq!(Tile::new(9), Ok(Tile::MAX));
    }

    #[test]
    fn test_classify() {
        assert_eq!(classify(Tile::MIN), Parity::Odd);
        assert_eq!(Tile::new(4).unwrap().parity(), Parity::Even);
        assert_eq!(Parity::Odd.to_string(), "white");
        assert_eq!(Parity::Even.to_string(), "black");
    }

    #[test]
    fn test_tile_rejects_bad_json() {
        assert!(serde_json::from_str::<Tile>("0").is_err());
        assert_eq!(serde_json::from_str::<Tile>("7").unwrap().value(), 7);
    }

    #[test]
    fn test_tally_leader() {
        let mut tally = Tally::default();
        assert_eq!(tally.leader(), None);
        tally.increment(Player::Two);
        assert_eq!(tally.leader(), Some(Player::Two));
        assert_eq!(tally.margin(), 1);
        assert_eq!(tally.total(), 1);
    }

    #[test]
    fn test_player_opponent() {
        assert_eq!(Player::One.opponent(), Player::Two);
        assert_eq!(Player::Two.opponent().number(), 1);
    }
}
