//! A player's remaining tiles.

use super::types::Tile;
use serde::{Deserialize, Serialize};

/// Set of tiles a player has not yet consumed.
///
/// Stored as a bitmask over `1..=9`, so duplicates are unrepresentable.
/// Tiles can only leave a hand; there is no way to put one back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hand {
    mask: u16,
}

const FULL: u16 = 0b11_1111_1110;

fn bit(tile: Tile) -> u16 {
    1 << tile.value()
}

impl Hand {
    /// A full hand holding every tile 1 through 9.
    pub fn full() -> Self {
        Self { mask: FULL }
    }

    /// Whether the tile is still in the hand.
    pub fn contains(&self, tile: Tile) -> bool {
        self.mask & bit(tile) != 0
    }

    /// Removes a tile, returning whether it was present.
    pub(crate) fn consume(&mut self, tile: Tile) -> bool {
        let present = self.contains(tile);
        self.mask &= !bit(tile);
        present
    }

    /// Number of tiles left.
    pub fn len(&self) -> usize {
        self.mask.count_ones() as usize
    }

    /// Whether every tile has been played.
    pub fn is_empty(&self) -> bool {
        self.mask == 0
    }

    /// Remaining tiles in ascending order.
    pub fn tiles(&self) -> impl Iterator<Item = Tile> + '_ {
        Tile::ALL.into_iter().filter(|t| self.contains(*t))
    }

    /// Remaining tiles collected into a vector.
    pub fn to_vec(&self) -> Vec<Tile> {
        self.tiles().collect()
    }
}

impl Default for Hand {
    fn default() -> Self {
        Self::full()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tile(n: u8) -> Tile {
        Tile::new(n).unwrap()
    }

    #[test]
    fn test_full_hand() {
        let hand = Hand::full();
        assert_eq!(hand.len(), 9);
        assert!(Tile::ALL.iter().all(|t| hand.contains(*t)));
    }

    #[test]
    fn test_consume_removes_once() {
        let mut hand = Hand::full();
        assert!(hand.consume(tile(5)));
        assert!(!hand.consume(tile(5)));
        assert_eq!(hand.len(), 8);
        assert!(!hand.contains(tile(5)));
    }

    #[test]
    fn test_tiles_ascending() {
        let mut hand = Hand::full();
        for n in [1, 3, 5, 7, 9] {
            hand.consume(tile(n));
        }
        let values: Vec<u8> = hand.tiles().map(Tile::value).collect();
        assert_eq!(values, vec![2, 4, 6, 8]);
    }

    #[test]
    fn test_empty() {
        let mut hand = Hand::full();
        for t in Tile::ALL {
            hand.consume(t);
        }
        assert!(hand.is_empty());
    }
}
