//! Round resolution.

use super::super::{Player, RoundOutcome, Tile};
use tracing::instrument;

/// Decides who takes a round given both committed tiles.
///
/// Rules, in priority order:
/// 1. A 1 beats a 9, whichever player holds it.
/// 2. Equal tiles draw.
/// 3. Otherwise the higher tile wins.
#[instrument]
pub fn resolve(player_one: Tile, player_two: Tile) -> RoundOutcome {
    match (player_one, player_two) {
        (Tile::MIN, Tile::MAX) => RoundOutcome::Winner(Player::One),
        (Tile::MAX, Tile::MIN) => RoundOutcome::Winner(Player::Two),
        (a, b) if a == b => RoundOutcome::Draw,
        (a, b) if a > b => RoundOutcome::Winner(Player::One),
        _ => RoundOutcome::Winner(Player::Two),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tile(n: u8) -> Tile {
        Tile::new(n).unwrap()
    }

    #[test]
    fn test_one_beats_nine() {
        assert_eq!(resolve(tile(1), tile(9)), RoundOutcome::Winner(Player::One));
        assert_eq!(resolve(tile(9), tile(1)), RoundOutcome::Winner(Player::Two));
    }

    #[test]
    fn test_one_loses_to_everything_else() {
        for n in 2..=8 {
            assert_eq!(resolve(tile(1), tile(n)), RoundOutcome::Winner(Player::Two));
        }
    }

    #[test]
    fn test_nine_beats_everything_but_one() {
        for n in 2..=8 {
            assert_eq!(resolve(tile(9), tile(n)), RoundOutcome::Winner(Player::One));
        }
    }

    #[test]
    fn test_equal_tiles_draw() {
        assert_eq!(resolve(tile(5), tile(5)), RoundOutcome::Draw);
        assert_eq!(resolve(tile(1), tile(1)), RoundOutcome::Draw);
        assert_eq!(resolve(tile(9), tile(9)), RoundOutcome::Draw);
    }

    #[test]
    fn test_symmetric_outside_exception() {
        for a in Tile::ALL {
            for b in Tile::ALL {
                let pair = (a.value().min(b.value()), a.value().max(b.value()));
                if pair == (1, 9) {
                    continue;
                }
                let forward = resolve(a, b).winner();
                let backward = resolve(b, a).winner().map(Player::opponent);
                assert_eq!(forward, backward, "{a} vs {b}");
            }
        }
    }
}
