//! Tests for round resolution and early termination through the public API.

use guryongtu_core::{Player, RoundOutcome, Tally, Tile, can_terminate_early, resolve};

fn tile(n: u8) -> Tile {
    Tile::new(n).unwrap()
}

#[test]
fn test_exception_always_wins() {
    assert_eq!(resolve(tile(1), tile(9)).code(), 1);
    assert_eq!(resolve(tile(9), tile(1)).code(), 2);
}

#[test]
fn test_equal_tiles_draw() {
    assert_eq!(resolve(tile(5), tile(5)), RoundOutcome::Draw);
    assert_eq!(resolve(tile(5), tile(5)).code(), 0);
}

#[test]
fn test_swap_symmetry() {
    for a in Tile::ALL {
        for b in Tile::ALL {
            if (a.value(), b.value()) == (1, 9) || (a.value(), b.value()) == (9, 1) {
                continue;
            }
            assert_eq!(
                resolve(a, b).winner(),
                resolve(b, a).winner().map(Player::opponent)
            );
        }
    }
}

#[test]
fn test_termination_examples() {
    assert!(can_terminate_early(&Tally::new(5, 1), 6));
    assert!(!can_terminate_early(&Tally::new(3, 2), 6));
}

#[test]
fn test_never_terminates_with_level_scores_before_last_round() {
    for round in 1..9 {
        let level = Tally::new(u32::from(round) / 2, u32::from(round) / 2);
        assert!(!can_terminate_early(&level, round));
    }
}
