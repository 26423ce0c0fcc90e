//! Early-termination policy.

use super::super::{Player, Tally};
use tracing::instrument;

/// Total rounds in a match.
pub const TOTAL_ROUNDS: u8 = 9;

/// Rounds still to be played after `current_round` has been scored.
pub fn rounds_remaining(current_round: u8) -> u32 {
    u32::from(TOTAL_ROUNDS.saturating_sub(current_round))
}

/// Whether the match is decided after `current_round` has been scored.
///
/// True once the final round is played, or when the trailing player could
/// not even draw level by winning every remaining round.
#[instrument]
pub fn can_terminate_early(scores: &Tally, current_round: u8) -> bool {
    if current_round >= TOTAL_ROUNDS {
        return true;
    }
    let remaining = rounds_remaining(current_round);
    let lead = scores.get(Player::One).abs_diff(scores.get(Player::Two));
    lead > remaining
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unreachable_lead_terminates() {
        assert!(can_terminate_early(&Tally::new(5, 1), 6));
    }

    #[test]
    fn test_reachable_lead_continues() {
        assert!(!can_terminate_early(&Tally::new(3, 2), 6));
    }

    #[test]
    fn test_lead_equal_to_remaining_continues() {
        // Trailing player can still draw level.
        assert!(!can_terminate_early(&Tally::new(4, 1), 6));
    }

    #[test]
    fn test_last_round_always_terminates() {
        assert!(can_terminate_early(&Tally::new(4, 4), 9));
        assert!(can_terminate_early(&Tally::new(0, 0), 9));
    }

    #[test]
    fn test_trailing_side_does_not_matter() {
        assert!(can_terminate_early(&Tally::new(0, 5), 5));
        assert!(can_terminate_early(&Tally::new(5, 0), 5));
    }

    #[test]
    fn test_rounds_remaining() {
        assert_eq!(rounds_remaining(1), 8);
        assert_eq!(rounds_remaining(9), 0);
    }
}
