//! Hand size invariant: each hand shrinks by exactly one tile per scored round.

use super::super::{Player, SessionState};
use super::Invariant;
use strum::IntoEnumIterator;

/// Invariant: both hands hold `9 - rounds_played` tiles, and the history
/// is either caught up with the round counter or one round behind it.
pub struct HandSizeInvariant;

impl Invariant<SessionState> for HandSizeInvariant {
    fn holds(session: &SessionState) -> bool {
        let played = session.rounds_played();
        let round = usize::from(session.current_round());

        if played + 1 != round && played != round {
            return false;
        }

        Player::iter().all(|p| session.hand(p).len() + played == 9)
    }

    fn description() -> &'static str {
        "Each hand holds 9 minus rounds played tiles"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Tally, Tile};

    #[test]
    fn test_fresh_session_holds() {
        assert!(HandSizeInvariant::holds(&SessionState::new(Tally::default())));
    }

    #[test]
    fn test_uncounted_removal_violates() {
        let mut session = SessionState::new(Tally::default());
        session.hands[1].consume(Tile::MAX);
        assert!(!HandSizeInvariant::holds(&session));
    }
}
