//! First-class invariants for a match session.
//!
//! Invariants are logical properties that must hold after every session
//! mutation. They are checked in debug builds and can be tested on their own.

use super::SessionState;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of up to four invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv),+> InvariantSet<S> for ($($inv,)+)
        where
            $($inv: Invariant<S>,)+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let mut violations = Vec::new();
                $(
                    if !$inv::holds(state) {
                        violations.push(InvariantViolation::new($inv::description()));
                    }
                )+
                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);
impl_invariant_set!(I1, I2, I3, I4);

pub mod commitment_order;
pub mod consumed_tiles;
pub mod hand_size;
pub mod score_bound;

pub use commitment_order::CommitmentOrderInvariant;
pub use consumed_tiles::ConsumedTilesInvariant;
pub use hand_size::HandSizeInvariant;
pub use score_bound::ScoreBoundInvariant;

/// All session invariants as a composable set.
pub type SessionInvariants = (
    HandSizeInvariant,
    ScoreBoundInvariant,
    ConsumedTilesInvariant,
    CommitmentOrderInvariant,
);

/// Checks every session invariant.
pub fn check_session(state: &SessionState) -> Result<(), Vec<InvariantViolation>> {
    SessionInvariants::check_all(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Tally, Tile};

    fn tile(n: u8) -> Tile {
        Tile::new(n).unwrap()
    }

    #[test]
    fn test_invariant_set_holds_for_fresh_session() {
        let session = SessionState::new(Tally::default());
        assert!(check_session(&session).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_round() {
        let mut session = SessionState::new(Tally::default());
        session.begin(Player::One).unwrap();
        session.commit(Player::One, tile(3)).unwrap();
        session.advance_turn().unwrap();
        session.commit(Player::Two, tile(7)).unwrap();
        assert!(check_session(&session).is_ok());
        session.score_round().unwrap();
        assert!(check_session(&session).is_ok());
        session.advance_round_or_end().unwrap();
        assert!(check_session(&session).is_ok());
    }

    #[test]
    fn test_invariant_set_detects_violations() {
        let mut session = SessionState::new(Tally::default());
        session.begin(Player::One).unwrap();
        session.scores.increment(Player::Two);
        session.hands[0].consume(tile(4));

        let violations = check_session(&session).unwrap_err();
        assert!(violations.len() >= 2);
    }

    #[test]
    fn test_two_invariants_as_set() {
        let session = SessionState::new(Tally::default());
        type TwoInvariants = (HandSizeInvariant, ScoreBoundInvariant);
        assert!(TwoInvariants::check_all(&session).is_ok());
    }
}
