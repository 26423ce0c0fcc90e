//! Commitment order invariant: the round leader always commits first.

use super::super::{Player, SessionState};
use super::Invariant;

/// Invariant: commitments only exist for the current round, the second
/// player never holds one without the leader, and a scored round has no
/// pending commitments.
pub struct CommitmentOrderInvariant;

impl Invariant<SessionState> for CommitmentOrderInvariant {
    fn holds(session: &SessionState) -> bool {
        let Some(first) = session.first_player() else {
            return session.commitment(Player::One).is_none()
                && session.commitment(Player::Two).is_none()
                && session.turn().is_none();
        };
        let second = first.opponent();

        if session.round_scored() {
            return session.commitment(first).is_none()
                && session.commitment(second).is_none()
                && session.turn().is_none();
        }

        if session.commitment(second).is_some() && session.commitment(first).is_none() {
            return false;
        }

        match session.turn() {
            Some(p) if p == first => session.commitment(second).is_none(),
            Some(_) => session.commitment(first).is_some(),
            None => false,
        }
    }

    fn description() -> &'static str {
        "Round leader commits before the second player"
    }
}
