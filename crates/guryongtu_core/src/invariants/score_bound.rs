//! Score bound invariant: scores equal the decisive rounds in the history.

use super::super::{Player, SessionState};
use super::Invariant;
use strum::IntoEnumIterator;

/// Invariant: each player's score is the number of recorded rounds they
/// won, so the total never exceeds the rounds played and draws add nothing.
pub struct ScoreBoundInvariant;

impl Invariant<SessionState> for ScoreBoundInvariant {
    fn holds(session: &SessionState) -> bool {
        if session.scores().total() as usize > session.rounds_played() {
            return false;
        }

        Player::iter().all(|p| {
            let won = session
                .history()
                .iter()
                .filter(|r| r.outcome().winner() == Some(p))
                .count();
            session.scores().get(p) as usize == won
        })
    }

    fn description() -> &'static str {
        "Scores match decisive rounds and never exceed rounds played"
    }
}
