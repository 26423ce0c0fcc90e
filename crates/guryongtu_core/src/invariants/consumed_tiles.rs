//! Consumed tiles invariant: a played tile never comes back.

use super::super::{Player, SessionState, Tile};
use super::Invariant;
use strum::IntoEnumIterator;

/// Invariant: for each player, the tiles in the history and the tiles in
/// hand partition `1..=9` with no tile appearing twice.
pub struct ConsumedTilesInvariant;

impl Invariant<SessionState> for ConsumedTilesInvariant {
    fn holds(session: &SessionState) -> bool {
        Player::iter().all(|p| {
            let hand = session.hand(p);
            let played: Vec<Tile> = session.history().iter().map(|r| r.tile(p)).collect();

            let unique = played
                .iter()
                .enumerate()
                .all(|(i, t)| !played[..i].contains(t));

            unique && played.iter().all(|t| !hand.contains(*t)) && played.len() + hand.len() == 9
        })
    }

    fn description() -> &'static str {
        "Played tiles are unique and never return to a hand"
    }
}
