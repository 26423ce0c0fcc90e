//! Read-only view of the machine handed to the view layer.
//!
//! A snapshot exposes only what the players may see at this moment: the
//! acting player's hand during their own turn, the colour (not the number)
//! of the leader's tile to the second committer, and both tiles once the
//! round is resolved.

use super::{
    HandoffReason, MatchOutcome, Parity, Phase, PhaseKind, Player, RoundOutcome, SessionState,
    Tally, Tile,
};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// Both tiles of a resolved round, shown on the result screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct RoundReveal {
    /// Round that was resolved.
    round: u8,
    /// Tiles of player 1 and player 2.
    tiles: [Tile; 2],
    /// Back colours of those tiles.
    parities: [Parity; 2],
    /// Who took the round.
    outcome: RoundOutcome,
}

/// Immutable, renderable state of the machine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Snapshot {
    /// Current phase tag.
    phase: PhaseKind,
    /// Current round number.
    round: u8,
    /// Round wins this match.
    scores: Tally,
    /// Match wins across restarts.
    cumulative: Tally,
    /// Leader of the current round, once chosen.
    first_player: Option<Player>,
    /// Player the hand-off or turn is waiting on.
    pending_player: Option<Player>,
    /// Why the privacy gate is up, during hand-off.
    handoff_reason: Option<HandoffReason>,
    /// Tiles left per player (counts are public).
    hand_sizes: [usize; 2],
    /// Acting player's hand, only during their own turn.
    acting_hand: Option<Vec<Tile>>,
    /// Acting player's tentative selection.
    selection: Option<Tile>,
    /// Colour of the leader's committed tile, shown to the second committer.
    color_hint: Option<Parity>,
    /// Both tiles, only on the result screen.
    reveal: Option<RoundReveal>,
    /// Final result, only after game over.
    final_outcome: Option<MatchOutcome>,
}

impl Snapshot {
    /// Captures what may be shown for `phase`.
    pub fn capture(session: &SessionState, phase: &Phase) -> Self {
        let mut hand_sizes = [0; 2];
        for player in Player::iter() {
            hand_sizes[player.index()] = session.hand(player).len();
        }

        let mut snapshot = Self {
            phase: phase.kind(),
            round: session.current_round(),
            scores: *session.scores(),
            cumulative: *session.cumulative(),
            first_player: session.first_player(),
            pending_player: None,
            handoff_reason: None,
            hand_sizes,
            acting_hand: None,
            selection: None,
            color_hint: None,
            reveal: None,
            final_outcome: None,
        };

        match phase {
            Phase::Rules => {}
            Phase::AwaitingHandoff { player, reason } => {
                snapshot.pending_player = Some(*player);
                snapshot.handoff_reason = Some(*reason);
            }
            Phase::ActiveTurn { player, selection } => {
                snapshot.pending_player = Some(*player);
                snapshot.acting_hand = Some(session.hand(*player).to_vec());
                snapshot.selection = *selection;
                if session.first_player() != Some(*player) {
                    snapshot.color_hint = session
                        .commitment(player.opponent())
                        .map(Tile::parity);
                }
            }
            Phase::Result { round, outcome, .. } => {
                snapshot.reveal = session
                    .history()
                    .iter()
                    .find(|r| r.round() == round)
                    .map(|r| RoundReveal {
                        round: *round,
                        tiles: *r.tiles(),
                        parities: [r.tiles()[0].parity(), r.tiles()[1].parity()],
                        outcome: *outcome,
                    });
            }
            Phase::GameOver { outcome } => {
                snapshot.final_outcome = Some(*outcome);
            }
        }

        snapshot
    }

    /// Whether the confirm action is currently meaningful for the acting player.
    pub fn can_confirm(&self) -> bool {
        self.phase != PhaseKind::ActiveTurn || self.selection.is_some()
    }
}
