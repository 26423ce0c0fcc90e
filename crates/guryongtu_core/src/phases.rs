//! Phases of the match and the outcomes they carry.

use super::{Player, Tally, Tile};
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Why the privacy gate is up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HandoffReason {
    /// First commitment of the match; announces the randomly chosen leader.
    MatchStart,
    /// First commitment of a later round; announces who leads it.
    RoundStart,
    /// The leader has committed and passes the device to the other player.
    SecondCommitter,
}

impl HandoffReason {
    /// Whether this hand-off announces the round's first player.
    pub fn announces_first_player(self) -> bool {
        matches!(self, HandoffReason::MatchStart | HandoffReason::RoundStart)
    }
}

/// Result of a single round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundOutcome {
    /// A player took the round.
    Winner(Player),
    /// Equal tiles, nobody scores.
    Draw,
}

impl RoundOutcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            RoundOutcome::Winner(player) => Some(*player),
            RoundOutcome::Draw => None,
        }
    }

    /// Returns true if the round was drawn.
    pub fn is_draw(&self) -> bool {
        matches!(self, RoundOutcome::Draw)
    }

    /// Numeric code: 0 for a draw, otherwise the winning player's number.
    pub fn code(&self) -> u8 {
        self.winner().map_or(0, Player::number)
    }
}

impl std::fmt::Display for RoundOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoundOutcome::Winner(player) => write!(f, "{} wins the round", player),
            RoundOutcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Final result of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MatchOutcome {
    /// Round scores when the match ended.
    pub scores: Tally,
    /// Rounds actually played (early termination may leave some unplayed).
    pub rounds_played: u8,
}

impl MatchOutcome {
    /// Winner of the match, `None` on a tied final score.
    pub fn winner(&self) -> Option<Player> {
        self.scores.leader()
    }
}

impl std::fmt::Display for MatchOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.winner() {
            Some(player) => write!(
                f,
                "{} wins the match {}-{}",
                player,
                self.scores.get(player),
                self.scores.get(player.opponent())
            ),
            None => write!(
                f,
                "Match drawn {}-{}",
                self.scores.get(Player::One),
                self.scores.get(Player::Two)
            ),
        }
    }
}

/// Current phase of the machine.
///
/// Each variant carries exactly the data that phase needs, so an
/// `ActiveTurn` always knows whose turn it is and a `GameOver` always has
/// an outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    /// Rules screen, waiting for the players to start.
    Rules,
    /// Privacy gate before `player` may see their hand.
    AwaitingHandoff {
        /// Player who must acknowledge before the hand is shown.
        player: Player,
        /// Why the gate is up.
        reason: HandoffReason,
    },
    /// `player` is choosing a tile.
    ActiveTurn {
        /// Acting player.
        player: Player,
        /// Tentative choice, replaced freely until confirmed.
        selection: Option<Tile>,
    },
    /// Both tiles are revealed; waits out the dwell timeout.
    Result {
        /// Round that was just resolved.
        round: u8,
        /// How it went.
        outcome: RoundOutcome,
        /// When the phase was entered.
        entered_at: Instant,
    },
    /// Match finished.
    GameOver {
        /// Final result.
        outcome: MatchOutcome,
    },
}

impl Phase {
    /// Serializable tag for the phase.
    pub fn kind(&self) -> PhaseKind {
        match self {
            Phase::Rules => PhaseKind::Rules,
            Phase::AwaitingHandoff { .. } => PhaseKind::AwaitingHandoff,
            Phase::ActiveTurn { .. } => PhaseKind::ActiveTurn,
            Phase::Result { .. } => PhaseKind::Result,
            Phase::GameOver { .. } => PhaseKind::GameOver,
        }
    }
}

/// Data-free tag of a [`Phase`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum PhaseKind {
    /// See [`Phase::Rules`].
    Rules,
    /// See [`Phase::AwaitingHandoff`].
    AwaitingHandoff,
    /// See [`Phase::ActiveTurn`].
    ActiveTurn,
    /// See [`Phase::Result`].
    Result,
    /// See [`Phase::GameOver`].
    GameOver,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_outcome_code() {
        assert_eq!(RoundOutcome::Draw.code(), 0);
        assert_eq!(RoundOutcome::Winner(Player::One).code(), 1);
        assert_eq!(RoundOutcome::Winner(Player::Two).code(), 2);
    }

    #[test]
    fn test_match_outcome_display() {
        let outcome = MatchOutcome {
            scores: Tally::new(2, 5),
            rounds_played: 7,
        };
        assert_eq!(outcome.winner(), Some(Player::Two));
        assert_eq!(outcome.to_string(), "Player 2 wins the match 5-2");

        let tied = MatchOutcome {
            scores: Tally::new(4, 4),
            rounds_played: 9,
        };
        assert_eq!(tied.winner(), None);
        assert_eq!(tied.to_string(), "Match drawn 4-4");
    }
}
