//! Input events and the errors raised when they cannot be applied.
//!
//! Inputs are discrete user intents delivered by the view layer. They
//! are validated against the current phase before anything is mutated.

use super::{PhaseKind, Player, Tile};
use serde::{Deserialize, Serialize};

/// A discrete user action fed into the phase machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Input {
    /// Leave the rules screen and start the match.
    ConfirmRules,
    /// The pending player confirms they are at the device.
    AcknowledgeHandoff,
    /// Tentatively choose a tile from the acting player's hand.
    SelectTile(Tile),
    /// Lock in the tentative choice.
    ConfirmCommitment,
    /// Skip the rest of the result dwell (only when click-through is enabled).
    Dismiss,
    /// Start a fresh match after game over.
    Restart,
}

impl std::fmt::Display for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Input::ConfirmRules => write!(f, "confirm rules"),
            Input::AcknowledgeHandoff => write!(f, "acknowledge hand-off"),
            Input::SelectTile(tile) => write!(f, "select tile {}", tile),
            Input::ConfirmCommitment => write!(f, "confirm commitment"),
            Input::Dismiss => write!(f, "dismiss result"),
            Input::Restart => write!(f, "restart"),
        }
    }
}

/// A player's request to lock in a tile for the current round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Commitment {
    /// Committing player.
    pub player: Player,
    /// Tile being committed.
    pub tile: Tile,
}

impl std::fmt::Display for Commitment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.tile)
    }
}

/// Precondition failure inside a [`SessionState`](super::SessionState) mutator.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum SessionError {
    /// No first player has been chosen yet.
    #[display("Match has not started")]
    NotStarted,

    /// A first player was already chosen for this match.
    #[display("Match has already started")]
    AlreadyStarted,

    /// It is not this player's turn.
    #[display("It's not {}'s turn", _0)]
    NotPlayersTurn(Player),

    /// The tile was already consumed (or never in the hand).
    #[display("{} no longer holds tile {}", player, tile)]
    TileNotInHand {
        /// Player who tried to commit.
        player: Player,
        /// Tile they tried to commit.
        tile: Tile,
    },

    /// The player already committed this round.
    #[display("{} has already committed this round", _0)]
    AlreadyCommitted(Player),

    /// The player has not committed yet.
    #[display("{} has not committed yet", _0)]
    MissingCommitment(Player),

    /// The current round has already been scored.
    #[display("Round {} was already scored", _0)]
    RoundAlreadyScored(u8),

    /// The current round has not been scored yet.
    #[display("Round {} has not been scored", _0)]
    RoundNotScored(u8),

    /// The match is over and the tally already recorded.
    #[display("Match is already over")]
    MatchOver,

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for SessionError {}

/// Why the phase machine rejected an input.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum TransitionError {
    /// The input has no meaning in the current phase.
    #[display("Cannot {} during {}", input, phase)]
    InvalidTransition {
        /// Phase the machine was in.
        phase: PhaseKind,
        /// Rejected input.
        input: Input,
    },

    /// Confirm was sent before any tile was selected.
    #[display("No tile selected")]
    NoSelection,

    /// A session mutator refused the change.
    #[display("{}", _0)]
    Session(SessionError),
}

impl std::error::Error for TransitionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TransitionError::Session(err) => Some(err),
            _ => None,
        }
    }
}

impl From<SessionError> for TransitionError {
    fn from(err: SessionError) -> Self {
        TransitionError::Session(err)
    }
}
