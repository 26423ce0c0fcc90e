//! Contract-based validation for session mutations.
//!
//! Contracts define correctness through preconditions and postconditions:
//! `{P} mutation {Q}`. Preconditions are always checked; postconditions
//! run in debug builds.

use super::action::{Commitment, SessionError};
use super::invariants::check_session;
use super::session::SessionState;
use tracing::instrument;

/// A contract defines preconditions and postconditions for a mutation.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), SessionError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), SessionError>;
}

// ─────────────────────────────────────────────────────────────
//  Commitment Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the match is still being played.
pub struct MatchInProgress;

impl MatchInProgress {
    /// Fails once the match has an outcome.
    pub fn check(session: &SessionState) -> Result<(), SessionError> {
        if session.outcome().is_some() {
            Err(SessionError::MatchOver)
        } else if session.first_player().is_none() {
            Err(SessionError::NotStarted)
        } else {
            Ok(())
        }
    }
}

/// Precondition: it must be the player's turn.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Fails unless `turn` names the committing player.
    #[instrument(skip(session))]
    pub fn check(commitment: &Commitment, session: &SessionState) -> Result<(), SessionError> {
        if session.turn() != Some(commitment.player) {
            Err(SessionError::NotPlayersTurn(commitment.player))
        } else {
            Ok(())
        }
    }
}

/// Precondition: the player has not committed yet this round.
pub struct NotYetCommitted;

impl NotYetCommitted {
    /// Fails if a commitment is already recorded for the player.
    #[instrument(skip(session))]
    pub fn check(commitment: &Commitment, session: &SessionState) -> Result<(), SessionError> {
        if session.commitment(commitment.player).is_some() {
            Err(SessionError::AlreadyCommitted(commitment.player))
        } else {
            Ok(())
        }
    }
}

/// Precondition: the tile is still in the player's hand.
pub struct TileInHand;

impl TileInHand {
    /// Fails for consumed tiles.
    #[instrument(skip(session))]
    pub fn check(commitment: &Commitment, session: &SessionState) -> Result<(), SessionError> {
        if session.hand(commitment.player).contains(commitment.tile) {
            Ok(())
        } else {
            Err(SessionError::TileNotInHand {
                player: commitment.player,
                tile: commitment.tile,
            })
        }
    }
}

/// Composite precondition for a commitment.
pub struct LegalCommitment;

impl LegalCommitment {
    /// Validates all commitment preconditions.
    #[instrument(skip(session))]
    pub fn check(commitment: &Commitment, session: &SessionState) -> Result<(), SessionError> {
        MatchInProgress::check(session)?;
        PlayersTurn::check(commitment, session)?;
        NotYetCommitted::check(commitment, session)?;
        TileInHand::check(commitment, session)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Contracts
// ─────────────────────────────────────────────────────────────

/// Verifies the full invariant set, folding violations into one error.
pub fn verify_invariants(session: &SessionState) -> Result<(), SessionError> {
    check_session(session).map_err(|violations| {
        let descriptions = violations
            .iter()
            .map(|v| v.description.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        SessionError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
    })
}

/// Contract for committing a tile.
///
/// Preconditions:
/// - Match started and not over
/// - Player's turn
/// - No commitment yet this round
/// - Tile still in hand
///
/// Postconditions:
/// - Session invariants hold
/// - Hands are untouched (tiles leave only when the round is scored)
pub struct CommitContract;

impl Contract<SessionState, Commitment> for CommitContract {
    fn pre(session: &SessionState, commitment: &Commitment) -> Result<(), SessionError> {
        LegalCommitment::check(commitment, session)
    }

    fn post(before: &SessionState, after: &SessionState) -> Result<(), SessionError> {
        if before.hands() != after.hands() {
            return Err(SessionError::InvariantViolation(
                "Commitment consumed a tile early".to_string(),
            ));
        }
        verify_invariants(after)
    }
}

/// Contract for scoring the current round.
///
/// Preconditions:
/// - Match in progress and round not yet scored
/// - Both players committed
///
/// Postconditions:
/// - Exactly one more round in the history
/// - Session invariants hold
pub struct ScoreContract;

impl Contract<SessionState, ()> for ScoreContract {
    fn pre(session: &SessionState, _action: &()) -> Result<(), SessionError> {
        MatchInProgress::check(session)?;
        if session.round_scored() {
            return Err(SessionError::RoundAlreadyScored(session.current_round()));
        }
        for player in [crate::Player::One, crate::Player::Two] {
            if session.commitment(player).is_none() {
                return Err(SessionError::MissingCommitment(player));
            }
        }
        Ok(())
    }

    fn post(before: &SessionState, after: &SessionState) -> Result<(), SessionError> {
        if after.rounds_played() != before.rounds_played() + 1 {
            return Err(SessionError::InvariantViolation(
                "Scoring must record exactly one round".to_string(),
            ));
        }
        verify_invariants(after)
    }
}
