//! The match aggregate and its mutators.
//!
//! `SessionState` is owned by the phase machine and only changes through
//! the mutators below. Every mutator either applies completely or leaves
//! the state untouched and reports why.

use super::action::{Commitment, SessionError};
use super::contracts::{CommitContract, Contract, ScoreContract};
use super::rules::{can_terminate_early, resolve};
use super::{Hand, MatchOutcome, Player, RoundOutcome, Tally, Tile};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// A scored round, kept in the session history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Getters, derive_new::new)]
pub struct RoundRecord {
    /// Round number (1-based).
    round: u8,
    /// Tiles committed by player 1 and player 2.
    tiles: [Tile; 2],
    /// Resolved outcome.
    outcome: RoundOutcome,
}

impl RoundRecord {
    /// Tile a given player played in this round.
    pub fn tile(&self, player: Player) -> Tile {
        self.tiles[player.index()]
    }
}

/// What [`SessionState::advance_round_or_end`] decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundAdvance {
    /// A new round begins, led by `first_player`.
    NextRound {
        /// The new round number.
        round: u8,
        /// Who commits first.
        first_player: Player,
    },
    /// The match is over.
    MatchOver(MatchOutcome),
}

/// Complete state of one match plus the tally carried across restarts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    pub(crate) hands: [Hand; 2],
    pub(crate) commitments: [Option<Tile>; 2],
    pub(crate) scores: Tally,
    pub(crate) cumulative: Tally,
    pub(crate) current_round: u8,
    pub(crate) first_player: Option<Player>,
    pub(crate) turn: Option<Player>,
    pub(crate) last_round: Option<RoundOutcome>,
    pub(crate) history: Vec<RoundRecord>,
    pub(crate) outcome: Option<MatchOutcome>,
}

impl SessionState {
    /// Creates a fresh match carrying forward `cumulative` wins.
    #[instrument]
    pub fn new(cumulative: Tally) -> Self {
        Self {
            hands: [Hand::full(); 2],
            commitments: [None; 2],
            scores: Tally::default(),
            cumulative,
            current_round: 1,
            first_player: None,
            turn: None,
            last_round: None,
            history: Vec::new(),
            outcome: None,
        }
    }

    // ─────────────────────────────────────────────────────────────
    //  Accessors
    // ─────────────────────────────────────────────────────────────

    /// Both hands, indexed by [`Player::index`].
    pub fn hands(&self) -> &[Hand; 2] {
        &self.hands
    }

    /// A single player's hand.
    pub fn hand(&self, player: Player) -> &Hand {
        &self.hands[player.index()]
    }

    /// A player's commitment for the current round.
    pub fn commitment(&self, player: Player) -> Option<Tile> {
        self.commitments[player.index()]
    }

    /// Round wins in this match.
    pub fn scores(&self) -> &Tally {
        &self.scores
    }

    /// Match wins across restarts.
    pub fn cumulative(&self) -> &Tally {
        &self.cumulative
    }

    /// Current round number, `1..=9`.
    pub fn current_round(&self) -> u8 {
        self.current_round
    }

    /// Who leads the current round.
    pub fn first_player(&self) -> Option<Player> {
        self.first_player
    }

    /// Whose commitment is being collected.
    pub fn turn(&self) -> Option<Player> {
        self.turn
    }

    /// Outcome of the most recently scored round.
    pub fn last_round(&self) -> Option<RoundOutcome> {
        self.last_round
    }

    /// Every scored round so far.
    pub fn history(&self) -> &[RoundRecord] {
        &self.history
    }

    /// Final result, once the match is over.
    pub fn outcome(&self) -> Option<&MatchOutcome> {
        self.outcome.as_ref()
    }

    /// Number of rounds scored.
    pub fn rounds_played(&self) -> usize {
        self.history.len()
    }

    /// Whether the current round has already been scored.
    pub fn round_scored(&self) -> bool {
        self.history.len() == usize::from(self.current_round)
    }

    // ─────────────────────────────────────────────────────────────
    //  Mutators
    // ─────────────────────────────────────────────────────────────

    /// Fixes who leads round 1 and opens their turn.
    #[instrument(skip(self))]
    pub fn begin(&mut self, first_player: Player) -> Result<(), SessionError> {
        if self.first_player.is_some() {
            return Err(SessionError::AlreadyStarted);
        }
        self.first_player = Some(first_player);
        self.turn = Some(first_player);
        info!(%first_player, "Match started");
        Ok(())
    }

    /// Records a player's tile for this round without consuming it.
    #[instrument(skip(self), fields(round = self.current_round))]
    pub fn commit(&mut self, player: Player, tile: Tile) -> Result<(), SessionError> {
        let commitment = Commitment::new(player, tile);
        CommitContract::pre(self, &commitment)?;

        #[cfg(debug_assertions)]
        let before = self.clone();
        self.commitments[player.index()] = Some(tile);

        #[cfg(debug_assertions)]
        if let Err(err) = CommitContract::post(&before, self) {
            *self = before;
            return Err(err);
        }

        debug!(%commitment, "Commitment recorded");
        Ok(())
    }

    /// Passes the turn to the other player once the acting player committed.
    #[instrument(skip(self))]
    pub fn advance_turn(&mut self) -> Result<(), SessionError> {
        let Some(player) = self.turn else {
            return Err(if self.outcome.is_some() {
                SessionError::MatchOver
            } else if self.round_scored() {
                SessionError::RoundAlreadyScored(self.current_round)
            } else {
                SessionError::NotStarted
            });
        };
        if self.commitment(player).is_none() {
            return Err(SessionError::MissingCommitment(player));
        }
        let next = player.opponent();
        if self.commitment(next).is_some() {
            return Err(SessionError::AlreadyCommitted(next));
        }
        self.turn = Some(next);
        debug!(from = %player, to = %next, "Turn passed");
        Ok(())
    }

    /// Resolves the round, updates scores and consumes both tiles.
    #[instrument(skip(self), fields(round = self.current_round))]
    pub fn score_round(&mut self) -> Result<RoundRecord, SessionError> {
        ScoreContract::pre(self, &())?;

        let mut next = self.clone();
        let tiles = [
            next.commitments[0].take().ok_or(SessionError::MissingCommitment(Player::One))?,
            next.commitments[1].take().ok_or(SessionError::MissingCommitment(Player::Two))?,
        ];
        let outcome = resolve(tiles[0], tiles[1]);

        if let Some(winner) = outcome.winner() {
            next.scores.increment(winner);
        }
        next.hands[0].consume(tiles[0]);
        next.hands[1].consume(tiles[1]);
        next.last_round = Some(outcome);
        next.turn = None;

        let record = RoundRecord::new(next.current_round, tiles, outcome);
        next.history.push(record);

        #[cfg(debug_assertions)]
        ScoreContract::post(self, &next)?;

        *self = next;
        info!(
            p1 = %tiles[0],
            p2 = %tiles[1],
            %outcome,
            p1_score = self.scores.get(Player::One),
            p2_score = self.scores.get(Player::Two),
            "Round scored"
        );
        Ok(record)
    }

    /// Ends the match if it is decided, otherwise opens the next round.
    ///
    /// The round winner leads the next round; after a draw the previous
    /// leader keeps the lead. Cumulative wins change only here, once per
    /// match, and not at all for a tied match.
    #[instrument(skip(self), fields(round = self.current_round))]
    pub fn advance_round_or_end(&mut self) -> Result<RoundAdvance, SessionError> {
        if self.outcome.is_some() {
            return Err(SessionError::MatchOver);
        }
        if !self.round_scored() {
            return Err(SessionError::RoundNotScored(self.current_round));
        }
        let first = self.first_player.ok_or(SessionError::NotStarted)?;

        let mut next = self.clone();
        let advance = if can_terminate_early(&next.scores, next.current_round) {
            let outcome = MatchOutcome {
                scores: next.scores,
                rounds_played: next.current_round,
            };
            if let Some(winner) = outcome.winner() {
                next.cumulative.increment(winner);
            }
            next.outcome = Some(outcome);
            RoundAdvance::MatchOver(outcome)
        } else {
            next.current_round += 1;
            let leader = next.last_round.and_then(|o| o.winner()).unwrap_or(first);
            next.first_player = Some(leader);
            next.turn = Some(leader);
            RoundAdvance::NextRound {
                round: next.current_round,
                first_player: leader,
            }
        };

        #[cfg(debug_assertions)]
        super::contracts::verify_invariants(&next)?;

        *self = next;
        match &advance {
            RoundAdvance::NextRound { round, first_player } => {
                info!(round, %first_player, "Next round")
            }
            RoundAdvance::MatchOver(outcome) => info!(
                %outcome,
                p1_total = self.cumulative.get(Player::One),
                p2_total = self.cumulative.get(Player::Two),
                "Match over"
            ),
        }
        Ok(advance)
    }

    /// Builds a fresh match, optionally carrying the cumulative tally.
    #[instrument(skip(self))]
    pub fn reset(&self, preserve_cumulative: bool) -> SessionState {
        let cumulative = if preserve_cumulative {
            self.cumulative
        } else {
            Tally::default()
        };
        SessionState::new(cumulative)
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(Tally::default())
    }
}
