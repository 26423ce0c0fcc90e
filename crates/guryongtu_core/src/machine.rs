//! The phase machine driving a hot-seat match.
//!
//! The machine owns the [`SessionState`] exclusively. The view layer
//! feeds it [`Input`]s and periodic [`tick`](GamePhaseMachine::tick)s and
//! renders the [`Snapshot`]s it returns. Inputs that make no sense in the
//! current phase are rejected without touching any state.

use super::action::{Input, TransitionError};
use super::picker::FirstPlayerPicker;
use super::session::RoundAdvance;
use super::{HandoffReason, Phase, SessionState, Snapshot, Tally};
use derive_getters::Getters;
use derive_setters::Setters;
use std::time::{Duration, Instant};
use tracing::{debug, info, instrument};

/// Default time the result screen stays up.
pub const DEFAULT_RESULT_DWELL: Duration = Duration::from_secs(3);

/// Tunables for the phase machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Setters)]
#[setters(prefix = "with_")]
pub struct MachineConfig {
    /// How long the result screen stays up before advancing.
    result_dwell: Duration,
    /// Whether [`Input::Dismiss`] may cut the result dwell short.
    click_through: bool,
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self {
            result_dwell: DEFAULT_RESULT_DWELL,
            click_through: false,
        }
    }
}

/// Finite-state machine for one process worth of matches.
#[derive(Debug)]
pub struct GamePhaseMachine {
    session: SessionState,
    phase: Phase,
    config: MachineConfig,
    picker: Box<dyn FirstPlayerPicker>,
}

impl GamePhaseMachine {
    /// Creates a machine on the rules screen with an empty tally.
    #[instrument(skip(picker))]
    pub fn new(config: MachineConfig, picker: Box<dyn FirstPlayerPicker>) -> Self {
        Self::with_cumulative(config, picker, Tally::default())
    }

    /// Creates a machine that starts from an existing cumulative tally.
    #[instrument(skip(picker))]
    pub fn with_cumulative(
        config: MachineConfig,
        picker: Box<dyn FirstPlayerPicker>,
        cumulative: Tally,
    ) -> Self {
        Self {
            session: SessionState::new(cumulative),
            phase: Phase::Rules,
            config,
            picker,
        }
    }

    /// The current match state.
    pub fn session(&self) -> &SessionState {
        &self.session
    }

    /// The current phase.
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// The machine's configuration.
    pub fn config(&self) -> &MachineConfig {
        &self.config
    }

    /// Renderable view of the current state.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.session, &self.phase)
    }

    /// Applies an input, silently ignoring it when it is not legal now.
    pub fn handle(&mut self, input: Input, now: Instant) -> Snapshot {
        match self.try_handle(input, now) {
            Ok(snapshot) => snapshot,
            Err(err) => {
                debug!(%input, error = %err, "Input ignored");
                self.snapshot()
            }
        }
    }

    /// Applies an input, reporting why it was rejected.
    ///
    /// On error neither the phase nor the session has changed.
    #[instrument(skip(self, now), fields(phase = %self.phase.kind()))]
    pub fn try_handle(&mut self, input: Input, now: Instant) -> Result<Snapshot, TransitionError> {
        let checkpoint = self.session.clone();
        match self.transition(input, now) {
            Ok(next) => {
                debug!(from = %self.phase.kind(), to = %next.kind(), "Phase transition");
                self.phase = next;
                Ok(self.snapshot())
            }
            Err(err) => {
                self.session = checkpoint;
                Err(err)
            }
        }
    }

    /// Advances out of the result screen once the dwell has elapsed.
    ///
    /// Returns `true` when the phase changed.
    #[instrument(skip(self, now))]
    pub fn tick(&mut self, now: Instant) -> bool {
        let Phase::Result { entered_at, .. } = self.phase else {
            return false;
        };
        if now.saturating_duration_since(entered_at) < self.config.result_dwell {
            return false;
        }
        match self.leave_result() {
            Ok(next) => {
                self.phase = next;
                true
            }
            Err(err) => {
                debug!(error = %err, "Result dwell expired but could not advance");
                false
            }
        }
    }

    /// Transition table: current phase and input to the next phase.
    fn transition(&mut self, input: Input, now: Instant) -> Result<Phase, TransitionError> {
        match (&self.phase, input) {
            (Phase::Rules, Input::ConfirmRules) => {
                let first = self.picker.pick();
                self.session.begin(first)?;
                Ok(Phase::AwaitingHandoff {
                    player: first,
                    reason: HandoffReason::MatchStart,
                })
            }

            (Phase::AwaitingHandoff { player, .. }, Input::AcknowledgeHandoff) => {
                Ok(Phase::ActiveTurn {
                    player: *player,
                    selection: None,
                })
            }

            (Phase::ActiveTurn { player, .. }, Input::SelectTile(tile)) => {
                let player = *player;
                if !self.session.hand(player).contains(tile) {
                    return Err(super::SessionError::TileNotInHand { player, tile }.into());
                }
                Ok(Phase::ActiveTurn {
                    player,
                    selection: Some(tile),
                })
            }

            (Phase::ActiveTurn { player, selection }, Input::ConfirmCommitment) => {
                let player = *player;
                let tile = selection.ok_or(TransitionError::NoSelection)?;
                self.session.commit(player, tile)?;

                if self.session.first_player() == Some(player) {
                    self.session.advance_turn()?;
                    Ok(Phase::AwaitingHandoff {
                        player: player.opponent(),
                        reason: HandoffReason::SecondCommitter,
                    })
                } else {
                    let record = self.session.score_round()?;
                    Ok(Phase::Result {
                        round: *record.round(),
                        outcome: *record.outcome(),
                        entered_at: now,
                    })
                }
            }

            (Phase::Result { .. }, Input::Dismiss) if self.config.click_through => {
                self.leave_result()
            }

            (Phase::GameOver { .. }, Input::Restart) => {
                self.session = self.session.reset(true);
                info!(
                    p1_total = self.session.cumulative().get(super::Player::One),
                    p2_total = self.session.cumulative().get(super::Player::Two),
                    "New match"
                );
                Ok(Phase::Rules)
            }

            (phase, input) => Err(TransitionError::InvalidTransition {
                phase: phase.kind(),
                input,
            }),
        }
    }

    fn leave_result(&mut self) -> Result<Phase, TransitionError> {
        Ok(match self.session.advance_round_or_end()? {
            RoundAdvance::NextRound { first_player, .. } => Phase::AwaitingHandoff {
                player: first_player,
                reason: HandoffReason::RoundStart,
            },
            RoundAdvance::MatchOver(outcome) => Phase::GameOver { outcome },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::picker::FixedPicker;
    use crate::{PhaseKind, Player, Tile};

    fn machine(first: Player) -> GamePhaseMachine {
        GamePhaseMachine::new(MachineConfig::default(), Box::new(FixedPicker(first)))
    }

    fn tile(n: u8) -> Tile {
        Tile::new(n).unwrap()
    }

    #[test]
    fn test_rules_to_handoff() {
        let mut m = machine(Player::Two);
        let snap = m.handle(Input::ConfirmRules, Instant::now());
        assert_eq!(*snap.phase(), PhaseKind::AwaitingHandoff);
        assert_eq!(*snap.pending_player(), Some(Player::Two));
        assert_eq!(*snap.handoff_reason(), Some(HandoffReason::MatchStart));
    }

    #[test]
    fn test_confirm_without_selection_rejected() {
        let mut m = machine(Player::One);
        let now = Instant::now();
        m.handle(Input::ConfirmRules, now);
        m.handle(Input::AcknowledgeHandoff, now);
        assert_eq!(
            m.try_handle(Input::ConfirmCommitment, now),
            Err(TransitionError::NoSelection)
        );
        assert_eq!(m.phase().kind(), PhaseKind::ActiveTurn);
    }

    #[test]
    fn test_invalid_input_leaves_phase() {
        let mut m = machine(Player::One);
        let err = m
            .try_handle(Input::SelectTile(tile(3)), Instant::now())
            .unwrap_err();
        assert!(matches!(err, TransitionError::InvalidTransition { .. }));
        assert_eq!(*m.phase(), Phase::Rules);
    }

    #[test]
    fn test_dismiss_requires_click_through() {
        let mut m = machine(Player::One);
        let now = Instant::now();
        for input in [
            Input::ConfirmRules,
            Input::AcknowledgeHandoff,
            Input::SelectTile(tile(2)),
            Input::ConfirmCommitment,
            Input::AcknowledgeHandoff,
            Input::SelectTile(tile(3)),
            Input::ConfirmCommitment,
        ] {
            m.handle(input, now);
        }
        assert_eq!(m.phase().kind(), PhaseKind::Result);
        m.handle(Input::Dismiss, now);
        assert_eq!(m.phase().kind(), PhaseKind::Result);
    }

    #[test]
    fn test_config_setters() {
        let config = MachineConfig::default()
            .with_result_dwell(Duration::from_millis(2500))
            .with_click_through(true);
        assert_eq!(*config.result_dwell(), Duration::from_millis(2500));
        assert!(*config.click_through());
    }
}
