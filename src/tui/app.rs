//! Application state: the machine plus view-only cursor state.

use super::input::{KeyAction, key_action, move_cursor};
use crate::background::Background;
use crossterm::event::KeyEvent;
use guryongtu_core::{GamePhaseMachine, Input, PhaseKind, Snapshot};
use std::time::Instant;
use tracing::{debug, info};

/// Main application state.
///
/// The app never touches game state directly; it only translates keys
/// into [`Input`]s and keeps the latest [`Snapshot`] for rendering.
#[derive(Debug)]
pub struct App {
    machine: GamePhaseMachine,
    snapshot: Snapshot,
    cursor: usize,
    background_title: Option<String>,
    should_quit: bool,
}

impl App {
    /// Creates the app around a fresh machine.
    pub fn new(machine: GamePhaseMachine, background: Option<&Background>) -> Self {
        let snapshot = machine.snapshot();
        Self {
            machine,
            snapshot,
            cursor: 0,
            background_title: background.map(|b| b.title().clone()),
            should_quit: false,
        }
    }

    /// Latest snapshot.
    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// Index of the highlighted tile in the acting hand.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Title of the background picture, if one was fetched.
    pub fn background_title(&self) -> Option<&str> {
        self.background_title.as_deref()
    }

    /// Whether the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        let Some(action) = key_action(key) else {
            return;
        };
        debug!(?action, phase = %self.snapshot.phase(), "Key action");

        match action {
            KeyAction::Quit => {
                info!("User quit");
                self.should_quit = true;
            }
            KeyAction::Confirm => {
                let input = match self.snapshot.phase() {
                    PhaseKind::Rules => Input::ConfirmRules,
                    PhaseKind::AwaitingHandoff => Input::AcknowledgeHandoff,
                    PhaseKind::ActiveTurn => Input::ConfirmCommitment,
                    PhaseKind::Result => Input::Dismiss,
                    PhaseKind::GameOver => Input::Restart,
                };
                self.apply(input, now);
            }
            KeyAction::Pick(tile) => {
                self.apply(Input::SelectTile(tile), now);
                let index = self
                    .snapshot
                    .acting_hand()
                    .as_ref()
                    .and_then(|hand| hand.iter().position(|t| *t == tile));
                if let Some(index) = index {
                    self.cursor = index;
                }
            }
            KeyAction::Left | KeyAction::Right => {
                let Some(hand) = self.snapshot.acting_hand().clone() else {
                    return;
                };
                self.cursor = move_cursor(self.cursor, hand.len(), action);
                if let Some(tile) = hand.get(self.cursor) {
                    self.apply(Input::SelectTile(*tile), now);
                }
            }
        }
    }

    /// Advances timers; returns `true` when the screen changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.machine.tick(now) {
            self.refresh();
            true
        } else {
            false
        }
    }

    fn apply(&mut self, input: Input, now: Instant) {
        self.machine.handle(input, now);
        self.refresh();
    }

    fn refresh(&mut self) {
        let next = self.machine.snapshot();
        if next.phase() != self.snapshot.phase()
            || next.pending_player() != self.snapshot.pending_player()
        {
            self.cursor = 0;
        }
        self.snapshot = next;
    }
}
