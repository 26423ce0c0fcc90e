//! Keyboard mapping for the hot-seat screens.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use guryongtu_core::Tile;

/// What a key press means, independent of the current phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Enter or Space: the phase's single confirm action.
    Confirm,
    /// A digit picks that tile directly.
    Pick(Tile),
    /// Move the hand cursor left.
    Left,
    /// Move the hand cursor right.
    Right,
    /// Leave the program.
    Quit,
}

/// Maps a key event to an action, or `None` for unbound keys.
pub fn key_action(key: KeyEvent) -> Option<KeyAction> {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(KeyAction::Quit)
        }
        KeyCode::Char('q') | KeyCode::Esc => Some(KeyAction::Quit),
        KeyCode::Enter | KeyCode::Char(' ') => Some(KeyAction::Confirm),
        KeyCode::Left | KeyCode::Char('h') => Some(KeyAction::Left),
        KeyCode::Right | KeyCode::Char('l') => Some(KeyAction::Right),
        KeyCode::Char(c) => c
            .to_digit(10)
            .and_then(|d| Tile::new(d as u8).ok())
            .map(KeyAction::Pick),
        _ => None,
    }
}

/// Moves the cursor within a hand of `len` tiles, clamping at both ends.
pub fn move_cursor(cursor: usize, len: usize, action: KeyAction) -> usize {
    match action {
        KeyAction::Left => cursor.saturating_sub(1),
        KeyAction::Right if cursor + 1 < len => cursor + 1,
        _ => cursor.min(len.saturating_sub(1)),
    }
}
