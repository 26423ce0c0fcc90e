//! Tests for the terminal app: key translation and what each screen shows.

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{Terminal, backend::TestBackend};

use guryongtu::{App, draw};
use guryongtu_core::{FixedPicker, GamePhaseMachine, MachineConfig, PhaseKind, Player, Tile};

fn app(first: Player, config: MachineConfig) -> App {
    App::new(GamePhaseMachine::new(config, Box::new(FixedPicker(first))), None)
}

fn press(app: &mut App, code: KeyCode, now: Instant) {
    app.handle_key(KeyEvent::from(code), now);
}

fn render(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(100, 30)).expect("Test terminal");
    terminal.draw(|f| draw(f, app)).expect("Draw failed");
    let buffer = terminal.backend().buffer();
    let width = buffer.area.width as usize;
    buffer
        .content()
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_keys_drive_a_full_round() {
    let mut app = app(Player::One, MachineConfig::default());
    let now = Instant::now();

    press(&mut app, KeyCode::Enter, now);
    assert_eq!(*app.snapshot().phase(), PhaseKind::AwaitingHandoff);
    press(&mut app, KeyCode::Enter, now);
    assert_eq!(*app.snapshot().phase(), PhaseKind::ActiveTurn);

    // Confirm without a selection does nothing.
    press(&mut app, KeyCode::Enter, now);
    assert_eq!(*app.snapshot().phase(), PhaseKind::ActiveTurn);

    press(&mut app, KeyCode::Char('4'), now);
    assert_eq!(*app.snapshot().selection(), Some(Tile::new(4).unwrap()));
    assert_eq!(app.cursor(), 3);
    press(&mut app, KeyCode::Enter, now);
    assert_eq!(*app.snapshot().pending_player(), Some(Player::Two));

    press(&mut app, KeyCode::Enter, now);
    press(&mut app, KeyCode::Char('5'), now);
    press(&mut app, KeyCode::Enter, now);
    assert_eq!(*app.snapshot().phase(), PhaseKind::Result);

    assert!(!app.tick(now + Duration::from_secs(1)));
    assert!(app.tick(now + Duration::from_secs(3)));
    assert_eq!(*app.snapshot().phase(), PhaseKind::AwaitingHandoff);
    assert_eq!(*app.snapshot().pending_player(), Some(Player::Two));
    assert_eq!(app.snapshot().scores().get(Player::Two), 1);
}

#[test]
fn test_arrows_move_cursor_and_select() {
    let mut app = app(Player::Two, MachineConfig::default());
    let now = Instant::now();
    press(&mut app, KeyCode::Enter, now);
    press(&mut app, KeyCode::Enter, now);

    press(&mut app, KeyCode::Left, now);
    assert_eq!(app.cursor(), 0);
    assert_eq!(*app.snapshot().selection(), Some(Tile::MIN));

    press(&mut app, KeyCode::Right, now);
    press(&mut app, KeyCode::Right, now);
    assert_eq!(app.cursor(), 2);
    assert_eq!(*app.snapshot().selection(), Some(Tile::new(3).unwrap()));

    for _ in 0..20 {
        press(&mut app, KeyCode::Right, now);
    }
    assert_eq!(app.cursor(), 8);
    assert_eq!(*app.snapshot().selection(), Some(Tile::MAX));
}

#[test]
fn test_enter_skips_result_only_with_click_through() {
    let now = Instant::now();
    let cases = [
        (false, PhaseKind::Result),
        (true, PhaseKind::AwaitingHandoff),
    ];
    for (click_through, expected) in cases {
        let mut app = app(
            Player::One,
            MachineConfig::default().with_click_through(click_through),
        );
        for code in [
            KeyCode::Enter,
            KeyCode::Enter,
            KeyCode::Char('1'),
            KeyCode::Enter,
            KeyCode::Enter,
            KeyCode::Char('9'),
            KeyCode::Enter,
        ] {
            press(&mut app, code, now);
        }
        assert_eq!(*app.snapshot().phase(), PhaseKind::Result);
        press(&mut app, KeyCode::Enter, now);
        assert_eq!(*app.snapshot().phase(), expected);
    }
}

#[test]
fn test_quit_keys() {
    let mut app = app(Player::One, MachineConfig::default());
    press(&mut app, KeyCode::Char('q'), Instant::now());
    assert!(app.should_quit());
}

#[test]
fn test_screens_show_only_what_players_may_see() {
    let mut app = app(Player::One, MachineConfig::default());
    let now = Instant::now();

    let rules = render(&app);
    assert!(rules.contains("lowest tile 1 beats the highest tile 9"));
    assert!(rules.contains("only the tile colours are shown"));

    press(&mut app, KeyCode::Enter, now);
    let gate = render(&app);
    assert!(gate.contains("STOP!"));
    assert!(gate.contains("Player 1"));
    assert!(gate.contains("to lead"));

    press(&mut app, KeyCode::Enter, now);
    press(&mut app, KeyCode::Char('4'), now);
    let turn = render(&app);
    assert!(turn.contains("Round 1 / 9"));
    assert!(turn.contains("Selected: 4"));
    assert!(turn.contains("[Enter] confirm"));

    press(&mut app, KeyCode::Enter, now);
    let gate = render(&app);
    assert!(gate.contains("STOP!"));
    assert!(!gate.contains("Selected"));
    assert!(!gate.contains("to lead"));

    press(&mut app, KeyCode::Enter, now);
    let turn = render(&app);
    assert!(turn.contains("colour hint"));
    assert!(turn.contains("black"));
    assert!(!turn.contains("[Enter] confirm"));

    press(&mut app, KeyCode::Char('7'), now);
    press(&mut app, KeyCode::Enter, now);
    let result = render(&app);
    assert!(result.contains("Round 1 result"));
    assert!(result.contains("black"));
    assert!(result.contains("white"));
    assert!(result.contains("VS"));
    assert!(result.contains("Player 2 wins!"));
    // Only the backs are revealed, never the numbers.
    assert!(!result.contains('4'));
    assert!(!result.contains('7'));
}
