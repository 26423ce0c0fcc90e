//! Stateless rendering of snapshots.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::app::App;
use guryongtu_core::{HandoffReason, Parity, PhaseKind, Player, RoundOutcome, Snapshot, Tile};

/// Rules text shown on the first screen and by the `rules` command.
pub const RULES: [&str; 8] = [
    "1. Each player holds tiles 1 to 9 and plays one per round, nine rounds at most.",
    "2. The higher tile wins the round.",
    "3. Exception: the lowest tile 1 beats the highest tile 9.",
    "4. Tile backs: odd numbers are white, even numbers are black.",
    "5. On the result screen only the tile colours are shown, never the numbers.",
    "6. The second player sees only the colour of the leader's tile.",
    "7. The round winner leads the next round; a draw keeps the leader.",
    "8. One device, two players: look away when it is not your turn.",
];

/// Renders the whole screen for the current snapshot.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(12),   // Body
            Constraint::Length(3), // Key help
        ])
        .split(area);

    draw_title(frame, chunks[0], app.background_title());

    let snapshot = app.snapshot();
    let body = match snapshot.phase() {
        PhaseKind::Rules => rules_lines(),
        PhaseKind::AwaitingHandoff => handoff_lines(snapshot),
        PhaseKind::ActiveTurn => turn_lines(snapshot, app.cursor()),
        PhaseKind::Result => result_lines(snapshot),
        PhaseKind::GameOver => game_over_lines(snapshot),
    };
    let paragraph = Paragraph::new(body)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, chunks[1]);

    let help = Paragraph::new(help_text(snapshot))
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, chunks[2]);
}

fn draw_title(frame: &mut Frame, area: Rect, background: Option<&str>) {
    let mut spans = vec![Span::styled(
        "Guryongtu",
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
    )];
    if let Some(title) = background {
        spans.push(Span::styled(
            format!("  ~ {}", title),
            Style::default().fg(Color::DarkGray),
        ));
    }
    let title = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(title, area);
}

fn player_color(player: Player) -> Color {
    match player {
        Player::One => Color::Red,
        Player::Two => Color::Blue,
    }
}

fn player_span(player: Player) -> Span<'static> {
    Span::styled(
        player.to_string(),
        Style::default()
            .fg(player_color(player))
            .add_modifier(Modifier::BOLD),
    )
}

fn tile_style(parity: Parity) -> Style {
    match parity {
        Parity::Odd => Style::default().bg(Color::White).fg(Color::Black),
        Parity::Even => Style::default().bg(Color::Black).fg(Color::White),
    }
}

fn tile_span(tile: Tile, highlighted: bool, selected: bool) -> Span<'static> {
    let mut style = tile_style(tile.parity()).add_modifier(Modifier::BOLD);
    if selected {
        style = style.fg(Color::Yellow);
    }
    if highlighted {
        style = style.add_modifier(Modifier::UNDERLINED);
    }
    Span::styled(format!(" {} ", tile), style)
}

fn back_span(parity: Parity) -> Span<'static> {
    Span::styled("   ", tile_style(parity))
}

fn score_line(snapshot: &Snapshot) -> Line<'static> {
    Line::from(vec![
        Span::styled("P1", Style::default().fg(Color::Red)),
        Span::raw(format!(
            "  {}  vs  {}  ",
            snapshot.scores().get(Player::One),
            snapshot.scores().get(Player::Two)
        )),
        Span::styled("P2", Style::default().fg(Color::Blue)),
    ])
}

fn rules_lines() -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            "Nine Dragons Duel",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    lines.extend(RULES.iter().map(|rule| {
        let style = if ["3.", "4.", "5."].iter().any(|n| rule.starts_with(n)) {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };
        Line::from(Span::styled(*rule, style))
    }));
    lines
}

fn handoff_lines(snapshot: &Snapshot) -> Vec<Line<'static>> {
    let Some(player) = *snapshot.pending_player() else {
        return Vec::new();
    };
    let mut lines = vec![
        Line::from(Span::styled(
            "STOP!",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from("The screen is hidden."),
        Line::from(vec![
            Span::raw("Pass the device to "),
            player_span(player),
            Span::raw("."),
        ]),
        Line::from(""),
    ];

    if let Some(reason) = (*snapshot
        .handoff_reason())
        .filter(|reason| reason.announces_first_player())
    {
        let prefix = match reason {
            HandoffReason::MatchStart => "The draw picked ".to_string(),
            _ => format!("Round {} begins. ", snapshot.round()),
        };
        lines.push(Line::from(vec![
            Span::raw(prefix),
            player_span(player),
            Span::raw(" to lead."),
        ]));
    }
    lines
}

fn turn_lines(snapshot: &Snapshot, cursor: usize) -> Vec<Line<'static>> {
    let Some(player) = *snapshot.pending_player() else {
        return Vec::new();
    };
    let mut lines = vec![
        Line::from(Span::styled(
            format!("Round {} / 9", snapshot.round()),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        score_line(snapshot),
        Line::from(vec![player_span(player), Span::raw("'s turn")]),
        Line::from(""),
    ];

    match snapshot.color_hint() {
        Some(parity) => lines.push(Line::from(vec![
            Span::styled("Opponent's tile (colour hint): ", Style::default().fg(Color::Yellow)),
            back_span(*parity),
            Span::raw(format!(" {}", parity)),
        ])),
        None => lines.push(Line::from(Span::styled(
            "Your opponent is waiting.",
            Style::default().fg(Color::DarkGray),
        ))),
    }
    lines.push(Line::from(""));

    if let Some(hand) = snapshot.acting_hand() {
        let mut spans = Vec::with_capacity(hand.len() * 2);
        for (i, tile) in hand.iter().enumerate() {
            let selected = *snapshot.selection() == Some(*tile);
            spans.push(tile_span(*tile, i == cursor, selected));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
    }

    if let Some(tile) = snapshot.selection() {
        lines.push(Line::from(""));
        lines.push(Line::from(format!("Selected: {}. Press Enter to lock it in.", tile)));
    }
    lines
}

fn result_lines(snapshot: &Snapshot) -> Vec<Line<'static>> {
    let Some(reveal) = snapshot.reveal() else {
        return Vec::new();
    };
    let [p1, p2] = *reveal.parities();
    let verdict = match reveal.outcome() {
        RoundOutcome::Winner(player) => Line::from(vec![player_span(*player), Span::raw(" wins!")]),
        RoundOutcome::Draw => Line::from(Span::styled("Draw!", Style::default().fg(Color::Gray))),
    };

    vec![
        Line::from(Span::styled(
            format!("Round {} result", reveal.round()),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("P1 ", Style::default().fg(Color::Red)),
            back_span(p1),
            Span::raw(format!(" {}", p1)),
            Span::styled("  VS  ", Style::default().fg(Color::Yellow)),
            Span::raw(format!("{} ", p2)),
            back_span(p2),
            Span::styled(" P2", Style::default().fg(Color::Blue)),
        ]),
        Line::from(""),
        verdict,
        score_line(snapshot),
    ]
}

fn game_over_lines(snapshot: &Snapshot) -> Vec<Line<'static>> {
    let Some(outcome) = snapshot.final_outcome() else {
        return Vec::new();
    };
    let verdict = match outcome.winner() {
        Some(player) => Line::from(vec![player_span(player), Span::raw(" takes the match!")]),
        None => Line::from("The match is drawn."),
    };

    vec![
        Line::from(Span::styled(
            "GAME OVER",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        verdict,
        Line::from(format!(
            "Final score: {} vs {} after {} rounds",
            outcome.scores.get(Player::One),
            outcome.scores.get(Player::Two),
            outcome.rounds_played
        )),
        Line::from(format!(
            "Matches won this session: P1 {} / P2 {}",
            snapshot.cumulative().get(Player::One),
            snapshot.cumulative().get(Player::Two)
        )),
    ]
}

fn help_text(snapshot: &Snapshot) -> String {
    match snapshot.phase() {
        PhaseKind::Rules => "[Enter] start   [q] quit".to_string(),
        PhaseKind::AwaitingHandoff => match snapshot.pending_player() {
            Some(player) => format!("[Enter] I am {}   [q] quit", player),
            None => "[q] quit".to_string(),
        },
        PhaseKind::ActiveTurn if snapshot.can_confirm() => {
            "[1-9 / Left Right] choose   [Enter] confirm   [q] quit".to_string()
        }
        PhaseKind::ActiveTurn => "[1-9 / Left Right] choose   [q] quit".to_string(),
        PhaseKind::Result => "Next round shortly...   [q] quit".to_string(),
        PhaseKind::GameOver => "[Enter] play again   [q] quit".to_string(),
    }
}
