//! Terminal front end for the duel.

mod app;
mod input;
mod ui;

pub use app::App;
pub use input::{KeyAction, key_action, move_cursor};
pub use ui::{RULES, draw};

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};
use tracing::{error, info, instrument};

/// How long each loop iteration waits for a key before ticking the machine.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Runs the terminal UI until the user quits.
///
/// Sets up the terminal, drives the event loop, and restores the terminal
/// on exit even when the loop fails.
pub async fn run_tui(mut app: App) -> Result<()> {
    info!("Starting terminal UI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_loop(&mut terminal, &mut app).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Event loop error");
    }
    res
}

#[instrument(skip_all)]
async fn run_loop<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|f| draw(f, app))?;

        if event::poll(POLL_INTERVAL)?
            && let Event::Key(key) = event::read()?
        {
            // Skip key release events (crossterm fires both press and release).
            if key.kind == KeyEventKind::Release {
                continue;
            }
            app.handle_key(key, Instant::now());
        }

        if app.should_quit() {
            info!("Leaving terminal UI");
            return Ok(());
        }

        app.tick(Instant::now());
        tokio::task::yield_now().await;
    }
}
