//! Guryongtu - hot-seat nine-tile duel.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use guryongtu::{
    ApodProvider, App, AppConfig, BackgroundProvider, LoggingSettings, NoBackground, RULES,
    run_tui,
};
use guryongtu_core::{GamePhaseMachine, RandomPicker};
use std::path::PathBuf;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (NASA_API_KEY lives there)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command.unwrap_or_default() {
        Command::Play {
            config,
            seed,
            no_background,
            dwell,
            click_through,
        } => run_play(config, seed, no_background, dwell, click_through).await,
        Command::Rules => {
            for rule in RULES {
                println!("{}", rule);
            }
            Ok(())
        }
    }
}

/// Sends logs to a file so they do not interfere with the TUI.
fn init_logging(settings: &LoggingSettings) -> Result<()> {
    let log_file = std::fs::File::create(settings.file())
        .with_context(|| format!("Failed to create log file {}", settings.file().display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(settings.filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

/// Runs a match in the terminal.
#[instrument(skip_all)]
async fn run_play(
    config_path: Option<PathBuf>,
    seed: Option<u64>,
    no_background: bool,
    dwell: Option<f64>,
    click_through: bool,
) -> Result<()> {
    let mut config = AppConfig::load(config_path.as_deref())?;
    if let Some(seed) = seed {
        config.set_seed(seed);
    }
    if let Some(dwell) = dwell {
        config.set_result_dwell_secs(dwell)?;
    }
    if click_through {
        config.enable_click_through();
    }
    if no_background {
        config.disable_background();
    }

    init_logging(config.logging())?;
    info!(?config, "Starting guryongtu");

    let provider: Box<dyn BackgroundProvider> = if *config.background().enabled() {
        Box::new(ApodProvider::from_settings(config.background()))
    } else {
        Box::new(NoBackground)
    };
    let background = provider.try_fetch_background().await;

    let picker = match config.game().seed() {
        Some(seed) => RandomPicker::seeded(*seed),
        None => RandomPicker::from_entropy(),
    };
    let machine = GamePhaseMachine::new(config.machine_config()?, Box::new(picker));

    run_tui(App::new(machine, background.as_ref())).await
}
