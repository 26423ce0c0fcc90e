//! Guryongtu - terminal front end for the hot-seat nine-tile duel.
//!
//! The game itself lives in [`guryongtu_core`]; this crate adds what a
//! playable program needs around it.
//!
//! # Architecture
//!
//! - **Config**: [`AppConfig`] loaded from TOML with CLI overrides
//! - **Background**: optional decorative picture via [`BackgroundProvider`]
//! - **TUI**: [`App`] translating keys into machine inputs, rendered by [`draw`]
//!
//! # Example
//!
//! ```
//! use guryongtu::{App, AppConfig};
//! use guryongtu_core::{FixedPicker, GamePhaseMachine, Player};
//!
//! let config = AppConfig::from_toml_str("[game]\nresult_dwell_secs = 1.5\n")?;
//! let machine = GamePhaseMachine::new(
//!     config.machine_config()?,
//!     Box::new(FixedPicker(Player::One)),
//! );
//! let app = App::new(machine, None);
//! assert!(!app.should_quit());
//! # Ok::<(), guryongtu::ConfigError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod background;
mod config;
mod tui;

pub use background::{ApodProvider, Background, BackgroundProvider, NoBackground};
pub use config::{
    AppConfig, BackgroundSettings, ConfigError, DEFAULT_CONFIG_FILE, GameSettings, LoggingSettings,
};
pub use tui::{App, KeyAction, RULES, draw, key_action, move_cursor, run_tui};

pub use guryongtu_core;
