//! Guryongtu core - round and session state machine for a hot-seat tile duel.
//!
//! Two players each hold tiles 1 through 9. Every round both secretly commit
//! one tile; the higher tile wins, except that a 1 always beats a 9. The match
//! lasts nine rounds or ends early once the trailing player cannot catch up.
//!
//! # Architecture
//!
//! - **Types**: [`Tile`], [`Parity`], [`Player`], [`Tally`], [`Hand`]
//! - **Rules**: pure [`resolve`] and [`can_terminate_early`]
//! - **Session**: [`SessionState`], mutated only through checked mutators
//! - **Machine**: [`GamePhaseMachine`], driven by [`Input`]s, emitting [`Snapshot`]s
//!
//! # Example
//!
//! ```
//! use guryongtu_core::{FixedPicker, GamePhaseMachine, Input, MachineConfig, Player, Tile};
//! use std::time::Instant;
//!
//! let mut machine =
//!     GamePhaseMachine::new(MachineConfig::default(), Box::new(FixedPicker(Player::One)));
//! let now = Instant::now();
//! machine.handle(Input::ConfirmRules, now);
//! machine.handle(Input::AcknowledgeHandoff, now);
//! let snapshot = machine.handle(Input::SelectTile(Tile::MIN), now);
//! assert_eq!(*snapshot.selection(), Some(Tile::MIN));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod hand;
pub mod invariants;
mod machine;
mod phases;
mod picker;
pub mod rules;
mod session;
mod snapshot;
mod types;

pub use action::{Commitment, Input, SessionError, TransitionError};
pub use contracts::{
    CommitContract, Contract, LegalCommitment, MatchInProgress, NotYetCommitted, PlayersTurn,
    ScoreContract, TileInHand,
};
pub use hand::Hand;
pub use machine::{DEFAULT_RESULT_DWELL, GamePhaseMachine, MachineConfig};
pub use phases::{HandoffReason, MatchOutcome, Phase, PhaseKind, RoundOutcome};
pub use picker::{FirstPlayerPicker, FixedPicker, RandomPicker};
pub use rules::{can_terminate_early, resolve};
pub use session::{RoundAdvance, RoundRecord, SessionState};
pub use snapshot::{RoundReveal, Snapshot};
pub use types::{Parity, Player, Tally, Tile, TileError, classify};
