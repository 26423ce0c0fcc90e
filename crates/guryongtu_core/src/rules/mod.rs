//! Game rules for the nine-tile duel.
//!
//! Pure functions for resolving rounds and deciding when a match is
//! settled. Rules are kept apart from session storage so they can be
//! composed into contracts and tested on their own.

pub mod round;
pub mod termination;

pub use round::resolve;
pub use termination::{can_terminate_early, rounds_remaining};
