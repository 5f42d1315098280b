//! The game store: state, persistence and rendering wired together.
//!
//! Every mutation entry point follows the same cycle: check, mutate,
//! persist, render.

mod game;
mod outcome;

pub use game::GameStore;
pub use outcome::MutationOutcome;
