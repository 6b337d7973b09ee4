//! The game engine: dealing, the turn state machine, and round resolution.
//!
//! - `engine`: `TopTrumps`, which deals a `GameState` from a catalog
//! - `state`: `GameState`, phases, outcomes and read accessors
//! - `round`: `play_round` and `advance_round`

pub mod engine;
mod round;
pub mod state;

pub use engine::{deal, TopTrumps};
pub use state::{AlivePlayers, GameState, Phase, RoundOutcome, Standing};
