//! Round resolution rules.
//!
//! - `compare`: decides the winner of a reveal under an attribute's rule
//! - `result`: the outcome of a finished game

pub mod compare;
pub mod result;

pub use compare::{compare_cards, compare_values, Score};
pub use result::GameResult;
