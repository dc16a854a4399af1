//! One-ply minimax over score groups
//!
//! Implements worst-case minimization of the surviving candidate pool.

mod calculator;
mod selector;

pub use calculator::{calculate_max_remaining, group_by_score};
pub use selector::select_best_guess;
