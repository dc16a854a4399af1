//! Core domain types
//!
//! Words, match scores and the candidate pool. Everything here is pure:
//! no I/O, no oracle, no strategy.

mod pool;
mod score;
mod word;

pub use pool::CandidatePool;
pub use score::Score;
pub use word::{Word, WordError};
