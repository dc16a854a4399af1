//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod compare;
pub mod simple;
pub mod solve;

pub use analyze::{AnalysisResult, analyze_guess};
pub use benchmark::{BenchmarkConfig, BenchmarkResult, generate_pool, run_benchmark};
pub use compare::{ComparisonRow, run_compare};
pub use simple::run_simple;
pub use solve::{GuessStep, SolveResult, solve_word};

use crate::core::{Word, WordError};
use crate::wordlists::WordListError;
use thiserror::Error;

/// Error type for commands given unusable input
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("invalid word: {0}")]
    InvalidWord(#[from] WordError),
    #[error(transparent)]
    WordList(#[from] WordListError),
    #[error("{word:?} has length {found}, but the word list uses length {expected}")]
    LengthMismatch {
        word: String,
        expected: usize,
        found: usize,
    },
    #[error("cannot draw {requested} distinct words of length {word_len} from {alphabet} letters")]
    PoolTooLarge {
        requested: usize,
        word_len: usize,
        alphabet: usize,
    },
    #[error("benchmark alphabet must not be empty")]
    EmptyAlphabet,
}

/// Parse `text` as a word that fits a list of `expected`-length words
pub(crate) fn word_matching(text: &str, expected: usize) -> Result<Word, CommandError> {
    let word = Word::new(text)?;

    if word.len() == expected {
        Ok(word)
    } else {
        Err(CommandError::LengthMismatch {
            word: word.text().to_string(),
            expected,
            found: word.len(),
        })
    }
}
