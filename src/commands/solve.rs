//! Word solving command
//!
//! Solves one game against a known secret and returns the solution path.

use super::{CommandError, word_matching};
use crate::core::{CandidatePool, Score, Word};
use crate::oracle::SecretOracle;
use crate::solver::minimax::{calculate_max_remaining, group_by_score};
use crate::solver::{Solver, Strategy};
use crate::wordlists::loader::check_uniform_length;

/// Result of solving a word
pub struct SolveResult {
    pub secret: String,
    pub strategy: &'static str,
    pub success: bool,
    pub answer: Option<String>,
    pub queries: usize,
    pub initial_pool: usize,
    pub guesses: Vec<GuessStep>,
}

/// A single round in the solution
pub struct GuessStep {
    pub word: String,
    pub score: Score,
    pub word_len: usize,
    pub candidates_before: usize,
    /// `None` when this guess was the secret
    pub candidates_after: Option<usize>,
    pub worst_case: usize,
    pub score_groups: usize,
}

/// Solve `secret` over `words` with the given solver
///
/// The solver sees only the oracle; `secret` need not be in `words`, in
/// which case the result reports a failure.
///
/// # Errors
///
/// Returns an error if the word list is empty or mixed-length, or if the
/// secret is not a valid word of the list's length.
pub fn solve_word<S: Strategy>(
    secret: &str,
    words: &[Word],
    solver: &Solver<S>,
) -> Result<SolveResult, CommandError> {
    check_uniform_length(words)?;
    let expected = words.first().map_or(0, Word::len);
    let secret_word = word_matching(secret, expected)?;

    let mut oracle = SecretOracle::new(secret_word);
    let trace = solver.trace(words, &mut oracle);

    // Replay the rounds to annotate each guess with the pool it faced
    let mut pool = CandidatePool::new(words.to_vec());
    let mut guesses = Vec::with_capacity(trace.steps.len());

    for step in &trace.steps {
        let guess = &step.observation.guess;

        guesses.push(GuessStep {
            word: guess.text().to_string(),
            score: step.observation.score,
            word_len: guess.len(),
            candidates_before: step.pool_before,
            candidates_after: step.pool_after,
            worst_case: calculate_max_remaining(guess, &pool),
            score_groups: group_by_score(guess, &pool).len(),
        });

        pool = pool.filter(guess, step.observation.score);
    }

    Ok(SolveResult {
        secret: secret.to_string(),
        strategy: solver.strategy().name(),
        success: trace.is_solved(),
        answer: trace.answer.as_ref().map(|w| w.text().to_string()),
        queries: trace.queries,
        initial_pool: trace.initial_pool,
        guesses,
    })
}
