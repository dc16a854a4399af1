//! Guess analysis command
//!
//! Shows how a guess would split a candidate pool by score.

use super::{CommandError, word_matching};
use crate::core::{CandidatePool, Score, Word};
use crate::solver::minimax::group_by_score;
use crate::wordlists::loader::check_uniform_length;

/// Result of analyzing a guess
pub struct AnalysisResult {
    pub word: String,
    pub word_len: usize,
    pub total_candidates: usize,
    /// Surviving pool size per possible score, ascending by score
    pub groups: Vec<(Score, usize)>,
    pub worst_case: usize,
    /// Average surviving pool size if the secret is uniform over the pool
    pub expected_remaining: f64,
    pub in_pool: bool,
}

/// Analyze how `guess` partitions `candidates`
///
/// # Errors
///
/// Returns an error if:
/// - The candidate list is empty or mixed-length
/// - The guess is not a valid word of the list's length
pub fn analyze_guess(guess: &str, candidates: &[Word]) -> Result<AnalysisResult, CommandError> {
    check_uniform_length(candidates)?;
    let expected = candidates.first().map_or(0, Word::len);
    let word = word_matching(guess, expected)?;

    let pool = CandidatePool::new(candidates.to_vec());
    let mut groups: Vec<(Score, usize)> = group_by_score(&word, &pool).into_iter().collect();
    groups.sort_unstable_by_key(|(score, _)| *score);

    let total_candidates = pool.len();
    let worst_case = groups.iter().map(|(_, size)| *size).max().unwrap_or(0);
    let squares: usize = groups.iter().map(|(_, size)| size * size).sum();
    let expected_remaining = squares as f64 / total_candidates as f64;

    Ok(AnalysisResult {
        word: word.text().to_string(),
        word_len: word.len(),
        total_candidates,
        groups,
        worst_case,
        expected_remaining,
        in_pool: pool.contains(&word),
    })
}
