//! Minimax worst-case calculation
//!
//! Given a guess and a candidate pool, computes how large the surviving pool
//! could be for every score the oracle might return.

use crate::core::{CandidatePool, Score, Word};
use rustc_hash::FxHashMap;

/// Calculate the maximum remaining candidates for a guess
///
/// Returns the worst-case size of the pool after filtering on this guess.
///
/// # Examples
/// ```
/// use secret_word::core::{CandidatePool, Word};
/// use secret_word::solver::minimax::calculate_max_remaining;
///
/// let pool: CandidatePool = ["abcdef", "fedcba", "bcdefa", "abcxyz", "xydefz"]
///     .into_iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
///
/// // Three words share no position with "abcdef"
/// let guess = Word::new("abcdef").unwrap();
/// assert_eq!(calculate_max_remaining(&guess, &pool), 3);
/// ```
#[must_use]
pub fn calculate_max_remaining(guess: &Word, pool: &CandidatePool) -> usize {
    group_by_score(guess, pool)
        .values()
        .max()
        .copied()
        .unwrap_or(0)
}

/// Group pool members by the score they produce with the guess
///
/// Each group size is the pool that would survive that observation.
#[must_use]
pub fn group_by_score(guess: &Word, pool: &CandidatePool) -> FxHashMap<Score, usize> {
    let mut counts = FxHashMap::default();

    for candidate in pool {
        *counts.entry(Score::calculate(guess, candidate)).or_insert(0) += 1;
    }

    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool(words: &[&str]) -> CandidatePool {
        words.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn max_remaining_largest_group() {
        let candidates = pool(&["acckzz", "ccbazz", "eiowzz", "abcczz", "xyzzzz"]);

        // acckzz scores 6, 3, 2, 4, 2 against the pool
        assert_eq!(calculate_max_remaining(&word("acckzz"), &candidates), 2);
    }

    #[test]
    fn max_remaining_all_same_score() {
        let candidates = pool(&["aaa", "bbb", "ccc"]);

        assert_eq!(calculate_max_remaining(&word("zzz"), &candidates), 3);
    }

    #[test]
    fn max_remaining_empty_pool() {
        let empty = CandidatePool::default();
        assert_eq!(calculate_max_remaining(&word("abc"), &empty), 0);
    }

    #[test]
    fn max_remaining_bounds() {
        let candidates = pool(&["abcdef", "fedcba", "bcdefa", "abcxyz", "xydefz"]);

        for guess in &candidates {
            let max = calculate_max_remaining(guess, &candidates);
            assert!((1..=candidates.len()).contains(&max));
        }
    }

    #[test]
    fn group_by_score_covers_the_pool() {
        let candidates = pool(&["abcdef", "fedcba", "bcdefa", "abcxyz", "xydefz"]);
        let groups = group_by_score(&word("abcdef"), &candidates);

        assert_eq!(groups.values().sum::<usize>(), candidates.len());
        assert_eq!(groups.get(&Score::new(0)), Some(&3));
        assert_eq!(groups.get(&Score::new(3)), Some(&1));
        assert_eq!(groups.get(&Score::new(6)), Some(&1));
    }

    #[test]
    fn group_sizes_match_filtered_pools() {
        let candidates = pool(&["abcdef", "fedcba", "bcdefa", "abcxyz", "xydefz"]);
        let guess = word("fedcba");

        for (score, size) in group_by_score(&guess, &candidates) {
            assert_eq!(candidates.filter(&guess, score).len(), size);
        }
    }
}
