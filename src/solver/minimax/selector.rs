//! Minimax guess selection
//!
//! Picks the guess whose worst-case surviving pool is smallest, searching
//! only the front of the pool.

use super::calculator::calculate_max_remaining;
use crate::core::{CandidatePool, Word};

/// Select best guess by minimizing worst-case remaining candidates
///
/// Only the first `search_width` pool members are considered as guesses; each
/// is scored against the whole pool. Ties go to the earliest position.
///
/// Returns the chosen word and its worst-case remaining count, or `None` if
/// the pool is empty or `search_width` is zero.
///
/// # Examples
/// ```
/// use secret_word::core::{CandidatePool, Word};
/// use secret_word::solver::minimax::select_best_guess;
///
/// let pool: CandidatePool = ["abcdef", "fedcba", "bcdefa", "abcxyz", "xydefz"]
///     .into_iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
///
/// let (best, max_remaining) = select_best_guess(&pool, 10).unwrap();
/// assert_eq!(best.text(), "fedcba");
/// assert_eq!(max_remaining, 2);
/// ```
#[must_use]
pub fn select_best_guess(pool: &CandidatePool, search_width: usize) -> Option<(&Word, usize)> {
    pool.iter()
        .take(search_width)
        .map(|guess| (guess, calculate_max_remaining(guess, pool)))
        .min_by_key(|(_, max)| *max)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool(words: &[&str]) -> CandidatePool {
        words.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    #[test]
    fn selects_lowest_max_remaining() {
        let candidates = pool(&["ccbazz", "eiowzz", "abcczz", "acckzz", "xyzzzz"]);

        let (best, max_remaining) = select_best_guess(&candidates, 10).unwrap();

        // acckzz splits the pool into groups of at most 2
        assert_eq!(best.text(), "acckzz");
        assert_eq!(max_remaining, 2);
    }

    #[test]
    fn ties_go_to_earliest_position() {
        // Every guess separates a two-word pool completely
        let candidates = pool(&["abc", "def"]);

        let (best, max_remaining) = select_best_guess(&candidates, 10).unwrap();
        assert_eq!(best.text(), "abc");
        assert_eq!(max_remaining, 1);
    }

    #[test]
    fn search_width_limits_the_guesses_considered() {
        let candidates = pool(&["ccbazz", "eiowzz", "abcczz", "acckzz", "xyzzzz"]);

        // acckzz sits at index 3 and is out of reach
        let (best, max_remaining) = select_best_guess(&candidates, 3).unwrap();
        assert_eq!(best.text(), "ccbazz");
        assert_eq!(max_remaining, 3);

        let (only, _) = select_best_guess(&candidates, 1).unwrap();
        assert_eq!(only.text(), "ccbazz");
    }

    #[test]
    fn search_width_beyond_pool_is_harmless() {
        let candidates = pool(&["hamada", "khaled"]);
        assert!(select_best_guess(&candidates, 100).is_some());
    }

    #[test]
    fn returns_none_on_empty_pool() {
        assert!(select_best_guess(&CandidatePool::default(), 10).is_none());
    }

    #[test]
    fn returns_none_on_zero_width() {
        let candidates = pool(&["abc"]);
        assert!(select_best_guess(&candidates, 0).is_none());
    }
}
