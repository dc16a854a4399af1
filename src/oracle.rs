//! Oracles answer match-count queries against a hidden secret
//!
//! The solver only depends on the [`Oracle`] trait. [`SecretOracle`] is the
//! in-process implementation used by the commands and tests.

use crate::core::{Score, Word};
use rustc_hash::FxHashMap;

/// Something that knows the secret and reports positional matches
pub trait Oracle {
    /// Score `guess` against the secret; every call counts as one query
    fn query(&mut self, guess: &Word) -> Score;

    /// Number of queries answered so far
    fn query_count(&self) -> usize;
}

/// Oracle backed by a known secret word
///
/// Scores are memoized per guess. A repeated guess is answered from the
/// memo but still counts as a query: the counter measures what the caller
/// asked, not what was computed.
#[derive(Debug, Clone)]
pub struct SecretOracle {
    secret: Word,
    queries: usize,
    memo: FxHashMap<Word, Score>,
}

impl SecretOracle {
    /// Create an oracle hiding `secret`
    ///
    /// # Examples
    /// ```
    /// use secret_word::core::Word;
    /// use secret_word::oracle::{Oracle, SecretOracle};
    ///
    /// let mut oracle = SecretOracle::new(Word::new("hamada").unwrap());
    /// let score = oracle.query(&Word::new("khaled").unwrap());
    ///
    /// assert_eq!(score.value(), 0);
    /// assert_eq!(oracle.query_count(), 1);
    /// ```
    #[must_use]
    pub fn new(secret: Word) -> Self {
        Self {
            secret,
            queries: 0,
            memo: FxHashMap::default(),
        }
    }
}

impl Oracle for SecretOracle {
    fn query(&mut self, guess: &Word) -> Score {
        self.queries += 1;

        if let Some(&score) = self.memo.get(guess) {
            return score;
        }

        let score = Score::calculate(guess, &self.secret);
        self.memo.insert(guess.clone(), score);
        score
    }

    fn query_count(&self) -> usize {
        self.queries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn full_match_on_secret() {
        let mut oracle = SecretOracle::new(word("acckzz"));
        let guess = word("acckzz");

        assert!(oracle.query(&guess).is_full_match(&guess));
    }

    #[test]
    fn counts_every_query() {
        let mut oracle = SecretOracle::new(word("acckzz"));

        oracle.query(&word("ccbazz"));
        oracle.query(&word("eiowzz"));
        assert_eq!(oracle.query_count(), 2);
    }

    #[test]
    fn repeated_guess_is_memoized_but_counted() {
        let mut oracle = SecretOracle::new(word("acckzz"));
        let guess = word("abcczz");

        let first = oracle.query(&guess);
        let second = oracle.query(&guess);

        assert_eq!(first, second);
        assert_eq!(first.value(), 4);
        assert_eq!(oracle.query_count(), 2);
        assert_eq!(oracle.memo.len(), 1);
    }

    #[test]
    fn independent_oracles_do_not_share_state() {
        let mut a = SecretOracle::new(word("hamada"));
        let b = SecretOracle::new(word("khaled"));

        a.query(&word("khaled"));
        assert_eq!(a.query_count(), 1);
        assert_eq!(b.query_count(), 0);
    }
}
