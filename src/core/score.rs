//! Positional match scoring
//!
//! A score is the number of positions at which two equal-length words carry
//! the same character. It is the only feedback the oracle gives.

use super::Word;
use std::fmt;

/// Number of positional matches between a guess and another word
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Score(usize);

impl Score {
    /// Wrap a raw match count
    #[inline]
    #[must_use]
    pub const fn new(value: usize) -> Self {
        Self(value)
    }

    /// Get the raw match count
    #[inline]
    #[must_use]
    pub const fn value(self) -> usize {
        self.0
    }

    /// Check if this score means every position of `guess` matched
    #[inline]
    #[must_use]
    pub fn is_full_match(self, guess: &Word) -> bool {
        self.0 == guess.len()
    }

    /// Count the positions at which `a` and `b` agree
    ///
    /// Both words must have the same length; all words of one game do.
    ///
    /// # Examples
    /// ```
    /// use secret_word::core::{Score, Word};
    ///
    /// let guess = Word::new("ccbazz").unwrap();
    /// let secret = Word::new("acckzz").unwrap();
    ///
    /// // c at 1, z at 4 and 5
    /// assert_eq!(Score::calculate(&guess, &secret).value(), 3);
    /// ```
    #[must_use]
    pub fn calculate(a: &Word, b: &Word) -> Self {
        debug_assert_eq!(a.len(), b.len(), "scored words must share a length");

        let matches = a
            .chars()
            .iter()
            .zip(b.chars())
            .filter(|(x, y)| x == y)
            .count();

        Self(matches)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn score_counts_positional_matches() {
        assert_eq!(Score::calculate(&word("abcczz"), &word("acckzz")).value(), 4);
        assert_eq!(Score::calculate(&word("eiowzz"), &word("acckzz")).value(), 2);
        assert_eq!(Score::calculate(&word("fedcba"), &word("abcdef")).value(), 0);
    }

    #[test]
    fn score_ignores_letters_in_other_positions() {
        // Same letters, rotated: no position agrees
        assert_eq!(Score::calculate(&word("bcdefa"), &word("abcdef")).value(), 0);
    }

    #[test]
    fn score_is_symmetric() {
        let words = ["acckzz", "ccbazz", "eiowzz", "abcczz", "xyzzzz"];
        for a in words {
            for b in words {
                assert_eq!(
                    Score::calculate(&word(a), &word(b)),
                    Score::calculate(&word(b), &word(a)),
                    "{a} vs {b}"
                );
            }
        }
    }

    #[test]
    fn score_bounds() {
        let words = ["abcdef", "fedcba", "bcdefa", "abcxyz", "xydefz"];
        for a in words {
            let wa = word(a);
            assert_eq!(Score::calculate(&wa, &wa).value(), wa.len());
            assert!(Score::calculate(&wa, &wa).is_full_match(&wa));

            for b in words {
                assert!(Score::calculate(&wa, &word(b)).value() <= wa.len());
            }
        }
    }

    #[test]
    fn score_full_match_depends_on_guess_length() {
        let guess = word("abc");
        assert!(Score::new(3).is_full_match(&guess));
        assert!(!Score::new(2).is_full_match(&guess));
    }

    #[test]
    fn score_display() {
        assert_eq!(Score::new(4).to_string(), "4");
    }
}
