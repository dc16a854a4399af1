//! Candidate pool
//!
//! The ordered set of words still consistent with every observation so far.
//! A pool is never edited in place; each round produces a new, smaller one.

use super::{Score, Word};

/// Ordered list of words that could still be the secret
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidatePool {
    words: Vec<Word>,
}

impl CandidatePool {
    /// Create a pool from an ordered word list
    #[must_use]
    pub const fn new(words: Vec<Word>) -> Self {
        Self { words }
    }

    /// Keep only the words that would have produced `observed` against `guess`
    ///
    /// Order among retained words is preserved. The guess itself is not
    /// special-cased: it survives exactly when `observed` is a full match.
    ///
    /// # Examples
    /// ```
    /// use secret_word::core::{CandidatePool, Score, Word};
    ///
    /// let pool: CandidatePool = ["acckzz", "ccbazz", "eiowzz", "abcczz"]
    ///     .into_iter()
    ///     .map(|w| Word::new(w).unwrap())
    ///     .collect();
    ///
    /// let guess = Word::new("ccbazz").unwrap();
    /// let narrowed = pool.filter(&guess, Score::new(3));
    ///
    /// assert_eq!(narrowed.len(), 1);
    /// assert_eq!(narrowed.first().unwrap().text(), "acckzz");
    /// ```
    #[must_use]
    pub fn filter(&self, guess: &Word, observed: Score) -> Self {
        let words = self
            .words
            .iter()
            .filter(|&candidate| Score::calculate(guess, candidate) == observed)
            .cloned()
            .collect();

        Self { words }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<&Word> {
        self.words.first()
    }

    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Word> {
        self.words.get(index)
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }
}

impl From<Vec<Word>> for CandidatePool {
    fn from(words: Vec<Word>) -> Self {
        Self::new(words)
    }
}

impl FromIterator<Word> for CandidatePool {
    fn from_iter<I: IntoIterator<Item = Word>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a CandidatePool {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool(words: &[&str]) -> CandidatePool {
        words.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    fn texts(pool: &CandidatePool) -> Vec<&str> {
        pool.iter().map(Word::text).collect()
    }

    #[test]
    fn filter_keeps_consistent_words_in_order() {
        let candidates = pool(&["abcdef", "fedcba", "bcdefa", "abcxyz", "xydefz"]);
        let guess = Word::new("fedcba").unwrap();

        let narrowed = candidates.filter(&guess, Score::new(0));

        assert_eq!(texts(&narrowed), vec!["abcdef", "abcxyz"]);
        // Source pool untouched
        assert_eq!(candidates.len(), 5);
    }

    #[test]
    fn filter_keeps_guess_only_on_full_match() {
        let candidates = pool(&["hamada", "khaled"]);
        let guess = Word::new("hamada").unwrap();

        let full = candidates.filter(&guess, Score::new(6));
        assert_eq!(texts(&full), vec!["hamada"]);

        // No position of "khaled" agrees with "hamada"
        let partial = candidates.filter(&guess, Score::new(0));
        assert_eq!(texts(&partial), vec!["khaled"]);
    }

    #[test]
    fn filter_can_empty_the_pool() {
        let candidates = pool(&["abc", "def"]);
        let guess = Word::new("abc").unwrap();

        // No member scores 2 against "abc"
        assert!(candidates.filter(&guess, Score::new(2)).is_empty());
    }

    #[test]
    fn filter_never_expels_the_secret() {
        let words = ["acckzz", "ccbazz", "eiowzz", "abcczz", "xyzzzz"];
        let candidates = pool(&words);

        for secret in words {
            let secret = Word::new(secret).unwrap();
            for guess in &candidates {
                let observed = Score::calculate(guess, &secret);
                assert!(candidates.filter(guess, observed).contains(&secret));
            }
        }
    }
}
