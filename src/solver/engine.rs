//! Main solver interface
//!
//! Drives a [`Game`] against an [`Oracle`] until the secret is found or the
//! candidate pool runs dry.

use super::game::{Game, GameState, Guess, SingletonPolicy, Step};
use super::strategy::{Strategy, StrategyType};
use crate::core::Word;
use crate::oracle::Oracle;
use thiserror::Error;

/// Failure to identify the secret
///
/// Retrying with the same words and secret fails the same way.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    /// The pool emptied without a full match: the secret is not in the word
    /// list, or the oracle answered inconsistently
    #[error("candidate pool exhausted after {queries} queries without a full match")]
    ExhaustedCandidates { queries: usize },
}

/// Solver settings that are independent of the strategy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolverConfig {
    pub singleton: SingletonPolicy,
}

/// Everything that happened while solving one game
#[derive(Debug, Clone)]
pub struct SolveTrace {
    /// The identified secret, or `None` if the pool was exhausted
    pub answer: Option<Word>,
    pub steps: Vec<Step>,
    /// Oracle queries spent on this game
    pub queries: usize,
    pub initial_pool: usize,
}

impl SolveTrace {
    #[must_use]
    pub const fn is_solved(&self) -> bool {
        self.answer.is_some()
    }

    /// Convert into the answer, or the exhaustion error
    ///
    /// # Errors
    /// Returns `SolveError::ExhaustedCandidates` if no answer was found.
    pub fn into_result(self) -> Result<Word, SolveError> {
        self.answer.ok_or(SolveError::ExhaustedCandidates {
            queries: self.queries,
        })
    }
}

/// Secret-word solver
///
/// Coordinates the guess/observe/filter cycle using a given strategy.
#[derive(Debug, Clone)]
pub struct Solver<S: Strategy> {
    strategy: S,
    config: SolverConfig,
}

impl<S: Strategy> Solver<S> {
    /// Create a solver with the default configuration
    pub fn new(strategy: S) -> Self {
        Self::with_config(strategy, SolverConfig::default())
    }

    pub const fn with_config(strategy: S, config: SolverConfig) -> Self {
        Self { strategy, config }
    }

    pub const fn strategy(&self) -> &S {
        &self.strategy
    }

    pub const fn config(&self) -> SolverConfig {
        self.config
    }

    /// Start a game configured like this solver
    pub fn new_game(&self, words: &[Word]) -> Game {
        Game::new(words.to_vec()).with_singleton_policy(self.config.singleton)
    }

    /// Play one game and record every round
    ///
    /// Terminates after at most `words.len()` queries: every query either
    /// finds the secret or removes the guessed word from the pool.
    pub fn trace<O: Oracle + ?Sized>(&self, words: &[Word], oracle: &mut O) -> SolveTrace {
        let mut game = self.new_game(words);
        let start = oracle.query_count();

        while let Some(guess) = game.next_guess(&self.strategy) {
            match guess {
                Guess::Implicit(_) => break,
                Guess::Query(word) => {
                    let score = oracle.query(&word);
                    game.observe(&word, score);
                }
            }
        }

        let answer = match game.state() {
            GameState::Found(word) => Some(word.clone()),
            GameState::Searching | GameState::Exhausted => None,
        };

        SolveTrace {
            answer,
            steps: game.steps().to_vec(),
            queries: oracle.query_count() - start,
            initial_pool: words.len(),
        }
    }

    /// Find the secret hidden behind `oracle`
    ///
    /// # Errors
    /// Returns `SolveError::ExhaustedCandidates` if every candidate is
    /// eliminated without a full match.
    pub fn solve<O: Oracle + ?Sized>(
        &self,
        words: &[Word],
        oracle: &mut O,
    ) -> Result<Word, SolveError> {
        self.trace(words, oracle).into_result()
    }
}

impl Default for Solver<StrategyType> {
    fn default() -> Self {
        Self::new(StrategyType::default())
    }
}

/// Find the secret with the given strategy and default settings
///
/// # Errors
/// Returns `SolveError::ExhaustedCandidates` if the secret is not among
/// `words`.
///
/// # Examples
/// ```
/// use secret_word::core::Word;
/// use secret_word::oracle::{Oracle, SecretOracle};
/// use secret_word::solver::{StrategyType, solve};
///
/// let words: Vec<Word> = ["acckzz", "ccbazz", "eiowzz", "abcczz"]
///     .into_iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
/// let mut oracle = SecretOracle::new(Word::new("acckzz").unwrap());
///
/// let secret = solve(&words, &mut oracle, StrategyType::default()).unwrap();
/// assert_eq!(secret.text(), "acckzz");
/// assert!((1..=4).contains(&oracle.query_count()));
/// ```
pub fn solve<O: Oracle + ?Sized>(
    words: &[Word],
    oracle: &mut O,
    strategy: StrategyType,
) -> Result<Word, SolveError> {
    Solver::new(strategy).solve(words, oracle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Score;
    use crate::oracle::SecretOracle;
    use crate::solver::strategy::{HeuristicStrategy, MinimaxStrategy, NaiveStrategy};

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn trusting(strategy: StrategyType) -> Solver<StrategyType> {
        Solver::with_config(
            strategy,
            SolverConfig {
                singleton: SingletonPolicy::Trust,
            },
        )
    }

    /// Oracle that always answers the same score
    struct StubbornOracle {
        score: usize,
        queries: usize,
    }

    impl Oracle for StubbornOracle {
        fn query(&mut self, _guess: &Word) -> Score {
            self.queries += 1;
            Score::new(self.score)
        }

        fn query_count(&self) -> usize {
            self.queries
        }
    }

    #[test]
    fn every_strategy_finds_every_member() {
        let list = words(&["abcdef", "fedcba", "bcdefa", "abcxyz", "xydefz", "aabbcc", "dddddd"]);

        for strategy in StrategyType::all(10) {
            for secret in &list {
                let mut oracle = SecretOracle::new(secret.clone());
                let found = solve(&list, &mut oracle, strategy).unwrap();

                assert_eq!(&found, secret, "{}", strategy.name());
                assert!(oracle.query_count() <= list.len());
            }
        }
    }

    #[test]
    fn naive_first_word_costs_one_query() {
        let list = words(&["hamada", "khaled"]);
        let mut oracle = SecretOracle::new(word("hamada"));

        let found = Solver::new(NaiveStrategy).solve(&list, &mut oracle).unwrap();

        assert_eq!(found.text(), "hamada");
        assert_eq!(oracle.query_count(), 1);
    }

    #[test]
    fn missing_secret_is_exhausted_for_every_strategy() {
        let list = words(&["abc", "def"]);

        for strategy in StrategyType::all(10) {
            let mut oracle = SecretOracle::new(word("xyz"));
            let result = solve(&list, &mut oracle, strategy);

            assert_eq!(
                result,
                Err(SolveError::ExhaustedCandidates {
                    queries: oracle.query_count()
                }),
                "{}",
                strategy.name()
            );
            assert!(oracle.query_count() <= list.len());
        }
    }

    #[test]
    fn trusted_singleton_skips_the_final_query() {
        let list = words(&["abcdef", "fedcba", "bcdefa", "abcxyz", "xydefz"]);
        let mut oracle = SecretOracle::new(word("abcxyz"));

        let trace = trusting(StrategyType::default()).trace(&list, &mut oracle);

        // fedcba scores 0 -> {abcdef, abcxyz}; abcdef scores 3 -> {abcxyz}
        assert_eq!(trace.answer, Some(word("abcxyz")));
        assert_eq!(trace.queries, 2);
        assert_eq!(trace.steps.len(), 2);
    }

    #[test]
    fn trusted_singleton_can_name_a_missing_secret() {
        let list = words(&["abc", "def"]);
        let mut oracle = SecretOracle::new(word("xyz"));

        let trace = trusting(StrategyType::default()).trace(&list, &mut oracle);

        // The only survivor is taken on trust
        assert_eq!(trace.answer, Some(word("def")));
        assert_eq!(trace.queries, 1);
    }

    #[test]
    fn trace_records_shrinking_pools() {
        let list = words(&["ccbazz", "eiowzz", "abcczz", "acckzz", "xyzzzz"]);
        let mut oracle = SecretOracle::new(word("acckzz"));

        let trace = Solver::new(NaiveStrategy).trace(&list, &mut oracle);

        assert!(trace.is_solved());
        assert_eq!(trace.initial_pool, 5);
        assert_eq!(trace.queries, 2);

        let first = &trace.steps[0];
        assert_eq!(first.observation.guess, word("ccbazz"));
        assert_eq!(first.observation.score, Score::new(3));
        assert_eq!(first.pool_before, 5);
        assert_eq!(first.pool_after, Some(1));
        assert_eq!(trace.steps[1].pool_after, None);
    }

    #[test]
    fn heuristic_probes_the_middle() {
        let list = words(&["ccbazz", "eiowzz", "abcczz", "acckzz", "xyzzzz"]);
        let mut oracle = SecretOracle::new(word("acckzz"));

        let trace = Solver::new(HeuristicStrategy).trace(&list, &mut oracle);

        assert_eq!(trace.steps[0].observation.guess, word("abcczz"));
        assert_eq!(trace.answer, Some(word("acckzz")));
    }

    #[test]
    fn minimax_beats_naive_when_first_word_is_wrong() {
        let list = words(&["ccbazz", "eiowzz", "abcczz", "acckzz", "xyzzzz"]);

        let mut naive_oracle = SecretOracle::new(word("acckzz"));
        Solver::new(NaiveStrategy).solve(&list, &mut naive_oracle).unwrap();

        let mut minimax_oracle = SecretOracle::new(word("acckzz"));
        Solver::new(MinimaxStrategy::default())
            .solve(&list, &mut minimax_oracle)
            .unwrap();

        assert_eq!(naive_oracle.query_count(), 2);
        assert_eq!(minimax_oracle.query_count(), 1);
    }

    #[test]
    fn queries_are_counted_relative_to_the_oracle() {
        let list = words(&["hamada", "khaled"]);
        let mut oracle = SecretOracle::new(word("khaled"));
        oracle.query(&word("hamada"));

        let trace = Solver::new(NaiveStrategy).trace(&list, &mut oracle);

        assert_eq!(trace.queries, 2);
        assert_eq!(oracle.query_count(), 3);
    }

    #[test]
    fn lying_oracle_terminates() {
        let list = words(&["aaa", "aab", "abb", "bbb"]);
        let mut oracle = StubbornOracle {
            score: 1,
            queries: 0,
        };

        let result = Solver::<StrategyType>::default().solve(&list, &mut oracle);

        assert!(matches!(result, Err(SolveError::ExhaustedCandidates { .. })));
        assert!(oracle.queries <= list.len());
    }

    #[test]
    fn empty_word_list_is_exhausted_without_queries() {
        let mut oracle = SecretOracle::new(word("abc"));
        let result = solve(&[], &mut oracle, StrategyType::default());

        assert_eq!(result, Err(SolveError::ExhaustedCandidates { queries: 0 }));
    }

    #[test]
    fn error_message_names_the_query_count() {
        let err = SolveError::ExhaustedCandidates { queries: 2 };
        assert_eq!(
            err.to_string(),
            "candidate pool exhausted after 2 queries without a full match"
        );
    }
}
