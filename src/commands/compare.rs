//! Strategy comparison
//!
//! Plays every built-in game with every strategy and records the cost.

use crate::core::Word;
use crate::oracle::{Oracle, SecretOracle};
use crate::solver::{SingletonPolicy, Solver, SolverConfig, Strategy, StrategyType};
use crate::wordlists::Fixture;
use crate::wordlists::loader::words_from_slice;
use std::time::{Duration, Instant};

/// Outcome of one strategy on one game
#[derive(Debug, Clone)]
pub struct ComparisonRow {
    pub fixture: &'static str,
    pub secret: &'static str,
    pub candidates: usize,
    pub strategy: &'static str,
    pub queries: usize,
    pub answer: Option<String>,
    pub duration: Duration,
}

impl ComparisonRow {
    /// True when the solver named the real secret
    #[must_use]
    pub fn correct(&self) -> bool {
        self.answer.as_deref() == Some(self.secret)
    }
}

/// Run every strategy on every fixture
///
/// Fixtures whose word list is unusable are skipped.
#[must_use]
pub fn run_compare(
    fixtures: &[Fixture],
    search_width: usize,
    singleton: SingletonPolicy,
) -> Vec<ComparisonRow> {
    let config = SolverConfig { singleton };
    let mut rows = Vec::new();

    for fixture in fixtures {
        let Ok(words) = words_from_slice(fixture.words) else {
            continue;
        };
        let Ok(secret) = Word::new(fixture.secret) else {
            continue;
        };

        for strategy in StrategyType::all(search_width) {
            let solver = Solver::with_config(strategy, config);
            let mut oracle = SecretOracle::new(secret.clone());

            let start = Instant::now();
            let trace = solver.trace(&words, &mut oracle);
            let duration = start.elapsed();

            rows.push(ComparisonRow {
                fixture: fixture.name,
                secret: fixture.secret,
                candidates: words.len(),
                strategy: strategy.name(),
                queries: oracle.query_count(),
                answer: trace.answer.map(|w| w.text().to_string()),
                duration,
            });
        }
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::{FIXTURES, FIXTURES_COUNT};

    fn queries(rows: &[ComparisonRow], fixture: &str, strategy: &str) -> usize {
        rows.iter()
            .find(|r| r.fixture == fixture && r.strategy == strategy)
            .map(|r| r.queries)
            .unwrap()
    }

    #[test]
    fn one_row_per_fixture_and_strategy() {
        let rows = run_compare(FIXTURES, 10, SingletonPolicy::Verify);
        assert_eq!(rows.len(), FIXTURES_COUNT * StrategyType::NAMES.len());
    }

    #[test]
    fn every_strategy_solves_every_fixture() {
        for row in run_compare(FIXTURES, 10, SingletonPolicy::Verify) {
            assert!(row.correct(), "{} / {}", row.fixture, row.strategy);
            assert!(row.queries >= 1 && row.queries <= row.candidates);
        }
    }

    #[test]
    fn minimax_wins_when_secret_is_not_first() {
        let rows = run_compare(FIXTURES, 10, SingletonPolicy::Verify);

        assert_eq!(queries(&rows, "secret-fourth", "naive"), 2);
        assert_eq!(queries(&rows, "secret-fourth", "minimax"), 1);
    }

    #[test]
    fn search_width_one_makes_minimax_naive() {
        let rows = run_compare(FIXTURES, 1, SingletonPolicy::Verify);

        for fixture in FIXTURES {
            assert_eq!(
                queries(&rows, fixture.name, "minimax"),
                queries(&rows, fixture.name, "naive"),
                "{}",
                fixture.name
            );
        }
    }

    #[test]
    fn unusable_fixture_is_skipped() {
        let broken = [Fixture {
            name: "broken",
            secret: "abc",
            words: &["abc", "abcd"],
        }];
        assert!(run_compare(&broken, 10, SingletonPolicy::Verify).is_empty());
    }
}
