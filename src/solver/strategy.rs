//! Guess selection strategies
//!
//! Defines the Strategy trait and the three concrete implementations.

use crate::core::{CandidatePool, Word};

/// A strategy for selecting the next guess from the candidate pool
pub trait Strategy {
    /// Select the next word to query from the pool
    ///
    /// Returns a member of `pool`, or `None` if the pool is empty.
    fn select_guess<'a>(&self, pool: &'a CandidatePool) -> Option<&'a Word>;

    /// Whether a single remaining candidate counts as solved without a query
    fn resolves_singleton(&self) -> bool {
        false
    }

    /// Short name used on the command line and in reports
    fn name(&self) -> &'static str;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyType {
    /// Always the first candidate
    Naive(NaiveStrategy),
    /// Cheap positional pick
    Heuristic(HeuristicStrategy),
    /// Worst-case minimization (default)
    Minimax(MinimaxStrategy),
}

impl Strategy for StrategyType {
    fn select_guess<'a>(&self, pool: &'a CandidatePool) -> Option<&'a Word> {
        match self {
            Self::Naive(s) => s.select_guess(pool),
            Self::Heuristic(s) => s.select_guess(pool),
            Self::Minimax(s) => s.select_guess(pool),
        }
    }

    fn resolves_singleton(&self) -> bool {
        match self {
            Self::Naive(s) => s.resolves_singleton(),
            Self::Heuristic(s) => s.resolves_singleton(),
            Self::Minimax(s) => s.resolves_singleton(),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Naive(s) => s.name(),
            Self::Heuristic(s) => s.name(),
            Self::Minimax(s) => s.name(),
        }
    }
}

impl StrategyType {
    /// Names accepted by [`StrategyType::from_name`], in report order
    pub const NAMES: [&'static str; 3] = ["naive", "heuristic", "minimax"];

    /// Create strategy from name string
    ///
    /// Supported names: "naive" (alias "simple"), "heuristic" (alias
    /// "optimized"), "minimax". Defaults to minimax if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "naive" | "simple" | "first" => Self::Naive(NaiveStrategy),
            "heuristic" | "optimized" => Self::Heuristic(HeuristicStrategy),
            _ => Self::Minimax(MinimaxStrategy::default()),
        }
    }

    /// Replace the minimax search width; other strategies are returned unchanged
    #[must_use]
    pub fn with_search_width(self, search_width: usize) -> Self {
        match self {
            Self::Minimax(_) => Self::Minimax(MinimaxStrategy::new(search_width)),
            other => other,
        }
    }

    /// One instance of every strategy, minimax using `search_width`
    #[must_use]
    pub fn all(search_width: usize) -> [Self; 3] {
        [
            Self::Naive(NaiveStrategy),
            Self::Heuristic(HeuristicStrategy),
            Self::Minimax(MinimaxStrategy::new(search_width)),
        ]
    }
}

impl Default for StrategyType {
    fn default() -> Self {
        Self::Minimax(MinimaxStrategy::default())
    }
}

/// Naive strategy
///
/// Always guesses the first candidate in pool order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NaiveStrategy;

impl Strategy for NaiveStrategy {
    fn select_guess<'a>(&self, pool: &'a CandidatePool) -> Option<&'a Word> {
        pool.first()
    }

    fn name(&self) -> &'static str {
        "naive"
    }
}

/// Positional heuristic
///
/// With more than [`HeuristicStrategy::SMALL_POOL`] candidates, guesses the
/// first word when the pool size is even and the middle word when it is odd;
/// otherwise behaves like [`NaiveStrategy`]. This varies which end of the
/// pool gets probed between rounds. It does not measure how well a guess
/// splits the pool.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeuristicStrategy;

impl HeuristicStrategy {
    /// Pools this small are probed from the front
    pub const SMALL_POOL: usize = 3;
}

impl Strategy for HeuristicStrategy {
    fn select_guess<'a>(&self, pool: &'a CandidatePool) -> Option<&'a Word> {
        let len = pool.len();

        if len <= Self::SMALL_POOL || len % 2 == 0 {
            pool.first()
        } else {
            pool.get(len / 2)
        }
    }

    fn name(&self) -> &'static str {
        "heuristic"
    }
}

/// Minimax strategy
///
/// Picks, from the first `search_width` candidates, the guess that minimizes
/// the worst-case surviving pool. A singleton pool is its own answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinimaxStrategy {
    /// How many leading candidates are considered as guesses (at least 1)
    pub search_width: usize,
}

impl MinimaxStrategy {
    /// Default number of leading candidates searched
    pub const DEFAULT_SEARCH_WIDTH: usize = 10;

    /// Create a minimax strategy searching the first `search_width` candidates
    ///
    /// A width of zero is raised to one.
    #[must_use]
    pub fn new(search_width: usize) -> Self {
        Self {
            search_width: search_width.max(1),
        }
    }
}

impl Default for MinimaxStrategy {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SEARCH_WIDTH)
    }
}

impl Strategy for MinimaxStrategy {
    fn select_guess<'a>(&self, pool: &'a CandidatePool) -> Option<&'a Word> {
        if pool.len() == 1 {
            return pool.first();
        }

        super::minimax::select_best_guess(pool, self.search_width).map(|(best, _)| best)
    }

    fn resolves_singleton(&self) -> bool {
        true
    }

    fn name(&self) -> &'static str {
        "minimax"
    }
}
