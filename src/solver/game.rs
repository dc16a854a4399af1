//! One game of guess, observe, filter
//!
//! [`Game`] owns the candidate pool for a single secret and tracks the
//! search state. It never talks to an oracle itself, so the caller may be a
//! program (see [`super::Solver`]) or a person typing scores.

use super::strategy::Strategy;
use crate::core::{CandidatePool, Score, Word};

/// Where a game stands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameState {
    /// Candidates remain and no full match has been seen
    Searching,
    /// The secret is known
    Found(Word),
    /// Every candidate was eliminated without a full match
    Exhausted,
}

/// Whether a singleton pool may be taken as the answer without a query
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SingletonPolicy {
    /// Always query, so a secret missing from the word list is detected
    #[default]
    Verify,
    /// Strategies that resolve singletons end the game without a query
    Trust,
}

/// The next move in a game
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Guess {
    /// Submit this word to the oracle
    Query(Word),
    /// The game ended on this word without a query
    Implicit(Word),
}

impl Guess {
    #[must_use]
    pub const fn word(&self) -> &Word {
        match self {
            Self::Query(word) | Self::Implicit(word) => word,
        }
    }
}

/// A guess paired with the oracle's answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Observation {
    pub guess: Word,
    pub score: Score,
}

/// One completed round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub observation: Observation,
    pub pool_before: usize,
    /// `None` when the round ended the game on a full match
    pub pool_after: Option<usize>,
}

/// State of a single game
#[derive(Debug, Clone)]
pub struct Game {
    initial: CandidatePool,
    pool: CandidatePool,
    state: GameState,
    steps: Vec<Step>,
    singleton: SingletonPolicy,
    /// Set when the game ended on an implicit answer
    implicit: Option<Word>,
}

impl Game {
    /// Start a game over the given word list
    #[must_use]
    pub fn new(words: impl Into<CandidatePool>) -> Self {
        let initial = words.into();
        let state = Self::initial_state(&initial);

        Self {
            pool: initial.clone(),
            initial,
            state,
            steps: Vec::new(),
            singleton: SingletonPolicy::default(),
            implicit: None,
        }
    }

    #[must_use]
    pub const fn with_singleton_policy(mut self, singleton: SingletonPolicy) -> Self {
        self.singleton = singleton;
        self
    }

    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state != GameState::Searching
    }

    /// Candidates still consistent with every observation
    #[must_use]
    pub const fn pool(&self) -> &CandidatePool {
        &self.pool
    }

    #[must_use]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Ask `strategy` for the next move
    ///
    /// Returns `None` once the game is over. An [`Guess::Implicit`] answer
    /// ends the game immediately in [`GameState::Found`].
    pub fn next_guess<S: Strategy + ?Sized>(&mut self, strategy: &S) -> Option<Guess> {
        if self.is_over() {
            return None;
        }

        let word = strategy.select_guess(&self.pool)?.clone();

        if self.pool.len() == 1
            && self.singleton == SingletonPolicy::Trust
            && strategy.resolves_singleton()
        {
            self.state = GameState::Found(word.clone());
            self.implicit = Some(word.clone());
            return Some(Guess::Implicit(word));
        }

        Some(Guess::Query(word))
    }

    /// Record the oracle's score for `guess` and narrow the pool
    ///
    /// A full match ends the game without filtering. Otherwise the pool is
    /// replaced by its consistent subset; an empty subset ends the game as
    /// [`GameState::Exhausted`]. Observations after the game ended are ignored.
    pub fn observe(&mut self, guess: &Word, score: Score) -> &GameState {
        if self.is_over() {
            return &self.state;
        }

        let pool_before = self.pool.len();
        let observation = Observation {
            guess: guess.clone(),
            score,
        };

        if score.is_full_match(guess) {
            self.steps.push(Step {
                observation,
                pool_before,
                pool_after: None,
            });
            self.state = GameState::Found(guess.clone());
            return &self.state;
        }

        self.pool = self.pool.filter(guess, score);
        self.steps.push(Step {
            observation,
            pool_before,
            pool_after: Some(self.pool.len()),
        });

        if self.pool.is_empty() {
            self.state = GameState::Exhausted;
        }

        &self.state
    }

    /// Drop the most recent observation and replay the rest
    ///
    /// An implicit answer is undone first, on its own, and comes back as an
    /// assumed full match; the pool it was taken from is kept. Returns the
    /// removed observation, or `None` if nothing was observed.
    pub fn undo(&mut self) -> Option<Observation> {
        if let Some(word) = self.implicit.take() {
            self.state = GameState::Searching;
            return Some(Observation {
                score: Score::new(word.len()),
                guess: word,
            });
        }

        let removed = self.steps.pop()?;

        let history: Vec<Observation> = self
            .steps
            .drain(..)
            .map(|step| step.observation)
            .collect();

        self.pool = self.initial.clone();
        self.state = Self::initial_state(&self.pool);
        for observation in &history {
            self.observe(&observation.guess, observation.score);
        }

        Some(removed.observation)
    }

    /// Start over with the original word list
    pub fn reset(&mut self) {
        self.pool = self.initial.clone();
        self.state = Self::initial_state(&self.pool);
        self.steps.clear();
        self.implicit = None;
    }

    fn initial_state(pool: &CandidatePool) -> GameState {
        if pool.is_empty() {
            GameState::Exhausted
        } else {
            GameState::Searching
        }
    }
}
