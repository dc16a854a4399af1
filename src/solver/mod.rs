//! Secret-word solving
//!
//! Guess selection strategies, the per-game state machine, and the solver
//! loop that ties them to an oracle.

mod engine;
mod game;
pub mod minimax;
pub mod strategy;

pub use engine::{SolveError, SolveTrace, Solver, SolverConfig, solve};
pub use game::{Game, GameState, Guess, Observation, SingletonPolicy, Step};
pub use strategy::{HeuristicStrategy, MinimaxStrategy, NaiveStrategy, Strategy, StrategyType};
