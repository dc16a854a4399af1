//! Secret Word Solver
//!
//! Identifies a hidden word from a known list by asking an oracle how many
//! positions of each guess match the secret.
//!
//! # Quick Start
//!
//! ```rust
//! use secret_word::core::Word;
//! use secret_word::oracle::{Oracle, SecretOracle};
//! use secret_word::solver::{MinimaxStrategy, Solver};
//! use secret_word::wordlists::loader::words_from_slice;
//!
//! let words = words_from_slice(&["ccbazz", "eiowzz", "abcczz", "acckzz", "xyzzzz"]).unwrap();
//! let mut oracle = SecretOracle::new(Word::new("acckzz").unwrap());
//!
//! let solver = Solver::new(MinimaxStrategy::default());
//! let secret = solver.solve(&words, &mut oracle).unwrap();
//!
//! assert_eq!(secret.text(), "acckzz");
//! println!("Found in {} queries", oracle.query_count());
//! ```

// Core domain types
pub mod core;

// Secret holders that answer match-count queries
pub mod oracle;

// Solving algorithms
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
