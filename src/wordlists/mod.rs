//! Word lists
//!
//! Loading candidate lists from files or the command line, plus the
//! built-in demonstration games.

mod embedded;
pub mod loader;

pub use embedded::{FIXTURES, FIXTURES_COUNT, Fixture};
pub use loader::WordListError;
