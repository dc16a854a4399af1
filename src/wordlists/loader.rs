//! Word list loading utilities
//!
//! Every list produced here is non-empty, free of duplicates, and made of
//! words that all share one length.

use crate::core::{Word, WordError};
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error type for word lists that cannot be used for a game
#[derive(Debug, Error)]
pub enum WordListError {
    #[error("failed to read word list {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("entry {entry}: {source}")]
    InvalidWord {
        entry: usize,
        #[source]
        source: WordError,
    },
    #[error("word {word:?} has length {found}, expected {expected}")]
    LengthMismatch {
        word: String,
        expected: usize,
        found: usize,
    },
    #[error("word list is empty")]
    Empty,
}

/// Load words from a file, one per line
///
/// Blank lines and lines starting with `#` are skipped; surrounding
/// whitespace is trimmed.
///
/// # Errors
///
/// Returns `WordListError::Io` if the file cannot be read, or any error
/// [`parse_words`] reports for its contents.
///
/// # Examples
/// ```no_run
/// use secret_word::wordlists::loader::load_from_file;
///
/// let words = load_from_file("words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, WordListError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| WordListError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    parse_words(content.lines())
}

/// Parse a comma- or whitespace-separated list such as `"abc,def ghi"`
///
/// # Errors
///
/// Same as [`parse_words`].
///
/// # Examples
/// ```
/// use secret_word::wordlists::loader::parse_inline;
///
/// let words = parse_inline("hamada, khaled").unwrap();
/// assert_eq!(words.len(), 2);
/// ```
pub fn parse_inline(list: &str) -> Result<Vec<Word>, WordListError> {
    parse_words(list.split(|c: char| c == ',' || c.is_whitespace()))
}

/// Convert embedded string slice to Word vector
///
/// # Errors
///
/// Same as [`parse_words`].
pub fn words_from_slice(slice: &[&str]) -> Result<Vec<Word>, WordListError> {
    parse_words(slice.iter().copied())
}

/// Build a game-ready word list from raw entries
///
/// Entries are trimmed; empty entries and `#` comments are skipped. Later
/// duplicates are dropped, keeping first-seen order.
///
/// # Errors
///
/// - `WordListError::InvalidWord` for an entry that is not a valid word
///   (`entry` is 1-based and counts skipped entries)
/// - `WordListError::LengthMismatch` when a word's length differs from the
///   first word's
/// - `WordListError::Empty` when nothing is left
pub fn parse_words<'a, I>(entries: I) -> Result<Vec<Word>, WordListError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen: FxHashSet<Word> = FxHashSet::default();
    let mut words = Vec::new();

    for (index, raw) in entries.into_iter().enumerate() {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let word = Word::new(trimmed).map_err(|source| WordListError::InvalidWord {
            entry: index + 1,
            source,
        })?;

        if seen.insert(word.clone()) {
            words.push(word);
        }
    }

    check_uniform_length(&words)?;
    Ok(words)
}

/// Verify that `words` is non-empty and every word has the same length
///
/// # Errors
///
/// Returns `WordListError::Empty` or the first `WordListError::LengthMismatch`.
pub fn check_uniform_length(words: &[Word]) -> Result<(), WordListError> {
    let first = words.first().ok_or(WordListError::Empty)?;
    let expected = first.len();

    match words.iter().find(|w| w.len() != expected) {
        Some(odd) => Err(WordListError::LengthMismatch {
            word: odd.text().to_string(),
            expected,
            found: odd.len(),
        }),
        None => Ok(()),
    }
}
