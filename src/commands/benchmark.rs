//! Benchmark command
//!
//! Plays many independent games on seeded random word lists. Games run in
//! parallel; each game is still solved sequentially against its own oracle.

use super::CommandError;
use crate::core::Word;
use crate::oracle::{Oracle, SecretOracle};
use crate::solver::{Solver, Strategy};
use crate::wordlists::WordListError;
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Shape of the generated games
#[derive(Debug, Clone)]
pub struct BenchmarkConfig {
    pub games: usize,
    pub word_len: usize,
    pub pool_size: usize,
    pub alphabet: Vec<char>,
    /// Game `i` is generated from `seed + i`
    pub seed: u64,
    pub show_progress: bool,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            games: 100,
            word_len: 6,
            pool_size: 100,
            alphabet: "abcdef".chars().collect(),
            seed: 42,
            show_progress: false,
        }
    }
}

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_games: usize,
    pub solved: usize,
    pub failed: usize,
    pub total_queries: usize,
    /// Averages and extremes cover solved games only
    pub average_queries: f64,
    pub min_queries: usize,
    pub max_queries: usize,
    pub distribution: BTreeMap<usize, usize>,
    pub duration: Duration,
    pub games_per_second: f64,
}

struct GameOutcome {
    queries: usize,
    correct: bool,
}

/// Draw `pool_size` distinct random words of `word_len` letters from `alphabet`
///
/// Repeated letters in `alphabet` count once.
///
/// # Errors
///
/// Returns an error if the alphabet is empty, the pool is empty, or the
/// alphabet cannot form that many distinct words.
pub fn generate_pool<R: Rng + ?Sized>(
    rng: &mut R,
    word_len: usize,
    pool_size: usize,
    alphabet: &[char],
) -> Result<Vec<Word>, CommandError> {
    let letters = distinct_letters(alphabet);
    check_feasible(word_len, pool_size, &letters)?;

    let mut seen: FxHashSet<String> = FxHashSet::default();
    let mut words = Vec::with_capacity(pool_size);

    while words.len() < pool_size {
        let text: String = (0..word_len)
            .map(|_| letters[rng.random_range(0..letters.len())])
            .collect();

        if seen.insert(text.clone()) {
            words.push(Word::new(text)?);
        }
    }

    Ok(words)
}

/// Letters of `alphabet` with repeats removed, in first-seen order
fn distinct_letters(alphabet: &[char]) -> Vec<char> {
    let mut seen: FxHashSet<char> = FxHashSet::default();
    alphabet.iter().copied().filter(|c| seen.insert(*c)).collect()
}

/// `alphabet` must already be free of repeats
fn check_feasible(
    word_len: usize,
    pool_size: usize,
    alphabet: &[char],
) -> Result<(), CommandError> {
    if alphabet.is_empty() {
        return Err(CommandError::EmptyAlphabet);
    }

    if pool_size == 0 {
        return Err(WordListError::Empty.into());
    }

    // None means the count overflowed usize, which is always enough
    let capacity = u32::try_from(word_len)
        .ok()
        .and_then(|len| alphabet.len().checked_pow(len));

    match capacity {
        Some(available) if pool_size > available => Err(CommandError::PoolTooLarge {
            requested: pool_size,
            word_len,
            alphabet: alphabet.len(),
        }),
        _ => Ok(()),
    }
}

fn progress_bar(games: usize, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(games as u64);
    let style = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
        .map_or_else(|_| ProgressStyle::default_bar(), |s| s.progress_chars("█▓▒░"));
    pb.set_style(style);
    pb
}

/// Run `config.games` games with `solver`
///
/// # Errors
///
/// Returns an error if the configuration cannot produce a word list.
pub fn run_benchmark<S: Strategy + Sync>(
    solver: &Solver<S>,
    config: &BenchmarkConfig,
) -> Result<BenchmarkResult, CommandError> {
    check_feasible(
        config.word_len,
        config.pool_size,
        &distinct_letters(&config.alphabet),
    )?;

    let pb = progress_bar(config.games, config.show_progress);
    let start = Instant::now();

    let outcomes: Vec<GameOutcome> = (0..config.games)
        .into_par_iter()
        .map(|game| {
            let mut rng = StdRng::seed_from_u64(config.seed.wrapping_add(game as u64));
            let words =
                generate_pool(&mut rng, config.word_len, config.pool_size, &config.alphabet)?;
            let secret = words[rng.random_range(0..words.len())].clone();

            let mut oracle = SecretOracle::new(secret.clone());
            let answer = solver.solve(&words, &mut oracle).ok();
            pb.inc(1);

            Ok(GameOutcome {
                queries: oracle.query_count(),
                correct: answer.as_ref() == Some(&secret),
            })
        })
        .collect::<Result<_, CommandError>>()?;

    pb.finish_with_message("Complete!");
    let duration = start.elapsed();

    let total_games = outcomes.len();
    let total_queries = outcomes.iter().map(|o| o.queries).sum();

    let solved_queries: Vec<usize> = outcomes
        .iter()
        .filter(|o| o.correct)
        .map(|o| o.queries)
        .collect();
    let solved = solved_queries.len();

    let mut distribution: BTreeMap<usize, usize> = BTreeMap::new();
    for &queries in &solved_queries {
        *distribution.entry(queries).or_insert(0) += 1;
    }

    let average_queries = if solved > 0 {
        solved_queries.iter().sum::<usize>() as f64 / solved as f64
    } else {
        0.0
    };

    Ok(BenchmarkResult {
        total_games,
        solved,
        failed: total_games - solved,
        total_queries,
        average_queries,
        min_queries: solved_queries.iter().copied().min().unwrap_or(0),
        max_queries: solved_queries.iter().copied().max().unwrap_or(0),
        distribution,
        duration,
        games_per_second: total_games as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}
