//! Secret Word Solver - CLI
//!
//! Finds a hidden word from a known list using positional match counts,
//! with naive, heuristic and minimax guess selection.

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use secret_word::{
    commands::{
        BenchmarkConfig, analyze_guess, run_benchmark, run_compare, run_simple, solve_word,
    },
    core::Word,
    output::{print_analysis_result, print_benchmark_result, print_comparison, print_solve_result},
    solver::{SingletonPolicy, Solver, SolverConfig, Strategy, StrategyType},
    wordlists::{
        FIXTURES, Fixture,
        loader::{load_from_file, parse_inline, words_from_slice},
    },
};
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "secret_word",
    about = "Find a secret word by asking how many positions of each guess match",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Strategy: minimax (default), heuristic, naive
    #[arg(short, long, global = true, default_value = "minimax")]
    strategy: String,

    /// Number of candidates minimax evaluates as guesses
    #[arg(long, global = true, default_value_t = 10)]
    search_width: usize,

    /// Accept a lone remaining candidate without querying it (minimax only)
    #[arg(long, global = true)]
    trust_singleton: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare every strategy on the built-in games (default)
    Compare,

    /// Solve a specific secret word
    Solve {
        /// The secret the oracle holds
        secret: String,

        #[command(flatten)]
        words: WordSource,

        /// Show candidate counts and split quality for every guess
        #[arg(short, long)]
        verbose: bool,
    },

    /// Show how a guess splits the candidate list
    Analyze {
        /// Word to analyze
        guess: String,

        #[command(flatten)]
        words: WordSource,
    },

    /// Benchmark solver performance on random word lists
    Benchmark {
        /// Number of games to play
        #[arg(short = 'n', long, default_value_t = 100)]
        games: usize,

        /// Length of generated words
        #[arg(long, default_value_t = 6)]
        length: usize,

        /// Candidates per game
        #[arg(long, default_value_t = 100)]
        pool: usize,

        /// Seed for the first game; game i uses seed + i
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Letters generated words are drawn from
        #[arg(long, default_value = "abcdef")]
        alphabet: String,
    },

    /// Interactive mode: keep a secret and type the match counts
    Simple {
        #[command(flatten)]
        words: WordSource,
    },
}

/// Where the candidate list comes from
#[derive(Args)]
struct WordSource {
    /// Word list file, one word per line
    #[arg(short = 'w', long, conflicts_with_all = ["list", "fixture"])]
    words: Option<PathBuf>,

    /// Comma-separated word list, e.g. "hamada,khaled"
    #[arg(short = 'l', long, conflicts_with = "fixture")]
    list: Option<String>,

    /// Name of a built-in game whose list to use
    #[arg(short = 'f', long)]
    fixture: Option<String>,
}

impl WordSource {
    /// Load the chosen list, or `fallback` when none was given
    fn load(&self, fallback: Option<&Fixture>) -> Result<Vec<Word>> {
        if let Some(path) = &self.words {
            return load_from_file(path)
                .with_context(|| format!("loading word list {}", path.display()));
        }

        if let Some(list) = &self.list {
            return parse_inline(list).context("parsing --list");
        }

        let fixture = match &self.fixture {
            Some(name) => find_fixture(name)?,
            None => fallback.context("no word list given; use --words, --list or --fixture")?,
        };

        words_from_slice(fixture.words)
            .with_context(|| format!("loading built-in game {}", fixture.name))
    }
}

fn find_fixture(name: &str) -> Result<&'static Fixture> {
    match FIXTURES.iter().find(|f| f.name == name) {
        Some(fixture) => Ok(fixture),
        None => {
            let names: Vec<&str> = FIXTURES.iter().map(|f| f.name).collect();
            bail!("unknown game {name:?}; available: {}", names.join(", "))
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let strategy = StrategyType::from_name(&cli.strategy).with_search_width(cli.search_width);
    let singleton = if cli.trust_singleton {
        SingletonPolicy::Trust
    } else {
        SingletonPolicy::Verify
    };
    let solver = Solver::with_config(strategy, SolverConfig { singleton });

    // Default to comparing strategies if no command given
    let command = cli.command.unwrap_or(Commands::Compare);

    match command {
        Commands::Compare => {
            print_comparison(&run_compare(FIXTURES, cli.search_width, singleton));
            Ok(())
        }
        Commands::Solve {
            secret,
            words,
            verbose,
        } => {
            let fallback = FIXTURES.iter().find(|f| f.words.contains(&secret.as_str()));
            let words = words.load(fallback)?;
            solve_command(&secret, &words, verbose, &solver)
        }
        Commands::Analyze { guess, words } => {
            let words = words.load(FIXTURES.first())?;
            let result = analyze_guess(&guess, &words)?;
            print_analysis_result(&result);
            Ok(())
        }
        Commands::Benchmark {
            games,
            length,
            pool,
            seed,
            alphabet,
        } => {
            let config = BenchmarkConfig {
                games,
                word_len: length,
                pool_size: pool,
                alphabet: alphabet.chars().collect(),
                seed,
                show_progress: true,
            };
            benchmark_command(&config, &solver)
        }
        Commands::Simple { words } => {
            let words = words.load(FIXTURES.first())?;
            let stdin = io::stdin();
            run_simple(&solver, &words, stdin.lock(), io::stdout())
                .context("interactive session failed")
        }
    }
}

fn solve_command<S: Strategy>(
    secret: &str,
    words: &[Word],
    verbose: bool,
    solver: &Solver<S>,
) -> Result<()> {
    let result = solve_word(secret, words, solver)?;
    print_solve_result(&result, verbose);
    Ok(())
}

fn benchmark_command<S: Strategy + Sync>(
    config: &BenchmarkConfig,
    solver: &Solver<S>,
) -> Result<()> {
    println!(
        "Running {} games of {} {}-letter words with {}...",
        config.games,
        config.pool_size,
        config.word_len,
        solver.strategy().name()
    );

    let result = run_benchmark(solver, config)?;
    print_benchmark_result(&result);
    Ok(())
}
