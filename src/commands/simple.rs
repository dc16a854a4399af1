//! Simple interactive CLI mode
//!
//! The user keeps the secret; the solver suggests guesses and the user types
//! back how many positions matched.

use crate::core::{Score, Word};
use crate::solver::{GameState, Guess, Solver, Strategy};
use std::io::{self, BufRead, Write};

/// What the user typed in response to a suggestion
enum Reply {
    Score(Score),
    Undo,
    New,
    Quit,
    Invalid,
}

fn parse_reply(input: &str, guess: &Word) -> Reply {
    match input.to_lowercase().as_str() {
        "quit" | "q" | "exit" => Reply::Quit,
        "undo" | "u" => Reply::Undo,
        "new" | "n" => Reply::New,
        "win" | "correct" | "yes" | "solved" => Reply::Score(Score::new(guess.len())),
        other => match other.parse::<usize>() {
            Ok(value) if value <= guess.len() => Reply::Score(Score::new(value)),
            _ => Reply::Invalid,
        },
    }
}

/// Run the simple interactive CLI mode
///
/// Reads replies from `input` and writes prompts to `output` until the user
/// quits or input ends.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
#[allow(clippy::too_many_lines)] // Interactive game loop requires detailed handling
pub fn run_simple<S, R, W>(
    solver: &Solver<S>,
    words: &[Word],
    mut input: R,
    mut output: W,
) -> io::Result<()>
where
    S: Strategy,
    R: BufRead,
    W: Write,
{
    writeln!(output, "Think of a secret word from the list of {} words.", words.len())?;
    writeln!(output, "After each guess, enter how many positions match.")?;
    writeln!(output, "Commands: 'win' for a full match, 'undo', 'new', 'quit'\n")?;

    let mut game = solver.new_game(words);

    loop {
        match game.state().clone() {
            GameState::Found(word) => {
                let turns = game.steps().len();
                writeln!(
                    output,
                    "\n🎉 The secret is {} ({turns} {})",
                    word.text(),
                    if turns == 1 { "query" } else { "queries" }
                )?;

                match read_line(&mut input, &mut output, "Play again? (yes/no)")?.as_deref() {
                    Some("yes" | "y") => {
                        game.reset();
                        writeln!(output, "\n🔄 New game started!\n")?;
                        continue;
                    }
                    _ => break,
                }
            }
            GameState::Exhausted => {
                writeln!(output, "\n❌ No candidates remain! A score may have been mistyped.")?;
                writeln!(output, "Type 'undo' to go back, 'new' to start over, or 'quit'.\n")?;

                match read_line(&mut input, &mut output, "Command")?.as_deref() {
                    Some("undo" | "u") => {
                        game.undo();
                        writeln!(output, "✓ Undone!\n")?;
                    }
                    Some("new" | "n") => {
                        game.reset();
                        writeln!(output, "\n🔄 New game started!\n")?;
                    }
                    Some("quit" | "q" | "exit") | None => break,
                    Some(_) => {}
                }
                continue;
            }
            GameState::Searching => {}
        }

        let remaining = game.pool().len();
        let Some(guess) = game.next_guess(solver.strategy()) else {
            break;
        };

        let word = match guess {
            Guess::Implicit(_) => continue,
            Guess::Query(word) => word,
        };

        writeln!(output, "────────────────────────────────────────────────────────────")?;
        writeln!(output, "Turn {}: {remaining} candidates remaining", game.steps().len() + 1)?;
        if remaining <= 10 {
            let listed: Vec<&str> = game.pool().iter().map(Word::text).collect();
            writeln!(output, "Candidates: {}", listed.join(", "))?;
        }
        writeln!(output, "Suggested guess: {}", word.text())?;

        loop {
            let Some(line) = read_line(&mut input, &mut output, "Matches")? else {
                return Ok(());
            };

            match parse_reply(&line, &word) {
                Reply::Score(score) => {
                    game.observe(&word, score);
                    break;
                }
                Reply::Undo => {
                    if game.undo().is_some() {
                        writeln!(output, "✓ Undone!\n")?;
                    } else {
                        writeln!(output, "Nothing to undo!\n")?;
                    }
                    break;
                }
                Reply::New => {
                    game.reset();
                    writeln!(output, "\n🔄 New game started!\n")?;
                    break;
                }
                Reply::Quit => {
                    writeln!(output, "\n👋 Thanks for playing!\n")?;
                    return Ok(());
                }
                Reply::Invalid => {
                    writeln!(
                        output,
                        "❌ Enter a number from 0 to {}, or a command",
                        word.len()
                    )?;
                }
            }
        }
    }

    writeln!(output, "\n👋 Thanks for playing!\n")?;
    Ok(())
}

/// Prompt and read one trimmed, lowercased line; `None` at end of input
fn read_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> io::Result<Option<String>> {
    write!(output, "{prompt}: ")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_lowercase()))
}
