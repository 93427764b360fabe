//! Interactive play mode
//!
//! The user thinks of a code and scores the solver's guesses.

use crate::core::{Feedback, Symbol};
use crate::output::formatters::{code_to_pegs, color_legend, feedback_to_pegs};
use crate::solver::entropy::calculate_metrics;
use crate::solver::{Solver, Strategy};
use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};

const FEEDBACK_PROMPT: &str = "Enter feedback ('2 1', 'BBW', 'win', or command)";

/// How an interactive session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The user typed `quit` or declined another game
    Quit,
    /// Input ran out
    EndOfInput,
}

/// Run interactive play mode on stdin
///
/// # Errors
///
/// Returns an error if reading input or writing the prompt fails.
pub fn run_play<S: Strategy>(solver: &mut Solver<S>) -> Result<SessionEnd> {
    let config = solver.config();
    let last = Symbol::new(u8::try_from(config.alphabet_size() - 1)?);
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║            Mastermind Solver - Interactive Mode              ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!(
        "Think of a code of {} pegs using colors A-{}{}.",
        config.code_length(),
        last.letter(),
        if config.allow_duplicates() {
            ""
        } else {
            " without repeats"
        }
    );
    let legend = color_legend(config.alphabet_size());
    if !legend.is_empty() {
        println!("Colors: {legend}\n");
    }
    println!("After each guess, enter the feedback:\n");
    println!("  - Two counts, exact then misplaced: '2 1' or '2,1'");
    println!("  - Or pegs: B for exact, W for misplaced, e.g. 'BBW'");
    println!("  - Or type 'win' if the guess is right!\n");
    println!("Commands: 'quit' to exit, 'new' for new game, 'undo' to undo last guess\n");

    let stdin = io::stdin();
    play_session(solver, &mut stdin.lock())
}

/// Play games against feedback read from `input` until it quits or runs out
///
/// # Errors
///
/// Returns an error if reading input fails.
pub fn play_session<S: Strategy, R: BufRead>(
    solver: &mut Solver<S>,
    input: &mut R,
) -> Result<SessionEnd> {
    solver.reset();
    let length = solver.config().code_length();

    loop {
        let turn = solver.history().len() + 1;

        let guess = match solver.next_guess() {
            Ok(guess) => guess,
            Err(_) => {
                println!("\n❌ No candidates remain! Your feedback may be incorrect.");
                println!("Type 'undo' to go back, or 'new' to start over.\n");

                let Some(cmd) = read_input(input, "Command")? else {
                    return Ok(SessionEnd::EndOfInput);
                };
                match cmd.to_lowercase().as_str() {
                    "undo" | "u" => {
                        solver.undo();
                        println!("✓ Undone! Back to turn {}\n", solver.history().len() + 1);
                    }
                    "new" | "n" => {
                        solver.reset();
                        println!("\n🔄 New game started!\n");
                    }
                    "quit" | "q" | "exit" => return Ok(SessionEnd::Quit),
                    _ => {}
                }
                continue;
            }
        };

        let candidates_count = solver.remaining_count();
        println!("────────────────────────────────────────────────────────────");
        println!("Turn {turn}: {candidates_count} candidates remaining");
        println!("────────────────────────────────────────────────────────────");

        println!("\n📊 Suggested guess: {} {}", guess, code_to_pegs(&guess));
        if candidates_count > 1 {
            let metrics = calculate_metrics(&guess, solver.candidates());
            println!("   Entropy:          {:.3} bits", metrics.entropy);
            println!(
                "   Expected remain:  {:.1} candidates",
                metrics.expected_remaining
            );
            println!(
                "   Worst case:       {} candidates\n",
                metrics.max_partition
            );
        }

        if candidates_count <= 10 {
            println!("Remaining candidates:");
            for candidate in solver.candidates() {
                println!("  • {candidate}");
            }
            println!();
        }

        let feedback = loop {
            let Some(line) = read_input(input, FEEDBACK_PROMPT)? else {
                return Ok(SessionEnd::EndOfInput);
            };

            match line.to_lowercase().as_str() {
                "quit" | "q" | "exit" => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(SessionEnd::Quit);
                }
                "new" | "n" => {
                    solver.reset();
                    println!("\n🔄 New game started!\n");
                    break None;
                }
                "undo" | "u" => {
                    if solver.undo().is_some() {
                        println!("✓ Undone! Back to turn {}\n", solver.history().len() + 1);
                        break None;
                    }
                    println!("Nothing to undo!\n");
                }
                "win" | "correct" | "yes" | "solved" => break Some(Feedback::perfect(length)),
                text => {
                    let parsed = text.parse::<Feedback>();
                    match parsed.and_then(|f| f.validate(length).map(|()| f)) {
                        Ok(feedback) => break Some(feedback),
                        Err(e) => println!("❌ {e}\n"),
                    }
                }
            }
        };

        let Some(feedback) = feedback else {
            continue;
        };

        solver.apply_feedback(guess, feedback)?;
        tracing::debug!(turn, feedback = %feedback, "user feedback recorded");

        if solver.is_solved(feedback) {
            print_victory(solver, length);

            match read_input(input, "Play again? (yes/no)")? {
                Some(answer) if matches!(answer.to_lowercase().as_str(), "yes" | "y") => {
                    solver.reset();
                    println!("\n🔄 New game started!\n");
                }
                Some(_) => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(SessionEnd::Quit);
                }
                None => return Ok(SessionEnd::EndOfInput),
            }
        }
    }
}

fn print_victory<S: Strategy>(solver: &Solver<S>, length: usize) {
    let turns = solver.history().len();

    println!("\n{}", "═".repeat(70).bright_cyan());
    println!(
        "{}",
        "    🎉 🎊 ✨  C O D E   B R O K E N !  ✨ 🎊 🎉    "
            .bright_green()
            .bold()
    );
    println!("{}", "═".repeat(70).bright_cyan());

    println!(
        "\n  Solution found in {} {}",
        turns.to_string().bright_cyan().bold(),
        if turns == 1 { "guess" } else { "guesses" }
    );

    println!("\n  Guess history:");
    for (i, (code, feedback)) in solver.history().iter().enumerate() {
        println!(
            "    {}. {} {} {}",
            (i + 1).to_string().bright_black(),
            code.to_string().bright_white().bold(),
            code_to_pegs(code),
            feedback_to_pegs(*feedback, length)
        );
    }

    println!("\n{}", "═".repeat(70).bright_cyan());
    println!();
}

/// Read one trimmed line, or `None` at end of input
fn read_input<R: BufRead>(input: &mut R, prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
