//! Command-line argument definitions.
//!
//! Board arguments and `min`/`max` difficulty bounds are collected as raw `String`s
//! rather than validated directly by `clap`: the §6 exit-code contract distinguishes
//! "wrong number of arguments" from "invalid digit" from "inconsistent board", three
//! separate failure modes `clap`'s own validation can't produce with the right codes.
//! `main` performs that validation explicitly after `clap` has parsed flags and
//! collected positionals.

use clap::{ArgAction, Parser, Subcommand};

/// A Sudoku reasoning engine: solve, suggest a next step, rate difficulty, or
/// generate puzzles.
#[derive(Debug, Parser)]
#[command(name = "sudoku", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Find every solution to a board by brute-force search.
    Solve {
        /// An 81-character board string (`0` for empty cells).
        board: Vec<String>,
    },
    /// Print the next logical step the Analyzer would take (or, with `-a`, every
    /// step until the puzzle is done or stuck).
    Suggest {
        /// Print every step until done or stuck, instead of just the next one.
        /// Implies `-v`.
        #[arg(short = 'a', long = "all")]
        all: bool,
        /// Append each step's natural-language reason.
        #[arg(short = 'v', long = "verbose")]
        verbose: bool,
        /// Print each step as a JSON step record instead of a text summary.
        #[arg(long = "json")]
        json: bool,
        /// An 81-character board string (`0` for empty cells).
        board: Vec<String>,
    },
    /// Print a puzzle's numeric difficulty rating.
    Rate {
        /// Increase verbosity: `-v` lists each step's technique and tier, `-vv`
        /// additionally prints each step's reason.
        #[arg(short = 'v', action = ArgAction::Count)]
        verbose: u8,
        /// An 81-character board string (`0` for empty cells).
        board: Vec<String>,
    },
    /// Generate a random puzzle within a difficulty range.
    Generate {
        /// Maximum acceptable difficulty rating.
        max_difficulty: Option<String>,
        /// Minimum acceptable difficulty rating (default 0).
        min_difficulty: Option<String>,
    },
    /// Generate and analyze a batch of puzzles, printing aggregate timing and
    /// technique-usage statistics.
    Profile {
        /// Number of puzzles to generate and analyze.
        #[arg(default_value_t = 1000)]
        count: usize,
    },
}
