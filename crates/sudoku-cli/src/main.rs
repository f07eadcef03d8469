//! Thin command-line front-ends over the Sudoku reasoning engine: `solve`,
//! `suggest`, `rate`, `generate`, and `profile`.
//!
//! This binary does no reasoning of its own. It parses arguments, delegates to
//! `sudoku-core`/`sudoku-solver`/`sudoku-generator`, and renders the result as text
//! (or, for `solve`, as a board diagram). Exit codes follow §6 of the specification
//! exactly; see each `cmd_*` function for its own contract.

mod board_arg;
mod cli;
mod step_display;

use std::{
    collections::HashMap,
    time::{Duration, Instant},
};

use clap::Parser as _;
use cli::{Cli, Command};
use sudoku_generator::PuzzleGenerator;
use sudoku_solver::{
    Action, Analyzer, CallerError,
    analyzer::{rate, rate_steps},
    backtrack,
};

use crate::board_arg::parse_board_arg;

/// Caps brute-force solution enumeration in `solve`: a board with many givens has few
/// solutions, but a near-empty board has astronomically many, and nobody wants to
/// print all of them.
const MAX_SOLUTIONS_PRINTED: usize = 100;

/// Caps retries in `generate` before giving up on a difficulty range nothing in a
/// reasonable number of attempts can hit (e.g. an empty intersection, or a range no
/// removal sequence happens to land in).
const MAX_GENERATE_ATTEMPTS: usize = 2000;

fn main() {
    better_panic::install();
    env_logger::init();

    let cli = Cli::parse();
    let code = match cli.command {
        Command::Solve { board } => cmd_solve(&board),
        Command::Suggest {
            all,
            verbose,
            json,
            board,
        } => cmd_suggest(all, verbose, json, &board),
        Command::Rate { verbose, board } => cmd_rate(verbose, &board),
        Command::Generate {
            max_difficulty,
            min_difficulty,
        } => cmd_generate(max_difficulty, min_difficulty),
        Command::Profile { count } => cmd_profile(count),
    };
    std::process::exit(code);
}

/// Returns the sole board argument, or `None` if the caller didn't pass exactly one.
fn single_board_arg(board: &[String]) -> Option<&str> {
    match board {
        [one] => Some(one.as_str()),
        _ => None,
    }
}

/// `solve <81 digits>`. Exit codes: 0 success; 1 missing argument; 2 invalid digit.
fn cmd_solve(board: &[String]) -> i32 {
    let Some(text) = single_board_arg(board) else {
        eprintln!("usage: sudoku solve <81 digits>");
        return 1;
    };
    let grid = match parse_board_arg(text) {
        Ok(grid) => grid,
        Err(err) => {
            eprintln!("invalid board: {err}");
            return 2;
        }
    };

    println!("{grid:#}");
    let solutions = backtrack::all_solutions(&grid, MAX_SOLUTIONS_PRINTED);
    if solutions.is_empty() {
        println!("no solution");
        return 0;
    }
    for (i, solution) in solutions.iter().enumerate() {
        println!("solution {}:", i + 1);
        println!("{solution:#}");
    }
    if solutions.len() == MAX_SOLUTIONS_PRINTED {
        println!("(stopped after {MAX_SOLUTIONS_PRINTED} solutions; more may exist)");
    }
    0
}

/// `suggest [-a] [-v] [--json] <81 digits>`. Exit codes: 0 success; 1 wrong arity;
/// 2 invalid digit; 3 inconsistent board.
///
/// `--json` prints each step as the §6 JSON step record (one object per line)
/// instead of a text summary; it composes with `-a` but ignores `-v`, since the JSON
/// record always carries its `reason` field.
fn cmd_suggest(all: bool, verbose: bool, json: bool, board: &[String]) -> i32 {
    let Some(text) = single_board_arg(board) else {
        eprintln!("usage: sudoku suggest [-a] [-v] <81 digits>");
        return 1;
    };
    let grid = match parse_board_arg(text) {
        Ok(grid) => grid,
        Err(err) => {
            eprintln!("invalid board: {err}");
            return 2;
        }
    };
    let mut analyzer = match Analyzer::new(grid) {
        Ok(analyzer) => analyzer,
        Err(CallerError::Inconsistent(err)) => {
            eprintln!("inconsistent board: {err}");
            return 3;
        }
        Err(err) => {
            eprintln!("invalid board: {err}");
            return 2;
        }
    };

    // `-a` implies verbose reasons, per the original `suggest -a` behavior.
    let verbose = verbose || all;
    let steps = if all { analyzer.run_to_completion() } else { vec![analyzer.next_step()] };
    for (i, step) in steps.iter().enumerate() {
        if json {
            println!("{}", serde_json::to_string(step).expect("Step always serializes"));
            continue;
        }
        if all {
            println!("{:3}. {}", i + 1, step_display::summary_line(step));
        } else {
            println!("{}", step_display::summary_line(step));
        }
        if verbose {
            println!("{}", step_display::reason_line(step));
        }
    }
    0
}

/// `rate [-v|-vv] <81 digits>`. Exit codes: 0 success; 1 bad flag; 2 wrong arity;
/// 3 invalid input; 4 inconsistent board.
fn cmd_rate(verbose: u8, board: &[String]) -> i32 {
    if verbose > 2 {
        eprintln!("usage: sudoku rate [-v|-vv] <81 digits>");
        return 1;
    }
    let Some(text) = single_board_arg(board) else {
        eprintln!("usage: sudoku rate [-v|-vv] <81 digits>");
        return 2;
    };
    let grid = match parse_board_arg(text) {
        Ok(grid) => grid,
        Err(err) => {
            eprintln!("invalid board: {err}");
            return 3;
        }
    };
    let mut analyzer = match Analyzer::new(grid) {
        Ok(analyzer) => analyzer,
        Err(CallerError::Inconsistent(err)) => {
            eprintln!("inconsistent board: {err}");
            return 4;
        }
        Err(err) => {
            eprintln!("invalid board: {err}");
            return 3;
        }
    };

    let steps = analyzer.run_to_completion();
    let rating = rate_steps(&steps);
    println!("{rating}");

    if verbose >= 1 {
        for (i, step) in steps.iter().enumerate() {
            let tier = step.technique.map_or(0, sudoku_solver::TechniqueKind::tier);
            println!("  {:3}. [{tier}] {}", i + 1, step_display::summary_line(step));
            if verbose >= 2 {
                println!("{}", step_display::reason_line(step));
            }
        }
    }
    0
}

/// `generate <maxDifficulty> [minDifficulty]`. Retries with a fresh seed until a
/// generated puzzle's rating falls within `[minDifficulty, maxDifficulty]`, or gives
/// up after [`MAX_GENERATE_ATTEMPTS`]. Exit codes: 0 success; 1 missing or malformed
/// difficulty argument; 2 no puzzle found in range within the attempt budget.
fn cmd_generate(max_difficulty: Option<String>, min_difficulty: Option<String>) -> i32 {
    let Some(max_text) = max_difficulty else {
        eprintln!("usage: sudoku generate <maxDifficulty> [minDifficulty]");
        return 1;
    };
    let Ok(max) = max_text.parse::<f64>() else {
        eprintln!("invalid maxDifficulty: {max_text}");
        return 1;
    };
    let min = match min_difficulty {
        None => 0.0,
        Some(text) => match text.parse::<f64>() {
            Ok(min) => min,
            Err(_) => {
                eprintln!("invalid minDifficulty: {text}");
                return 1;
            }
        },
    };
    if min > max {
        eprintln!("minDifficulty ({min}) must not exceed maxDifficulty ({max})");
        return 1;
    }

    let generator = PuzzleGenerator::new();
    for attempt in 0..MAX_GENERATE_ATTEMPTS {
        let puzzle = generator.generate();
        let Ok(rating) = rate(puzzle.problem.clone()) else {
            continue;
        };
        log::debug!("attempt {attempt}: rating {rating}");
        if (min..=max).contains(&rating) {
            println!("{}", puzzle.problem);
            return 0;
        }
    }
    eprintln!("no puzzle with difficulty in [{min}, {max}] found after {MAX_GENERATE_ATTEMPTS} attempts");
    2
}

/// `profile [count]`. Generates `count` puzzles (default 1000), times generation and
/// analysis separately, and prints aggregate timing and technique-usage statistics.
/// Not part of the §6 exit-code contract: always exits 0.
fn cmd_profile(count: usize) -> i32 {
    let generator = PuzzleGenerator::new();

    let mut puzzles = Vec::with_capacity(count);
    let mut generate_total = Duration::ZERO;
    for _ in 0..count {
        let start = Instant::now();
        let puzzle = generator.generate();
        generate_total += start.elapsed();
        puzzles.push(puzzle);
    }

    let mut analyze_total = Duration::ZERO;
    let mut technique_counts: HashMap<&'static str, u32> = HashMap::new();
    let mut solved_count = 0usize;
    for puzzle in &puzzles {
        let Ok(mut analyzer) = Analyzer::new(puzzle.problem.clone()) else {
            continue;
        };
        let start = Instant::now();
        let steps = analyzer.run_to_completion();
        analyze_total += start.elapsed();
        if steps.last().is_some_and(|step| step.action == Action::Done) {
            solved_count += 1;
        }
        for step in &steps {
            if let Some(technique) = step.technique {
                *technique_counts.entry(technique.name()).or_insert(0) += 1;
            }
        }
    }

    println!("puzzles:              {count}");
    println!("generate total:       {generate_total:?}");
    if count > 0 {
        println!("generate average:     {:?}", generate_total / u32::try_from(count).unwrap_or(1));
    }
    println!("analyze total:        {analyze_total:?}");
    if count > 0 {
        println!("analyze average:      {:?}", analyze_total / u32::try_from(count).unwrap_or(1));
    }
    println!("solved by techniques:  {solved_count}/{count}");
    println!("technique usage:");
    let mut counts: Vec<(&str, u32)> = technique_counts.into_iter().collect();
    counts.sort_unstable_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    for (name, count) in counts {
        println!("  {name:<20} {count}");
    }
    0
}
