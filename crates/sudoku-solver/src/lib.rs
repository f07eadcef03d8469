//! Deductive and brute-force solving for Sudoku puzzles.
//!
//! This crate provides two independent ways to drive a board to completion:
//!
//! - [`Analyzer`]: replays the pipeline of human solving techniques in
//!   [`technique::all_techniques`] order, one step at a time, and can compute a
//!   difficulty [`rate`](analyzer::rate) from the steps it takes.
//! - [`backtrack`]: plain depth-first search over a [`DigitGrid`](sudoku_core::DigitGrid),
//!   used to check solvability and solution uniqueness without any technique
//!   machinery. The puzzle generator relies on this, not on the Analyzer.
//!
//! # Examples
//!
//! ## Stepping through an Analyzer
//!
//! ```
//! use sudoku_core::DigitGrid;
//! use sudoku_solver::{Action, Analyzer};
//!
//! let board: DigitGrid =
//!     "024189637361547289879623145653498712987251364142376958238914576415762893796835421"
//!         .parse()?;
//! let mut analyzer = Analyzer::new(board)?;
//! let step = analyzer.next_step();
//! assert_eq!(step.action, Action::Solve);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Rating a puzzle's difficulty
//!
//! ```
//! use sudoku_core::DigitGrid;
//! use sudoku_solver::analyzer::rate;
//!
//! let board: DigitGrid =
//!     "024189637361547289879623145653498712987251364142376958238914576415762893796835421"
//!         .parse()?;
//! let rating = rate(board)?;
//! println!("difficulty: {rating}");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Checking for a unique solution
//!
//! ```
//! use sudoku_core::DigitGrid;
//! use sudoku_solver::backtrack;
//!
//! let board: DigitGrid =
//!     "024189637361547289879623145653498712987251364142376958238914576415762893796835421"
//!         .parse()?;
//! assert!(backtrack::has_unique_solution(&board));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Custom technique selection
//!
//! ```
//! use sudoku_core::DigitGrid;
//! use sudoku_solver::{Analyzer, technique::{BoxedTechnique, NakedSingle}};
//!
//! let techniques: Vec<BoxedTechnique> = vec![Box::new(NakedSingle::new())];
//! let board = DigitGrid::new();
//! let analyzer = Analyzer::with_techniques(board, techniques)?;
//! # Ok::<(), sudoku_solver::CallerError>(())
//! ```

pub use self::{analyzer::Analyzer, error::*, step::*};

pub mod analyzer;
pub mod backtrack;
mod error;
mod step;
pub mod technique;

#[cfg(test)]
mod testing;
