//! Test utilities for technique implementations.
//!
//! This module provides [`TechniqueTester`], a testing harness for verifying
//! that a single [`Technique`] produces the [`Step`] (or no step at all) a test expects.
//!
//! # Example
//!
//! ```
//! use sudoku_core::{Digit, Position};
//! use sudoku_solver::technique::NakedSingle;
//! # use sudoku_solver::testing::TechniqueTester;
//!
//! TechniqueTester::from_str_no_propagation(
//!     "
//!     5__ ___ ___
//!     ___ ___ ___
//!     ___ ___ ___
//!     ___ ___ ___
//!     ___ ___ ___
//!     ___ ___ ___
//!     ___ ___ ___
//!     ___ ___ ___
//!     ___ ___ ___
//! ",
//! )
//! .find_once(&NakedSingle::new())
//! .assert_solved(Position::new(0, 0), Digit::D5);
//! ```

use std::str::FromStr as _;

use sudoku_core::{CandidateGrid, Digit, DigitGrid, Position};

use crate::{Action, Step, technique::Technique};

/// A test harness for verifying technique implementations.
///
/// `TechniqueTester` owns a board/candidates pair and the most recent [`Step`] a
/// technique produced against it, and offers fluent assertions over that step.
///
/// # Method Chaining
///
/// All methods return `self` (or consume it as the final call), enabling fluent
/// method chaining for readable tests.
///
/// # Panics
///
/// All assertion methods panic with detailed messages on failure, using
/// `#[track_caller]` to report the correct source location.
#[derive(Debug)]
pub struct TechniqueTester {
    board: DigitGrid,
    candidates: CandidateGrid,
    step: Option<Step>,
}

impl TechniqueTester {
    /// Creates a new tester from an already-constructed candidate grid.
    ///
    /// The board is derived from the grid's decided cells; technique tests that only
    /// care about candidates (the common case) can ignore it.
    #[must_use]
    pub fn new(candidates: CandidateGrid) -> Self {
        let board = candidates.to_digit_grid();
        Self {
            board,
            candidates,
            step: None,
        }
    }

    /// Creates a new tester from an explicit board and candidate grid, kept
    /// independent instead of deriving one from the other.
    ///
    /// Needed whenever a fixture must distinguish "this cell's candidates have
    /// collapsed to one digit" (what [`NakedSingle`](crate::technique::NakedSingle)
    /// looks for) from "this cell has actually been placed" ([`new`](Self::new)
    /// conflates the two, since both look the same from the candidate grid alone).
    #[must_use]
    pub fn with_board(board: DigitGrid, candidates: CandidateGrid) -> Self {
        Self {
            board,
            candidates,
            step: None,
        }
    }

    /// Creates a new tester from a grid string, with full constraint propagation.
    ///
    /// The string format matches [`DigitGrid::from_str`]:
    /// - Digits 1-9 represent filled cells
    /// - `.`, `_`, or `0` represent empty cells
    /// - Whitespace is ignored
    ///
    /// # Panics
    ///
    /// Panics if the string cannot be parsed as a valid grid.
    #[track_caller]
    #[must_use]
    pub fn from_str(s: &str) -> Self {
        let board = DigitGrid::from_str(s).expect("invalid test fixture board");
        Self::new(CandidateGrid::from_digit_grid(&board))
    }

    /// Creates a new tester from a grid string without constraint propagation.
    ///
    /// Useful for building fixtures with a deliberately unpropagated candidate state,
    /// e.g. to check that a technique performs an elimination that plain placement
    /// would not already have performed.
    ///
    /// # Panics
    ///
    /// Panics if the string cannot be parsed as a valid grid.
    #[track_caller]
    #[must_use]
    pub fn from_str_no_propagation(s: &str) -> Self {
        let board = DigitGrid::from_str(s).expect("invalid test fixture board");
        Self::new(CandidateGrid::from_digit_grid_no_propagation(&board))
    }

    /// Returns the candidate grid under test, for assertions beyond the recorded step.
    #[must_use]
    pub fn candidates(&self) -> &CandidateGrid {
        &self.candidates
    }

    /// Runs `technique.find` once and records the resulting step (or its absence).
    #[must_use]
    pub fn find_once(mut self, technique: &dyn Technique) -> Self {
        self.step = technique.find(&self.board, &self.candidates);
        self
    }

    /// Asserts that `technique.find` produces no step.
    #[track_caller]
    pub fn assert_no_step(self, technique: &dyn Technique) {
        let step = technique.find(&self.board, &self.candidates);
        assert!(step.is_none(), "expected no step, got {step:?}");
    }

    #[track_caller]
    fn step(&self) -> &Step {
        self.step
            .as_ref()
            .unwrap_or_else(|| panic!("expected find_once to have recorded a step, but it found none"))
    }

    /// Asserts the recorded step is a `solve` at `pos` placing `digit`.
    #[track_caller]
    #[must_use]
    pub fn assert_solved(self, pos: Position, digit: Digit) -> Self {
        {
            let step = self.step();
            assert_eq!(step.action, Action::Solve, "expected a solve step, got {step:?}");
            assert_eq!(step.indexes, vec![pos.index()], "unexpected solved cell: {step:?}");
            assert_eq!(step.values, vec![digit.value()], "unexpected solved digit: {step:?}");
            assert!(!step.reason.is_empty(), "solve steps must carry a non-empty reason");
        }
        self
    }

    /// Asserts the recorded step is an `eliminate` touching exactly `cells` and `digits`
    /// (each deduplicated; order does not matter).
    #[track_caller]
    #[must_use]
    pub fn assert_eliminates(
        self,
        cells: impl IntoIterator<Item = Position>,
        digits: impl IntoIterator<Item = Digit>,
    ) -> Self {
        {
            let step = self.step();
            assert_eq!(step.action, Action::Eliminate, "expected an eliminate step, got {step:?}");
            let mut expected_indexes: Vec<u8> = cells.into_iter().map(Position::index).collect();
            expected_indexes.sort_unstable();
            expected_indexes.dedup();
            let mut expected_values: Vec<u8> = digits.into_iter().map(|d| d.value()).collect();
            expected_values.sort_unstable();
            expected_values.dedup();
            assert_eq!(step.indexes, expected_indexes, "unexpected eliminated cells: {step:?}");
            assert_eq!(step.values, expected_values, "unexpected eliminated digits: {step:?}");
            assert!(!step.reason.is_empty(), "eliminate steps must carry a non-empty reason");
        }
        self
    }

    /// Asserts the recorded step's `indexes` include `pos`, without requiring an exact set.
    #[track_caller]
    #[must_use]
    pub fn assert_touches(self, pos: Position) -> Self {
        {
            let step = self.step();
            assert!(
                step.indexes.contains(&pos.index()),
                "expected step to touch {}, got {step:?}",
                pos.cell_name()
            );
        }
        self
    }

    /// Asserts the recorded step's `reason` contains `needle`.
    #[track_caller]
    #[must_use]
    pub fn assert_reason_contains(self, needle: &str) -> Self {
        {
            let step = self.step();
            assert!(
                step.reason.contains(needle),
                "expected reason to contain {needle:?}, got {:?}",
                step.reason
            );
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use sudoku_core::DigitGrid;

    use super::*;
    use crate::TechniqueKind;

    #[derive(Debug)]
    struct NoOpTechnique;

    impl Technique for NoOpTechnique {
        fn kind(&self) -> TechniqueKind {
            TechniqueKind::None
        }

        fn find(&self, _board: &DigitGrid, _candidates: &CandidateGrid) -> Option<Step> {
            None
        }
    }

    #[derive(Debug)]
    struct PlaceD1At00;

    impl Technique for PlaceD1At00 {
        fn kind(&self) -> TechniqueKind {
            TechniqueKind::NakedSingle
        }

        fn find(&self, _board: &DigitGrid, candidates: &CandidateGrid) -> Option<Step> {
            let pos = Position::new(0, 0);
            if candidates.candidates_at(pos).len() == 1 {
                None
            } else {
                Some(Step::solve(pos, Digit::D1, self.kind(), "test fixture"))
            }
        }
    }

    #[test]
    fn test_find_once_records_step() {
        TechniqueTester::from_str(
            "
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
        ",
        )
        .find_once(&PlaceD1At00)
        .assert_solved(Position::new(0, 0), Digit::D1);
    }

    #[test]
    fn test_assert_no_step() {
        TechniqueTester::from_str(
            "
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
        ",
        )
        .assert_no_step(&NoOpTechnique);
    }

    #[test]
    #[should_panic(expected = "expected find_once to have recorded a step")]
    fn test_assert_solved_panics_without_step() {
        TechniqueTester::from_str(
            "
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
        ",
        )
        .find_once(&NoOpTechnique)
        .assert_solved(Position::new(0, 0), Digit::D1);
    }

    #[test]
    fn test_from_str_no_propagation_leaves_peers_untouched() {
        let tester = TechniqueTester::from_str_no_propagation(
            "
            5__ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
        ",
        );

        assert!(tester.candidates().candidates_at(Position::new(1, 0)).contains(Digit::D5));
        assert_eq!(tester.candidates().candidates_at(Position::new(0, 0)).len(), 1);
    }

    #[test]
    fn test_from_str_propagates() {
        let tester = TechniqueTester::from_str(
            "
            5__ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
        ",
        );

        assert!(!tester.candidates().candidates_at(Position::new(1, 0)).contains(Digit::D5));
    }
}
