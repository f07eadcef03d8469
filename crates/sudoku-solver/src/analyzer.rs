//! The Analyzer: a pipelined deductive engine that solves or stalls on a Sudoku board
//! one human-style step at a time.
//!
//! Construction validates the input board (§7's caller-error boundary) and builds the
//! initial candidate set with full propagation. Each call to [`Analyzer::next_step`]
//! tries every technique in [`technique::all_techniques`] order and applies the first
//! one that finds progress, returning the [`Step`] it produced. Callers loop on
//! `next_step` (or call [`Analyzer::run_to_completion`]) until the engine reports
//! `done` or `stuck`.

use log::{debug, trace};
use sudoku_core::{CandidateGrid, Digit, DigitGrid, Position};

use crate::{Action, CallerError, Step, technique::BoxedTechnique};

/// The Analyzer's state: a board, its candidate set, and whether the analysis has
/// concluded (solved or stuck).
///
/// `Analyzer` owns its `board` and `candidates` exclusively: no other code aliases
/// them between steps, so invariants C1/C2 (every filled cell's candidates are a
/// singleton of its value; every empty cell's candidates are a superset of the true
/// solution) hold after every call to [`next_step`](Self::next_step).
#[derive(Debug)]
pub struct Analyzer {
    board: DigitGrid,
    candidates: CandidateGrid,
    techniques: Vec<BoxedTechnique>,
    done: bool,
    stuck: bool,
}

impl Analyzer {
    /// Builds an Analyzer over `board` using the full technique pipeline.
    ///
    /// # Errors
    ///
    /// Returns [`CallerError::Inconsistent`] if `board` already has a duplicated digit
    /// in some row, column, or box.
    pub fn new(board: DigitGrid) -> Result<Self, CallerError> {
        Self::with_techniques(board, crate::technique::all_techniques())
    }

    /// Builds an Analyzer over `board` using a caller-supplied technique list, tried in
    /// the order given.
    ///
    /// # Errors
    ///
    /// Returns [`CallerError::Inconsistent`] if `board` already has a duplicated digit
    /// in some row, column, or box.
    pub fn with_techniques(board: DigitGrid, techniques: Vec<BoxedTechnique>) -> Result<Self, CallerError> {
        let candidates = CandidateGrid::from_digit_grid(&board);
        candidates.check_consistency().map_err(CallerError::Inconsistent)?;
        let done = candidates.is_solved().unwrap_or(false);
        Ok(Self {
            board,
            candidates,
            techniques,
            done,
            stuck: false,
        })
    }

    /// Returns the current board, reflecting every step applied so far.
    #[must_use]
    pub fn board(&self) -> &DigitGrid {
        &self.board
    }

    /// Returns the current candidate set, reflecting every step applied so far.
    #[must_use]
    pub fn candidates(&self) -> &CandidateGrid {
        &self.candidates
    }

    /// Returns `true` once the board has been fully, consistently filled.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Returns `true` once no technique in the pipeline can make further progress.
    #[must_use]
    pub fn is_stuck(&self) -> bool {
        self.stuck
    }

    /// Runs one pipeline pass: the first technique that finds progress wins, is
    /// applied, and its [`Step`] is returned.
    ///
    /// If the board is already complete, returns [`Step::done`] without trying any
    /// technique. If no technique can make progress, sets `stuck` and returns
    /// [`Step::stuck`]. Once `done` or `stuck`, further calls keep returning the same
    /// terminal step without re-scanning the pipeline.
    pub fn next_step(&mut self) -> Step {
        if self.done {
            return Step::done();
        }
        if self.stuck {
            return Step::stuck();
        }
        for technique in &self.techniques {
            if let Some(step) = technique.find(&self.board, &self.candidates) {
                trace!("{:?} step: {}", step.action, step.reason);
                self.apply_step(&step);
                return step;
            }
        }
        debug!("no technique could make progress; analyzer is stuck");
        self.stuck = true;
        Step::stuck()
    }

    /// Drives [`next_step`](Self::next_step) until the Analyzer reports `done` or
    /// `stuck`, returning every step in order (the terminal step included).
    pub fn run_to_completion(&mut self) -> Vec<Step> {
        let mut steps = Vec::new();
        loop {
            let step = self.next_step();
            let terminal = matches!(step.action, Action::Done | Action::Stuck);
            steps.push(step);
            if terminal {
                return steps;
            }
        }
    }

    /// Applies a `solve` or `eliminate` step to both `board` and `candidates`.
    ///
    /// # Panics
    ///
    /// In debug builds, panics (via `debug_assert!`) if applying the step would empty
    /// a cell's candidate set or duplicate a decided digit within a house: either is a
    /// programming-fault invariant violation (§7.3), not a reachable board state.
    fn apply_step(&mut self, step: &Step) {
        match step.action {
            Action::Solve => {
                let pos = Position::from_index(step.indexes[0]);
                let digit = Digit::from_value(step.values[0]);
                self.board.set(pos, Some(digit));
                self.candidates.place(pos, digit);
                debug_assert!(self.candidates.check_consistency().is_ok(), "solve step violated C1/C2");
                if self.candidates.is_solved() == Ok(true) {
                    self.done = true;
                }
            }
            Action::Eliminate => {
                for &index in &step.indexes {
                    let pos = Position::from_index(index);
                    for &value in &step.values {
                        self.candidates.remove_candidate(pos, Digit::from_value(value));
                    }
                }
                debug_assert!(self.candidates.check_consistency().is_ok(), "eliminate step emptied a cell");
            }
            Action::Stuck | Action::Done => {}
        }
    }
}

/// Runs the full technique pipeline over `board` to completion and computes the
/// difficulty rating of §4.5.3.
///
/// Assigns each technique its fixed tier (1 easiest .. 8 hardest, via
/// [`crate::TechniqueKind::tier`]); `D` is the highest tier used and `n_d` the count of
/// steps at tier `d`. Returns `9001.0` if the Analyzer gets stuck before the board is
/// completed.
///
/// # Errors
///
/// Returns [`CallerError::Inconsistent`] if `board` is inconsistent.
pub fn rate(board: DigitGrid) -> Result<f64, CallerError> {
    let mut analyzer = Analyzer::new(board)?;
    let steps = analyzer.run_to_completion();
    Ok(rate_steps(&steps))
}

/// Computes the §4.5.3 difficulty formula from a recorded sequence of steps.
///
/// A pure function of the step sequence, so callers that already ran an Analyzer (e.g.
/// `suggest -a`) can reuse the recorded steps instead of re-running the pipeline.
#[must_use]
pub fn rate_steps(steps: &[Step]) -> f64 {
    if steps.last().is_some_and(|step| step.action == Action::Stuck) {
        return 9001.0;
    }

    let mut counts = [0u32; 9]; // counts[d] = number of steps at tier d, 1..=8
    let mut max_tier = 0u8;
    for step in steps {
        let Some(technique) = step.technique else {
            continue;
        };
        let tier = technique.tier();
        if tier == 0 {
            continue;
        }
        counts[tier as usize] += 1;
        max_tier = max_tier.max(tier);
    }

    if max_tier == 0 {
        // No technique fired at all: either an already-solved input (a single `done`
        // step) or an empty puzzle that got stuck immediately, which was handled above.
        return 0.0;
    }

    let d = f64::from(max_tier);
    let n_d = f64::from(counts[max_tier as usize]);
    let mut rating = d - 0.5 / (n_d + 1.0);
    for tier in 1..max_tier {
        let n = f64::from(counts[tier as usize]);
        rating += (n / (n + 1.0)) * 2f64.powi(i32::from(tier) - i32::from(max_tier) - 1);
    }
    rating
}

#[cfg(test)]
mod tests {
    use std::str::FromStr as _;

    use sudoku_core::{Digit, DigitGrid, Position};

    use super::*;
    use crate::TechniqueKind;

    const SOLVED: &str = "524189637361547289879623145653498712987251364142376958238914576415762893796835421";
    const ONE_NAKED_SINGLE: &str =
        "024189637361547289879623145653498712987251364142376958238914576415762893796835421";
    const STUCK_PUZZLE: &str =
        "006700400000050070070100030800079016060301750700620004690007023037960040008000967";

    #[test]
    fn test_new_rejects_inconsistent_board() {
        let mut board = DigitGrid::new();
        board.set(Position::new(0, 0), Some(Digit::D5));
        board.set(Position::new(1, 0), Some(Digit::D5));
        let result = Analyzer::new(board);
        assert!(matches!(result, Err(CallerError::Inconsistent(_))));
    }

    #[test]
    fn test_solved_input_produces_single_done_step() {
        let board = DigitGrid::from_str(SOLVED).unwrap();
        let mut analyzer = Analyzer::new(board).unwrap();
        assert!(analyzer.is_done());
        let step = analyzer.next_step();
        assert_eq!(step.action, Action::Done);
        assert!(analyzer.next_step().action == Action::Done);
    }

    #[test]
    fn test_naked_single_scenario() {
        let board = DigitGrid::from_str(ONE_NAKED_SINGLE).unwrap();
        let mut analyzer = Analyzer::new(board).unwrap();
        let step = analyzer.next_step();
        assert_eq!(step.action, Action::Solve);
        assert_eq!(step.technique, Some(TechniqueKind::NakedSingle));
        assert_eq!(step.indexes, vec![0]);
        assert_eq!(step.values, vec![5]);
    }

    #[test]
    fn test_stuck_scenario_reports_stuck_with_no_technique() {
        let board = DigitGrid::from_str(STUCK_PUZZLE).unwrap();
        let mut analyzer = Analyzer::new(board).unwrap();
        let steps = analyzer.run_to_completion();
        let last = steps.last().unwrap();
        assert_eq!(last.action, Action::Stuck);
        assert_eq!(last.technique, Some(TechniqueKind::None));
        assert!(analyzer.is_stuck());
    }

    #[test]
    fn test_run_to_completion_solves_a_naked_single_puzzle() {
        let board = DigitGrid::from_str(ONE_NAKED_SINGLE).unwrap();
        let mut analyzer = Analyzer::new(board).unwrap();
        let steps = analyzer.run_to_completion();
        assert_eq!(steps.last().unwrap().action, Action::Done);
        assert!(analyzer.board().iter().all(Option::is_some));
    }

    #[test]
    fn test_rating_of_trivial_puzzle_is_in_expected_range() {
        let board = DigitGrid::from_str(ONE_NAKED_SINGLE).unwrap();
        let rating = rate(board).unwrap();
        assert!((1.0..1.5).contains(&rating), "rating was {rating}");
    }

    #[test]
    fn test_rating_of_stuck_puzzle_is_9001() {
        let board = DigitGrid::from_str(STUCK_PUZZLE).unwrap();
        let rating = rate(board).unwrap();
        assert_eq!(rating, 9001.0);
    }

    #[test]
    fn test_rating_monotone_in_added_hard_steps() {
        // Synthetic step sequences rather than real puzzles, to isolate the formula.
        let base = vec![Step::solve(Position::new(0, 0), Digit::D1, TechniqueKind::NakedSingle, "x")];
        let mut harder = base.clone();
        harder.push(Step::eliminate(
            [Position::new(1, 0)],
            [Digit::D2],
            TechniqueKind::XWing,
            "y",
        ));
        let mut harder_again = harder.clone();
        harder_again.push(Step::eliminate(
            [Position::new(2, 0)],
            [Digit::D3],
            TechniqueKind::XWing,
            "z",
        ));

        let r1 = rate_steps(&harder);
        let r2 = rate_steps(&harder_again);
        assert!(r2 > r1, "{r2} should exceed {r1}");
    }

    #[test]
    fn test_rating_of_already_solved_board_is_zero() {
        let steps = vec![Step::done()];
        assert_eq!(rate_steps(&steps), 0.0);
    }

    mod props {
        use proptest::prelude::*;
        use sudoku_core::DigitSet;

        use super::*;

        /// Removes the positions named by `remove` from the known [`SOLVED`] grid,
        /// so every generated board is a sub-puzzle of a board with a known solution.
        fn board_with_removed(remove: &[bool]) -> DigitGrid {
            let mut board = DigitGrid::from_str(SOLVED).unwrap();
            for (pos, &should_remove) in Position::ALL.iter().zip(remove) {
                if should_remove {
                    board.clear(*pos);
                }
            }
            board
        }

        fn arbitrary_sub_puzzle() -> impl Strategy<Value = DigitGrid> {
            prop::collection::vec(any::<bool>(), 81).prop_map(|remove| board_with_removed(&remove))
        }

        fn total_candidate_count(candidates: &CandidateGrid) -> usize {
            Position::ALL.iter().map(|&pos| candidates.candidates_at(pos).len()).sum()
        }

        proptest! {
            // I1-I3: after every step, no cell is left without a candidate, every
            // filled cell's candidates are exactly its own value (and cleared from
            // dependents), and the known solution's digit always survives as a
            // candidate. T3: the pipeline only ever shrinks the search space.
            #[test]
            fn prop_invariants_hold_after_every_step(board in arbitrary_sub_puzzle()) {
                let solution = DigitGrid::from_str(SOLVED).unwrap();
                let Ok(mut analyzer) = Analyzer::new(board) else {
                    // A removal pattern that happens to duplicate a digit in some
                    // house is rejected up front; nothing further to check.
                    return Ok(());
                };

                let mut previous_total = total_candidate_count(analyzer.candidates());
                let mut previous_empty =
                    Position::ALL.iter().filter(|&&pos| analyzer.board().get(pos).is_none()).count();
                loop {
                    let step = analyzer.next_step();
                    let terminal = matches!(step.action, Action::Done | Action::Stuck);

                    for &pos in &Position::ALL {
                        let cell = analyzer.candidates().candidates_at(pos);
                        prop_assert!(!cell.is_empty(), "I1 violated at {}", pos.cell_name());
                        if let Some(digit) = analyzer.board().get(pos) {
                            prop_assert_eq!(cell, DigitSet::from_iter([digit]), "I2 violated at {}", pos.cell_name());
                        }
                        if let Some(truth) = solution.get(pos) {
                            prop_assert!(cell.contains(truth), "I3 violated at {}: {truth} missing", pos.cell_name());
                        }
                    }

                    if step.action == Action::Eliminate {
                        let total = total_candidate_count(analyzer.candidates());
                        prop_assert!(total < previous_total, "T3 violated: eliminate step did not shrink candidates");
                        previous_total = total;
                    } else if step.action == Action::Solve {
                        let empty =
                            Position::ALL.iter().filter(|&&pos| analyzer.board().get(pos).is_none()).count();
                        prop_assert!(empty < previous_empty, "T3 violated: solve step did not fill a cell");
                        previous_empty = empty;
                        previous_total = total_candidate_count(analyzer.candidates());
                    }

                    if terminal {
                        break;
                    }
                }
            }
        }
    }
}
