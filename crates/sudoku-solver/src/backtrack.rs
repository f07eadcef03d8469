//! Plain depth-first backtracking over a [`DigitGrid`].
//!
//! Unlike [`crate::analyzer`], this module never consults candidate bookkeeping or the
//! technique pipeline: it exists purely to answer "is this board solvable" and "is the
//! solution unique", which the generator needs on every candidate board it considers
//! and which gain nothing from human-style deduction. Cells are tried in fixed
//! row-major order, with digits tried in ascending order; this gives deterministic,
//! reproducible output for a given input board, which matters for tests and for the
//! generator's seeded RNG reproducing the same puzzle on request.

use sudoku_core::{Digit, DigitGrid, DigitSet, Position};

/// Returns the set of digits not already present among `pos`'s house peers.
///
/// Exposed for the generator, which needs the same per-cell candidate set while filling
/// a grid with a shuffled digit order rather than this module's fixed ascending one.
#[must_use]
pub fn possible_values(board: &DigitGrid, pos: Position) -> DigitSet {
    let mut candidates = DigitSet::FULL;
    for peer in pos.house_peers() {
        if let Some(digit) = board.get(peer) {
            candidates.remove(digit);
        }
    }
    candidates
}

/// Returns the first empty cell in row-major order, if any.
#[must_use]
pub fn first_empty(board: &DigitGrid) -> Option<Position> {
    Position::ALL.into_iter().find(|&pos| board.get(pos).is_none())
}

/// Finds a solution for `board` in place by depth-first search, trying digits in
/// ascending order at each empty cell.
///
/// Returns `true` and leaves `board` fully solved if a solution exists; returns
/// `false` and restores `board` to its original state otherwise.
///
/// Assumes `board` is already consistent (no duplicated digit in any house); an
/// inconsistent board simply reports no solution rather than panicking.
pub fn solve(board: &mut DigitGrid) -> bool {
    let Some(pos) = first_empty(board) else {
        return true;
    };
    for digit in possible_values(board, pos) {
        board.set(pos, Some(digit));
        if solve(board) {
            return true;
        }
    }
    board.set(pos, None);
    false
}

/// Collects up to `cap` distinct solutions of `board` by depth-first search.
///
/// Used by [`has_unique_solution`] (with `cap = 2`, stopping as soon as a second
/// solution is found) and by property tests that want to enumerate every solution of
/// a small fixture. `board` is left unchanged.
#[must_use]
pub fn all_solutions(board: &DigitGrid, cap: usize) -> Vec<DigitGrid> {
    let mut solutions = Vec::new();
    let mut working = board.clone();
    collect_solutions(&mut working, cap, &mut solutions);
    solutions
}

fn collect_solutions(board: &mut DigitGrid, cap: usize, solutions: &mut Vec<DigitGrid>) {
    if solutions.len() >= cap {
        return;
    }
    let Some(pos) = first_empty(board) else {
        solutions.push(board.clone());
        return;
    };
    for digit in possible_values(board, pos) {
        board.set(pos, Some(digit));
        collect_solutions(board, cap, solutions);
        if solutions.len() >= cap {
            board.set(pos, None);
            return;
        }
    }
    board.set(pos, None);
}

/// Returns `true` if `board` has exactly one solution.
///
/// Stops searching as soon as a second solution is found, so this is cheap even on
/// boards with many solutions: the generator calls it once per candidate cell removal.
#[must_use]
pub fn has_unique_solution(board: &DigitGrid) -> bool {
    all_solutions(board, 2).len() == 1
}
