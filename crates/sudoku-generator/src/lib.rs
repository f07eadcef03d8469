//! Sudoku puzzle generator that creates puzzles with a unique solution.
//!
//! # Overview
//!
//! This crate generates valid Sudoku puzzles using the removal method: it first builds
//! a complete solution grid, then removes cells one by one for as long as the remaining
//! board still has exactly one solution.
//!
//! All generated puzzles are guaranteed to:
//! - Have exactly one solution
//! - Be valid according to standard Sudoku rules
//!
//! Difficulty is not controlled here: removal stops only when no further cell can be
//! removed without breaking uniqueness, so a generated puzzle's rating is whatever it
//! happens to land on. Callers who want a puzzle within a target difficulty range retry
//! with a fresh seed and rate the result themselves (see `sudoku-solver`'s `rate`).
//!
//! # Algorithm
//!
//! 1. **Generate a complete solution.** Fill the first row and the rest of the top-left
//!    box with shuffled digits, then finish the grid by depth-first search, trying each
//!    empty cell's remaining candidates in random order.
//! 2. **Remove cells.** Visit all 81 positions in random order; for each, clear it and
//!    check with [`sudoku_solver::backtrack::has_unique_solution`] whether the board
//!    still has exactly one solution. Keep the removal if so, restore the digit otherwise.

use std::{fmt, str::FromStr};

use rand::{
    Rng, SeedableRng,
    distr::{Distribution, StandardUniform},
    seq::SliceRandom,
};
use rand_pcg::Pcg64;
use sudoku_core::{Digit, DigitGrid, Position};
use sudoku_solver::backtrack;

/// Generates Sudoku puzzles by filling a grid and then removing cells.
///
/// `PuzzleGenerator` is stateless; every call is parameterized entirely by its seed, so
/// the same generator instance can be reused (or a fresh one created per call) freely.
///
/// # Examples
///
/// ```
/// use sudoku_generator::PuzzleGenerator;
///
/// let generator = PuzzleGenerator::new();
/// let puzzle = generator.generate();
/// assert_ne!(puzzle.problem, puzzle.solution);
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct PuzzleGenerator;

impl PuzzleGenerator {
    /// Creates a new generator.
    #[must_use]
    pub const fn new() -> Self {
        PuzzleGenerator
    }

    /// Generates a puzzle with a random seed.
    ///
    /// Each call produces a different puzzle. For reproducible generation, use
    /// [`generate_with_seed`](Self::generate_with_seed) instead.
    #[must_use]
    pub fn generate(&self) -> GeneratedPuzzle {
        self.generate_with_seed(rand::random())
    }

    /// Generates a puzzle with a specific seed, reproducibly.
    ///
    /// The same seed always produces the same puzzle.
    ///
    /// # Examples
    ///
    /// ```
    /// use sudoku_generator::PuzzleGenerator;
    ///
    /// let generator = PuzzleGenerator::new();
    /// let puzzle1 = generator.generate();
    /// let puzzle2 = generator.generate_with_seed(puzzle1.seed);
    /// assert_eq!(puzzle1.problem, puzzle2.problem);
    /// ```
    #[must_use]
    pub fn generate_with_seed(&self, seed: PuzzleSeed) -> GeneratedPuzzle {
        let mut rng = Pcg64::from_seed(seed.0);
        let solution = generate_solution(&mut rng);
        log::debug!("generated solution for seed {seed}");
        let problem = remove_cells(&mut rng, &solution);
        log::debug!(
            "removed cells down to {} givens",
            problem.iter().filter(|digit| digit.is_some()).count()
        );
        GeneratedPuzzle { problem, solution, seed }
    }
}

/// Builds a complete, valid solution grid.
///
/// Seeds the first row and the rest of the top-left box with independently shuffled
/// digits (cheap and collision-free by construction), then completes the grid by
/// depth-first search with each cell's candidates tried in random order.
fn generate_solution<R>(rng: &mut R) -> DigitGrid
where
    R: Rng,
{
    let mut board = DigitGrid::new();

    // Fill the first row with shuffled digits 1-9.
    let mut top_row = Digit::ALL;
    top_row.shuffle(rng);
    for (x, digit) in (0..9).zip(top_row) {
        board.set(Position::new(x, 0), Some(digit));
    }

    // Fill the top-left box's remaining 6 cells with the 6 digits the first row didn't
    // already place there (top_row[0..3]).
    let mut remaining: [Digit; 6] = top_row[3..9].try_into().expect("slice of 6 digits");
    remaining.shuffle(rng);
    for (i, digit) in (3..9).zip(remaining) {
        board.set(Position::from_box(0, i), Some(digit));
    }

    let filled = fill_remaining(&mut board, rng);
    assert!(filled, "a partially filled valid grid must always be completable");
    board
}

/// Recursively fills every remaining empty cell, trying candidates in random order.
///
/// Returns `false` (having undone its own placements) if no digit works at some cell,
/// so the caller backtracks into a different earlier choice.
fn fill_remaining<R>(board: &mut DigitGrid, rng: &mut R) -> bool
where
    R: Rng,
{
    let Some(pos) = backtrack::first_empty(board) else {
        return true;
    };
    let mut digits: Vec<Digit> = backtrack::possible_values(board, pos).into_iter().collect();
    digits.shuffle(rng);
    for digit in digits {
        board.set(pos, Some(digit));
        if fill_remaining(board, rng) {
            return true;
        }
    }
    board.set(pos, None);
    false
}

/// Removes cells from a complete solution for as long as the result stays uniquely
/// solvable.
///
/// Visits all 81 positions in random order, clearing each and checking uniqueness with
/// [`backtrack::has_unique_solution`]; a removal that breaks uniqueness is undone.
fn remove_cells<R>(rng: &mut R, solution: &DigitGrid) -> DigitGrid
where
    R: Rng,
{
    let mut problem = solution.clone();
    let mut positions = Position::ALL;
    positions.shuffle(rng);
    for pos in positions {
        let previous = problem.get(pos);
        problem.set(pos, None);
        if !backtrack::has_unique_solution(&problem) {
            problem.set(pos, previous);
            log::trace!("keeping {} to preserve uniqueness", pos.cell_name());
        }
    }
    problem
}

/// A 256-bit seed for reproducible puzzle generation.
///
/// Displays and parses as a 64-character lowercase hexadecimal string.
///
/// # Examples
///
/// ```
/// use sudoku_generator::PuzzleSeed;
///
/// let seed = PuzzleSeed::from([1u8; 32]);
/// assert_eq!(seed.to_string().len(), 64);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PuzzleSeed([u8; 32]);

impl From<[u8; 32]> for PuzzleSeed {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl fmt::Display for PuzzleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

/// Error returned when a string does not parse as a [`PuzzleSeed`].
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
pub enum PuzzleSeedParseError {
    /// The string was not exactly 64 hexadecimal characters long.
    #[display("seed string must be 64 hexadecimal characters, got {_0}")]
    WrongLength(#[error(not(source))] usize),
    /// A byte pair was not valid hexadecimal.
    #[display("invalid hexadecimal byte: {_0}")]
    InvalidByte(#[error(not(source))] String),
}

impl FromStr for PuzzleSeed {
    type Err = PuzzleSeedParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 64 {
            return Err(PuzzleSeedParseError::WrongLength(s.len()));
        }
        let mut bytes = [0u8; 32];
        for (i, byte) in bytes.iter_mut().enumerate() {
            let byte_str = &s[i * 2..i * 2 + 2];
            *byte = u8::from_str_radix(byte_str, 16)
                .map_err(|_| PuzzleSeedParseError::InvalidByte(byte_str.to_string()))?;
        }
        Ok(PuzzleSeed(bytes))
    }
}

impl Distribution<PuzzleSeed> for StandardUniform {
    fn sample<R>(&self, rng: &mut R) -> PuzzleSeed
    where
        R: Rng + ?Sized,
    {
        PuzzleSeed(rng.random())
    }
}

/// A generated puzzle: the board to present, its unique solution, and the seed that
/// produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    /// The puzzle as presented to a solver: a subset of `solution`'s givens.
    pub problem: DigitGrid,
    /// The unique solution `problem` reduces to.
    pub solution: DigitGrid,
    /// The seed that produced this puzzle; pass it to
    /// [`PuzzleGenerator::generate_with_seed`] to reproduce it.
    pub seed: PuzzleSeed,
}

#[cfg(test)]
mod tests {
    use std::str::FromStr as _;

    use sudoku_core::DigitSet;

    use super::*;

    #[test]
    fn test_generated_solution_is_complete() {
        let mut rng = Pcg64::from_seed([1u8; 32]);
        let solution = generate_solution(&mut rng);

        for pos in Position::ALL {
            assert!(solution.get(pos).is_some(), "cell {} should be filled", pos.cell_name());
        }
    }

    #[test]
    fn test_generated_solution_satisfies_sudoku_constraints() {
        let mut rng = Pcg64::from_seed([2u8; 32]);
        let solution = generate_solution(&mut rng);

        for row in Position::ROWS {
            let digits: DigitSet = row.into_iter().filter_map(|pos| solution.get(pos)).collect();
            assert_eq!(digits, DigitSet::FULL);
        }
        for column in Position::COLUMNS {
            let digits: DigitSet = column.into_iter().filter_map(|pos| solution.get(pos)).collect();
            assert_eq!(digits, DigitSet::FULL);
        }
        for b in Position::BOXES {
            let digits: DigitSet = b.into_iter().filter_map(|pos| solution.get(pos)).collect();
            assert_eq!(digits, DigitSet::FULL);
        }
    }

    #[test]
    fn test_same_seed_produces_same_solution() {
        let seed = [42u8; 32];
        let solution1 = generate_solution(&mut Pcg64::from_seed(seed));
        let solution2 = generate_solution(&mut Pcg64::from_seed(seed));
        assert_eq!(solution1, solution2);
    }

    #[test]
    fn test_different_seeds_produce_different_solutions() {
        let solution1 = generate_solution(&mut Pcg64::from_seed([1u8; 32]));
        let solution2 = generate_solution(&mut Pcg64::from_seed([2u8; 32]));
        assert_ne!(solution1, solution2);
    }

    #[test]
    fn test_remove_cells_removes_at_least_some_cells() {
        let solution = generate_solution(&mut Pcg64::from_seed([3u8; 32]));
        let problem = remove_cells(&mut Pcg64::from_seed([4u8; 32]), &solution);
        assert!(problem.iter().filter(|digit| digit.is_none()).count() > 0);
    }

    #[test]
    fn test_remove_cells_problem_is_subset_of_solution() {
        let solution = generate_solution(&mut Pcg64::from_seed([5u8; 32]));
        let problem = remove_cells(&mut Pcg64::from_seed([6u8; 32]), &solution);
        for pos in Position::ALL {
            if let Some(digit) = problem.get(pos) {
                assert_eq!(solution.get(pos), Some(digit));
            }
        }
    }

    #[test]
    fn test_remove_cells_result_has_unique_solution() {
        let solution = generate_solution(&mut Pcg64::from_seed([7u8; 32]));
        let problem = remove_cells(&mut Pcg64::from_seed([8u8; 32]), &solution);
        assert!(backtrack::has_unique_solution(&problem));
    }

    #[test]
    fn test_generate_with_seed_is_reproducible() {
        let generator = PuzzleGenerator::new();
        let seed = PuzzleSeed::from([9u8; 32]);
        let puzzle1 = generator.generate_with_seed(seed);
        let puzzle2 = generator.generate_with_seed(seed);
        assert_eq!(puzzle1.problem, puzzle2.problem);
        assert_eq!(puzzle1.solution, puzzle2.solution);
    }

    #[test]
    fn test_puzzle_seed_display_round_trips_through_from_str() {
        let seed = PuzzleSeed::from([0xabu8; 32]);
        let text = seed.to_string();
        assert_eq!(text.len(), 64);
        assert_eq!(PuzzleSeed::from_str(&text).unwrap(), seed);
    }

    #[test]
    fn test_puzzle_seed_from_str_rejects_wrong_length() {
        assert!(matches!(
            PuzzleSeed::from_str("abcd"),
            Err(PuzzleSeedParseError::WrongLength(4))
        ));
    }

    #[test]
    fn test_puzzle_seed_from_str_rejects_invalid_hex() {
        let bad = "g".repeat(64);
        assert!(matches!(PuzzleSeed::from_str(&bad), Err(PuzzleSeedParseError::InvalidByte(_))));
    }

    mod props {
        use proptest::prelude::*;

        use super::*;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(20))]

            // R2: a generated puzzle always has a unique solution, and it matches what
            // plain backtracking finds.
            #[test]
            fn prop_generated_puzzle_has_unique_solution(seed_bytes in prop::array::uniform32(any::<u8>())) {
                let puzzle = PuzzleGenerator::new().generate_with_seed(PuzzleSeed::from(seed_bytes));

                prop_assert!(backtrack::has_unique_solution(&puzzle.problem));

                let mut solved = puzzle.problem.clone();
                prop_assert!(backtrack::solve(&mut solved));
                prop_assert_eq!(solved, puzzle.solution);
            }

            // The presented puzzle is always a sub-grid of its own solution.
            #[test]
            fn prop_problem_is_subset_of_solution(seed_bytes in prop::array::uniform32(any::<u8>())) {
                let puzzle = PuzzleGenerator::new().generate_with_seed(PuzzleSeed::from(seed_bytes));

                for pos in Position::ALL {
                    if let Some(digit) = puzzle.problem.get(pos) {
                        prop_assert_eq!(puzzle.solution.get(pos), Some(digit));
                    }
                }
            }
        }
    }
}
