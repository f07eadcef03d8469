//! Naked Single: a cell with exactly one remaining candidate.

use sudoku_core::{CandidateGrid, DigitGrid, Position};

use crate::{Step, TechniqueKind, technique::Technique};

/// An empty cell with exactly one remaining candidate must hold that digit.
#[derive(Debug, Default, Clone, Copy)]
pub struct NakedSingle;

impl NakedSingle {
    #[must_use]
    pub const fn new() -> Self {
        NakedSingle
    }
}

impl Technique for NakedSingle {
    fn kind(&self) -> TechniqueKind {
        TechniqueKind::NakedSingle
    }

    fn find(&self, board: &DigitGrid, candidates: &CandidateGrid) -> Option<Step> {
        for pos in Position::ALL {
            if board.get(pos).is_some() {
                // Already decided: its one remaining "candidate" is just its own value.
                continue;
            }
            let cell = candidates.candidates_at(pos);
            if cell.len() == 1 {
                let digit = cell.first().expect("len() == 1 guarantees a first element");
                let reason = format!("{} has only {} left as a candidate.", pos.cell_name(), digit);
                return Some(Step::solve(pos, digit, self.kind(), reason));
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use sudoku_core::{CandidateGrid, Digit, DigitGrid, Position};

    use super::*;
    use crate::testing::TechniqueTester;

    #[test]
    fn test_finds_naked_single() {
        // place_no_propagation simulates a cell whose candidates have collapsed to one
        // digit through elimination, without the board having been told it's decided yet.
        let mut candidates = CandidateGrid::new();
        candidates.place_no_propagation(Position::new(0, 0), Digit::D5);

        TechniqueTester::with_board(DigitGrid::new(), candidates)
            .find_once(&NakedSingle::new())
            .assert_solved(Position::new(0, 0), Digit::D5);
    }

    #[test]
    fn test_finds_first_in_index_order() {
        let mut candidates = CandidateGrid::new();
        candidates.place_no_propagation(Position::new(5, 5), Digit::D7);
        candidates.place_no_propagation(Position::new(0, 0), Digit::D3);

        TechniqueTester::with_board(DigitGrid::new(), candidates)
            .find_once(&NakedSingle::new())
            .assert_solved(Position::new(0, 0), Digit::D3);
    }

    #[test]
    fn test_no_naked_single_on_fresh_grid() {
        TechniqueTester::new(CandidateGrid::new()).assert_no_step(&NakedSingle::new());
    }

    #[test]
    fn test_ignores_already_decided_cells() {
        // A cell that has actually been placed keeps a permanent singleton candidate
        // set; re-announcing it as a naked single on every later scan would stall the
        // pipeline on the same step forever instead of making progress elsewhere.
        let mut candidates = CandidateGrid::new();
        candidates.place(Position::new(0, 0), Digit::D5);
        let mut board = DigitGrid::new();
        board.set(Position::new(0, 0), Some(Digit::D5));

        TechniqueTester::with_board(board, candidates).assert_no_step(&NakedSingle::new());
    }

    #[test]
    fn test_real_puzzle() {
        TechniqueTester::from_str(
            "
            024 189 637
            361 547 289
            879 623 145
            653 498 712
            987 251 364
            142 376 958
            238 914 576
            415 762 893
            796 835 421
        ",
        )
        .find_once(&NakedSingle::new())
        .assert_solved(Position::new(0, 0), Digit::D5);
    }

    mod props {
        use std::str::FromStr as _;

        use proptest::prelude::*;

        use super::*;

        const SOLVED: &str =
            "524189637361547289879623145653498712987251364142376958238914576415762893796835421";

        fn arbitrary_sub_puzzle() -> impl Strategy<Value = DigitGrid> {
            prop::collection::vec(any::<bool>(), 81).prop_map(|remove| {
                let mut board = DigitGrid::from_str(SOLVED).unwrap();
                for (pos, &should_remove) in Position::ALL.iter().zip(&remove) {
                    if should_remove {
                        board.clear(*pos);
                    }
                }
                board
            })
        }

        proptest! {
            // T1: Naked Single fires iff some empty cell's candidate set has popcount 1.
            #[test]
            fn prop_fires_iff_an_empty_cell_has_one_candidate(board in arbitrary_sub_puzzle()) {
                let candidates = CandidateGrid::from_digit_grid(&board);
                let expected = Position::ALL
                    .into_iter()
                    .find(|&pos| board.get(pos).is_none() && candidates.candidates_at(pos).len() == 1);

                let step = NakedSingle::new().find(&board, &candidates);

                prop_assert_eq!(step.is_some(), expected.is_some());
                if let (Some(step), Some(pos)) = (step, expected) {
                    let digit = candidates.candidates_at(pos).first().unwrap();
                    prop_assert_eq!(step.indexes, vec![pos.index()]);
                    prop_assert_eq!(step.values, vec![digit.value()]);
                }
            }
        }
    }
}
