//! Hidden Single: a digit confined to exactly one cell within a row, column, or box.

use sudoku_core::{CandidateGrid, Digit, DigitGrid};

use crate::{
    Step, TechniqueKind,
    technique::{
        Technique,
        units::{all_units, house_mask, position_in_unit},
    },
};

/// A digit that can only go in one cell of some house must be placed there, even if
/// that cell itself still carries other candidates.
#[derive(Debug, Default, Clone, Copy)]
pub struct HiddenSingle;

impl HiddenSingle {
    #[must_use]
    pub const fn new() -> Self {
        HiddenSingle
    }
}

impl Technique for HiddenSingle {
    fn kind(&self) -> TechniqueKind {
        TechniqueKind::HiddenSingle
    }

    fn find(&self, _board: &DigitGrid, candidates: &CandidateGrid) -> Option<Step> {
        for unit in all_units() {
            for digit in Digit::ALL {
                let mask = house_mask(candidates, unit, digit);
                if mask.len() != 1 {
                    continue;
                }
                let i = mask.first().expect("len() == 1 guarantees a first element");
                let pos = position_in_unit(unit, i);
                if candidates.candidates_at(pos).len() == 1 {
                    // Already a naked single; let that technique claim the credit.
                    continue;
                }
                let reason = format!("{digit} can only go in {} within {unit}.", pos.cell_name());
                return Some(Step::solve(pos, digit, self.kind(), reason));
            }
        }
        None
    }
}
