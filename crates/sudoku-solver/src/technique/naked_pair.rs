//! Naked Pair: two cells in a house whose candidates, together, span exactly two digits.

use sudoku_core::{CandidateGrid, DigitGrid};

use crate::{Step, TechniqueKind, technique::Technique, technique::subset::find_naked_subset};

/// Two cells confined to the same two candidates eliminate those digits from the rest
/// of their shared house.
#[derive(Debug, Default, Clone, Copy)]
pub struct NakedPair;

impl NakedPair {
    #[must_use]
    pub const fn new() -> Self {
        NakedPair
    }
}

impl Technique for NakedPair {
    fn kind(&self) -> TechniqueKind {
        TechniqueKind::NakedPair
    }

    fn find(&self, _board: &DigitGrid, candidates: &CandidateGrid) -> Option<Step> {
        find_naked_subset(candidates, 2, self.kind())
    }
}
