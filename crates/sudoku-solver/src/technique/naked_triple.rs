//! Naked Triple: three cells in a house whose candidates, together, span exactly three digits.

use sudoku_core::{CandidateGrid, DigitGrid};

use crate::{Step, TechniqueKind, technique::Technique, technique::subset::find_naked_subset};

/// Three cells confined to the same three candidates (not necessarily all three in
/// each cell) eliminate those digits from the rest of their shared house.
#[derive(Debug, Default, Clone, Copy)]
pub struct NakedTriple;

impl NakedTriple {
    #[must_use]
    pub const fn new() -> Self {
        NakedTriple
    }
}

impl Technique for NakedTriple {
    fn kind(&self) -> TechniqueKind {
        TechniqueKind::NakedTriple
    }

    fn find(&self, _board: &DigitGrid, candidates: &CandidateGrid) -> Option<Step> {
        find_naked_subset(candidates, 3, self.kind())
    }
}
