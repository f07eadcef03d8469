//! Naked Quad: four cells in a house whose candidates, together, span exactly four digits.

use sudoku_core::{CandidateGrid, DigitGrid};

use crate::{Step, TechniqueKind, technique::Technique, technique::subset::find_naked_subset};

/// Four cells confined to the same four candidates eliminate those digits from the
/// rest of their shared house.
#[derive(Debug, Default, Clone, Copy)]
pub struct NakedQuad;

impl NakedQuad {
    #[must_use]
    pub const fn new() -> Self {
        NakedQuad
    }
}

impl Technique for NakedQuad {
    fn kind(&self) -> TechniqueKind {
        TechniqueKind::NakedQuad
    }

    fn find(&self, _board: &DigitGrid, candidates: &CandidateGrid) -> Option<Step> {
        find_naked_subset(candidates, 4, self.kind())
    }
}
