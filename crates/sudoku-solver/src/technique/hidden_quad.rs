//! Hidden Quad: four digits in a house that, between them, can only go in four cells.

use sudoku_core::{CandidateGrid, DigitGrid};

use crate::{Step, TechniqueKind, technique::Technique, technique::subset::find_hidden_subset};

/// Four digits confined to the same four cells let every other candidate be
/// eliminated from those cells.
#[derive(Debug, Default, Clone, Copy)]
pub struct HiddenQuad;

impl HiddenQuad {
    #[must_use]
    pub const fn new() -> Self {
        HiddenQuad
    }
}

impl Technique for HiddenQuad {
    fn kind(&self) -> TechniqueKind {
        TechniqueKind::HiddenQuad
    }

    fn find(&self, _board: &DigitGrid, candidates: &CandidateGrid) -> Option<Step> {
        find_hidden_subset(candidates, 4, self.kind())
    }
}
