//! Hidden Triple: three digits in a house that, between them, can only go in three cells.

use sudoku_core::{CandidateGrid, DigitGrid};

use crate::{Step, TechniqueKind, technique::Technique, technique::subset::find_hidden_subset};

/// Three digits confined to the same three cells let every other candidate be
/// eliminated from those cells.
#[derive(Debug, Default, Clone, Copy)]
pub struct HiddenTriple;

impl HiddenTriple {
    #[must_use]
    pub const fn new() -> Self {
        HiddenTriple
    }
}

impl Technique for HiddenTriple {
    fn kind(&self) -> TechniqueKind {
        TechniqueKind::HiddenTriple
    }

    fn find(&self, _board: &DigitGrid, candidates: &CandidateGrid) -> Option<Step> {
        find_hidden_subset(candidates, 3, self.kind())
    }
}
