//! Hidden Pair: two digits in a house that can only go in the same two cells.

use sudoku_core::{CandidateGrid, DigitGrid};

use crate::{Step, TechniqueKind, technique::Technique, technique::subset::find_hidden_subset};

/// Two digits confined to the same two cells let every other candidate be eliminated
/// from those cells.
#[derive(Debug, Default, Clone, Copy)]
pub struct HiddenPair;

impl HiddenPair {
    #[must_use]
    pub const fn new() -> Self {
        HiddenPair
    }
}

impl Technique for HiddenPair {
    fn kind(&self) -> TechniqueKind {
        TechniqueKind::HiddenPair
    }

    fn find(&self, _board: &DigitGrid, candidates: &CandidateGrid) -> Option<Step> {
        find_hidden_subset(candidates, 2, self.kind())
    }
}
