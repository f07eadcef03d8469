//! Sudoku solving techniques.
//!
//! Each technique looks at the current board and candidates and, if it can make
//! progress, returns a single [`Step`](crate::Step) describing exactly one placement
//! or elimination. A technique never mutates the grid itself; the caller ([`crate::Analyzer`])
//! applies the step it chooses.

use std::fmt::Debug;

use sudoku_core::{CandidateGrid, DigitGrid};

use crate::{Step, TechniqueKind};

mod hidden_pair;
mod hidden_quad;
mod hidden_single;
mod hidden_triple;
mod locked_candidates;
mod naked_pair;
mod naked_quad;
mod naked_single;
mod naked_triple;
mod simple_coloring;
mod subset;
mod units;
mod x_wing;
mod y_wing;

pub use self::{
    hidden_pair::HiddenPair, hidden_quad::HiddenQuad, hidden_single::HiddenSingle, hidden_triple::HiddenTriple,
    locked_candidates::LockedCandidates, naked_pair::NakedPair, naked_quad::NakedQuad, naked_single::NakedSingle,
    naked_triple::NakedTriple, simple_coloring::SimpleColoring, x_wing::XWing, y_wing::YWing,
};

/// A trait representing a Sudoku solving technique.
///
/// A technique examines the board and candidates and, if it finds an applicable
/// deduction, returns the single best [`Step`] it can justify. It never mutates
/// state; [`crate::Analyzer`] owns applying the returned step.
pub trait Technique: Debug {
    /// Returns which technique this is.
    fn kind(&self) -> TechniqueKind;

    /// Looks for a single deduction this technique can make.
    ///
    /// Returns `None` if this technique cannot make any progress on the current
    /// board and candidates.
    fn find(&self, board: &DigitGrid, candidates: &CandidateGrid) -> Option<Step>;
}

/// A boxed technique.
pub type BoxedTechnique = Box<dyn Technique>;

/// Returns the full, fixed technique pipeline, ordered from easiest to hardest.
///
/// This is the order [`crate::Analyzer`] tries techniques in: the first technique in
/// the list that finds a step wins.
#[must_use]
pub fn all_techniques() -> Vec<BoxedTechnique> {
    vec![
        Box::new(NakedSingle::new()),
        Box::new(HiddenSingle::new()),
        Box::new(NakedPair::new()),
        Box::new(NakedTriple::new()),
        Box::new(NakedQuad::new()),
        Box::new(LockedCandidates::new()),
        Box::new(HiddenPair::new()),
        Box::new(HiddenTriple::new()),
        Box::new(HiddenQuad::new()),
        Box::new(XWing::new()),
        Box::new(YWing::new()),
        Box::new(SimpleColoring::new()),
    ]
}
