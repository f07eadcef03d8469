//! The observable unit of progress emitted by the [`Analyzer`](crate::Analyzer): a
//! single step record describing either a placement, an elimination, or the analyzer
//! having nothing left to do (stuck or done).

use std::fmt::{self, Display};

use serde::Serialize;
use sudoku_core::{Digit, Position};

/// What kind of change a [`Step`] describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    /// A single digit was placed into a single cell.
    Solve,
    /// One or more candidate digits were removed from one or more cells.
    Eliminate,
    /// No technique in the pipeline could make progress.
    Stuck,
    /// Every cell is filled; there is nothing left to do.
    Done,
}

/// Which technique produced a [`Step`], identified by its exact, stable name.
///
/// [`TechniqueKind::None`] is a real, serializable variant (`"none"`), distinct from
/// `Option::None`: it names the absence of a technique for a [`Step::stuck`] record,
/// whereas the `Option` wrapper around this type models the narrower case of a step
/// whose `technique` field is omitted from the record entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TechniqueKind {
    #[serde(rename = "none")]
    None,
    #[serde(rename = "naked single")]
    NakedSingle,
    #[serde(rename = "hidden single")]
    HiddenSingle,
    #[serde(rename = "naked pair")]
    NakedPair,
    #[serde(rename = "naked triple")]
    NakedTriple,
    #[serde(rename = "naked quad")]
    NakedQuad,
    #[serde(rename = "locked candidates")]
    LockedCandidates,
    #[serde(rename = "hidden pair")]
    HiddenPair,
    #[serde(rename = "hidden triple")]
    HiddenTriple,
    #[serde(rename = "hidden quad")]
    HiddenQuad,
    #[serde(rename = "x-wing")]
    XWing,
    #[serde(rename = "y-wing")]
    YWing,
    #[serde(rename = "simple coloring")]
    SimpleColoring,
}

impl TechniqueKind {
    /// Returns the exact name used both in [`Step`] JSON records and in CLI output.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::NakedSingle => "naked single",
            Self::HiddenSingle => "hidden single",
            Self::NakedPair => "naked pair",
            Self::NakedTriple => "naked triple",
            Self::NakedQuad => "naked quad",
            Self::LockedCandidates => "locked candidates",
            Self::HiddenPair => "hidden pair",
            Self::HiddenTriple => "hidden triple",
            Self::HiddenQuad => "hidden quad",
            Self::XWing => "x-wing",
            Self::YWing => "y-wing",
            Self::SimpleColoring => "simple coloring",
        }
    }

    /// Returns the difficulty tier (1, easiest, through 8, hardest) used by the
    /// rating formula. `None` is not produced by any real technique and has no tier.
    #[must_use]
    pub const fn tier(self) -> u8 {
        match self {
            Self::None => 0,
            Self::NakedSingle | Self::HiddenSingle => 1,
            Self::NakedPair | Self::NakedTriple => 2,
            Self::NakedQuad | Self::LockedCandidates => 3,
            Self::HiddenPair => 4,
            Self::HiddenTriple | Self::HiddenQuad => 5,
            Self::XWing => 6,
            Self::YWing => 7,
            Self::SimpleColoring => 8,
        }
    }
}

impl Display for TechniqueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single step of analysis: a placement, an elimination, or a stuck/done marker.
///
/// Serializes to a JSON object whose keys (`action`, `indexes`, `reason`, `technique`,
/// `values`) appear in lexicographic order, matching the field declaration order below.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Step {
    pub action: Action,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub indexes: Vec<u8>,
    pub reason: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub technique: Option<TechniqueKind>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<u8>,
}

impl Step {
    /// Builds a `solve` step: a single digit placed into a single cell.
    #[must_use]
    pub fn solve(pos: Position, digit: Digit, technique: TechniqueKind, reason: impl Into<String>) -> Self {
        Self {
            action: Action::Solve,
            indexes: vec![pos.index()],
            reason: reason.into(),
            technique: Some(technique),
            values: vec![digit.value()],
        }
    }

    /// Builds an `eliminate` step: one or more digits removed as candidates from one
    /// or more cells. `cells` and `digits` are deduplicated and sorted ascending.
    #[must_use]
    pub fn eliminate(
        cells: impl IntoIterator<Item = Position>,
        digits: impl IntoIterator<Item = Digit>,
        technique: TechniqueKind,
        reason: impl Into<String>,
    ) -> Self {
        let mut indexes: Vec<u8> = cells.into_iter().map(Position::index).collect();
        indexes.sort_unstable();
        indexes.dedup();
        let mut values: Vec<u8> = digits.into_iter().map(|d| d.value()).collect();
        values.sort_unstable();
        values.dedup();
        Self {
            action: Action::Eliminate,
            indexes,
            reason: reason.into(),
            technique: Some(technique),
            values,
        }
    }

    /// Builds a `stuck` step: no technique in the pipeline can make further progress.
    #[must_use]
    pub fn stuck() -> Self {
        Self {
            action: Action::Stuck,
            indexes: vec![],
            reason: "No technique in the pipeline can make further progress.".to_owned(),
            technique: Some(TechniqueKind::None),
            values: vec![],
        }
    }

    /// Builds a `done` step: every cell is filled; analysis is complete.
    #[must_use]
    pub fn done() -> Self {
        Self {
            action: Action::Done,
            indexes: vec![],
            reason: "The puzzle is completely solved.".to_owned(),
            technique: None,
            values: vec![],
        }
    }
}
