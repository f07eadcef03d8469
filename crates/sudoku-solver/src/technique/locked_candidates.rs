//! Locked Candidates: a digit confined within a box to a single row or column
//! (pointing), or confined within a row/column to a single box (claiming).

use sudoku_core::{CandidateGrid, Digit, DigitGrid, Position};

use crate::{
    Step, TechniqueKind,
    technique::{
        Technique,
        units::{Unit, house_mask, positions_in_unit},
    },
};

/// Pointing: a digit confined, within one box, to a single row or column eliminates
/// that digit from the rest of the row/column outside the box. Claiming: a digit
/// confined, within one row or column, to a single box eliminates that digit from the
/// rest of the box outside the row/column.
#[derive(Debug, Default, Clone, Copy)]
pub struct LockedCandidates;

impl LockedCandidates {
    #[must_use]
    pub const fn new() -> Self {
        LockedCandidates
    }
}

impl Technique for LockedCandidates {
    fn kind(&self) -> TechniqueKind {
        TechniqueKind::LockedCandidates
    }

    fn find(&self, _board: &DigitGrid, candidates: &CandidateGrid) -> Option<Step> {
        for b in 0..9 {
            for digit in Digit::ALL {
                if let Some(step) = find_pointing(candidates, b, digit, self.kind()) {
                    return Some(step);
                }
            }
        }
        for y in 0..9 {
            for digit in Digit::ALL {
                if let Some(step) = find_claiming(candidates, Unit::Row(y), digit, self.kind()) {
                    return Some(step);
                }
            }
        }
        for x in 0..9 {
            for digit in Digit::ALL {
                if let Some(step) = find_claiming(candidates, Unit::Column(x), digit, self.kind()) {
                    return Some(step);
                }
            }
        }
        None
    }
}

fn find_pointing(candidates: &CandidateGrid, b: u8, digit: Digit, kind: TechniqueKind) -> Option<Step> {
    let unit = Unit::Box(b);
    let cells: Vec<Position> = house_mask(candidates, unit, digit)
        .into_iter()
        .map(|i| positions_in_unit(unit)[i as usize])
        .collect();
    if cells.len() < 2 {
        return None;
    }

    let line = if cells.iter().all(|p| p.y() == cells[0].y()) {
        Unit::Row(cells[0].y())
    } else if cells.iter().all(|p| p.x() == cells[0].x()) {
        Unit::Column(cells[0].x())
    } else {
        return None;
    };

    let targets: Vec<Position> = positions_in_unit(line)
        .into_iter()
        .filter(|pos| pos.box_index() != b)
        .filter(|&pos| candidates.candidates_at(pos).contains(digit))
        .collect();
    if targets.is_empty() {
        return None;
    }

    let reason = format!(
        "{digit} is confined to {line} within {unit}, so it can be removed from the rest of {line}."
    );
    Some(Step::eliminate(targets, [digit], kind, reason))
}

fn find_claiming(candidates: &CandidateGrid, line: Unit, digit: Digit, kind: TechniqueKind) -> Option<Step> {
    let cells: Vec<Position> = house_mask(candidates, line, digit)
        .into_iter()
        .map(|i| positions_in_unit(line)[i as usize])
        .collect();
    if cells.len() < 2 {
        return None;
    }

    let b = cells[0].box_index();
    if !cells.iter().all(|p| p.box_index() == b) {
        return None;
    }

    let unit = Unit::Box(b);
    let targets: Vec<Position> = positions_in_unit(unit)
        .into_iter()
        .filter(|pos| !cells.contains(pos))
        .filter(|&pos| candidates.candidates_at(pos).contains(digit))
        .collect();
    if targets.is_empty() {
        return None;
    }

    let reason = format!(
        "{digit} is confined to {unit} within {line}, so it can be removed from the rest of {unit}."
    );
    Some(Step::eliminate(targets, [digit], kind, reason))
}
