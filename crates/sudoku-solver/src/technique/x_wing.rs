//! X-Wing: a digit confined, in each of two rows (or two columns), to the same pair of
//! columns (or rows), forming a rectangle that locks the digit out of those lines
//! elsewhere on the board.

use sudoku_core::{CandidateGrid, Digit, DigitGrid, HouseMask, Position};

use crate::{
    Step, TechniqueKind,
    technique::{Technique, units::combinations},
};

/// See the module documentation.
#[derive(Debug, Default, Clone, Copy)]
pub struct XWing;

impl XWing {
    #[must_use]
    pub const fn new() -> Self {
        XWing
    }
}

impl Technique for XWing {
    fn kind(&self) -> TechniqueKind {
        TechniqueKind::XWing
    }

    fn find(&self, _board: &DigitGrid, candidates: &CandidateGrid) -> Option<Step> {
        for digit in Digit::ALL {
            if let Some(step) = find_row_based(candidates, digit, self.kind()) {
                return Some(step);
            }
            if let Some(step) = find_column_based(candidates, digit, self.kind()) {
                return Some(step);
            }
        }
        None
    }
}

fn find_row_based(candidates: &CandidateGrid, digit: Digit, kind: TechniqueKind) -> Option<Step> {
    let rows: Vec<(u8, HouseMask)> = (0..9)
        .filter_map(|y| {
            let mask = candidates.row_mask(y, digit);
            (mask.len() == 2).then_some((y, mask))
        })
        .collect();

    for combo in combinations(&rows, 2) {
        let (y1, mask1) = combo[0];
        let (y2, mask2) = combo[1];
        if mask1 != mask2 {
            continue;
        }
        let columns: Vec<u8> = mask1.into_iter().collect();
        let targets: Vec<Position> = columns
            .iter()
            .flat_map(|&x| (0..9).filter(move |&y| y != y1 && y != y2).map(move |y| Position::new(x, y)))
            .filter(|&pos| candidates.candidates_at(pos).contains(digit))
            .collect();
        if targets.is_empty() {
            continue;
        }
        let reason = format!(
            "{digit} is confined to columns {} and {} in both row {} and row {}, so it can be removed from \
             those columns elsewhere.",
            columns[0] + 1,
            columns[1] + 1,
            y1 + 1,
            y2 + 1,
        );
        return Some(Step::eliminate(targets, [digit], kind, reason));
    }
    None
}

fn find_column_based(candidates: &CandidateGrid, digit: Digit, kind: TechniqueKind) -> Option<Step> {
    let columns: Vec<(u8, HouseMask)> = (0..9)
        .filter_map(|x| {
            let mask = candidates.col_mask(x, digit);
            (mask.len() == 2).then_some((x, mask))
        })
        .collect();

    for combo in combinations(&columns, 2) {
        let (x1, mask1) = combo[0];
        let (x2, mask2) = combo[1];
        if mask1 != mask2 {
            continue;
        }
        let rows: Vec<u8> = mask1.into_iter().collect();
        let targets: Vec<Position> = rows
            .iter()
            .flat_map(|&y| (0..9).filter(move |&x| x != x1 && x != x2).map(move |x| Position::new(x, y)))
            .filter(|&pos| candidates.candidates_at(pos).contains(digit))
            .collect();
        if targets.is_empty() {
            continue;
        }
        let reason = format!(
            "{digit} is confined to rows {} and {} in both column {} and column {}, so it can be removed \
             from those rows elsewhere.",
            rows[0] + 1,
            rows[1] + 1,
            x1 + 1,
            x2 + 1,
        );
        return Some(Step::eliminate(targets, [digit], kind, reason));
    }
    None
}
