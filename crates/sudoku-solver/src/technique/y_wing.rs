//! Y-Wing (XY-Wing): a bivalue pivot cell `{a, b}` with two bivalue wing cells
//! `{a, c}` and `{b, c}`, each sharing a house with the pivot. Whichever of `a`/`b` the
//! pivot turns out to hold, one wing is forced to `c`, so `c` can be eliminated from any
//! cell that shares a house with both wings.

use sudoku_core::{CandidateGrid, Digit, DigitGrid, Position};

use crate::{Step, TechniqueKind, technique::Technique};

/// See the module documentation.
#[derive(Debug, Default, Clone, Copy)]
pub struct YWing;

impl YWing {
    #[must_use]
    pub const fn new() -> Self {
        YWing
    }
}

impl Technique for YWing {
    fn kind(&self) -> TechniqueKind {
        TechniqueKind::YWing
    }

    fn find(&self, _board: &DigitGrid, candidates: &CandidateGrid) -> Option<Step> {
        for pivot in Position::ALL {
            let pivot_candidates = candidates.candidates_at(pivot);
            if pivot_candidates.len() != 2 {
                continue;
            }
            let a = pivot_candidates.first().expect("len() == 2 guarantees a first element");
            let b = pivot_candidates.last().expect("len() == 2 guarantees a last element");

            let wings: Vec<Position> = pivot
                .house_peers()
                .into_iter()
                .filter(|&pos| candidates.candidates_at(pos).len() == 2)
                .collect();

            for &x in &wings {
                let x_candidates = candidates.candidates_at(x);
                let Some(c) = shared_third_digit(x_candidates, a, b) else {
                    continue;
                };
                let x_shares_a = x_candidates.contains(a);
                let needed_y = if x_shares_a { b } else { a };

                for &y in &wings {
                    if y == x {
                        continue;
                    }
                    let y_candidates = candidates.candidates_at(y);
                    if !y_candidates.contains(needed_y) || !y_candidates.contains(c) || y_candidates.len() != 2 {
                        continue;
                    }

                    let targets: Vec<Position> = (x.house_peers() & y.house_peers())
                        .into_iter()
                        .filter(|&pos| pos != pivot)
                        .filter(|&pos| candidates.candidates_at(pos).contains(c))
                        .collect();
                    if targets.is_empty() {
                        continue;
                    }

                    let reason = format!(
                        "{} is a Y-Wing pivot for {} and {} on {} and {}, so {c} can be removed from any cell \
                         that sees both wings.",
                        pivot.cell_name(),
                        x.cell_name(),
                        y.cell_name(),
                        a,
                        b,
                    );
                    return Some(Step::eliminate(targets, [c], self.kind(), reason));
                }
            }
        }
        None
    }
}

/// If `wing_candidates` is exactly `{shared, other}` for one of `a`/`b`, returns the
/// third digit (the one not shared with the pivot).
fn shared_third_digit(wing_candidates: sudoku_core::DigitSet, a: Digit, b: Digit) -> Option<Digit> {
    if wing_candidates.len() != 2 {
        return None;
    }
    let has_a = wing_candidates.contains(a);
    let has_b = wing_candidates.contains(b);
    if has_a == has_b {
        // Shares both or neither: not a valid wing candidate.
        return None;
    }
    wing_candidates.into_iter().find(|&d| d != a && d != b)
}
