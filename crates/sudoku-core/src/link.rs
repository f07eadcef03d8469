//! Strong and weak link discovery over shared candidates.
//!
//! For a digit `v`, a **strong link** between cells `a` and `b` asserts "exactly one
//! of `{a, b}` has `v`" within some unit (row, column, or box): `v` appears as a
//! candidate in exactly those two cells of that unit. A **weak link** asserts "at most
//! one of `{a, b}` has `v`": they merely share `v` as a candidate somewhere in a common
//! unit. Every strong link is also a weak link.
//!
//! Several techniques (X-Wing, Y-Wing, Simple Coloring) all need to enumerate these
//! links; this module centralizes the discovery so each technique can reuse the same
//! pass instead of re-deriving it, and so the links are guaranteed consistent within a
//! single solving step (candidates never change mid-step).

use crate::{
    Digit, Position,
    candidate_grid::{BOX_POSITIONS, COLUMN_POSITIONS, ROW_POSITIONS},
};

/// An unordered pair of positions linked on a shared digit within some unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Link {
    /// The digit shared by both cells.
    pub digit: Digit,
    /// One endpoint of the link.
    pub a: Position,
    /// The other endpoint of the link.
    pub b: Position,
}

impl Link {
    fn new(digit: Digit, a: Position, b: Position) -> Self {
        if a < b {
            Self { digit, a, b }
        } else {
            Self { digit, a: b, b: a }
        }
    }

    /// Returns the other endpoint of this link, given one of its two positions.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is neither endpoint of this link.
    #[must_use]
    pub fn other(self, pos: Position) -> Position {
        if pos == self.a {
            self.b
        } else if pos == self.b {
            self.a
        } else {
            panic!("position is not an endpoint of this link");
        }
    }
}

fn unit_positions(unit: Unit) -> crate::DigitPositions {
    match unit {
        Unit::Row(y) => ROW_POSITIONS[y],
        Unit::Column(x) => COLUMN_POSITIONS[x],
        Unit::Box(b) => BOX_POSITIONS[b],
    }
}

/// A single row, column, or box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    /// Row `y` (0-8).
    Row(u8),
    /// Column `x` (0-8).
    Column(u8),
    /// Box `b` (0-8).
    Box(u8),
}

/// Returns all strong links within `unit`: for each digit, if it appears as a
/// candidate in exactly two cells of the unit, those two cells form a strong link.
#[must_use]
pub fn find_strong_in_unit(grid: &crate::CandidateGrid, unit: Unit) -> Vec<Link> {
    let positions = unit_positions(unit);
    let mut links = Vec::new();
    for digit in Digit::ALL {
        let mut cells = positions.into_iter().filter(|&pos| grid.candidates_at(pos).contains(digit));
        let Some(first) = cells.next() else {
            continue;
        };
        let Some(second) = cells.next() else {
            continue;
        };
        if cells.next().is_none() {
            links.push(Link::new(digit, first, second));
        }
    }
    links
}

/// Returns every strong link involving cell `pos`, across its row, column, and box.
#[must_use]
pub fn find_strong(grid: &crate::CandidateGrid, pos: Position) -> Vec<Link> {
    let mut links = Vec::new();
    for unit in [
        Unit::Row(pos.y()),
        Unit::Column(pos.x()),
        Unit::Box(pos.box_index()),
    ] {
        for link in find_strong_in_unit(grid, unit) {
            if link.a == pos || link.b == pos {
                links.push(link);
            }
        }
    }
    links
}

/// Returns every cell other than `pos`, in `pos`'s row, column, or box, that still has
/// `digit` as a candidate. Each forms a weak link with `pos` on `digit`.
#[must_use]
pub fn find_weak(grid: &crate::CandidateGrid, pos: Position, digit: Digit) -> Vec<Position> {
    pos.house_peers()
        .into_iter()
        .filter(|&peer| grid.candidates_at(peer).contains(digit))
        .collect()
}

/// Returns `true` if `i` and `j` are a strong link on `digit` in `unit`: both carry
/// `digit` as a candidate and no other cell of `unit` does.
#[must_use]
pub fn exists(grid: &crate::CandidateGrid, i: Position, j: Position, digit: Digit, unit: Unit) -> bool {
    let positions = unit_positions(unit);
    if !positions.contains(i) || !positions.contains(j) || i == j {
        return false;
    }
    let holders: Vec<Position> = positions.into_iter().filter(|&p| grid.candidates_at(p).contains(digit)).collect();
    holders.len() == 2 && holders.contains(&i) && holders.contains(&j)
}
