//! Simple Coloring: for a single digit, the cells connected by strong links form a
//! graph that is 2-colorable (each color is "if this cell doesn't hold the digit, its
//! partner must"). Within one color class, two cells that see each other contradict
//! each other: both colors would have to hold the digit in the same house, which is
//! impossible, so that entire color is false and the digit can be eliminated from
//! every cell in it.
//!
//! This implementation only draws that single conclusion (same-color contradiction);
//! the cross-color elimination extension is intentionally not implemented.

use std::collections::{HashMap, VecDeque};

use sudoku_core::{
    CandidateGrid, Digit, DigitGrid, Position,
    link::{Unit, find_strong_in_unit},
};

use crate::{Step, TechniqueKind, technique::Technique};

/// See the module documentation.
#[derive(Debug, Default, Clone, Copy)]
pub struct SimpleColoring;

impl SimpleColoring {
    #[must_use]
    pub const fn new() -> Self {
        SimpleColoring
    }
}

impl Technique for SimpleColoring {
    fn kind(&self) -> TechniqueKind {
        TechniqueKind::SimpleColoring
    }

    fn find(&self, _board: &DigitGrid, candidates: &CandidateGrid) -> Option<Step> {
        for digit in Digit::ALL {
            if let Some(step) = find_for_digit(candidates, digit, self.kind()) {
                return Some(step);
            }
        }
        None
    }
}

/// Builds the strong-link adjacency for `digit` across every row, column, and box.
fn adjacency(candidates: &CandidateGrid, digit: Digit) -> HashMap<Position, Vec<Position>> {
    let mut adjacency: HashMap<Position, Vec<Position>> = HashMap::new();
    let units = (0..9)
        .map(Unit::Row)
        .chain((0..9).map(Unit::Column))
        .chain((0..9).map(Unit::Box));
    for unit in units {
        for link in find_strong_in_unit(candidates, unit) {
            if link.digit != digit {
                continue;
            }
            adjacency.entry(link.a).or_default().push(link.b);
            adjacency.entry(link.b).or_default().push(link.a);
        }
    }
    adjacency
}

/// Two-colors the connected component of `start` via BFS, in visitation order.
fn color_component(adjacency: &HashMap<Position, Vec<Position>>, start: Position) -> HashMap<Position, bool> {
    let mut colors = HashMap::new();
    let mut queue = VecDeque::new();
    colors.insert(start, false);
    queue.push_back(start);
    while let Some(pos) = queue.pop_front() {
        let color = colors[&pos];
        let Some(neighbors) = adjacency.get(&pos) else {
            continue;
        };
        for &next in neighbors {
            if colors.contains_key(&next) {
                continue;
            }
            colors.insert(next, !color);
            queue.push_back(next);
        }
    }
    colors
}

/// Returns `true` if any two same-colored cells among `cells` see each other, i.e. that
/// color's assumption (all of them hold `digit`) is self-contradictory.
fn color_is_contradictory(cells: &[Position]) -> bool {
    for (i, &a) in cells.iter().enumerate() {
        for &b in &cells[i + 1..] {
            if a.house_peers().contains(b) {
                return true;
            }
        }
    }
    false
}

fn find_for_digit(candidates: &CandidateGrid, digit: Digit, kind: TechniqueKind) -> Option<Step> {
    let adjacency = adjacency(candidates, digit);
    let mut visited = HashMap::new();

    for start in Position::ALL {
        if visited.contains_key(&start) || !adjacency.contains_key(&start) {
            continue;
        }
        let component = color_component(&adjacency, start);
        for &pos in component.keys() {
            visited.insert(pos, true);
        }

        for color in [false, true] {
            let cells: Vec<Position> = Position::ALL
                .into_iter()
                .filter(|pos| component.get(pos) == Some(&color))
                .collect();
            if cells.len() < 2 || !color_is_contradictory(&cells) {
                continue;
            }
            let names: Vec<String> = cells.iter().map(|pos| pos.cell_name()).collect();
            let reason = format!(
                "Chaining strong links on {digit} from {} colors {} the same; two of those cells share a house, \
                 so that color cannot hold {digit}: it is removed from {}.",
                start.cell_name(),
                names.join(", "),
                names.join(", "),
            );
            return Some(Step::eliminate(cells, [digit], kind, reason));
        }
    }
    None
}
