//! Shared search logic behind the naked-subset and hidden-subset technique families
//! (pairs, triples, quads): `N` cells in a house whose candidates are confined to `N`
//! digits between them (naked), or `N` digits in a house confined to `N` cells between
//! them (hidden).

use sudoku_core::{CandidateGrid, Digit, DigitSet, Position};

use crate::{
    Step, TechniqueKind,
    technique::units::{all_units, combinations, positions_in_unit},
};

/// The English ordinal used in naked/hidden subset reasons, for `size` 2-4.
fn subset_word(size: usize) -> &'static str {
    match size {
        2 => "pair",
        3 => "triple",
        4 => "quad",
        _ => unreachable!("subset techniques only come in sizes 2-4"),
    }
}

fn digits_list(digits: DigitSet) -> String {
    digits.into_iter().map(|d| d.to_string()).collect::<Vec<_>>().join(", ")
}

fn cells_list(cells: &[Position]) -> String {
    cells.iter().map(|pos| pos.cell_name()).collect::<Vec<_>>().join(", ")
}

/// Looks for a naked subset of size `size`: `size` cells in some house whose candidates,
/// taken together, span exactly `size` digits. Those digits can then be eliminated from
/// every other cell in the house.
pub fn find_naked_subset(candidates: &CandidateGrid, size: usize, kind: TechniqueKind) -> Option<Step> {
    for unit in all_units() {
        let positions = positions_in_unit(unit);
        let candidate_cells: Vec<Position> = positions
            .into_iter()
            .filter(|&pos| (2..=size).contains(&candidates.candidates_at(pos).len()))
            .collect();
        if candidate_cells.len() < size {
            continue;
        }
        for combo in combinations(&candidate_cells, size) {
            let union = combo
                .iter()
                .fold(DigitSet::EMPTY, |acc, &pos| acc | candidates.candidates_at(pos));
            if union.len() != size {
                continue;
            }
            let targets: Vec<Position> = positions
                .into_iter()
                .filter(|pos| !combo.contains(pos))
                .filter(|&pos| !(candidates.candidates_at(pos) & union).is_empty())
                .collect();
            if targets.is_empty() {
                continue;
            }
            let reason = format!(
                "{} form a naked {} on {{{}}} in {unit}, so those digits can be removed from the rest of {unit}.",
                cells_list(&combo),
                subset_word(size),
                digits_list(union),
            );
            return Some(Step::eliminate(targets, union, kind, reason));
        }
    }
    None
}

/// Looks for a hidden subset of size `size`: `size` digits in some house that, between
/// them, can only go in `size` cells. Every other candidate can then be eliminated from
/// those cells.
pub fn find_hidden_subset(candidates: &CandidateGrid, size: usize, kind: TechniqueKind) -> Option<Step> {
    for unit in all_units() {
        let positions = positions_in_unit(unit);
        let candidate_digits: Vec<Digit> = Digit::ALL
            .into_iter()
            .filter(|&digit| (2..=size).contains(&digit_cell_count(candidates, &positions, digit)))
            .collect();
        if candidate_digits.len() < size {
            continue;
        }
        for combo in combinations(&candidate_digits, size) {
            let cells: Vec<Position> = positions
                .into_iter()
                .filter(|&pos| combo.iter().any(|&digit| candidates.candidates_at(pos).contains(digit)))
                .collect();
            if cells.len() != size {
                continue;
            }
            let allowed: DigitSet = combo.iter().copied().collect();
            let mut eliminated = DigitSet::EMPTY;
            for &pos in &cells {
                eliminated |= candidates.candidates_at(pos) & !allowed;
            }
            if eliminated.is_empty() {
                continue;
            }
            let reason = format!(
                "{} can only go in {{{}}} within {unit}, so every other candidate can be removed from those cells.",
                combo.iter().map(Digit::to_string).collect::<Vec<_>>().join(", "),
                cells_list(&cells),
            );
            return Some(Step::eliminate(cells, eliminated, kind, reason));
        }
    }
    None
}

fn digit_cell_count(candidates: &CandidateGrid, positions: &[Position; 9], digit: Digit) -> usize {
    positions.iter().filter(|&&pos| candidates.candidates_at(pos).contains(digit)).count()
}
