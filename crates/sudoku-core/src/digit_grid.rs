use std::{
    fmt::{self, Display},
    ops::{Index, IndexMut},
    slice,
    str::FromStr,
};

use crate::{CandidateGrid, Digit, Position, containers::Array81, index::PositionSemantics};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitGrid {
    cells: Array81<Option<Digit>, PositionSemantics>,
}

impl Default for DigitGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl DigitGrid {
    #[must_use]
    pub fn new() -> Self {
        Self::from_array([None; 81])
    }

    #[must_use]
    pub fn from_array(cells: [Option<Digit>; 81]) -> Self {
        Self {
            cells: Array81::from(cells),
        }
    }

    #[must_use]
    pub fn get(&self, pos: Position) -> Option<Digit> {
        self.cells[pos]
    }

    pub fn set(&mut self, pos: Position, digit: Option<Digit>) {
        self.cells[pos] = digit;
    }

    pub fn clear(&mut self, pos: Position) {
        self.cells[pos] = None;
    }

    #[must_use]
    pub fn is_empty(&self, pos: Position) -> bool {
        self.cells[pos].is_none()
    }

    pub fn iter(&self) -> slice::Iter<'_, Option<Digit>> {
        self.cells.iter()
    }

    pub fn iter_mut(&mut self) -> slice::IterMut<'_, Option<Digit>> {
        self.cells.iter_mut()
    }
}

impl<'a> IntoIterator for &'a DigitGrid {
    type Item = &'a Option<Digit>;
    type IntoIter = slice::Iter<'a, Option<Digit>>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

impl<'a> IntoIterator for &'a mut DigitGrid {
    type Item = &'a mut Option<Digit>;
    type IntoIter = slice::IterMut<'a, Option<Digit>>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter_mut()
    }
}

impl From<DigitGrid> for CandidateGrid {
    fn from(digit_grid: DigitGrid) -> Self {
        CandidateGrid::from_digit_grid(&digit_grid)
    }
}

impl Index<Position> for DigitGrid {
    type Output = Option<Digit>;
    fn index(&self, pos: Position) -> &Self::Output {
        &self.cells[pos]
    }
}

impl IndexMut<Position> for DigitGrid {
    fn index_mut(&mut self, pos: Position) -> &mut Self::Output {
        &mut self.cells[pos]
    }
}

impl Display for DigitGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..9 {
            for x in 0..9 {
                let pos = Position::new(x, y);
                if let Some(digit) = self.get(pos) {
                    write!(f, "{digit}")?;
                } else {
                    write!(f, ".")?;
                }
            }
            if f.alternate() {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl FromStr for DigitGrid {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [None; 81];
        let mut cells_iter = cells.iter_mut();
        let mut chars = s.chars().filter(|c| !c.is_whitespace());

        // Parse characters and assign to cells
        for (cell, ch) in cells_iter.by_ref().zip(chars.by_ref()) {
            *cell = match ch {
                '.' | '0' | '_' => None,
                '1' => Some(Digit::D1),
                '2' => Some(Digit::D2),
                '3' => Some(Digit::D3),
                '4' => Some(Digit::D4),
                '5' => Some(Digit::D5),
                '6' => Some(Digit::D6),
                '7' => Some(Digit::D7),
                '8' => Some(Digit::D8),
                '9' => Some(Digit::D9),
                _ => return Err(format!("Invalid character '{ch}'")),
            };
        }

        // Check if there are too many characters
        if chars.next().is_some() {
            return Err("Invalid grid length: expected 81 characters, got more than 81".to_owned());
        }

        // Check if there are too few characters
        if cells_iter.next().is_some() {
            return Err(
                "Invalid grid length: expected 81 characters, got fewer than 81".to_owned(),
            );
        }

        Ok(Self::from_array(cells))
    }
}
