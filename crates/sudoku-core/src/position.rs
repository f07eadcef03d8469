//! Board position and coordinate utilities.

use derive_more::{Display, Error};

use crate::{DigitPositions, containers::Array9, index::CellIndexSemantics};

/// Board position (x, y) where x is column and y is row.
///
/// Both coordinates are in the range 0-8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    x: u8,
    y: u8,
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Compare by index order: y * 9 + x
        // This ensures ordering matches PositionSemantics::to_index
        (self.y * 9 + self.x).cmp(&(other.y * 9 + other.x))
    }
}

/// Error returned when constructing a [`Position`] from out-of-range coordinates.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
pub enum PositionNewError {
    /// The x coordinate was not in the range 0-8.
    #[display("x coordinate {_0} is out of range (must be 0-8)")]
    InvalidXValue(#[error(not(source))] u8),
    /// The y coordinate was not in the range 0-8.
    #[display("y coordinate {_0} is out of range (must be 0-8)")]
    InvalidYValue(#[error(not(source))] u8),
}

impl Position {
    /// All 81 positions of the board, in row-major (index) order.
    pub const ALL: [Position; 81] = {
        let mut all = [Position { x: 0, y: 0 }; 81];
        let mut i = 0;
        while i < 81 {
            #[expect(clippy::cast_possible_truncation)]
            let idx = i as u8;
            all[i] = Position {
                x: idx % 9,
                y: idx / 9,
            };
            i += 1;
        }
        all
    };

    /// The 9 rows, each an ascending array of the 9 positions in that row.
    pub const ROWS: Array9<[Position; 9], CellIndexSemantics> = {
        let mut rows = [[Position { x: 0, y: 0 }; 9]; 9];
        let mut y = 0;
        while y < 9 {
            let mut x = 0;
            #[expect(clippy::cast_possible_truncation)]
            while x < 9 {
                rows[y as usize][x as usize] = Position { x, y };
                x += 1;
            }
            y += 1;
        }
        Array9::from_array(rows)
    };

    /// The 9 columns, each an ascending array of the 9 positions in that column.
    pub const COLUMNS: Array9<[Position; 9], CellIndexSemantics> = {
        let mut cols = [[Position { x: 0, y: 0 }; 9]; 9];
        let mut x = 0;
        while x < 9 {
            let mut y = 0;
            #[expect(clippy::cast_possible_truncation)]
            while y < 9 {
                cols[x as usize][y as usize] = Position { x, y };
                y += 1;
            }
            x += 1;
        }
        Array9::from_array(cols)
    };

    /// The 9 boxes, each an ascending (by box-cell-index) array of the 9 positions in that box.
    pub const BOXES: Array9<[Position; 9], CellIndexSemantics> = {
        let mut boxes = [[Position { x: 0, y: 0 }; 9]; 9];
        let mut b = 0;
        #[expect(clippy::cast_possible_truncation)]
        while b < 9 {
            let mut c = 0;
            while c < 9 {
                boxes[b as usize][c as usize] = Position::from_box(b, c);
                c += 1;
            }
            b += 1;
        }
        Array9::from_array(boxes)
    };

    /// Creates a new position from column and row coordinates.
    ///
    /// # Panics
    ///
    /// Panics if `x` or `y` is greater than or equal to 9.
    #[must_use]
    pub const fn new(x: u8, y: u8) -> Self {
        assert!(x < 9 && y < 9);
        Self { x, y }
    }

    /// Attempts to create a new position from column and row coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`PositionNewError`] if `x` or `y` is greater than or equal to 9.
    pub const fn try_new(x: u8, y: u8) -> Result<Self, PositionNewError> {
        if x >= 9 {
            return Err(PositionNewError::InvalidXValue(x));
        }
        if y >= 9 {
            return Err(PositionNewError::InvalidYValue(y));
        }
        Ok(Self { x, y })
    }

    /// Creates a position from box index and cell index within that box.
    ///
    /// # Panics
    ///
    /// Panics if `box_index` or `cell_index` is greater than or equal to 9.
    #[must_use]
    pub const fn from_box(box_index: u8, cell_index: u8) -> Self {
        assert!(box_index < 9 && cell_index < 9);
        let origin = box_top_left(box_index);
        Self::new(origin.x + cell_index % 3, origin.y + cell_index / 3)
    }

    /// Returns the flat index (0-80) of this position, in row-major order: `y * 9 + x`.
    #[must_use]
    pub const fn index(self) -> u8 {
        self.y * 9 + self.x
    }

    /// Creates a position from its flat index (0-80), the inverse of [`index`](Self::index).
    ///
    /// # Panics
    ///
    /// Panics if `index` is greater than or equal to 81.
    #[must_use]
    pub const fn from_index(index: u8) -> Self {
        assert!(index < 81);
        Self::new(index % 9, index / 9)
    }

    /// Returns the column (x coordinate) of this position.
    #[must_use]
    pub const fn x(self) -> u8 {
        self.x
    }

    /// Returns the row (y coordinate) of this position.
    #[must_use]
    pub const fn y(self) -> u8 {
        self.y
    }

    /// Returns a new position with the same row but a different column.
    ///
    /// # Panics
    ///
    /// Panics if `x` is greater than or equal to 9.
    #[must_use]
    pub const fn with_x(self, x: u8) -> Self {
        Self::new(x, self.y)
    }

    /// Returns a new position with the same column but a different row.
    ///
    /// # Panics
    ///
    /// Panics if `y` is greater than or equal to 9.
    #[must_use]
    pub const fn with_y(self, y: u8) -> Self {
        Self::new(self.x, y)
    }

    /// Returns the position one column to the left, if any.
    #[must_use]
    pub const fn left(self) -> Option<Self> {
        if self.x == 0 {
            None
        } else {
            Some(Self::new(self.x - 1, self.y))
        }
    }

    /// Returns the position one column to the right, if any.
    #[must_use]
    pub const fn right(self) -> Option<Self> {
        if self.x == 8 {
            None
        } else {
            Some(Self::new(self.x + 1, self.y))
        }
    }

    /// Returns the position one row up, if any.
    #[must_use]
    pub const fn up(self) -> Option<Self> {
        if self.y == 0 {
            None
        } else {
            Some(Self::new(self.x, self.y - 1))
        }
    }

    /// Returns the position one row down, if any.
    #[must_use]
    pub const fn down(self) -> Option<Self> {
        if self.y == 8 {
            None
        } else {
            Some(Self::new(self.x, self.y + 1))
        }
    }

    /// Returns the box index (0-8) that this position belongs to.
    #[must_use]
    pub const fn box_index(&self) -> u8 {
        (self.y / 3) * 3 + (self.x / 3)
    }

    /// Returns the relative position (0-8) within the box.
    #[must_use]
    pub const fn box_cell_index(&self) -> u8 {
        (self.y % 3) * 3 + (self.x % 3)
    }

    /// Returns the top-left position of this position's box.
    #[must_use]
    pub const fn box_origin(&self) -> Self {
        box_top_left(self.box_index())
    }

    /// Returns the set of positions sharing a row, column, or box with this position,
    /// including this position itself.
    #[must_use]
    pub fn house_positions(self) -> DigitPositions {
        let mut set = DigitPositions::new();
        for p in Self::ROWS[self.y] {
            set.insert(p);
        }
        for p in Self::COLUMNS[self.x] {
            set.insert(p);
        }
        for p in Self::BOXES[self.box_index()] {
            set.insert(p);
        }
        set
    }

    /// Returns the set of (up to 20) positions that "see" this position: those sharing a
    /// row, column, or box with this position, excluding the position itself.
    #[must_use]
    pub fn house_peers(self) -> DigitPositions {
        let mut set = self.house_positions();
        set.remove(self);
        set
    }

    /// Returns the display name of this position (`"<RowLetter><ColumnDigit>"`), where
    /// rows are labelled `A,B,C,D,E,F,G,H,J` (the letter `I` is skipped) and columns
    /// are `1..9`.
    #[must_use]
    pub fn cell_name(self) -> String {
        const ROW_LETTERS: [char; 9] = ['A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'J'];
        format!("{}{}", ROW_LETTERS[self.y as usize], self.x + 1)
    }
}

/// Returns the top-left position of the specified box.
///
/// # Panics
///
/// Panics if `box_index` is greater than or equal to 9.
#[must_use]
pub const fn box_top_left(box_index: u8) -> Position {
    assert!(box_index < 9);
    Position::new((box_index % 3) * 3, (box_index / 3) * 3)
}
