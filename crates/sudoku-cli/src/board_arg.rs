//! Strict parsing of the 81-digit board strings accepted on the command line.
//!
//! [`DigitGrid::from_str`](sudoku_core::DigitGrid) is lenient (it tolerates `.`, `_`,
//! and interior whitespace, to keep multi-line test fixtures legible). The external
//! CLI contract is stricter: exactly 81 non-whitespace characters, each an ASCII digit
//! `0`-`9`. This module enforces that boundary once, so every subcommand reports the
//! same "invalid digit" failure for the same malformed input.

use std::fmt::{self, Display};

use sudoku_core::DigitGrid;

/// Why a command-line board argument was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardArgError {
    /// The argument had the wrong number of non-whitespace characters.
    WrongLength(usize),
    /// A non-whitespace character was not an ASCII digit `0`-`9`.
    InvalidDigit(char),
}

impl Display for BoardArgError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongLength(len) => {
                write!(f, "expected exactly 81 digits, got {len}")
            }
            Self::InvalidDigit(c) => write!(f, "invalid digit '{c}': only 0-9 are allowed"),
        }
    }
}

/// Parses a command-line board argument under the strict §6 board text format.
///
/// # Errors
///
/// Returns [`BoardArgError::WrongLength`] if the argument's non-whitespace length
/// isn't exactly 81, or [`BoardArgError::InvalidDigit`] if any non-whitespace
/// character isn't `0`-`9`.
pub fn parse_board_arg(s: &str) -> Result<DigitGrid, BoardArgError> {
    let digits: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
    if digits.len() != 81 {
        return Err(BoardArgError::WrongLength(digits.len()));
    }
    for &c in &digits {
        if !c.is_ascii_digit() {
            return Err(BoardArgError::InvalidDigit(c));
        }
    }
    let text: String = digits.into_iter().collect();
    Ok(text.parse::<DigitGrid>().expect("pre-validated 81-digit string always parses"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_board_arg_accepts_81_digits() {
        let s = "0".repeat(81);
        assert!(parse_board_arg(&s).is_ok());
    }

    #[test]
    fn test_parse_board_arg_rejects_short_input() {
        assert_eq!(parse_board_arg("12345"), Err(BoardArgError::WrongLength(5)));
    }

    #[test]
    fn test_parse_board_arg_rejects_dots() {
        let s = format!(".{}", "0".repeat(80));
        assert_eq!(parse_board_arg(&s), Err(BoardArgError::InvalidDigit('.')));
    }

    #[test]
    fn test_parse_board_arg_ignores_whitespace() {
        let s = format!("{} \n{}", "0".repeat(40), "0".repeat(41));
        assert!(parse_board_arg(&s).is_ok());
    }
}
