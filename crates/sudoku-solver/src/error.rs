use derive_more::{Display, Error, From};

/// Errors raised at the boundary between a caller and this crate: malformed input the
/// crate itself never produces internally.
#[derive(Debug, Display, Error, From)]
pub enum CallerError {
    /// The board text could not be parsed.
    #[display("invalid board: {_0}")]
    InvalidBoard(String),
    /// The board parsed, but is inconsistent (a digit repeated in some row, column, or
    /// box): it cannot be the starting point for analysis.
    #[display("inconsistent board: {_0}")]
    Inconsistent(sudoku_core::ConsistencyError),
}
