//! Human-readable rendering of [`Step`]s for the `suggest` and `rate -v` subcommands.

use std::fmt::Write as _;

use sudoku_core::{Digit, Position};
use sudoku_solver::{Action, Step};

/// Renders a single `Step` as one summary line, optionally followed by an indented
/// `reason:` line.
///
/// The summary names the action, the technique (when any), and the cells/digits
/// involved; it never includes the reason itself, so callers control verbosity by
/// choosing whether to call [`reason_line`] as well.
#[must_use]
pub fn summary_line(step: &Step) -> String {
    let mut line = String::new();
    match step.action {
        Action::Solve => {
            let pos = Position::from_index(step.indexes[0]);
            let digit = Digit::from_value(step.values[0]);
            let _ = write!(line, "solve {} = {digit}", pos.cell_name());
        }
        Action::Eliminate => {
            let cells: Vec<String> = step
                .indexes
                .iter()
                .map(|&i| Position::from_index(i).cell_name())
                .collect();
            let values: Vec<String> = step.values.iter().map(u8::to_string).collect();
            let _ = write!(line, "eliminate {} from {}", values.join(","), cells.join(", "));
        }
        Action::Stuck => line.push_str("stuck"),
        Action::Done => line.push_str("done"),
    }
    if let Some(technique) = step.technique {
        let _ = write!(line, " ({technique})");
    }
    line
}

/// Renders the `reason:` line shown under `-v`/`-vv`, indented to set it off from the
/// summary line above it.
#[must_use]
pub fn reason_line(step: &Step) -> String {
    format!("    reason: {}", step.reason)
}

#[cfg(test)]
mod tests {
    use sudoku_solver::TechniqueKind;

    use super::*;

    #[test]
    fn test_summary_line_for_solve() {
        let step = Step::solve(Position::new(0, 0), Digit::D5, TechniqueKind::NakedSingle, "x");
        assert_eq!(summary_line(&step), "solve A1 = 5 (naked single)");
    }

    #[test]
    fn test_summary_line_for_eliminate() {
        let step = Step::eliminate(
            [Position::new(1, 0), Position::new(2, 0)],
            [Digit::D3, Digit::D7],
            TechniqueKind::NakedPair,
            "x",
        );
        assert_eq!(summary_line(&step), "eliminate 3,7 from A2, A3 (naked pair)");
    }

    #[test]
    fn test_summary_line_for_stuck() {
        assert_eq!(summary_line(&Step::stuck()), "stuck (none)");
    }

    #[test]
    fn test_summary_line_for_done() {
        assert_eq!(summary_line(&Step::done()), "done");
    }
}
