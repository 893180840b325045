//! Text rendering of search results and validation traces.

use knight_core::{Move, Point};
use knight_paths::{PathResult, ValidationError};
use knight_terrain::Board;

use crate::input::ValidateConfig;

/// Printed by the plain search modes when there is no path.
pub const NOT_FOUND: &str = "NULL";
/// Printed by the weighted mode when there is no path.
pub const NO_PATH: &str = "NO_PATH";

/// One line per move, both components signed, separated by a tab.
fn move_lines(moves: &[Move]) -> String {
    moves
        .iter()
        .map(|m| format!("{:+}\t{:+}\n", m.x, m.y))
        .collect()
}

/// Render the result of `any`, `shortest` or `longest`.
pub fn plain(result: &PathResult) -> String {
    if !result.found {
        return format!("{NOT_FOUND}\n");
    }
    move_lines(&result.moves)
}

/// Render the result of `weighted`: the total cost, then the moves.
pub fn weighted(result: &PathResult) -> String {
    let (true, Some(cost)) = (result.found, result.cost) else {
        return format!("{NO_PATH}\n");
    };
    format!("{cost}\n{}", move_lines(&result.moves))
}

/// Collects the verbose trace of a validation run.
#[derive(Debug, Default)]
pub struct ValidateTrace {
    out: String,
}

impl ValidateTrace {
    fn line(&mut self, line: &str) {
        self.out.push_str(line);
        self.out.push('\n');
    }

    pub fn config(&mut self, c: &ValidateConfig) {
        self.line(&format!("depth_: {}", c.depth));
        self.line(&format!("width_: {}", c.width));
        self.line(&format!("startX_: {}", c.start.x));
        self.line(&format!("startY_: {}", c.start.y));
        self.line(&format!("verbose_: {}", i32::from(c.verbose)));
    }

    pub fn board(&mut self, board: &Board, knight: Point) {
        self.out.push_str(&board.with_knight(knight).to_string());
    }

    pub fn applied(&mut self, board: &Board, mv: Move, pos: Point) {
        self.line(&format!("Apply knight move ({}, {}).", mv.x, mv.y));
        self.board(board, pos);
    }

    pub fn rejected(&mut self, err: &ValidationError) {
        let msg = match err {
            ValidationError::StartOutside { pos, bounds } => format!(
                "Initial position ({}, {}) is not inside the {}x{} board.",
                pos.x,
                pos.y,
                bounds.height(),
                bounds.width()
            ),
            ValidationError::IllegalMove { mv, .. } => {
                format!("Move ({}, {}) is not a valid knight move.", mv.x, mv.y)
            }
            ValidationError::LeftBoard { mv, pos, .. } => format!(
                "After applying knight move ({}, {}), new position ({}, {}) is outside the board.",
                mv.x, mv.y, pos.x, pos.y
            ),
        };
        self.line(&msg);
    }

    pub fn finish(self) -> String {
        self.out
    }
}
