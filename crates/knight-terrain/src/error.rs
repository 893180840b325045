use knight_core::Point;
use std::fmt;

/// Errors that can occur when building a board or a terrain grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Depth or width is zero or negative.
    NonPositiveDimension { depth: i32, width: i32 },
    /// A row's width differs from the first row's.
    InconsistentWidth {
        row: i32,
        width: i32,
        expected: i32,
    },
    /// A character that is not a cell symbol was found.
    UnknownSymbol { ch: char, pos: Point },
    /// The text contained no rows.
    Empty,
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveDimension { depth, width } => {
                write!(f, "board dimensions must be positive, got {depth}x{width}")
            }
            Self::InconsistentWidth {
                row,
                width,
                expected,
            } => write!(
                f,
                "at row {row}, width is {width}, but previous row width is {expected}"
            ),
            Self::UnknownSymbol { ch, pos } => {
                write!(f, "unknown cell \u{201c}{ch}\u{201d} at {pos}")
            }
            Self::Empty => write!(f, "grid has no rows"),
        }
    }
}

impl std::error::Error for GridError {}
