use knight_core::{Move, Point, Range};
use std::fmt;

/// Which end of a search a position was given for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    Destination,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => write!(f, "start"),
            Self::Destination => write!(f, "destination"),
        }
    }
}

/// Errors that stop a search before it begins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The start or destination lies outside the searched rectangle.
    OutOfBounds {
        endpoint: Endpoint,
        pos: Point,
        bounds: Range,
    },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds {
                endpoint,
                pos,
                bounds,
            } => write!(
                f,
                "{endpoint} position {pos} is not inside the {}x{} board",
                bounds.height(),
                bounds.width()
            ),
        }
    }
}

impl std::error::Error for SearchError {}

/// Why a prescribed move sequence was rejected.
///
/// `index` is the zero-based position of the offending move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The knight does not start on the board.
    StartOutside { pos: Point, bounds: Range },
    /// The displacement is not a knight move.
    IllegalMove { index: usize, mv: Move },
    /// Applying the move takes the knight to `pos`, off the board.
    LeftBoard { index: usize, mv: Move, pos: Point },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StartOutside { pos, bounds } => write!(
                f,
                "initial position {pos} is not inside the {}x{} board",
                bounds.height(),
                bounds.width()
            ),
            Self::IllegalMove { index, mv } => {
                write!(f, "move #{index} {mv} is not a valid knight move")
            }
            Self::LeftBoard { index, mv, pos } => write!(
                f,
                "after applying knight move #{index} {mv}, new position {pos} is outside the board"
            ),
        }
    }
}

impl std::error::Error for ValidationError {}
