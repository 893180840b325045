//! A plain board with no terrain.

use std::fmt;

use knight_core::{Point, Range};

use crate::error::GridError;

/// A `depth × width` board where every cell is open and every move costs 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "BoardDims", into = "BoardDims"))]
pub struct Board {
    bounds: Range,
}

/// Serialized form of a [`Board`]; deserializing goes through [`Board::new`].
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct BoardDims {
    depth: i32,
    width: i32,
}

#[cfg(feature = "serde")]
impl TryFrom<BoardDims> for Board {
    type Error = GridError;

    fn try_from(dims: BoardDims) -> Result<Self, GridError> {
        Board::new(dims.depth, dims.width)
    }
}

#[cfg(feature = "serde")]
impl From<Board> for BoardDims {
    fn from(board: Board) -> Self {
        Self {
            depth: board.depth(),
            width: board.width(),
        }
    }
}

impl Board {
    /// Create a board. Both dimensions must be positive.
    pub fn new(depth: i32, width: i32) -> Result<Self, GridError> {
        if depth <= 0 || width <= 0 {
            return Err(GridError::NonPositiveDimension { depth, width });
        }
        Ok(Self {
            bounds: Range::board(depth, width),
        })
    }

    /// The board rectangle.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Number of rows.
    #[inline]
    pub fn depth(&self) -> i32 {
        self.bounds.height()
    }

    /// Number of columns.
    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    /// Whether `p` is on the board.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// A view of the board with a knight standing on `knight`.
    pub fn with_knight(&self, knight: Point) -> KnightView<'_> {
        KnightView {
            board: self,
            knight,
        }
    }
}

/// Text dump of a [`Board`] with the knight's cell marked `K`.
pub struct KnightView<'a> {
    board: &'a Board,
    knight: Point,
}

impl fmt::Display for KnightView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.board.depth() {
            for x in 0..self.board.width() {
                let ch = if self.knight == Point::new(x, y) { 'K' } else { '.' };
                write!(f, "{ch} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn board_round_trip() {
        let b = Board::new(3, 5).unwrap();
        let json = serde_json::to_string(&b).unwrap();
        assert_eq!(json, r#"{"depth":3,"width":5}"#);
        let back: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(b, back);
    }

    #[test]
    fn rejects_non_positive_dimensions() {
        assert!(serde_json::from_str::<Board>(r#"{"depth":0,"width":5}"#).is_err());
        assert!(serde_json::from_str::<Board>(r#"{"depth":3,"width":-1}"#).is_err());
    }
}
