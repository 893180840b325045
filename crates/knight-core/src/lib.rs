//! Geometry primitives and the knight move rule.
//!
//! This crate provides the foundational types shared by the rest of the
//! workspace: board coordinates ([`Point`]), half-open board rectangles
//! ([`Range`]) and the fixed table of legal knight displacements
//! ([`MoveRule`]).

pub mod geom;
pub mod rule;

pub use geom::{Point, Range, RangeIter};
pub use rule::{KNIGHT_MOVES, Move, MoveRule};
