//! Boards and terrain for knight path planning.
//!
//! - [`Board`]: a plain rectangular board with no terrain.
//! - [`TerrainGrid`]: a board whose cells carry a [`CellKind`], with an
//!   index of teleport cells kept in sync on every mutation.
//!
//! Grids are usually built from text, one symbol per cell (see
//! [`CellKind::from_symbol`] and [`TerrainGrid::parse`]).

pub mod board;
pub mod cell;
pub mod error;
pub mod grid;
mod parse;

pub use board::Board;
pub use cell::CellKind;
pub use error::GridError;
pub use grid::TerrainGrid;
