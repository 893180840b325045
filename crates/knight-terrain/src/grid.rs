//! A rectangular grid of [`CellKind`]s with a teleport index.

use std::collections::BTreeSet;
use std::fmt;

use knight_core::{Point, Range};

use crate::board::Board;
use crate::cell::CellKind;
use crate::error::GridError;

/// A `depth × width` grid of terrain.
///
/// The set of teleport cells is derived from the cells and kept in sync by
/// [`set_kind`](Self::set_kind); every teleport links to every other one.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "GridRows", into = "GridRows"))]
pub struct TerrainGrid {
    bounds: Range,
    cells: Vec<CellKind>,
    /// Flat indices of teleport cells.
    teleports: BTreeSet<usize>,
}

/// Serialized form of a [`TerrainGrid`]: its rows of kinds. Deserializing
/// rebuilds the grid with [`TerrainGrid::from_rows`], so the dimensions and
/// the teleport index are checked and derived rather than trusted.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct GridRows {
    rows: Vec<Vec<CellKind>>,
}

#[cfg(feature = "serde")]
impl TryFrom<GridRows> for TerrainGrid {
    type Error = GridError;

    fn try_from(repr: GridRows) -> Result<Self, GridError> {
        TerrainGrid::from_rows(repr.rows)
    }
}

#[cfg(feature = "serde")]
impl From<TerrainGrid> for GridRows {
    fn from(grid: TerrainGrid) -> Self {
        let width = grid.width() as usize;
        Self {
            rows: grid.cells.chunks(width).map(<[CellKind]>::to_vec).collect(),
        }
    }
}

impl TerrainGrid {
    /// Create an all-open grid. Both dimensions must be positive.
    pub fn new(depth: i32, width: i32) -> Result<Self, GridError> {
        let board = Board::new(depth, width)?;
        let bounds = board.bounds();
        Ok(Self {
            bounds,
            cells: vec![CellKind::Open; bounds.len()],
            teleports: BTreeSet::new(),
        })
    }

    /// Build a grid from rows of kinds. Rows must be non-empty and all of
    /// the same width.
    pub fn from_rows(rows: Vec<Vec<CellKind>>) -> Result<Self, GridError> {
        let Some(first) = rows.first() else {
            return Err(GridError::Empty);
        };
        let width = first.len() as i32;
        let mut grid = Self::new(rows.len() as i32, width)?;
        for (y, row) in rows.into_iter().enumerate() {
            if row.len() as i32 != width {
                return Err(GridError::InconsistentWidth {
                    row: y as i32,
                    width: row.len() as i32,
                    expected: width,
                });
            }
            for (x, kind) in row.into_iter().enumerate() {
                grid.set_kind(Point::new(x as i32, y as i32), kind);
            }
        }
        Ok(grid)
    }

    /// The grid rectangle.
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

    /// Whether `p` is on the grid.
    #[inline]
    pub fn in_bounds(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// The kind at `p`, or `None` if `p` is off the grid.
    #[inline]
    pub fn get(&self, p: Point) -> Option<CellKind> {
        self.bounds.index(p).map(|i| self.cells[i])
    }

    /// The kind at `p`.
    ///
    /// # Panics
    ///
    /// Panics if `p` is off the grid.
    #[inline]
    pub fn kind_at(&self, p: Point) -> CellKind {
        match self.get(p) {
            Some(kind) => kind,
            None => panic!("kind_at: {p} is outside {}", self.bounds),
        }
    }

    /// Set the kind at `p`, updating the teleport index. Does nothing if `p`
    /// is off the grid.
    pub fn set_kind(&mut self, p: Point, kind: CellKind) {
        let Some(i) = self.bounds.index(p) else {
            return;
        };
        self.cells[i] = kind;
        if kind == CellKind::Teleport {
            self.teleports.insert(i);
        } else {
            self.teleports.remove(&i);
        }
    }

    /// Whether `p` is a teleport cell.
    #[inline]
    pub fn is_teleport(&self, p: Point) -> bool {
        self.get(p) == Some(CellKind::Teleport)
    }

    /// All teleport cells in row-major order.
    pub fn teleports(&self) -> impl Iterator<Item = Point> + '_ {
        self.teleports.iter().map(|&i| self.bounds.point(i))
    }

    /// Every other teleport cell, in row-major order, if `p` is a teleport;
    /// otherwise nothing. Teleports are all linked to each other.
    pub fn teleport_peers(&self, p: Point) -> impl Iterator<Item = Point> + '_ {
        self.is_teleport(p)
            .then(|| self.teleports().filter(move |&t| t != p))
            .into_iter()
            .flatten()
    }
}

/// One row per line, each cell's symbol followed by a space.
impl fmt::Display for TerrainGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.depth() {
            for x in 0..self.width() {
                write!(f, "{} ", self.kind_at(Point::new(x, y)))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
