use std::fmt;

use knight_core::{Point, Range};

/// Sentinel distance meaning "unknown / infinite".
pub const UNREACHABLE: i32 = i32::MAX;

/// Sentinel parent index meaning "no predecessor".
pub const NO_PARENT: usize = usize::MAX;

// ---------------------------------------------------------------------------
// SearchState
// ---------------------------------------------------------------------------

/// Per-cell bookkeeping for a single search.
///
/// A fresh table is built for every search call and owned by it; nothing
/// carries over between searches.
#[derive(Debug, Clone)]
pub struct SearchState {
    pub(crate) bounds: Range,
    pub(crate) dist: Vec<i32>,
    pub(crate) parent: Vec<usize>,
    /// Ancestor of the active DFS frame.
    pub(crate) on_path: Vec<bool>,
    /// Distance final (Dijkstra) or cell dequeued (BFS).
    pub(crate) settled: Vec<bool>,
}

impl SearchState {
    /// A clean table covering `bounds`.
    pub fn new(bounds: Range) -> Self {
        let len = bounds.len();
        Self {
            bounds,
            dist: vec![UNREACHABLE; len],
            parent: vec![NO_PARENT; len],
            on_path: vec![false; len],
            settled: vec![false; len],
        }
    }

    /// The rectangle this table covers.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    #[inline]
    pub(crate) fn idx(&self, p: Point) -> Option<usize> {
        self.bounds.index(p)
    }

    #[inline]
    pub(crate) fn point(&self, idx: usize) -> Point {
        self.bounds.point(idx)
    }

    /// Recorded distance of `p`, or [`UNREACHABLE`].
    pub fn dist_at(&self, p: Point) -> i32 {
        match self.idx(p) {
            Some(i) => self.dist[i],
            None => UNREACHABLE,
        }
    }

    /// Recorded predecessor of `p`, if any.
    pub fn parent_of(&self, p: Point) -> Option<Point> {
        let i = self.idx(p)?;
        match self.parent[i] {
            NO_PARENT => None,
            pi => Some(self.point(pi)),
        }
    }

    /// A printable view of the distance table.
    pub fn distances(&self) -> DistanceTable<'_> {
        DistanceTable(self)
    }
}

/// Right-aligned dump of a [`SearchState`]'s distances, one board row per
/// line. Unreachable cells print as `-1`.
pub struct DistanceTable<'a>(&'a SearchState);

impl fmt::Display for DistanceTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let b = self.0.bounds;
        for y in b.min.y..b.max.y {
            for x in b.min.x..b.max.x {
                let d = self.0.dist_at(Point::new(x, y));
                let d = if d == UNREACHABLE { -1 } else { d };
                write!(f, "{d:>6} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
