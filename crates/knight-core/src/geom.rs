//! Board coordinates.
//!
//! `x` is the column (along the board width), `y` is the row (along the
//! board depth). Row 0 is printed first, so `y` grows downwards.

use std::fmt;
use std::ops::{Add, AddAssign, Sub};

/// A cell on a board, or the displacement between two cells.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// This point moved `dx` columns and `dy` rows.
    #[inline]
    pub const fn shift(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// `self + mv`, with each coordinate clamped to the `i32` range instead
    /// of overflowing. A clamped coordinate lies outside every board, whose
    /// cells are `0..width` by `0..depth`.
    #[inline]
    pub const fn saturating_add(self, mv: Point) -> Self {
        Self::new(self.x.saturating_add(mv.x), self.y.saturating_add(mv.y))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add for Point {
    type Output = Point;

    #[inline]
    fn add(self, mv: Point) -> Point {
        self.shift(mv.x, mv.y)
    }
}

impl AddAssign for Point {
    #[inline]
    fn add_assign(&mut self, mv: Point) {
        *self = *self + mv;
    }
}

/// `to - from` is the move that takes `from` to `to`.
impl Sub for Point {
    type Output = Point;

    #[inline]
    fn sub(self, from: Point) -> Point {
        self.shift(-from.x, -from.y)
    }
}

/// The cells `min.x..max.x` by `min.y..max.y`.
///
/// Every table in a search is a flat `Vec` indexed through
/// [`index`](Self::index), row by row.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range {
    pub min: Point,
    pub max: Point,
}

impl Range {
    #[inline]
    pub const fn new(min: Point, max: Point) -> Self {
        Self { min, max }
    }

    /// A `depth` rows by `width` columns board with its corner at the origin.
    #[inline]
    pub const fn board(depth: i32, width: i32) -> Self {
        Self::new(Point::new(0, 0), Point::new(width, depth))
    }

    /// Number of columns.
    #[inline]
    pub fn width(self) -> i32 {
        (self.max.x - self.min.x).max(0)
    }

    /// Number of rows.
    #[inline]
    pub fn height(self) -> i32 {
        (self.max.y - self.min.y).max(0)
    }

    #[inline]
    pub fn len(self) -> usize {
        self.width() as usize * self.height() as usize
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn contains(self, p: Point) -> bool {
        (self.min.x..self.max.x).contains(&p.x) && (self.min.y..self.max.y).contains(&p.y)
    }

    /// Flat index of `p`, or `None` off the range.
    #[inline]
    pub fn index(self, p: Point) -> Option<usize> {
        self.contains(p).then(|| {
            let rel = p - self.min;
            rel.y as usize * self.width() as usize + rel.x as usize
        })
    }

    /// The cell at flat index `idx`. `idx` must be below [`len`](Self::len).
    #[inline]
    pub fn point(self, idx: usize) -> Point {
        let w = self.width() as usize;
        debug_assert!(idx < self.len());
        self.min.shift((idx % w) as i32, (idx / w) as i32)
    }

    /// Every cell, in flat index order.
    #[inline]
    pub fn iter(self) -> RangeIter {
        RangeIter {
            range: self,
            next: 0,
        }
    }
}

impl IntoIterator for Range {
    type Item = Point;
    type IntoIter = RangeIter;

    fn into_iter(self) -> RangeIter {
        self.iter()
    }
}

/// Printed as `depth x width` dimensions.
impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{} board", self.height(), self.width())
    }
}

/// Iterator returned by [`Range::iter`].
#[derive(Clone, Debug)]
pub struct RangeIter {
    range: Range,
    next: usize,
}

impl Iterator for RangeIter {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.next >= self.range.len() {
            return None;
        }
        let p = self.range.point(self.next);
        self.next += 1;
        Some(p)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.range.len().saturating_sub(self.next);
        (n, Some(n))
    }
}

impl ExactSizeIterator for RangeIter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moves_add_and_subtract() {
        let from = Point::new(1, 2);
        let mv = Point::new(2, -1);
        let to = from + mv;
        assert_eq!(to, Point::new(3, 1));
        assert_eq!(to - from, mv);
        let mut p = from;
        p += mv;
        p += mv;
        assert_eq!(p, Point::new(5, 0));
    }

    #[test]
    fn saturating_add_clamps_at_the_edges() {
        let edge = Point::new(i32::MAX - 1, 0);
        assert_eq!(edge.saturating_add(Point::new(2, 1)), Point::new(i32::MAX, 1));
        assert_eq!(
            Point::new(i32::MIN + 1, 3).saturating_add(Point::new(-2, -1)),
            Point::new(i32::MIN, 2)
        );
        assert_eq!(Point::new(3, 3).saturating_add(Point::new(-1, 2)), Point::new(2, 5));
        assert!(!Range::board(3, i32::MAX).contains(edge.saturating_add(Point::new(2, 1))));
    }

    #[test]
    fn board_contains_only_its_cells() {
        let r = Range::board(2, 3);
        assert_eq!((r.height(), r.width(), r.len()), (2, 3, 6));
        for p in [Point::new(0, 0), Point::new(2, 1)] {
            assert!(r.contains(p), "{p}");
        }
        for p in [Point::new(3, 0), Point::new(0, 2), Point::new(-1, 0), Point::new(0, -1)] {
            assert!(!r.contains(p), "{p}");
        }
        assert_eq!(r.to_string(), "2x3 board");
    }

    #[test]
    fn flat_indices_are_row_major() {
        let r = Range::board(4, 5);
        assert_eq!(r.index(Point::new(1, 1)), Some(6));
        assert_eq!(r.index(Point::new(5, 0)), None);
        for (i, p) in r.iter().enumerate() {
            assert_eq!(r.index(p), Some(i));
            assert_eq!(r.point(i), p);
        }
    }

    #[test]
    fn offset_range_indexing() {
        let r = Range::new(Point::new(2, 3), Point::new(4, 5));
        assert_eq!(r.index(Point::new(2, 3)), Some(0));
        assert_eq!(r.index(Point::new(3, 4)), Some(3));
        assert_eq!(r.point(3), Point::new(3, 4));
    }

    #[test]
    fn iteration_length() {
        let r = Range::board(2, 3);
        let mut it = r.iter();
        assert_eq!(it.len(), 6);
        it.next();
        assert_eq!(it.len(), 5);
        assert_eq!(it.last(), Some(Point::new(2, 1)));
    }

    #[test]
    fn degenerate_ranges_are_empty() {
        for r in [Range::board(0, 4), Range::board(3, 0), Range::board(-2, 5)] {
            assert!(r.is_empty());
            assert_eq!(r.len(), 0);
            assert_eq!(r.iter().count(), 0);
        }
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn point_round_trip() {
        let p = Point::new(-2, 7);
        let json = serde_json::to_string(&p).unwrap();
        let back: Point = serde_json::from_str(&json).unwrap();
        assert_eq!(p, back);
    }
}
