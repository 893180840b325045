use knight_core::{Point, Range};

/// Minimal search interface: the searchable rectangle plus neighbor
/// enumeration.
pub trait Pather {
    /// The rectangle searches run over. Every neighbor lies inside it.
    fn bounds(&self) -> Range;

    /// Append neighbors of `p` into `buf`, in a fixed order. The caller
    /// clears `buf` before calling.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);
}

/// Pather with weighted (non-negative cost) edges.
pub trait WeightedPather: Pather {
    /// Cost of moving from `from` to a neighbor `to`. Must be >= 0.
    fn cost(&self, from: Point, to: Point) -> i32;
}
