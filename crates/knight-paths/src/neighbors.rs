//! Knight adjacency for plain boards and terrain grids.

use knight_core::{KNIGHT_MOVES, Move, MoveRule, Point, Range};
use knight_terrain::{Board, CellKind, TerrainGrid};

use crate::state::UNREACHABLE;
use crate::traits::{Pather, WeightedPather};

impl Pather for Board {
    fn bounds(&self) -> Range {
        Board::bounds(self)
    }

    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        for mv in KNIGHT_MOVES {
            let q = p.saturating_add(mv);
            if self.contains(q) {
                buf.push(q);
            }
        }
    }
}

impl WeightedPather for Board {
    #[inline]
    fn cost(&self, _from: Point, _to: Point) -> i32 {
        1
    }
}

/// Whether the knight move `mv` from `from` passes over a barrier.
///
/// Only the cell halfway along the move's long axis is checked; see
/// [`MoveRule::midpoint`].
pub fn crosses_barrier(grid: &TerrainGrid, from: Point, mv: Move) -> bool {
    grid.get(MoveRule::midpoint(from, mv)) == Some(CellKind::Barrier)
}

/// Visit every cell reachable in one step from `u`: knight moves first, in
/// [`KNIGHT_MOVES`] order, then teleport peers if `u` is a teleport.
fn each_neighbor(grid: &TerrainGrid, u: Point, mut f: impl FnMut(Point)) {
    for mv in KNIGHT_MOVES {
        let v = u.saturating_add(mv);
        let Some(kind) = grid.get(v) else {
            continue;
        };
        if !kind.passable() || crosses_barrier(grid, u, mv) {
            continue;
        }
        f(v);
    }
    // Teleport links ignore the move rule and every terrain check.
    grid.teleport_peers(u).for_each(f);
}

/// Cells reachable in one step from `u`, each with the cost of entering it.
pub fn knight_neighbors(grid: &TerrainGrid, u: Point) -> Vec<(Point, i32)> {
    let mut out = Vec::with_capacity(8);
    each_neighbor(grid, u, |v| out.push((v, grid.cost(u, v))));
    out
}

impl Pather for TerrainGrid {
    fn bounds(&self) -> Range {
        TerrainGrid::bounds(self)
    }

    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        each_neighbor(self, p, |v| buf.push(v));
    }
}

impl WeightedPather for TerrainGrid {
    /// Priced purely by the destination's kind.
    fn cost(&self, _from: Point, to: Point) -> i32 {
        self.get(to).and_then(CellKind::cost).unwrap_or(UNREACHABLE)
    }
}
