//! Turning predecessor chains back into move sequences.

use knight_core::{Move, Point};

use crate::state::{NO_PARENT, SearchState};

impl SearchState {
    /// Walk predecessors back from `dest` and return the moves from the
    /// chain's root to `dest`, in forward order.
    ///
    /// Returns `None` if `dest` is not `start` and has no predecessor, or if
    /// the chain does not end at `start`.
    pub fn reconstruct(&self, start: Point, dest: Point) -> Option<Vec<Move>> {
        let mut ci = self.idx(dest)?;
        let si = self.idx(start)?;
        if ci != si && self.parent[ci] == NO_PARENT {
            return None;
        }

        let mut moves = Vec::new();
        while self.parent[ci] != NO_PARENT {
            let pi = self.parent[ci];
            moves.push(self.point(ci) - self.point(pi));
            ci = pi;
            // A chain longer than the board means a cycle.
            if moves.len() > self.parent.len() {
                return None;
            }
        }
        if ci != si {
            return None;
        }
        moves.reverse();
        Some(moves)
    }
}
