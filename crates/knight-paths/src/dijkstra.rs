use knight_core::Point;

use crate::error::SearchError;
use crate::heap::IndexedMinHeap;
use crate::result::PathResult;
use crate::search::KnightSearch;
use crate::state::UNREACHABLE;
use crate::traits::WeightedPather;

/// Open-set priority: distance first, then column, then row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct OpenKey {
    dist: i32,
    x: i32,
    y: i32,
}

impl OpenKey {
    fn new(dist: i32, p: Point) -> Self {
        Self {
            dist,
            x: p.x,
            y: p.y,
        }
    }
}

impl<P: WeightedPather> KnightSearch<'_, P> {
    /// Find the cheapest path using Dijkstra's algorithm.
    ///
    /// The open set is an indexed heap keyed by distance, with ties between
    /// equally distant cells settled by smaller `x`, then smaller `y`. A cell
    /// whose tentative distance improves is re-prioritized in place; an
    /// equal distance never replaces a recorded predecessor. The search
    /// stops once the destination is settled or nothing reachable remains.
    pub fn cheapest_path(&self, from: Point, to: Point) -> Result<PathResult, SearchError> {
        let mut state = self.prepare(from, to)?;
        let (Some(si), Some(goal)) = (state.idx(from), state.idx(to)) else {
            return Ok(PathResult::not_found());
        };

        let mut open: IndexedMinHeap<OpenKey> = IndexedMinHeap::new(state.bounds.len());
        let mut nbuf: Vec<Point> = Vec::with_capacity(8);
        state.dist[si] = 0;
        open.push_or_decrease(si, OpenKey::new(0, from));

        while let Some((ci, key)) = open.pop() {
            let current_dist = key.dist;
            let cp = state.point(ci);
            if current_dist == UNREACHABLE {
                break;
            }
            state.settled[ci] = true;
            if ci == goal {
                break;
            }
            log::trace!("dijkstra: settle {cp} at {current_dist}");

            nbuf.clear();
            self.pather.neighbors(cp, &mut nbuf);
            for &np in nbuf.iter() {
                let Some(ni) = state.idx(np) else {
                    continue;
                };
                if state.settled[ni] {
                    continue;
                }
                let tentative = current_dist.saturating_add(self.pather.cost(cp, np));
                if tentative >= state.dist[ni] {
                    continue;
                }
                state.dist[ni] = tentative;
                state.parent[ni] = ci;
                open.push_or_decrease(ni, OpenKey::new(tentative, np));
            }
        }

        log::trace!("dijkstra: distances\n{}", state.distances());

        let total = state.dist[goal];
        let result = if total == UNREACHABLE {
            PathResult::not_found()
        } else {
            state
                .reconstruct(from, to)
                .map_or_else(PathResult::not_found, |moves| {
                    PathResult::found(moves).with_cost(total)
                })
        };
        log::debug!(
            "dijkstra: {from} -> {to}: found={} moves={} cost={:?}",
            result.found,
            result.len(),
            result.cost
        );
        Ok(result)
    }
}
