use std::collections::VecDeque;

use knight_core::Point;

use crate::error::SearchError;
use crate::result::PathResult;
use crate::search::KnightSearch;
use crate::state::NO_PARENT;
use crate::traits::Pather;

impl<P: Pather> KnightSearch<'_, P> {
    /// Find a path with the fewest moves using breadth-first search.
    ///
    /// Each cell is discovered at most once and keeps the predecessor it was
    /// discovered from. Neighbors are expanded in the pather's fixed order,
    /// which decides between equally short paths. The search ends when the
    /// destination is dequeued.
    pub fn shortest_path(&self, from: Point, to: Point) -> Result<PathResult, SearchError> {
        let mut state = self.prepare(from, to)?;
        let Some(si) = state.idx(from) else {
            return Ok(PathResult::not_found());
        };
        let Some(goal) = state.idx(to) else {
            return Ok(PathResult::not_found());
        };

        let mut queue: VecDeque<usize> = VecDeque::new();
        let mut nbuf: Vec<Point> = Vec::with_capacity(8);
        state.dist[si] = 0;
        queue.push_back(si);

        let mut found = false;
        while let Some(ci) = queue.pop_front() {
            state.settled[ci] = true;
            if ci == goal {
                found = true;
                break;
            }
            let cp = state.point(ci);
            let next_dist = state.dist[ci] + 1;
            log::trace!("bfs: expand {cp} at depth {}", state.dist[ci]);

            nbuf.clear();
            self.pather.neighbors(cp, &mut nbuf);
            for &np in nbuf.iter() {
                let Some(ni) = state.idx(np) else {
                    continue;
                };
                if ni == si || state.parent[ni] != NO_PARENT {
                    continue;
                }
                state.dist[ni] = next_dist;
                state.parent[ni] = ci;
                queue.push_back(ni);
            }
        }

        let result = if found {
            state
                .reconstruct(from, to)
                .map_or_else(PathResult::not_found, PathResult::found)
        } else {
            PathResult::not_found()
        };
        log::debug!(
            "bfs: {from} -> {to}: found={} moves={}",
            result.found,
            result.len()
        );
        Ok(result)
    }
}
