//! Backtracking depth-first searches over simple paths.
//!
//! Both searches keep an explicit frame stack instead of recursing, so
//! their depth is bounded by the heap rather than the call stack. A cell is
//! marked while it is an ancestor of the active frame and unmarked on
//! backtrack, so it can be reached again along a different route.

use knight_core::{Move, Point};

use crate::error::SearchError;
use crate::result::PathResult;
use crate::search::KnightSearch;
use crate::state::{NO_PARENT, SearchState};
use crate::traits::Pather;

struct Frame {
    cell: usize,
    neighbors: Vec<Point>,
    next: usize,
}

/// What to do when the walk reaches the destination.
enum OnGoal {
    Stop,
    Continue,
}

impl<P: Pather> KnightSearch<'_, P> {
    /// Find any path using backtracking depth-first search.
    ///
    /// Neighbors are tried in the pather's fixed order and the first chain
    /// that reaches the destination is returned.
    pub fn any_path(&self, from: Point, to: Point) -> Result<PathResult, SearchError> {
        let mut state = self.prepare(from, to)?;
        self.warn_if_large("any-path");
        let mut result = PathResult::not_found();
        self.walk(&mut state, from, to, |state| {
            result = state
                .reconstruct(from, to)
                .map_or_else(PathResult::not_found, PathResult::found);
            OnGoal::Stop
        });
        log::debug!(
            "dfs: {from} -> {to}: found={} moves={}",
            result.found,
            result.len()
        );
        Ok(result)
    }

    /// Find the longest simple path (no repeated cell) by exhaustive
    /// depth-first search.
    ///
    /// Every simple path from `from` to `to` is enumerated; the first one
    /// found with the greatest number of moves wins. Running time is
    /// exponential in the board size.
    pub fn longest_path(&self, from: Point, to: Point) -> Result<PathResult, SearchError> {
        let mut state = self.prepare(from, to)?;
        self.warn_if_large("longest-path");
        let mut best: Option<Vec<Move>> = None;
        let mut paths = 0u64;
        self.walk(&mut state, from, to, |state| {
            paths += 1;
            if let Some(moves) = state.reconstruct(from, to) {
                if best.as_ref().is_none_or(|b| moves.len() > b.len()) {
                    log::trace!("longest: new best with {} moves", moves.len());
                    best = Some(moves);
                }
            }
            OnGoal::Continue
        });
        let result = best.map_or_else(PathResult::not_found, PathResult::found);
        log::debug!(
            "longest: {from} -> {to}: {paths} paths, found={} moves={}",
            result.found,
            result.len()
        );
        Ok(result)
    }

    /// Enumerate simple paths from `from`, calling `on_goal` each time the
    /// destination is reached. The destination is never expanded, and at
    /// that moment the parents of the active chain lead back to `from`.
    fn walk(
        &self,
        state: &mut SearchState,
        from: Point,
        to: Point,
        mut on_goal: impl FnMut(&SearchState) -> OnGoal,
    ) {
        let (Some(si), Some(goal)) = (state.idx(from), state.idx(to)) else {
            return;
        };
        if si == goal {
            on_goal(state);
            return;
        }

        state.on_path[si] = true;
        let mut stack = vec![self.frame(si, state)];

        while let Some(top) = stack.last_mut() {
            if top.next == top.neighbors.len() {
                state.on_path[top.cell] = false;
                stack.pop();
                continue;
            }
            let np = top.neighbors[top.next];
            top.next += 1;
            let ci = top.cell;

            let Some(ni) = state.idx(np) else {
                continue;
            };
            if state.on_path[ni] {
                continue;
            }
            state.parent[ni] = ci;

            if ni == goal {
                let outcome = on_goal(state);
                state.parent[ni] = NO_PARENT;
                if let OnGoal::Stop = outcome {
                    return;
                }
                continue;
            }

            state.on_path[ni] = true;
            let frame = self.frame(ni, state);
            stack.push(frame);
        }
    }

    fn frame(&self, cell: usize, state: &SearchState) -> Frame {
        let mut neighbors = Vec::with_capacity(8);
        self.pather.neighbors(state.point(cell), &mut neighbors);
        Frame {
            cell,
            neighbors,
            next: 0,
        }
    }
}
