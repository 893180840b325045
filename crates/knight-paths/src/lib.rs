//! Knight path planning over boards and terrain grids.
//!
//! This crate provides five operations sharing one adjacency model:
//!
//! - **Validation** of a prescribed move sequence ([`validate_moves`])
//! - **Any path** by backtracking DFS ([`KnightSearch::any_path`])
//! - **Shortest path** by BFS ([`KnightSearch::shortest_path`])
//! - **Longest simple path** by exhaustive DFS ([`KnightSearch::longest_path`])
//! - **Cheapest path** by Dijkstra ([`KnightSearch::cheapest_path`])
//!
//! Each search allocates its own [`SearchState`] and returns a
//! [`PathResult`]; "no path" is a normal result, not an error.
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | any / shortest / longest path |
//! | [`WeightedPather`] : [`Pather`] | cheapest path |
//!
//! Both are implemented for [`Board`](knight_terrain::Board) (plain
//! knight moves) and [`TerrainGrid`](knight_terrain::TerrainGrid)
//! (terrain filtering, barrier crossing and teleports).

mod bfs;
mod dfs;
mod dijkstra;
mod error;
mod heap;
mod neighbors;
mod reconstruct;
mod result;
mod search;
mod state;
mod traits;
mod validate;

pub use error::{Endpoint, SearchError, ValidationError};
pub use neighbors::{crosses_barrier, knight_neighbors};
pub use result::PathResult;
pub use search::KnightSearch;
pub use state::{DistanceTable, NO_PARENT, SearchState, UNREACHABLE};
pub use traits::{Pather, WeightedPather};
pub use validate::{validate_moves, validate_moves_with};
