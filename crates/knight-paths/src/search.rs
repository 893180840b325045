use knight_core::{Point, Range};

use crate::error::{Endpoint, SearchError};
use crate::state::SearchState;
use crate::traits::Pather;

/// Boards larger than this make the exhaustive searches noticeably slow.
pub(crate) const EXHAUSTIVE_WARN_CELLS: usize = 64;

/// Entry point for searches over a [`Pather`].
///
/// The searcher only borrows the pather; every call builds its own
/// [`SearchState`], so calls are independent and repeatable.
#[derive(Debug, Clone, Copy)]
pub struct KnightSearch<'a, P> {
    pub(crate) pather: &'a P,
}

impl<'a, P: Pather> KnightSearch<'a, P> {
    /// Create a searcher over `pather`.
    pub fn new(pather: &'a P) -> Self {
        Self { pather }
    }

    /// The rectangle searches run over.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.pather.bounds()
    }

    /// Refuse endpoints outside the board, then hand out a fresh table.
    pub(crate) fn prepare(&self, from: Point, to: Point) -> Result<SearchState, SearchError> {
        let bounds = self.bounds();
        for (endpoint, pos) in [(Endpoint::Start, from), (Endpoint::Destination, to)] {
            if !bounds.contains(pos) {
                return Err(SearchError::OutOfBounds {
                    endpoint,
                    pos,
                    bounds,
                });
            }
        }
        Ok(SearchState::new(bounds))
    }

    pub(crate) fn warn_if_large(&self, mode: &str) {
        let cells = self.bounds().len();
        if cells > EXHAUSTIVE_WARN_CELLS {
            log::warn!("{mode}: exhaustive search over {cells} cells may take very long");
        }
    }
}
