use knight_core::{Move, Point};

/// Outcome of a search.
///
/// `moves` runs from start to destination and is empty both when start and
/// destination coincide and when nothing was found; `found` tells the two
/// apart. `cost` is only set by weighted searches.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathResult {
    pub found: bool,
    pub moves: Vec<Move>,
    pub cost: Option<i32>,
}

impl PathResult {
    /// No path exists.
    pub fn not_found() -> Self {
        Self::default()
    }

    /// A path made of `moves`.
    pub fn found(moves: Vec<Move>) -> Self {
        Self {
            found: true,
            moves,
            cost: None,
        }
    }

    /// Attach the accumulated path cost.
    pub fn with_cost(mut self, cost: i32) -> Self {
        self.cost = Some(cost);
        self
    }

    /// Number of moves.
    #[inline]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Whether there are no moves.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Every cell visited when the moves are applied from `start`,
    /// including `start` itself.
    pub fn positions(&self, start: Point) -> Vec<Point> {
        let mut out = Vec::with_capacity(self.moves.len() + 1);
        let mut cur = start;
        out.push(cur);
        for &mv in &self.moves {
            cur += mv;
            out.push(cur);
        }
        out
    }

    /// Where the moves end when applied from `start`.
    pub fn end(&self, start: Point) -> Point {
        self.moves.iter().fold(start, |p, &mv| p + mv)
    }
}
