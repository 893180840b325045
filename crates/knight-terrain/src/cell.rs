//! Terrain kinds and their text symbols.

use std::fmt;

/// The kind of a board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellKind {
    #[default]
    Open,
    Water,
    Rock,
    Barrier,
    Teleport,
    Lava,
}

/// Symbol table for the text grid format.
const SYMBOLS: [(char, CellKind); 6] = [
    ('.', CellKind::Open),
    ('W', CellKind::Water),
    ('R', CellKind::Rock),
    ('B', CellKind::Barrier),
    ('T', CellKind::Teleport),
    ('L', CellKind::Lava),
];

impl CellKind {
    /// All kinds, in symbol-table order.
    pub const ALL: [CellKind; 6] = [
        CellKind::Open,
        CellKind::Water,
        CellKind::Rock,
        CellKind::Barrier,
        CellKind::Teleport,
        CellKind::Lava,
    ];

    /// Parse a single grid symbol.
    pub fn from_symbol(ch: char) -> Option<Self> {
        SYMBOLS.iter().find(|(c, _)| *c == ch).map(|&(_, k)| k)
    }

    /// The grid symbol for this kind.
    pub fn symbol(self) -> char {
        SYMBOLS
            .iter()
            .find(|(_, k)| *k == self)
            .map_or('?', |&(c, _)| c)
    }

    /// Whether a knight may land on this cell.
    pub fn passable(self) -> bool {
        !matches!(self, CellKind::Rock | CellKind::Barrier)
    }

    /// Cost of moving onto a cell of this kind, or `None` for cells a knight
    /// can never land on.
    pub fn cost(self) -> Option<i32> {
        match self {
            CellKind::Open => Some(1),
            CellKind::Teleport => Some(0),
            CellKind::Water => Some(2),
            CellKind::Lava => Some(5),
            CellKind::Rock | CellKind::Barrier => None,
        }
    }
}

impl fmt::Display for CellKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
