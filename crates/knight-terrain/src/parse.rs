//! The text grid format.
//!
//! One row per line, one symbol per cell (see [`CellKind::from_symbol`]).
//! Whitespace between symbols is ignored and blank lines are skipped, so
//! both `".W."` and `". W ."` describe the same row.

use std::str::FromStr;

use knight_core::Point;

use crate::cell::CellKind;
use crate::error::GridError;
use crate::grid::TerrainGrid;

impl TerrainGrid {
    /// Parse a grid from text.
    ///
    /// Fails on the first unknown symbol or on the first row whose width
    /// differs from the first row's.
    pub fn parse(s: &str) -> Result<Self, GridError> {
        let mut rows: Vec<Vec<CellKind>> = Vec::new();
        let mut width: Option<i32> = None;

        for line in s.lines() {
            if line.trim().is_empty() {
                continue;
            }
            let y = rows.len() as i32;
            let mut row = Vec::with_capacity(width.unwrap_or(0) as usize);
            for ch in line.chars().filter(|c| !c.is_whitespace()) {
                let Some(kind) = CellKind::from_symbol(ch) else {
                    return Err(GridError::UnknownSymbol {
                        ch,
                        pos: Point::new(row.len() as i32, y),
                    });
                };
                row.push(kind);
            }
            let w = row.len() as i32;
            match width {
                None => width = Some(w),
                Some(expected) if expected != w => {
                    return Err(GridError::InconsistentWidth {
                        row: y,
                        width: w,
                        expected,
                    });
                }
                Some(_) => {}
            }
            rows.push(row);
        }

        Self::from_rows(rows)
    }
}

impl FromStr for TerrainGrid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAP: &str = "\
. . W .
B T . L
R . . T";

    #[test]
    fn parse_spaced_rows() {
        let g = TerrainGrid::parse(MAP).unwrap();
        assert_eq!(g.depth(), 3);
        assert_eq!(g.width(), 4);
        assert_eq!(g.kind_at(Point::new(2, 0)), CellKind::Water);
        assert_eq!(g.kind_at(Point::new(0, 1)), CellKind::Barrier);
        assert_eq!(g.kind_at(Point::new(3, 1)), CellKind::Lava);
        assert_eq!(g.kind_at(Point::new(0, 2)), CellKind::Rock);
        assert_eq!(
            g.teleports().collect::<Vec<_>>(),
            vec![Point::new(1, 1), Point::new(3, 2)]
        );
    }

    #[test]
    fn parse_compact_rows_and_blank_lines() {
        let g: TerrainGrid = "\n..W\n\nTT.\n\n".parse().unwrap();
        assert_eq!(g.depth(), 2);
        assert_eq!(g.width(), 3);
        assert_eq!(g.teleports().count(), 2);
    }

    #[test]
    fn unknown_symbol() {
        let err = TerrainGrid::parse("...\n.x.").unwrap_err();
        assert_eq!(
            err,
            GridError::UnknownSymbol {
                ch: 'x',
                pos: Point::new(1, 1)
            }
        );
    }

    #[test]
    fn inconsistent_width() {
        let err = TerrainGrid::parse("...\n....").unwrap_err();
        assert_eq!(
            err,
            GridError::InconsistentWidth {
                row: 1,
                width: 4,
                expected: 3
            }
        );
    }

    #[test]
    fn empty_text() {
        assert_eq!(TerrainGrid::parse(""), Err(GridError::Empty));
        assert_eq!(TerrainGrid::parse("\n  \n"), Err(GridError::Empty));
    }

    #[test]
    fn dump_parses_back() {
        let g = TerrainGrid::parse(MAP).unwrap();
        let again = TerrainGrid::parse(&g.to_string()).unwrap();
        assert_eq!(g, again);
    }
}
