//! Parsing the line-oriented input format.

use anyhow::{Context, Result, bail};
use knight_core::{Move, Point};
use knight_terrain::{Board, TerrainGrid};

/// Parse every whitespace-separated integer on `line`.
fn ints(line: &str) -> Result<Vec<i32>> {
    line.split_whitespace()
        .map(|tok| {
            tok.parse::<i32>()
                .with_context(|| format!("expected an integer, found {tok:?}"))
        })
        .collect()
}

/// Split off the first line of `text`.
fn header(text: &str) -> (&str, &str) {
    match text.split_once('\n') {
        Some((first, rest)) => (first, rest),
        None => (text, ""),
    }
}

/// Header of the `validate` operation.
///
/// Missing trailing fields keep their defaults: an 8x8 board, the knight
/// on (1, 2), not verbose.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidateConfig {
    pub depth: i32,
    pub width: i32,
    pub start: Point,
    pub verbose: bool,
}

impl Default for ValidateConfig {
    fn default() -> Self {
        Self {
            depth: 8,
            width: 8,
            start: Point::new(1, 2),
            verbose: false,
        }
    }
}

impl ValidateConfig {
    pub fn parse(line: &str) -> Result<Self> {
        let v = ints(line).context("reading board configuration")?;
        let mut config = Self::default();
        let mut it = v.into_iter();
        if let Some(d) = it.next() {
            config.depth = d;
        }
        if let Some(w) = it.next() {
            config.width = w;
        }
        if let Some(x) = it.next() {
            config.start.x = x;
        }
        if let Some(y) = it.next() {
            config.start.y = y;
        }
        if let Some(verbose) = it.next() {
            config.verbose = verbose != 0;
        }
        Ok(config)
    }
}

/// Parse one `dx dy` pair per line. Blank lines are skipped.
pub fn parse_moves(text: &str) -> Result<Vec<Move>> {
    let mut moves = Vec::new();
    for (n, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let v = ints(line).with_context(|| format!("reading move on line {}", n + 2))?;
        let [x, y] = v[..] else {
            bail!("line {}: expected two integers, found {}", n + 2, v.len());
        };
        moves.push(Point::new(x, y));
    }
    Ok(moves)
}

/// Parse the whole `validate` input.
pub fn parse_validate(text: &str) -> Result<(ValidateConfig, Vec<Move>)> {
    let (first, rest) = header(text);
    Ok((ValidateConfig::parse(first)?, parse_moves(rest)?))
}

/// Input of the plain search operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlainQuery {
    pub board: Board,
    pub from: Point,
    pub to: Point,
}

impl PlainQuery {
    pub fn parse(text: &str) -> Result<Self> {
        let (first, _) = header(text);
        let v = ints(first).context("reading board and endpoints")?;
        let [depth, width, sx, sy, ex, ey] = v[..] else {
            bail!(
                "expected `depth width startX startY endX endY`, found {} integers",
                v.len()
            );
        };
        Ok(Self {
            board: Board::new(depth, width)?,
            from: Point::new(sx, sy),
            to: Point::new(ex, ey),
        })
    }
}

/// Input of the weighted search operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightedQuery {
    pub grid: TerrainGrid,
    pub from: Point,
    pub to: Point,
}

impl WeightedQuery {
    pub fn parse(text: &str) -> Result<Self> {
        let (first, rest) = header(text);
        let v = ints(first).context("reading endpoints")?;
        let [sx, sy, ex, ey] = v[..] else {
            bail!(
                "expected `startX startY endX endY`, found {} integers",
                v.len()
            );
        };
        let grid = TerrainGrid::parse(rest).context("reading grid")?;
        Ok(Self {
            grid,
            from: Point::new(sx, sy),
            to: Point::new(ex, ey),
        })
    }
}
