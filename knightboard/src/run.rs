use anyhow::Result;
use knight_paths::{KnightSearch, validate_moves_with};
use knight_terrain::Board;

use crate::cli::Mode;
use crate::input::{PlainQuery, WeightedQuery, parse_validate};
use crate::output::{self, ValidateTrace};

/// What a command prints and the exit code it reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub stdout: String,
    pub code: u8,
}

impl Outcome {
    fn success(stdout: String) -> Self {
        Self { stdout, code: 0 }
    }
}

/// Run `mode` over the textual `input`.
///
/// `verbose` forces the validation trace on even when the header does not
/// ask for it. Input and construction errors, as well as search endpoints
/// off the board, are returned as errors; a missing path is not an error.
pub fn run(mode: Mode, verbose: bool, input: &str) -> Result<Outcome> {
    match mode {
        Mode::Validate => validate(verbose, input),
        Mode::Any | Mode::Shortest | Mode::Longest => {
            let q = PlainQuery::parse(input)?;
            let search = KnightSearch::new(&q.board);
            let result = match mode {
                Mode::Any => search.any_path(q.from, q.to)?,
                Mode::Shortest => search.shortest_path(q.from, q.to)?,
                _ => search.longest_path(q.from, q.to)?,
            };
            Ok(Outcome::success(output::plain(&result)))
        }
        Mode::Weighted => {
            let q = WeightedQuery::parse(input)?;
            let result = KnightSearch::new(&q.grid).cheapest_path(q.from, q.to)?;
            Ok(Outcome::success(output::weighted(&result)))
        }
    }
}

fn validate(verbose: bool, input: &str) -> Result<Outcome> {
    let (config, moves) = parse_validate(input)?;
    let board = Board::new(config.depth, config.width)?;
    let verbose = verbose || config.verbose;

    let mut trace = ValidateTrace::default();
    if verbose {
        trace.config(&config);
        if board.contains(config.start) {
            trace.board(&board, config.start);
        }
    }
    let result = validate_moves_with(&board, config.start, &moves, |_, mv, pos| {
        if verbose {
            trace.applied(&board, mv, pos);
        }
    });
    let code = match result {
        Ok(_) => 0,
        Err(err) => {
            log::info!("sequence rejected: {err}");
            if verbose {
                trace.rejected(&err);
            }
            1
        }
    };
    Ok(Outcome {
        stdout: trace.finish(),
        code,
    })
}
