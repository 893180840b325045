//! Replaying a prescribed move sequence.

use knight_core::{Move, MoveRule, Point};
use knight_terrain::Board;

use crate::error::ValidationError;

/// Check that `moves`, applied in order from `start`, are all knight moves
/// and never leave `board`. Returns the final position.
pub fn validate_moves(board: &Board, start: Point, moves: &[Move]) -> Result<Point, ValidationError> {
    validate_moves_with(board, start, moves, |_, _, _| {})
}

/// Like [`validate_moves`], calling `on_move(index, mv, new_pos)` after
/// each accepted move. Stops at the first rejected move.
pub fn validate_moves_with(
    board: &Board,
    start: Point,
    moves: &[Move],
    mut on_move: impl FnMut(usize, Move, Point),
) -> Result<Point, ValidationError> {
    if !board.contains(start) {
        return Err(ValidationError::StartOutside {
            pos: start,
            bounds: board.bounds(),
        });
    }

    let mut pos = start;
    for (index, &mv) in moves.iter().enumerate() {
        if !MoveRule::is_legal(mv) {
            log::debug!("validate: move #{index} {mv} rejected, not a knight move");
            return Err(ValidationError::IllegalMove { index, mv });
        }
        pos = pos.saturating_add(mv);
        if !board.contains(pos) {
            log::debug!("validate: move #{index} {mv} rejected, lands on {pos}");
            return Err(ValidationError::LeftBoard { index, mv, pos });
        }
        on_move(index, mv, pos);
    }
    log::debug!("validate: {} moves accepted, knight at {pos}", moves.len());
    Ok(pos)
}
