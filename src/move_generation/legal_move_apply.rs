//! Move application: the only mutation path into a `GameState`.
//!
//! Re-validates legality, performs the capture and promotion bookkeeping,
//! appends to the move log, and flips the side to move. An illegal request
//! returns `None` and leaves the state untouched; there is no other failure
//! mode.

use crate::game_state::chess_types::{BoardLocation, MoveRecord, Piece, PieceKind, Side};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_checks::is_legal_move;

/// Promotion rank for a Bia of the given side (row 2 for White, row 5 for
/// Black, each side's sixth rank).
#[inline]
const fn promotion_row(side: Side) -> i8 {
    match side {
        Side::White => 2,
        Side::Black => 5,
    }
}

/// Apply `from -> to` for the side to move. Returns the appended record, or
/// `None` if the move is illegal.
pub fn apply_move(
    game_state: &mut GameState,
    from: BoardLocation,
    to: BoardLocation,
) -> Option<MoveRecord> {
    if !is_legal_move(game_state, from, to) {
        return None;
    }

    // Legality guarantees a mover on `from`.
    let piece = game_state.piece_at(from)?;
    let captured = game_state.piece_at(to);

    let promoted = piece.kind == PieceKind::Bia && to.row == promotion_row(piece.side);
    let landing = if promoted {
        Piece::new(PieceKind::BiaNgai, piece.side)
    } else {
        piece
    };

    game_state.board.set(to, Some(landing));
    game_state.board.set(from, None);

    let record = MoveRecord {
        from,
        to,
        captured,
        promoted,
    };
    game_state.move_log.push(record);
    game_state.side_to_move = game_state.side_to_move.opposite();

    Some(record)
}
