//! Move legality predicates and check detection.
//!
//! `is_legal_move` evaluates the full contract for the side to move;
//! `is_in_check` reuses the same movement shapes from the attacker's point of
//! view. Neither consults the other: a move that leaves the mover's own Khun
//! attacked is still legal here, which matches the game this engine models.

use crate::game_state::chess_types::{BoardLocation, Piece, PieceKind, Side};
use crate::game_state::game_state::GameState;

/// Full legality check for the side currently to move, evaluated in order:
/// a piece of that side must stand on `from`, the destination must not hold
/// a same-side piece, and the piece's movement shape must admit the delta.
pub fn is_legal_move(game_state: &GameState, from: BoardLocation, to: BoardLocation) -> bool {
    let Some(piece) = game_state.piece_at(from) else {
        return false;
    };
    if piece.side != game_state.side_to_move {
        return false;
    }
    movement_allows(game_state, piece, from, to)
}

/// Locate `side`'s Khun in row-major scan order. A missing Khun is not an
/// error; callers treat it as "not in check".
pub fn king_location(game_state: &GameState, side: Side) -> Option<BoardLocation> {
    for row in 0..8 {
        for col in 0..8 {
            let location = BoardLocation::new(row, col);
            if let Some(piece) = game_state.piece_at(location) {
                if piece.kind == PieceKind::Khun && piece.side == side {
                    return Some(location);
                }
            }
        }
    }
    None
}

/// Whether `side`'s Khun is attacked by any enemy piece. The movement shapes
/// (including the Ruea's blocking rule) are evaluated directly for the
/// attacker, so the answer does not depend on whose turn it is.
pub fn is_in_check(game_state: &GameState, side: Side) -> bool {
    let Some(king) = king_location(game_state, side) else {
        return false;
    };

    let attacker = side.opposite();
    for row in 0..8 {
        for col in 0..8 {
            let location = BoardLocation::new(row, col);
            if let Some(piece) = game_state.piece_at(location) {
                if piece.side == attacker && movement_allows(game_state, piece, location, king) {
                    return true;
                }
            }
        }
    }
    false
}

/// Destination occupancy and movement shape for `piece` standing on `from`,
/// independent of the side-to-move flag. Shared by legality checking and
/// check detection.
fn movement_allows(
    game_state: &GameState,
    piece: Piece,
    from: BoardLocation,
    to: BoardLocation,
) -> bool {
    if !from.in_bounds() || !to.in_bounds() {
        return false;
    }

    let target = game_state.piece_at(to);
    if let Some(target) = target {
        if target.side == piece.side {
            return false;
        }
    }

    let d_row = to.row - from.row;
    let d_col = to.col - from.col;
    if d_row == 0 && d_col == 0 {
        return false;
    }

    let forward = piece.side.forward();

    match piece.kind {
        PieceKind::Khun => d_row.abs() <= 1 && d_col.abs() <= 1,

        PieceKind::Met | PieceKind::BiaNgai => d_row.abs() == 1 && d_col.abs() == 1,

        // One step forward straight or diagonal, or one step backward
        // diagonal. Backward straight is the one single-step the Khon lacks.
        PieceKind::Khon => {
            (d_row == forward && d_col.abs() <= 1) || (d_row == -forward && d_col.abs() == 1)
        }

        PieceKind::Ma => {
            (d_row.abs() == 2 && d_col.abs() == 1) || (d_row.abs() == 1 && d_col.abs() == 2)
        }

        PieceKind::Ruea => {
            if d_row != 0 && d_col != 0 {
                return false;
            }
            ruea_path_is_clear(game_state, from, to, d_row.signum(), d_col.signum())
        }

        PieceKind::Bia => {
            if d_row != forward {
                return false;
            }
            match d_col.abs() {
                0 => target.is_none(),
                1 => target.is_some(),
                _ => false,
            }
        }
    }
}

/// Every square strictly between `from` and `to` along a rank or file must
/// be empty. The destination itself is not inspected here; same-side
/// occupancy was already rejected above.
fn ruea_path_is_clear(
    game_state: &GameState,
    from: BoardLocation,
    to: BoardLocation,
    step_row: i8,
    step_col: i8,
) -> bool {
    let mut current = from.offset(step_row, step_col);
    while current != to {
        if game_state.piece_at(current).is_some() {
            return false;
        }
        current = current.offset(step_row, step_col);
    }
    true
}
