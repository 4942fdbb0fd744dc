//! Destination and candidate enumeration for the side to move.
//!
//! Enumeration is a plain row-major scan of the board filtered through
//! `is_legal_move`. The order is part of the contract: the opponent engines
//! rely on it being stable so seeded games replay identically.

use crate::game_state::chess_types::BoardLocation;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_checks::is_legal_move;

/// A `(from, to)` pair available to the side to move, before any scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CandidateMove {
    pub from: BoardLocation,
    pub to: BoardLocation,
}

/// All destinations the piece on `from` may move to, enumerated in row-major
/// order over the whole board. Moves that would leave the mover's own Khun
/// attacked are not filtered out; see `legal_move_checks`.
pub fn legal_destinations(game_state: &GameState, from: BoardLocation) -> Vec<BoardLocation> {
    let mut destinations = Vec::new();
    for row in 0..8 {
        for col in 0..8 {
            let to = BoardLocation::new(row, col);
            if is_legal_move(game_state, from, to) {
                destinations.push(to);
            }
        }
    }
    destinations
}

/// The full candidate set for the current ply: every piece of the side to
/// move in row-major order, each with its legal destinations. An empty
/// result means the side to move has no move and has lost.
pub fn generate_candidates(game_state: &GameState) -> Vec<CandidateMove> {
    let mut candidates = Vec::new();
    for row in 0..8 {
        for col in 0..8 {
            let from = BoardLocation::new(row, col);
            let Some(piece) = game_state.piece_at(from) else {
                continue;
            };
            if piece.side != game_state.side_to_move {
                continue;
            }
            for to in legal_destinations(game_state, from) {
                candidates.push(CandidateMove { from, to });
            }
        }
    }
    candidates
}

#[cfg(test)]
mod tests {
    use super::{generate_candidates, legal_destinations, CandidateMove};
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{BoardLocation, Piece, PieceKind, Side};
    use crate::game_state::game_state::GameState;

    #[test]
    fn lone_ruea_reaches_fourteen_squares() {
        let at = BoardLocation::new(3, 3);
        let mut board = Board::empty();
        board.set(at, Some(Piece::new(PieceKind::Ruea, Side::White)));
        let game = GameState::from_board(board, Side::White);

        let destinations = legal_destinations(&game, at);
        assert_eq!(destinations.len(), 14);
        for to in &destinations {
            assert!(to.row == 3 || to.col == 3);
        }
    }

    #[test]
    fn blocker_truncates_the_ruea_ray() {
        let at = BoardLocation::new(3, 3);
        let mut board = Board::empty();
        board.set(at, Some(Piece::new(PieceKind::Ruea, Side::White)));
        board.set(BoardLocation::new(3, 5), Some(Piece::new(PieceKind::Ma, Side::Black)));
        let game = GameState::from_board(board, Side::White);

        let destinations = legal_destinations(&game, at);
        assert!(destinations.contains(&BoardLocation::new(3, 4)));
        assert!(destinations.contains(&BoardLocation::new(3, 5)));
        assert!(!destinations.contains(&BoardLocation::new(3, 6)));
        assert!(!destinations.contains(&BoardLocation::new(3, 7)));
    }

    #[test]
    fn white_bia_has_exactly_one_quiet_destination() {
        let at = BoardLocation::new(4, 4);
        let mut board = Board::empty();
        board.set(at, Some(Piece::new(PieceKind::Bia, Side::White)));
        let game = GameState::from_board(board, Side::White);
        assert_eq!(legal_destinations(&game, at), vec![BoardLocation::new(3, 4)]);
    }

    #[test]
    fn start_position_candidates_begin_with_the_leftmost_bia() {
        let game = GameState::new_game();
        let candidates = generate_candidates(&game);

        // Eight bia pushes plus fifteen back-rank moves onto row 6: one per
        // ruea, one per ma, three per khon, two for the met, three for the
        // khun.
        assert_eq!(candidates.len(), 23);
        assert_eq!(
            candidates[0],
            CandidateMove {
                from: BoardLocation::new(5, 0),
                to: BoardLocation::new(4, 0),
            }
        );
    }

    #[test]
    fn side_with_no_pieces_has_no_candidates() {
        let mut board = Board::empty();
        board.set(BoardLocation::new(7, 4), Some(Piece::new(PieceKind::Khun, Side::White)));
        let game = GameState::from_board(board, Side::Black);
        assert!(generate_candidates(&game).is_empty());
    }
}
