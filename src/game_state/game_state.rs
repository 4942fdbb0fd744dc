//! Central game model: board, side to move, and the ordered move log.
//!
//! `GameState` is mutated in place by `move_generation::legal_move_apply` and
//! queried read-only by everything else. Side-to-move alternates strictly
//! after every successful application; a failed application changes nothing.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{BoardLocation, MoveRecord, Piece, Side};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub board: Board,
    pub side_to_move: Side,
    pub move_log: Vec<MoveRecord>,
}

impl GameState {
    /// A fresh game: standard layout, White to move, empty log.
    #[inline]
    pub fn new_game() -> Self {
        Self::from_board(Board::standard(), Side::White)
    }

    /// Adopt an existing board with an explicit side to move. Used by the
    /// presentation layer to refresh its view after a computer reply and by
    /// tests to build rigged positions. The log starts empty.
    #[inline]
    pub fn from_board(board: Board, side_to_move: Side) -> Self {
        Self {
            board,
            side_to_move,
            move_log: Vec::new(),
        }
    }

    /// Occupant of a location, out-of-bounds reads being empty.
    #[inline]
    pub fn piece_at(&self, location: BoardLocation) -> Option<Piece> {
        self.board.get(location)
    }
}

#[cfg(test)]
mod tests {
    use super::GameState;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{BoardLocation, PieceKind, Side};

    #[test]
    fn new_game_starts_with_white_to_move() {
        let game = GameState::new_game();
        assert_eq!(game.side_to_move, Side::White);
        assert!(game.move_log.is_empty());
        let corner = game
            .piece_at(BoardLocation::new(7, 0))
            .expect("white ruea corner should be occupied");
        assert_eq!(corner.kind, PieceKind::Ruea);
    }

    #[test]
    fn from_board_respects_explicit_side() {
        let game = GameState::from_board(Board::standard(), Side::Black);
        assert_eq!(game.side_to_move, Side::Black);
    }
}
