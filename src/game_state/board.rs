//! The 8x8 board grid and the standard Makruk starting layout.

use crate::game_state::chess_types::{BoardLocation, Piece, PieceKind, Side};

/// An 8x8 grid of optional pieces. Exactly one instance exists per game and
/// is exclusively owned by its `GameState`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Option<Piece>; 8]; 8],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    /// A board with no pieces, used by tests and rigged positions.
    #[inline]
    pub const fn empty() -> Self {
        Self {
            cells: [[None; 8]; 8],
        }
    }

    /// The standard starting layout: Black's back rank on row 0, Black pawns
    /// on row 2, White pawns on row 5, White's back rank on row 7. The Met
    /// sits to the right of its Khun from each player's own point of view,
    /// so the two royal pairs are mirrored, not aligned.
    pub fn standard() -> Self {
        use PieceKind::*;

        let mut board = Self::empty();

        let black_back = [Ruea, Ma, Khon, Khun, Met, Khon, Ma, Ruea];
        let white_back = [Ruea, Ma, Khon, Met, Khun, Khon, Ma, Ruea];

        for (col, kind) in black_back.into_iter().enumerate() {
            board.cells[0][col] = Some(Piece::new(kind, Side::Black));
        }
        for col in 0..8 {
            board.cells[2][col] = Some(Piece::new(Bia, Side::Black));
            board.cells[5][col] = Some(Piece::new(Bia, Side::White));
        }
        for (col, kind) in white_back.into_iter().enumerate() {
            board.cells[7][col] = Some(Piece::new(kind, Side::White));
        }

        board
    }

    /// Occupant of a location. Out-of-bounds locations are always empty,
    /// never an error; this keeps the movement predicates free of separate
    /// boundary checks.
    #[inline]
    pub fn get(&self, location: BoardLocation) -> Option<Piece> {
        if !location.in_bounds() {
            return None;
        }
        self.cells[location.row as usize][location.col as usize]
    }

    /// Write a cell. Callers guarantee the location is on the board; the
    /// rules engine only ever writes to validated destinations.
    #[inline]
    pub fn set(&mut self, location: BoardLocation, piece: Option<Piece>) {
        self.cells[location.row as usize][location.col as usize] = piece;
    }
}
