//! Core value types shared by the rules engine and the computer opponents.
//!
//! Sides, Makruk piece kinds, board coordinates, and the move record appended
//! to the game log after every successful application.

/// Side to move. White is the human player and moves toward row 0; Black is
/// the computer and moves toward row 7.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    White,
    Black,
}

impl Side {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Side::White => 0,
            Side::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }

    /// Row delta of a single forward step for this side.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Side::White => -1,
            Side::Black => 1,
        }
    }
}

/// Makruk piece kinds. `BiaNgai` is the promoted pawn; it only enters play
/// through promotion and never appears in the starting layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceKind {
    /// King.
    Khun,
    /// Advisor, one diagonal step.
    Met,
    /// Bishop-equivalent, forward or diagonal single steps.
    Khon,
    /// Knight-equivalent.
    Ma,
    /// Rook-equivalent, the only sliding piece.
    Ruea,
    /// Pawn.
    Bia,
    /// Promoted pawn, moves as the Met.
    BiaNgai,
}

impl PieceKind {
    /// Relative material value used only by the opponent heuristic, never by
    /// the legality rules.
    #[inline]
    pub const fn value(self) -> i32 {
        match self {
            PieceKind::Khun => 10_000,
            PieceKind::Ruea => 800,
            PieceKind::Ma => 400,
            PieceKind::Khon => 200,
            PieceKind::Met => 100,
            PieceKind::BiaNgai => 100,
            PieceKind::Bia => 50,
        }
    }

    /// Letter used by the text renderer and the play binary. Uppercase is
    /// White; callers lowercase it for Black.
    #[inline]
    pub const fn letter(self) -> char {
        match self {
            PieceKind::Khun => 'K',
            PieceKind::Met => 'M',
            PieceKind::Khon => 'S',
            PieceKind::Ma => 'N',
            PieceKind::Ruea => 'R',
            PieceKind::Bia => 'P',
            PieceKind::BiaNgai => 'F',
        }
    }
}

/// A piece occupying one board cell. Promotion replaces the whole value in
/// the destination cell rather than mutating a shared piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub kind: PieceKind,
    pub side: Side,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, side: Side) -> Self {
        Self { kind, side }
    }
}

/// A board coordinate. Row 0 is Black's back rank, row 7 is White's back
/// rank. Components are signed so movement deltas compose without casts;
/// out-of-range locations are valid values that simply address no square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLocation {
    pub row: i8,
    pub col: i8,
}

impl BoardLocation {
    #[inline]
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    #[inline]
    pub const fn in_bounds(self) -> bool {
        self.row >= 0 && self.row <= 7 && self.col >= 0 && self.col <= 7
    }

    #[inline]
    pub const fn offset(self, d_row: i8, d_col: i8) -> Self {
        Self {
            row: self.row + d_row,
            col: self.col + d_col,
        }
    }
}

/// Record of one successfully applied move, appended to the game log in play
/// order. Immutable once created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    pub from: BoardLocation,
    pub to: BoardLocation,
    pub captured: Option<Piece>,
    pub promoted: bool,
}
