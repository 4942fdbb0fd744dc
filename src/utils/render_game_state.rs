//! Terminal-oriented board renderer.
//!
//! Creates a human-readable board view for the play binary, tests, and
//! diagnostics. Letters: R ruea, N ma, S khon, M met, K khun, P bia,
//! F bia ngai; uppercase is White, lowercase Black.

use crate::game_state::chess_types::{BoardLocation, Side};
use crate::game_state::game_state::GameState;

/// Render the board to a text grid with file and rank labels. Rank 8
/// (Black's back rank, row 0) is printed first so White reads the board
/// from its own side.
pub fn render_game_state(game_state: &GameState) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for row in 0..8i8 {
        let rank_char = char::from(b'8' - row as u8);
        out.push(rank_char);
        out.push(' ');

        for col in 0..8i8 {
            match game_state.piece_at(BoardLocation::new(row, col)) {
                Some(piece) => {
                    let letter = piece.kind.letter();
                    if piece.side == Side::White {
                        out.push(letter);
                    } else {
                        out.push(letter.to_ascii_lowercase());
                    }
                }
                None => out.push('.'),
            }

            if col < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(rank_char);
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

#[cfg(test)]
mod tests {
    use super::render_game_state;
    use crate::game_state::game_state::GameState;

    #[test]
    fn start_position_renders_both_back_ranks() {
        let rendered = render_game_state(&GameState::new_game());
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[0], "  a b c d e f g h");
        assert_eq!(lines[1], "8 r n s k m s n r 8");
        assert_eq!(lines[3], "6 p p p p p p p p 6");
        assert_eq!(lines[6], "3 P P P P P P P P 3");
        assert_eq!(lines[8], "1 R N S M K S N R 1");
        assert_eq!(lines[9], "  a b c d e f g h");
    }
}
