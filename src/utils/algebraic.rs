//! Coordinate notation conversions.
//!
//! Converts between human-readable coordinates (e.g., `e2`) and internal
//! board locations, reused by the play binary and the match harness. Rank 1
//! is White's back rank (row 7), rank 8 is Black's (row 0).

use crate::game_state::chess_types::BoardLocation;

/// Convert coordinate notation (for example: "e2") to a board location.
pub fn coordinate_to_location(coordinate: &str) -> Result<BoardLocation, String> {
    let bytes = coordinate.as_bytes();
    if bytes.len() != 2 {
        return Err(format!("Invalid coordinate: {coordinate}"));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) {
        return Err(format!("Invalid file: {}", file as char));
    }
    if !(b'1'..=b'8').contains(&rank) {
        return Err(format!("Invalid rank: {}", rank as char));
    }

    let col = (file - b'a') as i8;
    let row = 7 - (rank - b'1') as i8;
    Ok(BoardLocation::new(row, col))
}

/// Convert a board location to coordinate notation (for example: "e2").
pub fn location_to_coordinate(location: BoardLocation) -> Result<String, String> {
    if !location.in_bounds() {
        return Err(format!(
            "Location out of bounds: ({}, {})",
            location.row, location.col
        ));
    }

    let file_char = char::from(b'a' + location.col as u8);
    let rank_char = char::from(b'1' + (7 - location.row) as u8);
    Ok(format!("{file_char}{rank_char}"))
}

/// Parse a long-coordinate move such as "e2e3" into its two locations.
pub fn parse_move_coordinates(input: &str) -> Result<(BoardLocation, BoardLocation), String> {
    let trimmed = input.trim();
    if trimmed.len() != 4 {
        return Err(format!("Invalid move (expected e.g. e2e3): {input}"));
    }
    let from = coordinate_to_location(&trimmed[..2])?;
    let to = coordinate_to_location(&trimmed[2..])?;
    Ok((from, to))
}
