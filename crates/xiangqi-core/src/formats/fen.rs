//! FEN placement field reader and writer.

use crate::board::{HEIGHT, MAX_Y, WIDTH};
use crate::error::Result;
use crate::pieces::PutPiece;

/// Parse the piece placement of a FEN string.
///
/// Only the first whitespace-delimited field is read, side to move and
/// move counters (e.g. "9/9/9/9/9/9/9/9/9/9 w - - 0 1") are ignored.
/// Ranks run from Black's home rank (y = 9) down to Red's (y = 0).
pub fn parse_fen(content: &str) -> Result<Vec<PutPiece>> {
    let Some(field_state) = content.split_whitespace().next() else {
        return Ok(Vec::new());
    };

    let mut pieces = Vec::new();
    for (i, rank) in field_state.split('/').enumerate() {
        let y = MAX_Y - i as i32;
        let mut x = 0;
        for c in rank.chars() {
            if let Some(empty_fields) = c.to_digit(10) {
                x += empty_fields as i32;
                continue;
            }
            pieces.push(PutPiece::from_letter(c, x, y)?);
            x += 1;
        }
    }

    Ok(pieces)
}

/// Write the FEN placement field for the given pieces.
/// Pieces outside the board are skipped; later pieces win on shared fields.
pub fn placement_to_fen(pieces: &[PutPiece]) -> String {
    let mut grid = [[None::<char>; WIDTH]; HEIGHT];
    for piece in pieces {
        if let (Ok(x), Ok(y)) = (usize::try_from(piece.x), usize::try_from(piece.y)) {
            if x < WIDTH && y < HEIGHT {
                grid[y][x] = Some(piece.fen_letter());
            }
        }
    }

    let ranks: Vec<String> = grid
        .iter()
        .rev()
        .map(|row| {
            let mut rank = String::new();
            let mut empty_fields = 0;
            for field in row {
                match field {
                    Some(letter) => {
                        if empty_fields > 0 {
                            rank.push_str(&empty_fields.to_string());
                            empty_fields = 0;
                        }
                        rank.push(*letter);
                    }
                    None => empty_fields += 1,
                }
            }
            if empty_fields > 0 {
                rank.push_str(&empty_fields.to_string());
            }
            rank
        })
        .collect();

    ranks.join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::default_setup::default_setup;
    use crate::error::NotationError;
    use crate::pieces::{Party, PieceType};

    const START_FEN: &str = "rheakaehr/9/1c5c1/p1p1p1p1p/9/9/P1P1P1P1P/1C5C1/9/RHEAKAEHR w - - 0 1";

    #[test]
    fn test_parse_start_position() {
        let pieces = parse_fen(START_FEN).unwrap();
        assert_eq!(pieces.len(), 32);
        assert_eq!(pieces[0], PutPiece::new(Party::Black, PieceType::Chariot, 0, 9));
        assert_eq!(pieces[9], PutPiece::new(Party::Black, PieceType::Cannon, 1, 7));
        assert_eq!(pieces[31], PutPiece::new(Party::Red, PieceType::Chariot, 8, 0));

        let mut expected: Vec<PutPiece> = default_setup().collect();
        let mut actual = pieces;
        expected.sort();
        actual.sort();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_synonym_letters() {
        let pieces = parse_fen("4k4/9/9/9/9/9/9/9/9/2BGKGBN1").unwrap();
        let types: Vec<PieceType> = pieces.iter().map(|p| p.piece).collect();
        assert_eq!(
            types,
            [
                PieceType::King,
                PieceType::Elephant,
                PieceType::Advisor,
                PieceType::King,
                PieceType::Advisor,
                PieceType::Elephant,
                PieceType::Horse,
            ]
        );
        assert_eq!(pieces[1].x, 2);
        assert_eq!(pieces[6].x, 7);
    }

    #[test]
    fn test_unknown_letter() {
        assert_eq!(
            parse_fen("4k4/9/9/9/9/9/9/9/9/3QK4"),
            Err(NotationError::UnknownPieceLetter('Q'))
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(parse_fen("  \n"), Ok(Vec::new()));
    }

    #[test]
    fn test_placement_round_trip() {
        let pieces: Vec<PutPiece> = default_setup().collect();
        let fen = placement_to_fen(&pieces);
        assert_eq!(fen, START_FEN.split_whitespace().next().unwrap());

        let mut parsed = parse_fen(&fen).unwrap();
        let mut expected = pieces;
        parsed.sort();
        expected.sort();
        assert_eq!(parsed, expected);
    }

    #[test]
    fn test_empty_board_fen() {
        assert_eq!(placement_to_fen(&[]), "9/9/9/9/9/9/9/9/9/9");
    }
}
