//! The canonical 32-piece opening arrangement.

use crate::pieces::{Party, PieceType, PutPiece};

const DEFAULT_SETUP: [(Party, PieceType, i32, i32); 32] = [
    (Party::Red, PieceType::Chariot, 0, 0),
    (Party::Red, PieceType::Horse, 1, 0),
    (Party::Red, PieceType::Elephant, 2, 0),
    (Party::Red, PieceType::Advisor, 3, 0),
    (Party::Red, PieceType::King, 4, 0),
    (Party::Red, PieceType::Advisor, 5, 0),
    (Party::Red, PieceType::Elephant, 6, 0),
    (Party::Red, PieceType::Horse, 7, 0),
    (Party::Red, PieceType::Chariot, 8, 0),
    (Party::Red, PieceType::Cannon, 1, 2),
    (Party::Red, PieceType::Cannon, 7, 2),
    (Party::Red, PieceType::Pawn, 0, 3),
    (Party::Red, PieceType::Pawn, 2, 3),
    (Party::Red, PieceType::Pawn, 4, 3),
    (Party::Red, PieceType::Pawn, 6, 3),
    (Party::Red, PieceType::Pawn, 8, 3),
    (Party::Black, PieceType::Chariot, 0, 9),
    (Party::Black, PieceType::Horse, 1, 9),
    (Party::Black, PieceType::Elephant, 2, 9),
    (Party::Black, PieceType::Advisor, 3, 9),
    (Party::Black, PieceType::King, 4, 9),
    (Party::Black, PieceType::Advisor, 5, 9),
    (Party::Black, PieceType::Elephant, 6, 9),
    (Party::Black, PieceType::Horse, 7, 9),
    (Party::Black, PieceType::Chariot, 8, 9),
    (Party::Black, PieceType::Cannon, 1, 7),
    (Party::Black, PieceType::Cannon, 7, 7),
    (Party::Black, PieceType::Pawn, 0, 6),
    (Party::Black, PieceType::Pawn, 2, 6),
    (Party::Black, PieceType::Pawn, 4, 6),
    (Party::Black, PieceType::Pawn, 6, 6),
    (Party::Black, PieceType::Pawn, 8, 6),
];

pub fn default_setup() -> impl Iterator<Item = PutPiece> {
    DEFAULT_SETUP
        .iter()
        .map(|&(party, piece, x, y)| PutPiece::new(party, piece, x, y))
}
