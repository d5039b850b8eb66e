//! Parties, piece types and the piece placement atom.

use std::fmt;

use serde::Serialize;

use crate::error::{NotationError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Party {
    Red,
    Black,
}

impl Party {
    pub fn other(self) -> Self {
        match self {
            Party::Red => Party::Black,
            Party::Black => Party::Red,
        }
    }

    /// Uppercase letters are Red, everything else is Black.
    pub fn of_letter(letter: char) -> Self {
        if letter.is_uppercase() {
            Party::Red
        } else {
            Party::Black
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Party::Red => "red",
            Party::Black => "black",
        }
    }
}

impl fmt::Display for Party {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Party::Red => write!(f, "Red"),
            Party::Black => write!(f, "Black"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PieceType {
    Chariot,
    Horse,
    Elephant,
    Advisor,
    King,
    Cannon,
    Pawn,
}

impl PieceType {
    pub const ALL: [PieceType; 7] = [
        PieceType::Chariot,
        PieceType::Horse,
        PieceType::Elephant,
        PieceType::Advisor,
        PieceType::King,
        PieceType::Cannon,
        PieceType::Pawn,
    ];

    /// Look up a piece letter in either case.
    ///
    /// Besides the official WXF letters (R, H, E, A, K, C, P) this accepts
    /// N and B as used by chessdb ("knight", "bishop") and G and M from the
    /// WXF move format ("guard", "minister").
    pub fn from_letter(letter: char) -> Result<Self> {
        match letter.to_ascii_uppercase() {
            'R' => Ok(PieceType::Chariot),
            'H' | 'N' => Ok(PieceType::Horse),
            'E' | 'B' | 'M' => Ok(PieceType::Elephant),
            'A' | 'G' => Ok(PieceType::Advisor),
            'K' => Ok(PieceType::King),
            'C' => Ok(PieceType::Cannon),
            'P' => Ok(PieceType::Pawn),
            _ => Err(NotationError::UnknownPieceLetter(letter)),
        }
    }

    /// Canonical uppercase letter, as written by the FEN writer.
    pub fn letter(self) -> char {
        match self {
            PieceType::Chariot => 'R',
            PieceType::Horse => 'H',
            PieceType::Elephant => 'E',
            PieceType::Advisor => 'A',
            PieceType::King => 'K',
            PieceType::Cannon => 'C',
            PieceType::Pawn => 'P',
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PieceType::Chariot => "chariot",
            PieceType::Horse => "horse",
            PieceType::Elephant => "elephant",
            PieceType::Advisor => "advisor",
            PieceType::King => "king",
            PieceType::Cannon => "cannon",
            PieceType::Pawn => "pawn",
        }
    }
}

/// A piece of one party put on an absolute board position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct PutPiece {
    pub party: Party,
    pub piece: PieceType,
    pub x: i32,
    pub y: i32,
}

impl PutPiece {
    pub fn new(party: Party, piece: PieceType, x: i32, y: i32) -> Self {
        Self { party, piece, x, y }
    }

    /// Build from a letter whose case selects the party.
    pub fn from_letter(letter: char, x: i32, y: i32) -> Result<Self> {
        let piece = PieceType::from_letter(letter)?;
        Ok(Self::new(Party::of_letter(letter), piece, x, y))
    }

    /// FEN letter: uppercase for Red, lowercase for Black.
    pub fn fen_letter(&self) -> char {
        let letter = self.piece.letter();
        match self.party {
            Party::Red => letter,
            Party::Black => letter.to_ascii_lowercase(),
        }
    }

    /// Name of the piece image within a pieces theme, e.g. "red_chariot".
    pub fn asset_stem(&self) -> String {
        format!("{}_{}", self.party.as_str(), self.piece.as_str())
    }
}
