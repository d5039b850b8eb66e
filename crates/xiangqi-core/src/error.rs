//! Notation error types

use thiserror::Error;

pub type Result<T> = std::result::Result<T, NotationError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotationError {
    #[error("Unknown piece letter {0:?}")]
    UnknownPieceLetter(char),

    #[error("Invalid annotation code {0:?}")]
    InvalidAnnotationCode(String),

    #[error("Malformed annoFEN token: {0:?}")]
    MalformedToken(String),

    #[error("Malformed annoFEN: {0:?}")]
    MalformedDocument(String),

    #[error("Garbage after annoFEN document: {0:?}")]
    GarbageAfterDocument(String),

    #[error("Unsupported XAY file format version {0}")]
    UnsupportedVersion(String),

    #[error("Invalid XAY document: {0}")]
    InvalidXay(String),

    #[error("Unsupported atom code {0:?}")]
    UnsupportedAtomCode(String),

    #[error("Invalid moves selector {0:?}, expected \"all\" or an integer")]
    InvalidMoveSelector(String),

    #[error("Requested number of moves {requested} outside of range of {min} to {max}")]
    MoveCountOutOfRange { requested: i64, min: i64, max: i64 },

    #[error("Move {notation:?}: expected {expected} candidate piece(s), found {found}")]
    Disambiguation {
        notation: String,
        expected: &'static str,
        found: usize,
    },

    #[error("Move {notation:?}: bad operator {operator:?}")]
    BadOperator { notation: String, operator: char },

    #[error("Move {notation:?}: a horse cannot move {diff_x} file(s) sideways")]
    BadHorseMove { notation: String, diff_x: i32 },

    #[error("Move {notation:?} leaves the board at ({x}, {y})")]
    MoveOffBoard { notation: String, x: i32, y: i32 },

    #[error("Position ({x}, {y}) is outside the board")]
    OffBoard { x: i32, y: i32 },
}
