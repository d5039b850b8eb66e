//! Annotation catalog and the atoms handed to the compositor.

use serde::Serialize;

use crate::board::{MAX_X, MAX_Y};
use crate::error::{NotationError, Result};
use crate::pieces::PutPiece;

pub const ANNOTATION_NAME_BLANK_MOVE: &str = "blank_move";
pub const ANNOTATION_NAME_PIECE_MOVE: &str = "piece_move";

/// Atom codes and the annotation names they stand for.
pub const ANNOTATION_CODES: &[(&str, &str)] = &[
    ("a+0+1", "arrow_plus_0_plus_1"),
    ("a+0+2", "arrow_plus_0_plus_2"),
    ("a+0+3", "arrow_plus_0_plus_3"),
    ("a+0+4", "arrow_plus_0_plus_4"),
    ("a+0+5", "arrow_plus_0_plus_5"),
    ("a+0+6", "arrow_plus_0_plus_6"),
    ("a+0+7", "arrow_plus_0_plus_7"),
    ("a+0+8", "arrow_plus_0_plus_8"),
    ("a+0+9", "arrow_plus_0_plus_9"),
    ("a+0-1", "arrow_plus_0_minus_1"),
    ("a+0-2", "arrow_plus_0_minus_2"),
    ("a+0-3", "arrow_plus_0_minus_3"),
    ("a+0-4", "arrow_plus_0_minus_4"),
    ("a+0-5", "arrow_plus_0_minus_5"),
    ("a+0-6", "arrow_plus_0_minus_6"),
    ("a+0-7", "arrow_plus_0_minus_7"),
    ("a+0-8", "arrow_plus_0_minus_8"),
    ("a+0-9", "arrow_plus_0_minus_9"),
    ("a+1+0", "arrow_plus_1_plus_0"),
    ("a+1+1", "arrow_plus_1_plus_1"),
    ("a+1+2", "arrow_plus_1_plus_2"),
    ("a+1-1", "arrow_plus_1_minus_1"),
    ("a+1-2", "arrow_plus_1_minus_2"),
    ("a+2+0", "arrow_plus_2_plus_0"),
    ("a+2+1", "arrow_plus_2_plus_1"),
    ("a+2+2", "arrow_plus_2_plus_2"),
    ("a+2-1", "arrow_plus_2_minus_1"),
    ("a+2-2", "arrow_plus_2_minus_2"),
    ("a+3+0", "arrow_plus_3_plus_0"),
    ("a+4+0", "arrow_plus_4_plus_0"),
    ("a+5+0", "arrow_plus_5_plus_0"),
    ("a+6+0", "arrow_plus_6_plus_0"),
    ("a+7+0", "arrow_plus_7_plus_0"),
    ("a+8+0", "arrow_plus_8_plus_0"),
    ("a-1+0", "arrow_minus_1_plus_0"),
    ("a-1+1", "arrow_minus_1_plus_1"),
    ("a-1+2", "arrow_minus_1_plus_2"),
    ("a-1-1", "arrow_minus_1_minus_1"),
    ("a-1-2", "arrow_minus_1_minus_2"),
    ("a-2+0", "arrow_minus_2_plus_0"),
    ("a-2+1", "arrow_minus_2_plus_1"),
    ("a-2+2", "arrow_minus_2_plus_2"),
    ("a-2-1", "arrow_minus_2_minus_1"),
    ("a-2-2", "arrow_minus_2_minus_2"),
    ("a-3+0", "arrow_minus_3_plus_0"),
    ("a-4+0", "arrow_minus_4_plus_0"),
    ("a-5+0", "arrow_minus_5_plus_0"),
    ("a-6+0", "arrow_minus_6_plus_0"),
    ("a-7+0", "arrow_minus_7_plus_0"),
    ("a-8+0", "arrow_minus_8_plus_0"),
    ("bb", "blank_bad"),
    ("bg", "blank_good"),
    ("bm", ANNOTATION_NAME_BLANK_MOVE),
    ("pb", "piece_bad"),
    ("pg", "piece_good"),
    ("pm", ANNOTATION_NAME_PIECE_MOVE),
];

/// Look up the annotation name of an atom code (case-sensitive).
pub fn annotation_name_of(atom_code: &str) -> Option<&'static str> {
    ANNOTATION_CODES
        .iter()
        .find(|(code, _)| *code == atom_code)
        .map(|(_, name)| *name)
}

/// An annotation marker put on an absolute board position.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct PutAnnotation {
    pub annotation_name: &'static str,
    pub x: i32,
    pub y: i32,
}

impl PutAnnotation {
    pub fn new(annotation_name: &'static str, x: i32, y: i32) -> Self {
        Self {
            annotation_name,
            x,
            y,
        }
    }

    pub fn from_code(atom_code: &str, x: i32, y: i32) -> Result<Self> {
        let name = annotation_name_of(atom_code)
            .ok_or_else(|| NotationError::InvalidAnnotationCode(atom_code.to_string()))?;
        Ok(Self::new(name, x, y))
    }
}

/// One unit of board content to render.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Atom {
    Piece(PutPiece),
    Annotation(PutAnnotation),
}

impl Atom {
    pub fn x(&self) -> i32 {
        match self {
            Atom::Piece(p) => p.x,
            Atom::Annotation(a) => a.x,
        }
    }

    pub fn y(&self) -> i32 {
        match self {
            Atom::Piece(p) => p.y,
            Atom::Annotation(a) => a.y,
        }
    }

    /// Image name within the pieces theme (without extension).
    pub fn asset_stem(&self) -> String {
        match self {
            Atom::Piece(p) => p.asset_stem(),
            Atom::Annotation(a) => a.annotation_name.to_string(),
        }
    }

    /// Placement relative to the playing grid, (0, 0) being the top-left
    /// intersection (Black's left corner) and (1, 1) the bottom-right one.
    pub fn relative_position(&self) -> (f64, f64) {
        let x_rel = f64::from(self.x()) / f64::from(MAX_X);
        let y_rel = f64::from(MAX_Y - self.y()) / f64::from(MAX_Y);
        (x_rel, y_rel)
    }

    pub fn as_piece(&self) -> Option<&PutPiece> {
        match self {
            Atom::Piece(p) => Some(p),
            Atom::Annotation(_) => None,
        }
    }

    pub fn as_annotation(&self) -> Option<&PutAnnotation> {
        match self {
            Atom::Annotation(a) => Some(a),
            Atom::Piece(_) => None,
        }
    }
}

impl From<PutPiece> for Atom {
    fn from(piece: PutPiece) -> Self {
        Atom::Piece(piece)
    }
}

impl From<PutAnnotation> for Atom {
    fn from(annotation: PutAnnotation) -> Self {
        Atom::Annotation(annotation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pieces::{Party, PieceType};

    #[test]
    fn test_catalog_lookup() {
        assert_eq!(annotation_name_of("pm"), Some("piece_move"));
        assert_eq!(annotation_name_of("bm"), Some("blank_move"));
        assert_eq!(annotation_name_of("a-2+1"), Some("arrow_minus_2_plus_1"));
        assert_eq!(annotation_name_of("PM"), None);
        assert_eq!(annotation_name_of("a+9+9"), None);
    }

    #[test]
    fn test_catalog_has_unique_codes() {
        assert_eq!(ANNOTATION_CODES.len(), 56);
        for (i, (code, _)) in ANNOTATION_CODES.iter().enumerate() {
            assert!(
                ANNOTATION_CODES[i + 1..].iter().all(|(other, _)| other != code),
                "duplicate code {code}"
            );
        }
    }

    #[test]
    fn test_invalid_annotation_code() {
        let err = PutAnnotation::from_code("xx", 0, 0).unwrap_err();
        assert_eq!(err, NotationError::InvalidAnnotationCode("xx".into()));
    }

    #[test]
    fn test_relative_position() {
        let top_left: Atom = PutPiece::new(Party::Black, PieceType::Chariot, 0, 9).into();
        let bottom_right: Atom = PutAnnotation::new("piece_good", 8, 0).into();
        assert_eq!(top_left.relative_position(), (0.0, 0.0));
        assert_eq!(bottom_right.relative_position(), (1.0, 1.0));
        assert_eq!(bottom_right.asset_stem(), "piece_good");
    }

    #[test]
    fn test_atom_serialization() {
        let atom: Atom = PutPiece::new(Party::Red, PieceType::Cannon, 1, 2).into();
        let json = serde_json::to_value(&atom).unwrap();
        assert_eq!(json["kind"], "piece");
        assert_eq!(json["party"], "red");
        assert_eq!(json["piece"], "cannon");
        assert_eq!(json["x"], 1);
        assert_eq!(json["y"], 2);
    }
}
