//! Xiangqi notation core.
//!
//! Turns the supported text notations (FEN, annoFEN, XAY, WXF) into an
//! ordered list of atoms: piece and annotation placements on the 9×10
//! board, ready to be composed into a diagram.
//! The main entry point is `formats::parse_content()`.

pub mod annotations;
pub mod board;
pub mod default_setup;
pub mod error;
pub mod formats;
pub mod moves;
pub mod pieces;
pub mod view;

pub use annotations::{Atom, PutAnnotation};
pub use error::{NotationError, Result};
pub use formats::{parse_content, NotationFormat, ParseOptions};
pub use moves::MoveSelection;
pub use pieces::{Party, PieceType, PutPiece};
