#![allow(dead_code)]

use xiangqi_core::{Atom, PutPiece};

pub const START_FEN: &str =
    "rheakaehr/9/1c5c1/p1p1p1p1p/9/9/P1P1P1P1P/1C5C1/9/RHEAKAEHR w - - 0 1";

/// A short game as exported by XieXie: uppercase letters for both sides.
pub const TEN_MOVE_GAME: &str = "\
FORMAT\tWXF
APPVERSION\t1.0
GAME\tTen move opening
RESULT\t0-0
START{
  1. C2.5 H8+7
  2. H2+3 R9.8
  3. R1.2 C8+4
  4. P7+1 C2.1
  5. H8+7 P7+1
}END
";

pub fn pieces(atoms: &[Atom]) -> Vec<PutPiece> {
    atoms.iter().filter_map(Atom::as_piece).copied().collect()
}

pub fn sorted_pieces(atoms: &[Atom]) -> Vec<PutPiece> {
    let mut pieces = pieces(atoms);
    pieces.sort();
    pieces
}
