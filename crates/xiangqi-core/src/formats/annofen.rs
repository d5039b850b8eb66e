//! annoFEN: FEN placement extended with annotations and stacked atoms.
//!
//! A document is a single line `v1 <placement>`, optionally preceded by
//! comment lines (`#`) and blank lines. Besides FEN letters and digits the
//! placement may hold `<code>` annotations and `[...]` groups of several
//! atoms sharing one field, e.g. `v1 4k4/9/9/9/9/9/9/9/4[Rpm]4/4K4`.
//! Inside a group annotation codes may drop their angle brackets; a bare
//! code wins over reading its characters as piece letters.

use std::sync::LazyLock;

use regex::Regex;

use crate::annotations::{Atom, PutAnnotation, ANNOTATION_CODES};
use crate::board::MAX_Y;
use crate::error::{NotationError, Result};
use crate::pieces::PutPiece;

const DOCUMENT_PREFIX: &str = "v1 ";
const PIECE_PATTERN: &str = "[RHEAKCPNBGMrheakcpnbgm]";

fn annotation_alternatives() -> String {
    ANNOTATION_CODES
        .iter()
        .map(|(code, _)| regex::escape(code))
        .collect::<Vec<_>>()
        .join("|")
}

static TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    let codes = annotation_alternatives();
    let atom = format!("(?:<(?:{codes})>|(?:{codes})|{PIECE_PATTERN})");
    let pattern = [
        "(?P<end_of_row>/)".to_string(),
        "(?P<empty_fields>[0-9])".to_string(),
        format!("(?P<single_piece>{PIECE_PATTERN})"),
        format!("(?P<single_annotation><(?P<atom_code>{codes})>)"),
        format!(r"(?P<stacked_atoms>\[(?P<atoms>{atom}+)\])"),
        "(?P<malformed>.)".to_string(),
    ]
    .join("|");
    Regex::new(&pattern).expect("annoFEN token pattern")
});

static STACKED_ATOM: LazyLock<Regex> = LazyLock::new(|| {
    let codes = annotation_alternatives();
    let pattern = format!(
        "<(?P<atom_code>{codes})>|(?P<bare_code>{codes})|(?P<single_piece>{PIECE_PATTERN})|(?P<malformed>.)"
    );
    Regex::new(&pattern).expect("annoFEN stacked atom pattern")
});

pub fn is_annofen_content(content: &str) -> bool {
    content.lines().any(|line| line.starts_with(DOCUMENT_PREFIX))
}

pub fn parse_annofen(content: &str) -> Result<Vec<Atom>> {
    let mut atoms = Vec::new();
    let mut seen_document = false;

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if seen_document {
            return Err(NotationError::GarbageAfterDocument(line.to_string()));
        }
        if !line.starts_with(DOCUMENT_PREFIX) {
            return Err(NotationError::MalformedDocument(line.to_string()));
        }

        let placement = line.split_whitespace().nth(1).unwrap_or_default();
        parse_placement(placement, &mut atoms)?;
        seen_document = true;
    }

    Ok(atoms)
}

fn parse_placement(placement: &str, atoms: &mut Vec<Atom>) -> Result<()> {
    let mut x = 0;
    let mut y = MAX_Y;

    for caps in TOKEN.captures_iter(placement) {
        if caps.name("end_of_row").is_some() {
            x = 0;
            y -= 1;
            continue;
        }
        if let Some(digit) = caps.name("empty_fields") {
            x += digit.as_str().parse::<i32>().unwrap_or_default();
            continue;
        }

        if let Some(letter) = caps.name("single_piece") {
            atoms.push(piece_atom(letter.as_str(), x, y)?);
        } else if let Some(code) = caps.name("atom_code") {
            atoms.push(PutAnnotation::from_code(code.as_str(), x, y)?.into());
        } else if let Some(stacked) = caps.name("atoms") {
            for inner in STACKED_ATOM.captures_iter(stacked.as_str()) {
                if let Some(letter) = inner.name("single_piece") {
                    atoms.push(piece_atom(letter.as_str(), x, y)?);
                } else if let Some(code) = inner.name("atom_code").or(inner.name("bare_code")) {
                    atoms.push(PutAnnotation::from_code(code.as_str(), x, y)?.into());
                } else {
                    return Err(NotationError::MalformedToken(inner[0].to_string()));
                }
            }
        } else {
            return Err(NotationError::MalformedToken(caps[0].to_string()));
        }

        // A stacked group occupies a single field just like a single atom.
        x += 1;
    }

    Ok(())
}

fn piece_atom(letter: &str, x: i32, y: i32) -> Result<Atom> {
    let letter = letter.chars().next().unwrap_or_default();
    Ok(PutPiece::from_letter(letter, x, y)?.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pieces::{Party, PieceType};

    #[test]
    fn test_sniffing() {
        assert!(is_annofen_content("# comment\nv1 9/9/9/9/9/9/9/9/9/9\n"));
        assert!(!is_annofen_content("  v1 9/9/9/9/9/9/9/9/9/9"));
        assert!(!is_annofen_content("9/9/9/9/9/9/9/9/9/9 w - - 0 1"));
    }

    #[test]
    fn test_stacked_atoms_share_one_field() {
        let atoms = parse_annofen("v1 9/9/9/9/9/9/9/9/1[Rpm]K6/9").unwrap();
        assert_eq!(
            atoms,
            vec![
                Atom::Piece(PutPiece::new(Party::Red, PieceType::Chariot, 1, 1)),
                Atom::Annotation(PutAnnotation::new("piece_move", 1, 1)),
                Atom::Piece(PutPiece::new(Party::Red, PieceType::King, 2, 1)),
            ]
        );
    }

    #[test]
    fn test_bracketed_codes_in_stacks() {
        let bare = parse_annofen("v1 9/9/9/9/9/9/9/9/1[Rpm]K6/9").unwrap();
        let bracketed = parse_annofen("v1 9/9/9/9/9/9/9/9/1[R<pm>]K6/9").unwrap();
        assert_eq!(bare, bracketed);

        let atoms = parse_annofen("v1 [ca+1+0]8/9/9/9/9/9/9/9/9/9").unwrap();
        assert_eq!(
            atoms,
            vec![
                Atom::Piece(PutPiece::new(Party::Black, PieceType::Cannon, 0, 9)),
                Atom::Annotation(PutAnnotation::new("arrow_plus_1_plus_0", 0, 9)),
            ]
        );
    }

    #[test]
    fn test_single_annotations_and_arrows() {
        let atoms = parse_annofen("# puzzle 7\n\nv1 4k4/9/9/9/9/9/9/9/9/3<a+1+2><bm>1K3\n").unwrap();
        assert_eq!(
            atoms,
            vec![
                Atom::Piece(PutPiece::new(Party::Black, PieceType::King, 4, 9)),
                Atom::Annotation(PutAnnotation::new("arrow_plus_1_plus_2", 3, 0)),
                Atom::Annotation(PutAnnotation::new("blank_move", 4, 0)),
                Atom::Piece(PutPiece::new(Party::Red, PieceType::King, 6, 0)),
            ]
        );
    }

    #[test]
    fn test_stacked_annotations_only() {
        let atoms = parse_annofen("v1 [<pg><a-1+0>]8/9/9/9/9/9/9/9/9/9").unwrap();
        assert_eq!(
            atoms,
            vec![
                Atom::Annotation(PutAnnotation::new("piece_good", 0, 9)),
                Atom::Annotation(PutAnnotation::new("arrow_minus_1_plus_0", 0, 9)),
            ]
        );
    }

    #[test]
    fn test_malformed_token_is_named() {
        assert_eq!(
            parse_annofen("v1 4k4/9/9/9/9/9/9/9/9/4K3x"),
            Err(NotationError::MalformedToken("x".into()))
        );
        assert_eq!(
            parse_annofen("v1 <zz>8/9/9/9/9/9/9/9/9/9"),
            Err(NotationError::MalformedToken("<".into()))
        );
        assert_eq!(
            parse_annofen("v1 [Rx]8/9/9/9/9/9/9/9/9/9"),
            Err(NotationError::MalformedToken("[".into()))
        );
    }

    #[test]
    fn test_garbage_after_document() {
        let content = "v1 9/9/9/9/9/9/9/9/9/9\n# fine\nv1 9/9/9/9/9/9/9/9/9/9\n";
        assert_eq!(
            parse_annofen(content),
            Err(NotationError::GarbageAfterDocument("v1 9/9/9/9/9/9/9/9/9/9".into()))
        );
    }

    #[test]
    fn test_malformed_document() {
        assert_eq!(
            parse_annofen("hello\nv1 9/9/9/9/9/9/9/9/9/9"),
            Err(NotationError::MalformedDocument("hello".into()))
        );
    }
}
