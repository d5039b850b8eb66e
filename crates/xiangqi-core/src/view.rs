//! Player-relative coordinates as used in WXF move notation.
//!
//! Files are numbered 1 to 9 from the moving player's right hand side and
//! rows are never named absolutely, only as distances travelled forward or
//! backward. Internal coordinates are absolute:
//!
//! ```text
//! (0, 9) . . . . . . . (8, 9)   black home rank
//!   ...
//! (0, 0) . . . . . . . (8, 0)   red home rank
//! ```
//!
//! Red calls file x=8 "1" and x=0 "9"; Black calls x=0 "1" and x=8 "9".

use crate::pieces::{Party, PutPiece};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerRelativeView {
    party: Party,
}

impl PlayerRelativeView {
    pub fn new(party: Party) -> Self {
        Self { party }
    }

    pub fn party(&self) -> Party {
        self.party
    }

    /// Absolute x index of a 1-based player-relative file.
    pub fn x_index_from(&self, relative_x: i32) -> i32 {
        debug_assert!((1..=9).contains(&relative_x), "file {relative_x} out of 1..=9");
        match self.party {
            Party::Red => 9 - relative_x,
            Party::Black => relative_x - 1,
        }
    }

    /// Absolute y difference of a forward (positive) or backward move.
    pub fn y_diff_from(&self, relative_y_diff: i32) -> i32 {
        match self.party {
            Party::Red => relative_y_diff,
            Party::Black => -relative_y_diff,
        }
    }

    /// Grows the further up the board a piece stands, seen from this party.
    pub fn advancement_key(&self, piece: &PutPiece) -> i32 {
        self.y_diff_from(piece.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pieces::PieceType;

    #[test]
    fn test_x_index_from() {
        let cases = [
            (Party::Red, 1, 8),
            (Party::Red, 9, 0),
            (Party::Black, 1, 0),
            (Party::Black, 9, 8),
        ];
        for (party, relative_x, expected) in cases {
            assert_eq!(PlayerRelativeView::new(party).x_index_from(relative_x), expected);
        }
    }

    #[test]
    fn test_x_index_from_is_mirrored_bijection() {
        let red = PlayerRelativeView::new(Party::Red);
        let black = PlayerRelativeView::new(Party::Black);
        let mut seen_red = [false; 9];
        let mut seen_black = [false; 9];
        for relative_x in 1..=9 {
            let r = red.x_index_from(relative_x);
            let b = black.x_index_from(relative_x);
            assert_eq!(r + b, 8);
            seen_red[r as usize] = true;
            seen_black[b as usize] = true;
        }
        assert!(seen_red.iter().all(|&s| s));
        assert!(seen_black.iter().all(|&s| s));
    }

    #[test]
    fn test_y_diff_from() {
        let cases = [
            (Party::Red, 2, 2),
            (Party::Red, -2, -2),
            (Party::Black, 2, -2),
            (Party::Black, -2, 2),
        ];
        for (party, diff, expected) in cases {
            assert_eq!(PlayerRelativeView::new(party).y_diff_from(diff), expected);
        }
        for party in [Party::Red, Party::Black] {
            for diff in -9..=9 {
                assert_eq!(
                    PlayerRelativeView::new(party).y_diff_from(diff),
                    -PlayerRelativeView::new(party.other()).y_diff_from(diff)
                );
            }
        }
    }

    #[test]
    fn test_advancement_key() {
        for (party, expected_y) in [(Party::Red, 4), (Party::Black, 1)] {
            let view = PlayerRelativeView::new(party);
            // extremes not at the ends so sorting has to move them
            let mut pieces: Vec<PutPiece> = [2, 4, 1, 3]
                .iter()
                .map(|&y| PutPiece::new(party, PieceType::Elephant, 2, y))
                .collect();
            pieces.sort_by_key(|p| view.advancement_key(p));
            assert_eq!(pieces.last().map(|p| p.y), Some(expected_y));
        }
    }
}
