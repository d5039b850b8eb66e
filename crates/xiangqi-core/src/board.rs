//! Mutable 9×10 board used to replay WXF move lists.

use crate::annotations::{Atom, PutAnnotation, ANNOTATION_NAME_BLANK_MOVE, ANNOTATION_NAME_PIECE_MOVE};
use crate::error::{NotationError, Result};
use crate::moves::{FormerColumn, Operator, WxfMove};
use crate::pieces::{Party, PieceType, PutPiece};
use crate::view::PlayerRelativeView;

pub const WIDTH: usize = 9;
pub const HEIGHT: usize = 10;
pub const MAX_X: i32 = WIDTH as i32 - 1;
pub const MAX_Y: i32 = HEIGHT as i32 - 1;

/// Absolute board coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn is_on_board(&self) -> bool {
        (0..=MAX_X).contains(&self.x) && (0..=MAX_Y).contains(&self.y)
    }
}

/// What a single applied move touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub from: Position,
    pub to: Position,
    pub captured: Option<PutPiece>,
}

impl MoveOutcome {
    /// Squares to highlight when this move gets annotated.
    pub fn touched(&self) -> Vec<Position> {
        if self.from == self.to {
            vec![self.from]
        } else {
            vec![self.from, self.to]
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Board {
    fields: [[Option<PutPiece>; WIDTH]; HEIGHT],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Put a piece, replacing whatever stood there.
    pub fn put(&mut self, piece: PutPiece) -> Result<()> {
        let position = Position::new(piece.x, piece.y);
        if !position.is_on_board() {
            return Err(NotationError::OffBoard {
                x: piece.x,
                y: piece.y,
            });
        }
        self.fields[piece.y as usize][piece.x as usize] = Some(piece);
        Ok(())
    }

    pub fn get(&self, position: Position) -> Option<&PutPiece> {
        if !position.is_on_board() {
            return None;
        }
        self.fields[position.y as usize][position.x as usize].as_ref()
    }

    /// Occupied fields, rank by rank from Red's home rank, left to right.
    pub fn pieces(&self) -> impl Iterator<Item = &PutPiece> {
        self.fields.iter().flatten().flatten()
    }

    /// Find the piece a move starts from.
    pub fn locate(&self, party: Party, mv: &WxfMove) -> Result<PutPiece> {
        let view = PlayerRelativeView::new(party);
        let candidates: Vec<PutPiece> = self
            .pieces()
            .filter(|p| p.party == party && p.piece == mv.piece)
            .copied()
            .collect();

        let disambiguation = |expected: &'static str, found: usize| NotationError::Disambiguation {
            notation: mv.notation.clone(),
            expected,
            found,
        };

        if let FormerColumn::File(file) = mv.former_column {
            let x = view.x_index_from(file);
            let on_file: Vec<PutPiece> = candidates.into_iter().filter(|p| p.x == x).collect();
            return match on_file.as_slice() {
                [piece] => Ok(*piece),
                _ => Err(disambiguation("exactly 1", on_file.len())),
            };
        }

        // Tandem pieces: only those sharing their file with another candidate.
        let mut tandem: Vec<PutPiece> = candidates
            .iter()
            .filter(|p| candidates.iter().filter(|o| o.x == p.x).count() >= 2)
            .copied()
            .collect();
        tandem.sort_by_key(|p| view.advancement_key(p));

        match (mv.former_column, tandem.len()) {
            (FormerColumn::Front, 2..=3) => Ok(tandem[tandem.len() - 1]),
            (FormerColumn::Rear, 2..=3) => Ok(tandem[0]),
            (FormerColumn::Middle, 3) => Ok(tandem[1]),
            (FormerColumn::Middle, found) => Err(disambiguation("exactly 3", found)),
            (_, found) => Err(disambiguation("2 or 3", found)),
        }
    }

    /// Where `piece` ends up when making `mv`.
    pub fn destination_of(piece: &PutPiece, mv: &WxfMove) -> Result<Position> {
        let view = PlayerRelativeView::new(piece.party);
        let bad_operator = || NotationError::BadOperator {
            notation: mv.notation.clone(),
            operator: mv.operator.symbol(),
        };
        let vertical = |diff_y: i32| match mv.operator {
            Operator::Advance => Ok(piece.y + view.y_diff_from(diff_y)),
            Operator::Retreat => Ok(piece.y - view.y_diff_from(diff_y)),
            Operator::Traverse => Err(bad_operator()),
        };

        let destination = match piece.piece {
            PieceType::Chariot | PieceType::King | PieceType::Cannon | PieceType::Pawn => {
                match mv.operator {
                    Operator::Traverse => Position::new(view.x_index_from(mv.argument), piece.y),
                    _ => Position::new(piece.x, vertical(mv.argument)?),
                }
            }
            PieceType::Advisor | PieceType::Elephant => {
                let diff_y = if piece.piece == PieceType::Advisor { 1 } else { 2 };
                Position::new(view.x_index_from(mv.argument), vertical(diff_y)?)
            }
            PieceType::Horse => {
                let new_x = view.x_index_from(mv.argument);
                let diff_x = (piece.x - new_x).abs();
                let diff_y = match diff_x {
                    2 => 1,
                    1 => 2,
                    _ => {
                        return Err(NotationError::BadHorseMove {
                            notation: mv.notation.clone(),
                            diff_x,
                        })
                    }
                };
                Position::new(new_x, vertical(diff_y)?)
            }
        };

        if !destination.is_on_board() {
            return Err(NotationError::MoveOffBoard {
                notation: mv.notation.clone(),
                x: destination.x,
                y: destination.y,
            });
        }
        Ok(destination)
    }

    /// Make a move for `party`, capturing whatever stands on the destination.
    pub fn apply(&mut self, party: Party, mv: &WxfMove) -> Result<MoveOutcome> {
        let piece = self.locate(party, mv)?;
        let to = Self::destination_of(&piece, mv)?;
        let from = Position::new(piece.x, piece.y);

        self.fields[from.y as usize][from.x as usize] = None;
        let captured = self.fields[to.y as usize][to.x as usize].replace(PutPiece {
            x: to.x,
            y: to.y,
            ..piece
        });

        Ok(MoveOutcome { from, to, captured })
    }

    /// All pieces followed by one move marker per touched square.
    pub fn into_atoms(self, touched: &[Position]) -> Vec<Atom> {
        let mut atoms: Vec<Atom> = self.pieces().map(|&p| Atom::Piece(p)).collect();
        atoms.extend(touched.iter().map(|&position| {
            let name = if self.get(position).is_some() {
                ANNOTATION_NAME_PIECE_MOVE
            } else {
                ANNOTATION_NAME_BLANK_MOVE
            };
            Atom::Annotation(PutAnnotation::new(name, position.x, position.y))
        }));
        atoms
    }
}
