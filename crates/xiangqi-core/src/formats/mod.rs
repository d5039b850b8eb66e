//! Notation dialects and the dispatcher picking one for a document.

pub mod annofen;
pub mod fen;
pub mod wxf;
pub mod xay;

use std::fmt;

use tracing::debug;

use crate::annotations::Atom;
use crate::error::Result;
use crate::moves::MoveSelection;

/// Knobs that only matter for dialects carrying a move list (WXF).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParseOptions {
    pub moves: MoveSelection,
    pub annotate_last_move: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotationFormat {
    AnnoFen,
    Xay,
    Wxf,
    Fen,
}

impl NotationFormat {
    /// Sniff the dialect: annoFEN, then XAY, then WXF, falling back to FEN.
    pub fn detect(content: &str) -> Self {
        if annofen::is_annofen_content(content) {
            NotationFormat::AnnoFen
        } else if xay::is_xay_content(content) {
            NotationFormat::Xay
        } else if wxf::is_wxf_content(content) {
            NotationFormat::Wxf
        } else {
            NotationFormat::Fen
        }
    }

    pub fn parse(self, content: &str, options: &ParseOptions) -> Result<Vec<Atom>> {
        match self {
            NotationFormat::AnnoFen => annofen::parse_annofen(content),
            NotationFormat::Xay => xay::parse_xay(content),
            NotationFormat::Wxf => wxf::parse_wxf(content, options),
            NotationFormat::Fen => Ok(fen::parse_fen(content)?
                .into_iter()
                .map(Atom::Piece)
                .collect()),
        }
    }
}

impl fmt::Display for NotationFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NotationFormat::AnnoFen => "annoFEN",
            NotationFormat::Xay => "XAY",
            NotationFormat::Wxf => "WXF",
            NotationFormat::Fen => "FEN",
        };
        f.write_str(name)
    }
}

/// Turn a whole document into the atoms to draw.
pub fn parse_content(content: &str, options: &ParseOptions) -> Result<Vec<Atom>> {
    let format = NotationFormat::detect(content);
    debug!(%format, "Detected notation");
    format.parse(content, options)
}
