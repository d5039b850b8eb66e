//! WXF game records: initial setup plus a move list replayed on a board.
//!
//! Recognised clauses:
//! - `FEN <placement>[ r|b]` at the start of a line
//! - `SETUP{...}` holding items like `Ra0`, `ke9`, `RED`, `BLACK`
//! - `START{...}END` holding moves like `C2.5 h8+7`
//!
//! Without FEN or SETUP the standard opening arrangement is assumed.

use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, info, warn};

use crate::annotations::Atom;
use crate::board::Board;
use crate::default_setup::default_setup;
use crate::error::Result;
use crate::formats::fen::parse_fen;
use crate::formats::ParseOptions;
use crate::moves::{WxfMove, MOVE_TOKEN};
use crate::pieces::{Party, PutPiece};

const FEN_ELEMENT_PATTERN: &str = "[RHEAKCPNBGMrheakcpnbgm1-9]+";

static FEN_CLAUSE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?m)^FEN[ \t]+(?P<field_state>{FEN_ELEMENT_PATTERN}(?:/{FEN_ELEMENT_PATTERN}){{9}})(?: (?P<starting_party>[rb]))?"
    ))
    .expect("FEN clause pattern")
});

static SETUP_CLAUSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"SETUP\{(?P<body>[^}]+)\}").expect("SETUP clause pattern"));

static SETUP_ITEM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?P<put_piece>[RHEAKCPNBGMrheakcpnbgm][a-i][0-9])|(?P<move_offset>MOVE [1-9][0-9]*)|(?P<start_party>RED|BLACK)")
        .expect("SETUP item pattern")
});

static MOVES_CLAUSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"START\{(?P<body>[^}]+)\}END").expect("START clause pattern"));

pub fn is_wxf_content(content: &str) -> bool {
    content.contains("WXF")
}

/// Build the starting board and the party to move first.
pub fn parse_setup(content: &str) -> Result<(Board, Party)> {
    let mut board = Board::new();

    if let Some(caps) = FEN_CLAUSE.captures(content) {
        for piece in parse_fen(&caps["field_state"])? {
            board.put(piece)?;
        }
        let starting_party = match caps.name("starting_party").map(|m| m.as_str()) {
            Some("b") => Party::Black,
            _ => Party::Red,
        };
        return Ok((board, starting_party));
    }

    let Some(caps) = SETUP_CLAUSE.captures(content) else {
        warn!("No custom setup found, assuming default setup.");
        for piece in default_setup() {
            board.put(piece)?;
        }
        return Ok((board, Party::Red));
    };

    let mut starting_party = Party::Red;
    for item in SETUP_ITEM.captures_iter(&caps["body"]) {
        if let Some(put_piece) = item.name("put_piece") {
            let mut chars = put_piece.as_str().chars();
            let (Some(letter), Some(file), Some(rank)) = (chars.next(), chars.next(), chars.next())
            else {
                continue;
            };
            let x = file as i32 - 'a' as i32;
            let y = rank.to_digit(10).map_or(0, |d| d as i32);
            board.put(PutPiece::from_letter(letter, x, y)?)?;
        } else if let Some(party) = item.name("start_party") {
            starting_party = if party.as_str() == "BLACK" {
                Party::Black
            } else {
                Party::Red
            };
        } else if let Some(offset) = item.name("move_offset") {
            debug!(item = offset.as_str(), "Ignoring move offset in setup");
        }
    }

    Ok((board, starting_party))
}

/// Raw move tokens of the `START{...}END` clause, empty if there is none.
fn move_tokens(content: &str) -> Vec<&str> {
    let Some(body) = MOVES_CLAUSE
        .captures(content)
        .and_then(|caps| caps.name("body"))
    else {
        return Vec::new();
    };
    MOVE_TOKEN.find_iter(body.as_str()).map(|m| m.as_str()).collect()
}

/// Every move of the `START{...}END` clause, empty if there is none.
pub fn parse_moves(content: &str) -> Result<Vec<WxfMove>> {
    move_tokens(content).into_iter().map(str::parse).collect()
}

pub fn parse_wxf(content: &str, options: &ParseOptions) -> Result<Vec<Atom>> {
    let (mut board, starting_party) = parse_setup(content)?;
    // Moves left out by the selection are never resolved.
    let available_moves = move_tokens(content);
    let included_moves = options.moves.select(&available_moves)?;

    // The party flips after every move instead of following the letter case:
    // XieXie writes uppercase letters even when it is Black's turn.
    let mut party = starting_party;
    let mut touched = Vec::new();
    for (i, token) in included_moves.iter().enumerate() {
        let mv: WxfMove = token.parse()?;
        let move_human = match party {
            Party::Red => mv.notation.clone(),
            Party::Black => mv.notation.to_lowercase(),
        };
        info!(
            "Applying move {:>2}: Move {:>2} of {:<5}: {}",
            i + 1,
            i / 2 + 1,
            party.to_string(),
            move_human
        );

        let outcome = board.apply(party, &mv)?;
        if options.annotate_last_move && i + 1 == included_moves.len() {
            touched = outcome.touched();
        }

        party = party.other();
    }

    Ok(board.into_atoms(&touched))
}
