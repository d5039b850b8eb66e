//! WXF move tokens and move-count selection.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::error::{NotationError, Result};
use crate::pieces::PieceType;

/// Piece letter, former column, operator, argument; e.g. "H2+3" or "R+.4".
pub(crate) static MOVE_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?P<piece_code>[A-Za-z])(?P<former_column>[1-9+=-])(?P<operator>[.+-])(?P<argument>[1-9])")
        .expect("move token pattern")
});

/// Which of the moving player's pieces a move starts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormerColumn {
    /// Player-relative file 1..=9.
    File(i32),
    /// Furthest advanced of pieces sharing a file.
    Front,
    /// Middle one of three pieces sharing a file.
    Middle,
    /// Furthest back of pieces sharing a file.
    Rear,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Advance,
    Retreat,
    Traverse,
}

impl Operator {
    pub fn symbol(self) -> char {
        match self {
            Operator::Advance => '+',
            Operator::Retreat => '-',
            Operator::Traverse => '.',
        }
    }
}

/// A single parsed WXF move such as "C2.5".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WxfMove {
    pub notation: String,
    pub piece: PieceType,
    pub former_column: FormerColumn,
    pub operator: Operator,
    pub argument: i32,
}

impl WxfMove {
    fn from_captures(caps: &Captures<'_>) -> Result<Self> {
        let field = |name: &str| caps[name].chars().next().unwrap_or_default();

        let piece = PieceType::from_letter(field("piece_code"))?;
        let former_column = match field("former_column") {
            '+' => FormerColumn::Front,
            '=' => FormerColumn::Middle,
            '-' => FormerColumn::Rear,
            digit => FormerColumn::File(digit_value(digit)),
        };
        let operator = match field("operator") {
            '+' => Operator::Advance,
            '-' => Operator::Retreat,
            _ => Operator::Traverse,
        };

        Ok(Self {
            notation: caps[0].to_string(),
            piece,
            former_column,
            operator,
            argument: digit_value(field("argument")),
        })
    }
}

fn digit_value(c: char) -> i32 {
    c.to_digit(10).map_or(0, |d| d as i32)
}

impl FromStr for WxfMove {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        match MOVE_TOKEN.captures(s) {
            Some(caps) if caps[0].len() == s.len() => Self::from_captures(&caps),
            _ => Err(NotationError::MalformedToken(s.to_string())),
        }
    }
}

impl fmt::Display for WxfMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.notation)
    }
}

/// How many of the available moves to replay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MoveSelection {
    #[default]
    All,
    /// N >= 0 plays the first N moves, -K plays all but the last K.
    Count(i64),
}

impl MoveSelection {
    pub const ALL_MOVES: &'static str = "all";

    /// The prefix of `moves` this selection replays.
    pub fn select<'a, T>(&self, moves: &'a [T]) -> Result<&'a [T]> {
        let count = match *self {
            MoveSelection::All => return Ok(moves),
            MoveSelection::Count(count) => count,
        };

        let available = moves.len() as i64;
        if count > available || count < -available {
            return Err(NotationError::MoveCountOutOfRange {
                requested: count,
                min: -available,
                max: available,
            });
        }

        let stop = if count >= 0 { count } else { available + count };
        Ok(&moves[..stop as usize])
    }
}

impl FromStr for MoveSelection {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s == Self::ALL_MOVES {
            return Ok(MoveSelection::All);
        }
        s.parse::<i64>()
            .map(MoveSelection::Count)
            .map_err(|_| NotationError::InvalidMoveSelector(s.to_string()))
    }
}

impl fmt::Display for MoveSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveSelection::All => f.write_str(Self::ALL_MOVES),
            MoveSelection::Count(count) => write!(f, "{count}"),
        }
    }
}
