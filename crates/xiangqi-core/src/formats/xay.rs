//! XAY: a YAML document holding a matrix of atom codes.
//!
//! ```yaml
//! version: '1'
//! setup:
//!   - [[r], [h], [e], [a], [k], [a], [e], [h], [r]]
//!   - ...
//! ```
//!
//! Rows run from Black's home rank down, columns from left to right.

use serde_yaml::Value;

use crate::annotations::{annotation_name_of, Atom, PutAnnotation};
use crate::board::MAX_Y;
use crate::error::{NotationError, Result};
use crate::pieces::PutPiece;

const SUPPORTED_VERSION: &str = "1";

/// Content is XAY if it is a YAML mapping with a `setup` key.
/// Anything that does not parse is simply not XAY.
pub fn is_xay_content(content: &str) -> bool {
    matches!(
        serde_yaml::from_str::<Value>(content),
        Ok(Value::Mapping(document)) if document.contains_key("setup")
    )
}

pub fn parse_xay(content: &str) -> Result<Vec<Atom>> {
    let document: Value =
        serde_yaml::from_str(content).map_err(|e| NotationError::InvalidXay(e.to_string()))?;

    match document.get("version") {
        Some(Value::String(version)) if version == SUPPORTED_VERSION => {}
        other => return Err(NotationError::UnsupportedVersion(describe(other))),
    }

    let rows = document
        .get("setup")
        .and_then(Value::as_sequence)
        .ok_or_else(|| NotationError::InvalidXay("setup must be a list of rows".into()))?;

    let mut atoms = Vec::new();
    for (row_index, row) in rows.iter().enumerate() {
        let y = MAX_Y - row_index as i32;
        let columns = as_list(row, || format!("row {row_index} must be a list of fields"))?;

        for (column_index, field) in columns.iter().enumerate() {
            let x = column_index as i32;
            let codes = as_list(field, || {
                format!("field {column_index} of row {row_index} must be a list of atom codes")
            })?;

            for code in codes {
                atoms.push(resolve_atom_code(code, x, y)?);
            }
        }
    }

    Ok(atoms)
}

/// Null stands for an empty list.
fn as_list(value: &Value, message: impl FnOnce() -> String) -> Result<&[Value]> {
    match value {
        Value::Null => Ok(&[]),
        Value::Sequence(items) => Ok(items.as_slice()),
        _ => Err(NotationError::InvalidXay(message())),
    }
}

fn resolve_atom_code(code: &Value, x: i32, y: i32) -> Result<Atom> {
    let Value::String(code) = code else {
        return Err(NotationError::UnsupportedAtomCode(describe(Some(code))));
    };

    let mut chars = code.chars();
    if let (Some(letter), None) = (chars.next(), chars.next()) {
        if let Ok(piece) = PutPiece::from_letter(letter, x, y) {
            return Ok(piece.into());
        }
    }

    match annotation_name_of(code) {
        Some(name) => Ok(PutAnnotation::new(name, x, y).into()),
        None => Err(NotationError::UnsupportedAtomCode(code.clone())),
    }
}

fn describe(value: Option<&Value>) -> String {
    match value {
        None => "(missing)".to_string(),
        Some(Value::String(s)) => format!("{s:?}"),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Null) => "null".to_string(),
        Some(_) => "(structured value)".to_string(),
    }
}
