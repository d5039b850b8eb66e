//! Rendering parsed atoms for the compositor or the terminal.

use serde::Serialize;
use xiangqi_core::board::{HEIGHT, MAX_Y, WIDTH};
use xiangqi_core::{Atom, NotationFormat};

#[derive(Serialize)]
struct Document<'a> {
    format: String,
    atoms: Vec<Placement<'a>>,
}

#[derive(Serialize)]
struct Placement<'a> {
    atom: &'a Atom,
    asset: String,
    x_rel: f64,
    y_rel: f64,
}

pub fn render_json(format: NotationFormat, atoms: &[Atom]) -> serde_json::Result<String> {
    let document = Document {
        format: format.to_string(),
        atoms: atoms
            .iter()
            .map(|atom| {
                let (x_rel, y_rel) = atom.relative_position();
                Placement {
                    atom,
                    asset: atom.asset_stem(),
                    x_rel,
                    y_rel,
                }
            })
            .collect(),
    };
    let mut json = serde_json::to_string_pretty(&document)?;
    json.push('\n');
    Ok(json)
}

/// Board as text, Black's home rank first; annotations listed below.
pub fn render_grid(atoms: &[Atom]) -> String {
    let mut grid = [['.'; WIDTH]; HEIGHT];
    let mut annotations = Vec::new();

    for atom in atoms {
        match atom {
            Atom::Piece(piece) => {
                let row = usize::try_from(MAX_Y - piece.y).ok();
                let column = usize::try_from(piece.x).ok();
                if let (Some(row), Some(column)) = (row, column) {
                    if row < HEIGHT && column < WIDTH {
                        grid[row][column] = piece.fen_letter();
                    }
                }
            }
            Atom::Annotation(annotation) => annotations.push(format!(
                "{} at ({}, {})",
                annotation.annotation_name, annotation.x, annotation.y
            )),
        }
    }

    let mut text = String::new();
    for row in grid {
        text.extend(row);
        text.push('\n');
    }
    for line in annotations {
        text.push_str(&line);
        text.push('\n');
    }
    text
}
