//! xiangqi-setup
//!
//! Reads one Xiangqi notation file (FEN, annoFEN, XAY or WXF) and writes the
//! ordered atoms to draw, for an SVG compositor or as a text preview.

mod config;
mod output;

use std::fs;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use xiangqi_core::NotationFormat;

use crate::config::{Arguments, Config, OutputFormat};

fn main() -> anyhow::Result<()> {
    // Load .env first so RUST_LOG set there reaches the filter
    dotenvy::dotenv().ok();

    // Logs go to stderr, stdout is reserved for the output document
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::load(Arguments::parse())?;

    let content = fs::read_to_string(&config.input_file)
        .with_context(|| format!("Failed to read {}", config.input_file.display()))?;

    let format = NotationFormat::detect(&content);
    info!(
        input = %config.input_file.display(),
        %format,
        moves = %config.parse_options.moves,
        "Parsing notation"
    );

    let atoms = format
        .parse(&content, &config.parse_options)
        .with_context(|| format!("Failed to parse {} as {format}", config.input_file.display()))?;
    info!(atoms = atoms.len(), "Notation parsed");

    let rendered = match config.format {
        OutputFormat::Json => output::render_json(format, &atoms)?,
        OutputFormat::Grid => output::render_grid(&atoms),
    };

    match &config.output {
        Some(path) => fs::write(path, rendered)
            .with_context(|| format!("Failed to write {}", path.display()))?,
        None => print!("{rendered}"),
    }

    Ok(())
}
