//! CLI configuration from arguments and environment variables

use std::env;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use xiangqi_core::{MoveSelection, ParseOptions};

#[derive(Parser, Debug)]
#[command(
    name = "xiangqi-setup",
    version,
    about = "Turn a Xiangqi FEN, annoFEN, XAY or WXF file into the atoms of a diagram"
)]
pub struct Arguments {
    /// Location of the FEN, annoFEN, XAY or WXF file to read
    #[arg(value_name = "INPUT_FILE")]
    pub input_file: PathBuf,

    /// Where to write the result (default: standard output)
    #[arg(short, long, value_name = "OUTPUT_FILE")]
    pub output: Option<PathBuf>,

    /// WXF moves to play: "all", N for the first N, -K for all but the last K
    /// (default: $XIANGQI_MOVES or "all")
    #[arg(long, value_name = "COUNT", allow_hyphen_values = true)]
    pub moves: Option<MoveSelection>,

    /// Mark origin and destination of the last WXF move played
    #[arg(long)]
    pub annotate_last_move: bool,

    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Atoms plus asset names and relative placement, for the compositor
    Json,
    /// Text preview of the board
    Grid,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub input_file: PathBuf,
    pub output: Option<PathBuf>,
    pub format: OutputFormat,
    pub parse_options: ParseOptions,
}

impl Config {
    /// Merge arguments with environment defaults; explicit flags win.
    pub fn load(arguments: Arguments) -> anyhow::Result<Self> {
        Self::from_parts(arguments, |key| env::var(key).ok())
    }

    fn from_parts(
        arguments: Arguments,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> anyhow::Result<Self> {
        let moves = match arguments.moves {
            Some(moves) => moves,
            None => match lookup("XIANGQI_MOVES") {
                Some(raw) => raw.parse()?,
                None => MoveSelection::All,
            },
        };

        let annotate_last_move = arguments.annotate_last_move
            || lookup("XIANGQI_ANNOTATE_LAST_MOVE").is_some_and(|v| is_truthy(&v));

        Ok(Self {
            input_file: arguments.input_file,
            output: arguments.output,
            format: arguments.format,
            parse_options: ParseOptions {
                moves,
                annotate_last_move,
            },
        })
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
