use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use rules::START_FEN;

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Built-in negamax search
    Local,
    /// Remote move suggester over HTTP
    Custom,
    /// External UCI engine
    Reference,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fallback {
    /// Report remote failures as errors
    Surface,
    /// Answer with the local search when a remote source fails
    Local,
}

#[derive(Parser, Debug)]
#[command(name = "tactician")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Picks a move for a chess position")]
pub struct Args {
    /// Position to move from.
    #[arg(long, default_value = START_FEN)]
    pub fen: String,

    #[arg(long, value_enum, default_value_t = Mode::Local)]
    pub mode: Mode,

    /// Time budget per move in milliseconds.
    #[arg(long)]
    pub time_ms: Option<u64>,

    /// Maximum search depth (local and reference modes).
    #[arg(long)]
    pub depth: Option<u8>,

    /// Move suggester endpoint for custom mode.
    #[arg(long)]
    pub endpoint: Option<String>,

    #[arg(long, default_value = "")]
    pub api_key: String,

    #[arg(long, default_value = "")]
    pub model: String,

    #[arg(long, default_value = "")]
    pub provider: String,

    /// UCI engine binary for reference mode.
    #[arg(long)]
    pub reference_path: Option<PathBuf>,

    /// Extra arguments passed to the reference engine.
    #[arg(long = "reference-arg")]
    pub reference_args: Vec<String>,

    /// Bound on remote requests in milliseconds.
    #[arg(long, default_value_t = 10_000)]
    pub remote_timeout_ms: u64,

    #[arg(long, value_enum, default_value_t = Fallback::Surface)]
    pub fallback: Fallback,

    /// Engine option override, repeatable.
    #[arg(long = "option", value_name = "NAME=VALUE")]
    pub options: Vec<String>,

    /// Print the engine options and exit.
    #[arg(long)]
    pub list_options: bool,

    /// Log search progress to stderr.
    #[arg(short, long)]
    pub verbose: bool,

    /// Log everything to a file for debugging.
    #[arg(short, long)]
    pub log_file: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["tactician"]);
        assert_eq!(args.fen, START_FEN);
        assert_eq!(args.mode, Mode::Local);
        assert_eq!(args.fallback, Fallback::Surface);
        assert!(args.options.is_empty());
    }

    #[test]
    fn test_repeated_options() {
        let args = Args::parse_from([
            "tactician",
            "--mode",
            "reference",
            "--option",
            "HashEntries=4096",
            "--option",
            "OwnBook=true",
            "--reference-path",
            "/usr/bin/stockfish",
        ]);
        assert_eq!(args.mode, Mode::Reference);
        assert_eq!(args.options, vec!["HashEntries=4096", "OwnBook=true"]);
        assert_eq!(args.reference_path, Some(PathBuf::from("/usr/bin/stockfish")));
    }
}
