use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "refeed",
    author,
    version,
    about = "Feedback visualizer parameter engine driver",
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an input script through the control engine.
    Run(RunArgs),
    /// Inspect a stored preset bank.
    Presets(PresetsArgs),
}

#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Input script: a TOML timeline of held keys and sensor deltas.
    #[arg(long, value_name = "FILE")]
    pub script: PathBuf,

    /// Write a JSON-lines parameter trace (one record per tick) to this path.
    #[arg(long, value_name = "FILE")]
    pub trace: Option<PathBuf>,

    /// Preset bank to load before the session and persist after it
    /// (defaults to the per-user bank).
    #[arg(long, value_name = "FILE")]
    pub presets: Option<PathBuf>,

    /// Print the packed uniform block for the final frame.
    #[arg(long)]
    pub uniforms: bool,
}

#[derive(Parser, Debug)]
pub struct PresetsArgs {
    /// Preset file to inspect (defaults to the per-user bank).
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,
}

pub fn parse() -> Cli {
    Cli::parse()
}
