mod cli;
mod paths;
mod run;
mod state;

use anyhow::Result;
use cli::Command;

fn main() -> Result<()> {
    let cli = cli::parse();
    run::initialise_tracing();

    match cli.command {
        Command::Run(args) => run::run(args),
        Command::Presets(args) => run::presets(args),
    }
}
