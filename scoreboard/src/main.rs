//! Scoreboard CLI entry point

use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use trellis::Runtime;

use scoreboard::components::Scoreboard;
use scoreboard::console;
use scoreboard::roster::Roster;

#[derive(Parser)]
#[command(name = "scoreboard")]
#[command(about = "Scoreboard - player roster with per-row score counters", long_about = None)]
struct Cli {
    /// Roster JSON file (array of { "id", "name" }); built-in seed if omitted
    #[arg(long)]
    roster: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let roster = match &cli.roster {
        Some(path) => Roster::load(path)
            .with_context(|| format!("loading roster from {}", path.display()))?,
        None => Roster::seed(),
    };

    let mut runtime = Runtime::mount::<Scoreboard>(roster);

    let interactive = atty::is(atty::Stream::Stdin);
    let stdin = io::stdin();
    console::run(&mut runtime, stdin.lock(), io::stdout(), interactive)?;
    Ok(())
}
