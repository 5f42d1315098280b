//! Terminal score keeper.
//!
//! Reads one command per line from stdin, applies it to the saved game and
//! redraws the table on stdout. Logs go to stderr.

use anyhow::{Context, Result};
use clap::Parser;
use muggins::config::GameConfig;
use muggins::render::TextRenderer;
use muggins::shell::{dispatch, Command, HELP};
use muggins::storage::FileStorage;
use muggins::store::GameStore;
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "muggins", version, about = "Two-player tally score keeper")]
struct Args {
    /// Directory the game is saved in
    #[arg(long, default_value = ".muggins")]
    data_dir: PathBuf,

    /// Highest score a player may reach
    #[arg(long)]
    max_score: Option<u32>,

    /// Log filter, e.g. `debug` or `muggins=trace` (defaults to RUST_LOG, then `warn`)
    #[arg(long)]
    log_level: Option<String>,

    /// Draw increment buttons without colour
    #[arg(long)]
    no_color: bool,
}

fn init_tracing(level: Option<&str>) -> Result<()> {
    let filter = match level {
        Some(level) => EnvFilter::try_new(level).context("invalid --log-level")?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.log_level.as_deref())?;

    let mut builder = GameConfig::builder();
    if let Some(limit) = args.max_score {
        builder = builder.max_score(limit);
    }
    let config = builder.build().context("invalid game configuration")?;

    let color = !args.no_color && io::stdout().is_terminal();
    let renderer = TextRenderer::new(io::stdout()).with_color(color);
    let storage = FileStorage::new(args.data_dir.clone());
    info!(data_dir = %args.data_dir.display(), "Opening game");

    let mut store = GameStore::open(config, storage, renderer);

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("failed to read command")?;
        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(e) => {
                println!("{e}");
                continue;
            }
        };

        match command {
            Command::Quit => break,
            Command::Help => println!("{HELP}"),
            other => {
                let outcome = dispatch(&mut store, &other);
                debug!(?other, ?outcome, "Command handled");
            }
        }
        io::stdout().flush().context("failed to flush stdout")?;
    }

    Ok(())
}
