//! `adventure` - play a Grand Line map in the terminal.
//!
//! Usage: `adventure [-c <config.toml>] [-v...] <MAP>`
use adventure_core::{GameConfig, GameLoop, RustylineEditor, Session};
use adventure_world::World;
use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "adventure")]
#[command(about = "A text adventure across the Grand Line")]
#[command(version)]
struct Cli {
    /// Map file: a JSON array of locations, or TOML with [[location]] tables
    map: PathBuf,

    /// Game configuration file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Verbose logging to stderr (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match &cli.config {
        Some(path) => GameConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => GameConfig::default(),
    };
    let world = World::load(&cli.map)
        .with_context(|| format!("failed to load map {}", cli.map.display()))?;

    let session = Session::new(world, config);
    let editor = RustylineEditor::new().context("failed to open the terminal")?;
    let mut game = GameLoop::new(session, editor, std::io::stdout());
    let status = game.run()?;

    info!("Session ended with {:?}", status);
    Ok(())
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .target(env_logger::Target::Stderr)
        .init();
}
