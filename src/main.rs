use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::fs::File;
use std::path::{Path, PathBuf};
use torus_snake::game::{GameConfig, GameEngine};
use torus_snake::modes::{HeadlessMode, HumanMode};

#[derive(Parser)]
#[command(name = "torus_snake")]
#[command(version, about = "Snake on a wraparound board")]
struct Cli {
    /// Game mode
    #[arg(long, default_value = "human")]
    mode: Mode,

    /// TOML file with game settings; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Side length of the square board
    #[arg(long)]
    board_size: Option<usize>,

    /// Milliseconds between ticks
    #[arg(long)]
    tick_ms: Option<u64>,

    /// Seed for food placement (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Number of ticks to simulate in headless mode
    #[arg(long, default_value = "100")]
    ticks: u64,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[derive(Clone, ValueEnum)]
enum Mode {
    /// Play snake with keyboard controls
    Human,
    /// Simulate without a UI and print the final board
    Headless,
}

fn init_logger(log_file: Option<&Path>) -> Result<()> {
    let default_filter = if log_file.is_some() { "info" } else { "warn" };
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter));

    if let Some(path) = log_file {
        let file = File::create(path)
            .with_context(|| format!("Failed to create log file {}", path.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder.init();
    Ok(())
}

fn build_config(cli: &Cli) -> Result<GameConfig> {
    let mut config = match &cli.config {
        Some(path) => GameConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => GameConfig::default(),
    };

    if let Some(board_size) = cli.board_size {
        config.board_size = board_size;
    }
    if let Some(tick_ms) = cli.tick_ms {
        config.tick_interval_ms = tick_ms;
    }

    Ok(config)
}

fn build_engine(config: GameConfig, seed: Option<u64>) -> Result<GameEngine> {
    let engine = match seed {
        Some(seed) => GameEngine::seeded(config, seed)?,
        None => GameEngine::new(config)?,
    };
    Ok(engine)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.log_file.as_deref())?;

    let config = build_config(&cli)?;
    log::info!("Starting with {config:?}");
    let engine = build_engine(config, cli.seed)?;

    // Dispatch to appropriate mode
    let result = match cli.mode {
        Mode::Human => {
            let mut human_mode = HumanMode::new(engine);
            human_mode.run().await
        }
        Mode::Headless => HeadlessMode::new(engine, cli.ticks)
            .run()
            .map(|board| print!("{board}"))
            .map_err(anyhow::Error::from),
    };

    if let Err(err) = &result {
        log::error!("{err:#}");
    }
    result
}
