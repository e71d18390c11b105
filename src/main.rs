use anyhow::{Context, Result};
use clap::Parser;
use retrowars_snake::game::{GameConfig, GameEngine};
use retrowars_snake::modes::HumanMode;
use retrowars_snake::net::{Player, Session, SparringPartner};
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;
use tokio::sync::mpsc::unbounded_channel;
use tracing_subscriber::EnvFilter;

const MY_ID: u64 = 1;
const SPARRING_PARTNER_ID: u64 = 2;

#[derive(Parser)]
#[command(name = "retrowars-snake")]
#[command(version, about = "Snake from the Retrowars arcade, in your terminal")]
struct Cli {
    /// JSON game config; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Grid width in cells
    #[arg(long)]
    width: Option<usize>,

    /// Grid height in cells
    #[arg(long)]
    height: Option<usize>,

    /// Seconds between snake moves
    #[arg(long)]
    time_step: Option<f32>,

    /// Seed food placement for a repeatable game
    #[arg(long)]
    seed: Option<u64>,

    /// Add a practice opponent attacking every N seconds
    #[arg(long)]
    sparring_interval: Option<f64>,

    /// Growth inflicted by each practice attack
    #[arg(long, default_value = "1")]
    sparring_strength: i32,

    /// Where to write logs; the terminal belongs to the game
    #[arg(long, default_value = "retrowars-snake.log")]
    log_file: PathBuf,
}

impl Cli {
    fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::from_file(path)?,
            None => GameConfig::default(),
        };

        if let Some(width) = self.width {
            config.grid_width = width;
        }
        if let Some(height) = self.height {
            config.grid_height = height;
        }
        if let Some(time_step) = self.time_step {
            config.time_step = time_step;
        }

        config.validate().context("Invalid game configuration")?;
        Ok(config)
    }
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_file)?;

    let config = cli.game_config()?;
    tracing::info!(
        "Starting {}x{} grid, {}s per move",
        config.grid_width,
        config.grid_height,
        config.time_step
    );

    let engine = match cli.seed {
        Some(seed) => GameEngine::with_seed(config, seed)?,
        None => GameEngine::new(config)?,
    };

    let mut session = Session::single_player(Player::new(MY_ID, "snake"));
    let (events_tx, events_rx) = unbounded_channel();

    let sparring = match cli.sparring_interval {
        Some(secs) => {
            let every = Duration::try_from_secs_f64(secs)
                .ok()
                .filter(|every| !every.is_zero())
                .with_context(|| format!("Invalid sparring interval {}", secs))?;
            let partner = SparringPartner::new(SPARRING_PARTNER_ID, every, cli.sparring_strength);
            session.add_player(partner.player());
            Some(partner.spawn(events_tx))
        }
        None => {
            drop(events_tx);
            None
        }
    };

    let mut human_mode = HumanMode::new(engine, session);
    let result = human_mode.run(events_rx).await;

    if let Some(task) = sparring {
        task.abort();
    }

    result
}
