use std::{io, path::PathBuf};

use agent::config::{LearningParameters, StrategyKind};
use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use game::{
    config::GameConfig,
    entrypoint::{self, TrainConfig},
};
use tracing::Level;

#[derive(Parser)]
#[command(name = "jarvis")]
#[command(version, about = "Rock, Paper, Scissors against an opponent that learns your habits")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive session (default).
    Play(PlayArgs),

    /// Train the Q-learning opponent against a simulated random player.
    Train(TrainArgs),
}

#[derive(Args, Default)]
struct LearningArgs {
    /// Learning rate α.
    #[arg(long)]
    learning_rate: Option<f64>,

    /// Discount factor γ.
    #[arg(long)]
    discount_factor: Option<f64>,

    /// Exploration rate ε.
    #[arg(long)]
    epsilon: Option<f64>,
}

impl LearningArgs {
    fn apply(&self, learning: &mut LearningParameters) {
        if let Some(value) = self.learning_rate {
            learning.learning_rate = value;
        }
        if let Some(value) = self.discount_factor {
            learning.discount_factor = value;
        }
        if let Some(value) = self.epsilon {
            learning.epsilon = value;
        }
    }
}

#[derive(Args, Default)]
struct PlayArgs {
    /// Opponent strategy: random, classifier or q-learning.
    #[arg(short, long)]
    strategy: Option<StrategyKind>,

    /// Your name.
    #[arg(short, long)]
    name: Option<String>,

    /// Random seed for reproducible opponents.
    #[arg(long)]
    seed: Option<u64>,

    /// Offline training episodes before the session (q-learning only).
    #[arg(long)]
    pretrain: Option<usize>,

    /// JSON config file. Flags override its values.
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(flatten)]
    learning: LearningArgs,

    /// Log at debug level.
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Args)]
struct TrainArgs {
    /// Number of training episodes.
    #[arg(short, long, default_value = "100")]
    episodes: usize,

    /// Random seed for reproducibility.
    #[arg(long)]
    seed: Option<u64>,

    #[command(flatten)]
    learning: LearningArgs,

    /// Log at debug level.
    #[arg(short, long)]
    verbose: bool,
}

fn level(verbose: bool, configured: Option<Level>) -> Level {
    if verbose {
        Level::DEBUG
    } else {
        configured.unwrap_or(Level::WARN)
    }
}

fn play(args: PlayArgs) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => GameConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => GameConfig::default(),
    };
    if let Some(kind) = args.strategy {
        config.strategy.kind = kind;
    }
    if let Some(name) = args.name {
        config.player_name = name;
    }
    if let Some(seed) = args.seed {
        config.strategy.seed = Some(seed);
    }
    if let Some(episodes) = args.pretrain {
        config.strategy.pretrain_episodes = episodes;
    }
    args.learning.apply(&mut config.strategy.learning);
    entrypoint::init_logging(level(args.verbose, config.log_level()?));

    entrypoint::play(&config, io::stdin().lock(), io::stdout().lock())
        .context("Session failed")?;
    Ok(())
}

fn train(args: TrainArgs) -> Result<()> {
    entrypoint::init_logging(level(args.verbose, None));
    let mut config = TrainConfig {
        episodes: args.episodes,
        seed: args.seed,
        ..Default::default()
    };
    args.learning.apply(&mut config.learning);
    entrypoint::train_offline(&config, io::stdout().lock()).context("Training failed")?;
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command.unwrap_or_else(|| Commands::Play(PlayArgs::default())) {
        Commands::Play(args) => play(args),
        Commands::Train(args) => train(args),
    }
}
