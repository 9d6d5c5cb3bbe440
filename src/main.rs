use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::{info, Level};

use framefx::{
    batch::BatchRunner,
    config::Config,
    effects::{Effect, EffectRegistry},
};

#[derive(Parser)]
#[command(
    name = "framefx",
    version,
    about = "Apply a batch of frame effects to a video",
    long_about = "framefx decodes a video frame by frame, applies each selected effect, and writes one output video per effect into the output directory."
)]
struct Cli {
    /// Input video file
    #[arg(short, long)]
    input: PathBuf,

    /// Directory for the output videos, one per effect
    #[arg(short, long, default_value = "./output")]
    output_dir: PathBuf,

    /// Comma-separated effects to run (default: all, in registry order)
    #[arg(short, long, value_delimiter = ',')]
    effects: Option<Vec<String>>,

    /// List available effects and exit
    #[arg(long)]
    list_effects: bool,

    /// Configuration file (optional)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt().with_max_level(log_level).init();

    let registry = EffectRegistry::new();

    if cli.list_effects {
        for effect in registry.iter() {
            println!("{:<18} {}", effect.name(), effect.description());
        }
        return Ok(());
    }

    info!("Starting framefx v{}", env!("CARGO_PKG_VERSION"));
    info!("Input: {:?}", cli.input);
    info!("Output dir: {:?}", cli.output_dir);

    // Load configuration
    let config = match cli.config {
        Some(config_path) => {
            info!("Loading configuration from {:?}", config_path);
            Config::from_file(&config_path)?
        }
        None => {
            info!("Using default configuration");
            Config::default()
        }
    };
    config.validate()?;

    // Resolve the effect selection against the registry
    let selected: Vec<&dyn Effect> = match &cli.effects {
        Some(names) => names
            .iter()
            .map(|name| {
                registry.get(name).ok_or_else(|| {
                    anyhow::anyhow!("Unknown effect: {} (try --list-effects)", name)
                })
            })
            .collect::<Result<_, _>>()?,
        None => registry.iter().collect(),
    };

    info!("Running {} effect(s)", selected.len());

    let runner = BatchRunner::new(config);
    let summary = runner.run(&cli.input, &cli.output_dir, &selected)?;

    if !summary.all_succeeded() {
        for (name, reason) in &summary.failed {
            eprintln!("effect '{}' failed: {}", name, reason);
        }
        anyhow::bail!("{} effect(s) failed", summary.failed.len());
    }

    info!("All outputs written to {:?}", cli.output_dir);
    Ok(())
}
