use std::io::Write;
use std::path::PathBuf;

use atomlattice::scene::LastFrame;
use atomlattice::{Intent, Result, Visualizer, VisualizerConfig};
use clap::Parser;
use env_logger::Env;
use log::{info, warn};

/// Apply a sequence of intents, run some frames and print the final scene
/// as JSON.
///
/// Steps use `name[=value]`: `add=proton`, `remove=electron`,
/// `arrangement=structured`, `expansion=1.5`, `view`, `reset`,
/// `mode=lattice`, `toggle-mode`, `lattice=bcc`, `display=27-cells`,
/// `lattice-expansion=1.4`, `outline`, `theme`, `element=92`, `confirm`,
/// `cancel`. `tick` counts one second off a pending confirmation and
/// `wait` runs the whole countdown.
#[derive(Parser)]
#[command(name = "atomlattice")]
#[command(version)]
struct Cli {
    /// Intents to apply, in order
    steps: Vec<String>,

    /// JSON config file (falls back to $ATOMLATTICE_CONFIG)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed for electron phases and orbit orientations
    #[arg(short, long)]
    seed: Option<u64>,

    /// Animation frames to run after the last step
    #[arg(short, long, default_value_t = 1)]
    frames: u64,

    /// Compact instead of pretty JSON
    #[arg(long)]
    compact: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    let mut config = VisualizerConfig::load(cli.config.as_deref())?;
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }

    let mut visualizer = Visualizer::new(&config);
    for step in &cli.steps {
        match step.as_str() {
            "tick" => tick(&mut visualizer),
            "wait" => {
                while visualizer.pending().is_some_and(|p| !p.can_confirm()) {
                    tick(&mut visualizer);
                }
            }
            _ => {
                let intent: Intent = step.parse()?;
                let outcome = visualizer.handle(intent);
                info!("{step}: {outcome:?}");
            }
        }
    }

    let mut presenter = LastFrame::default();
    for _ in 0..cli.frames {
        visualizer.frame(&mut presenter);
    }
    let snapshot = presenter.snapshot.unwrap_or_else(|| visualizer.snapshot());

    let json = if cli.compact {
        serde_json::to_string(&snapshot)?
    } else {
        serde_json::to_string_pretty(&snapshot)?
    };
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{json}")?;
    Ok(())
}

fn tick(visualizer: &mut Visualizer) {
    match visualizer.pending().map(|p| p.ticket) {
        Some(ticket) => {
            if let Some(remaining) = visualizer.tick_countdown(ticket) {
                info!("countdown: {remaining}s left");
            }
        }
        None => warn!("tick with nothing pending"),
    }
}
