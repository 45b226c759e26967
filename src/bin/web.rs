use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::{get, post},
    Json, Router,
};
use clap::Parser;
use env_logger::Env;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

use atomlattice::controller::Outcome;
use atomlattice::elements::{self, ElementRecord};
use atomlattice::lattice_defs::{Contribution, LatticeType};
use atomlattice::scene::{LastFrame, SceneSnapshot};
use atomlattice::{Intent, Result, Visualizer, VisualizerConfig};

const INDEX_HTML: &str = r##"<!doctype html>
<html>
<head><meta charset="utf-8"><title>Atom &amp; Lattice Visualizer</title></head>
<body>
<h1>Atom &amp; Lattice Visualizer</h1>
<ul>
  <li><code>GET /scene</code> current scene snapshot</li>
  <li><code>POST /intent</code> apply a JSON intent, e.g. <code>{"intent":"select-element","atomic_number":26}</code></li>
  <li><code>POST /frame?count=N</code> advance N animation frames</li>
  <li><code>GET /lattices</code> lattice reference data</li>
  <li><code>GET /elements/{z or symbol}</code> periodic-table entry</li>
</ul>
</body>
</html>
"##;

#[derive(Parser)]
#[command(name = "atomlattice-web")]
struct Cli {
    /// JSON config file (falls back to $ATOMLATTICE_CONFIG)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

/// Aborts the countdown task when dropped, so replacing or clearing the
/// slot always stops the old timer.
struct Countdown {
    ticket: u64,
    task: JoinHandle<()>,
}

impl Drop for Countdown {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// The visualizer and the timer driving its pending request. Both sit
/// behind one lock so the live timer always holds the gate's ticket.
struct Session {
    visualizer: Visualizer,
    countdown: Option<Countdown>,
}

type SharedState = Arc<Mutex<Session>>;

#[derive(Serialize)]
struct IntentResponse {
    outcome: Outcome,
    scene: SceneSnapshot,
}

#[derive(Deserialize)]
struct FrameQuery {
    count: Option<u32>,
}

#[derive(Serialize)]
struct LatticeSummary {
    id: LatticeType,
    name: &'static str,
    coordination_number: u32,
    packing_factor: f32,
    relation: &'static str,
    sites_per_cell: usize,
    /// Whole atoms owned by one cell once shared sites are split.
    atoms_per_cell: u32,
    contribution: Contribution,
}

async fn index() -> impl IntoResponse {
    Html(INDEX_HTML)
}

async fn scene(State(shared): State<SharedState>) -> Json<SceneSnapshot> {
    Json(shared.lock().await.visualizer.snapshot())
}

async fn intent(State(shared): State<SharedState>, Json(intent): Json<Intent>) -> Json<IntentResponse> {
    let mut session = shared.lock().await;
    let outcome = session.visualizer.handle(intent);
    let scene = session.visualizer.snapshot();

    match &outcome {
        Outcome::Deferred { pending } => {
            let ticket = pending.ticket;
            let task = tokio::spawn(run_countdown(shared.clone(), ticket));
            // Replacing the slot drops, and so aborts, any superseded timer
            if let Some(old) = session.countdown.replace(Countdown { ticket, task }) {
                debug!("Countdown {} superseded by {ticket}", old.ticket);
            }
        }
        _ if scene.pending.is_none() => {
            if session.countdown.take().is_some() {
                debug!("Countdown timer cleared");
            }
        }
        _ => {}
    }
    Json(IntentResponse { outcome, scene })
}

async fn run_countdown(shared: SharedState, ticket: u64) {
    loop {
        tokio::time::sleep(Duration::from_secs(1)).await;
        let mut session = shared.lock().await;
        if let Some(remaining) = session.visualizer.tick_countdown(ticket) {
            debug!("Countdown {ticket}: {remaining}s left");
        }
        if !session.visualizer.is_counting_down(ticket) {
            break;
        }
    }
}

async fn frame(State(shared): State<SharedState>, Query(q): Query<FrameQuery>) -> Json<SceneSnapshot> {
    let count = q.count.unwrap_or(1).clamp(1, 600);
    let mut session = shared.lock().await;
    let mut presenter = LastFrame::default();
    for _ in 0..count {
        session.visualizer.frame(&mut presenter);
    }
    Json(presenter.snapshot.unwrap_or_else(|| session.visualizer.snapshot()))
}

async fn lattices() -> Json<Vec<LatticeSummary>> {
    let summaries = LatticeType::ALL
        .into_iter()
        .map(|id| {
            let def = id.definition();
            LatticeSummary {
                id,
                name: def.name,
                coordination_number: def.coordination_number,
                packing_factor: def.packing_factor,
                relation: def.relation,
                sites_per_cell: def.unit_cell.len(),
                atoms_per_cell: def.contribution.total(),
                contribution: def.contribution,
            }
        })
        .collect();
    Json(summaries)
}

#[derive(Serialize)]
struct ElementResponse {
    atomic_number: u32,
    #[serde(flatten)]
    record: &'static ElementRecord,
}

/// `id` is an atomic number or a case-sensitive symbol.
async fn element(Path(id): Path<String>) -> std::result::Result<Json<ElementResponse>, StatusCode> {
    let (atomic_number, record) = elements::lookup(&id).ok_or(StatusCode::NOT_FOUND)?;
    Ok(Json(ElementResponse {
        atomic_number,
        record,
    }))
}

async fn shutdown_signal(shared: SharedState) {
    if tokio::signal::ctrl_c().await.is_err() {
        return;
    }
    info!("Shutting down");
    shared.lock().await.countdown.take();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    let config = VisualizerConfig::load(cli.config.as_deref())?;
    let shared: SharedState = Arc::new(Mutex::new(Session {
        visualizer: Visualizer::new(&config),
        countdown: None,
    }));

    let app = Router::new()
        .route("/", get(index))
        .route("/scene", get(scene))
        .route("/intent", post(intent))
        .route("/frame", post(frame))
        .route("/lattices", get(lattices))
        .route("/elements/:id", get(element))
        .with_state(shared.clone());

    info!("Serving on http://{}", config.bind);
    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shared))
        .await?;
    Ok(())
}
