//! Penguin Catcher headless runner
//!
//! Runs one session on the simulated clock at ~60 frames per second and
//! prints the result. Rendering and real input are not part of this binary.
//!
//! Usage:
//!   penguin-catcher --autoplay --duration-ms 60000
//!   RUST_LOG=debug penguin-catcher --seed 7 --autoplay --json

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use penguin_catcher::sim::GameEvent;
use penguin_catcher::{Autopilot, Session, Settings};

/// Host frame length (one motion tick)
const FRAME_MS: u64 = 16;

#[derive(Parser)]
#[command(name = "penguin-catcher")]
#[command(about = "Run a headless Penguin Catcher session")]
struct Args {
    /// RNG seed (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Simulated session length
    #[arg(long, default_value_t = 30_000)]
    duration_ms: u64,

    /// Settings JSON file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Let the autopilot play
    #[arg(long)]
    autoplay: bool,

    /// Print the final snapshot and summary as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let settings = match &args.config {
        Some(path) => Settings::load(path)
            .with_context(|| format!("loading settings from {}", path.display()))?,
        None => Settings::default(),
    };
    let seed = args.seed.unwrap_or_else(rand::random);

    log::info!("Penguin Catcher (headless) starting...");
    let mut session = Session::new(seed, settings).context("invalid settings")?;
    let mut pilot = args.autoplay.then(Autopilot::default);

    let mut catches = 0u32;
    let mut misses = 0u32;
    while session.now_ms() < args.duration_ms {
        if let Some(pilot) = pilot.as_mut() {
            if let Some(command) = pilot.decide(session.state(), session.settings(), session.now_ms()) {
                session.apply(command);
            }
        }

        let frame = FRAME_MS.min(args.duration_ms - session.now_ms());
        session.advance(frame);

        for event in session.drain_events() {
            match event {
                GameEvent::Caught { .. } => catches += 1,
                GameEvent::Missed { .. } => misses += 1,
                _ => {}
            }
        }
    }

    let snapshot = session.snapshot();
    let summary = session.end();

    if args.json {
        let report = serde_json::json!({
            "snapshot": snapshot,
            "summary": summary,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("=== SESSION RESULTS ===");
        println!("  Seed:     {}", summary.seed);
        println!("  Time:     {:.1}s", summary.elapsed_ms as f64 / 1000.0);
        println!("  Score:    {}", summary.score);
        println!("  Drops:    {} ({} caught, {} missed)", summary.drops, catches, misses);
        println!(
            "  Final:    chopsticks {:.1}%, penguin {:.1}%",
            snapshot.actuator_position, snapshot.roaming_position
        );
    }

    Ok(())
}
