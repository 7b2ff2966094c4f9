//! cuboid-layout - backing and highlight slab geometry for world-space UI panels
//!
//! Loads a scene description, lays out its slabs, replays the scene's scripted
//! dimension changes and prints every slab transform as JSON.

mod config;
mod runner;

use anyhow::{Context, Result};
use clap::Parser;
use config::SceneConfig;
use cuboid_layout_core::MaterialHandle;
use cuboid_layout_testkit::{canonical_json, EventRecord, JsonlSink};
use runner::SceneRun;
use std::{fs, path::PathBuf};
use tracing::info;

#[derive(Parser, Debug)]
#[command(author, version, about = "Lay out cuboid slabs behind UI rectangles", long_about = None)]
struct Args {
    /// Scene file (TOML). Defaults to config/scene.toml, or a built-in scene if that is missing
    #[arg(short, long)]
    scene: Option<PathBuf>,

    /// Write the JSON report here instead of stdout
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Append one JSON line per layout signal to this file
    #[arg(long)]
    event_log: Option<PathBuf>,

    /// Shared material id for standard slabs (overrides the scene's)
    #[arg(long)]
    material: Option<u64>,

    /// Save the effective scene as TOML to this path before laying it out
    #[arg(long)]
    dump_scene: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Initialize tracing with WARN level by default (can be overridden via RUST_LOG env var)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    info!(
        "Starting cuboid-layout v{} (ui3d v{})",
        env!("CARGO_PKG_VERSION"),
        cuboid_layout_ui3d::VERSION
    );

    let args = Args::parse();
    let scene = match &args.scene {
        Some(path) => SceneConfig::from_file(path)
            .with_context(|| format!("failed to load scene from {}", path.display()))?,
        None => SceneConfig::load(),
    };

    if let Some(path) = &args.dump_scene {
        scene
            .save_to_path(path)
            .with_context(|| format!("failed to save scene to {}", path.display()))?;
        info!("saved scene to {}", path.display());
    }

    let mut events = args
        .event_log
        .as_ref()
        .map(JsonlSink::create)
        .transpose()
        .context("failed to create event log")?;

    let mut run = SceneRun::build(&scene).context("failed to build scene")?;

    let pass = run.ready();
    info!(pass = pass.0, "initial layout pass complete");
    if let Some(sink) = events.as_mut() {
        sink.write(&EventRecord {
            pass,
            kind: "ready",
            payload: "slabs instantiated",
        })?;
    }

    for (step_index, step) in scene.resize.iter().enumerate() {
        let relayouts = run
            .apply(step)
            .with_context(|| format!("resize step {step_index} failed"))?;
        info!(step = step_index, relayouts, "applied resize step");
        if let Some(sink) = events.as_mut() {
            let payload = format!("{}[{}]", step.target.as_str(), step.index);
            sink.write(&EventRecord {
                pass: run.passes(),
                kind: "resize",
                payload: &payload,
            })?;
        }
    }

    if let Some(material) = args.material.or(scene.material) {
        run.set_appearance(MaterialHandle(material));
        if let Some(sink) = events.as_mut() {
            let payload = material.to_string();
            sink.write(&EventRecord {
                pass: run.passes(),
                kind: "appearance",
                payload: &payload,
            })?;
        }
    }

    let report = canonical_json(&run.report())?;
    match &args.out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, &report)
                .with_context(|| format!("failed to write report to {}", path.display()))?;
            info!("wrote report to {}", path.display());
        }
        None => print!("{report}"),
    }

    Ok(())
}
