//! Viewer entry point
//!
//! Run with: cargo run -- [scene-file]
//!
//! The scene file defaults to `input.txt` in the working directory.

use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use hull_vis::{app, load_scene};

const DEFAULT_INPUT: &str = "input.txt";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,hull_vis=debug"));
    fmt().with_env_filter(filter).with_target(true).init();

    let path = std::env::args().nth(1).unwrap_or_else(|| DEFAULT_INPUT.to_string());

    info!(path = %path, "loading scene");
    let scene = load_scene(&path)?;
    info!(
        points = scene.points.len(),
        hull_vertices = scene.hull.len(),
        "scene loaded"
    );

    // Blocks until the window is closed.
    app::run(scene)?;
    Ok(())
}
