//! # eve_runtime
//!
//! Runs the demo scenes over the headless engine. The sandbox scene runs
//! for two seconds, then a script switches to the credits scene, which
//! quits the application one second later.
//!
//! ## Startup Sequence
//!
//! 1. Install the `tracing` subscriber (filter from `EVE_LOG`).
//! 2. Register the demo script classes.
//! 3. Open the starting scene and enter the fixed-timestep frame loop.

mod config;
mod frame;
mod scenes;
mod scripts;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::{LOG_ENV, RuntimeConfig};
use frame::FrameLoop;

#[derive(Parser)]
#[command(name = "eve_runtime", about = "Run the demo scenes on the headless engine")]
struct Args {
    /// Number of frames to run (0 runs until a script quits)
    #[arg(short, long, default_value_t = 0)]
    frames: u64,

    /// Target frames per second
    #[arg(short = 'r', long, default_value_t = 60.0)]
    frame_rate: f64,

    /// Scene to open at startup
    #[arg(short, long, default_value = scenes::SANDBOX)]
    scene: String,

    /// Run frames back to back instead of in real time
    #[arg(long)]
    unpaced: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_env(LOG_ENV).add_directive("eve_runtime=info".parse()?))
        .init();

    let args = Args::parse();
    let config = RuntimeConfig::new()
        .with_frame_rate(args.frame_rate)
        .with_max_frames(args.frames)
        .with_scene(args.scene)
        .with_paced(!args.unpaced);
    config.validate()?;

    info!(scene = %config.scene, "runtime starting");

    let mut frame_loop = FrameLoop::new(config, scenes::registry()?);
    let frames = frame_loop.run()?;

    info!(frames, "runtime shut down");
    Ok(())
}
