//! Host frame loop.
//!
//! Each frame:
//!
//! 1. Advance the engine by one fixed delta, which runs `on_update` for
//!    every live script and applies a scene switch requested during the
//!    frame.
//! 2. If a scene switch was applied, including a reload of the current
//!    scene, populate it and restart the runtime so the new scripts get
//!    `on_create`.
//! 3. Stop once a script asked to quit or the frame limit is reached.

use std::rc::Rc;
use std::time::Instant;

use anyhow::Result;
use eve_native::{HeadlessConfig, HeadlessEngine};
use eve_script::ScriptRegistry;
use eve_script::interop::{self, BridgeGuard};
use tracing::{debug, info, warn};

use crate::config::RuntimeConfig;
use crate::scenes;

pub struct FrameLoop {
    /// Unbinds the engine when the loop is dropped.
    _guard: BridgeGuard,
    engine: Rc<HeadlessEngine>,
    config: RuntimeConfig,
    frame: u64,
    /// Engine scene-switch count the world was last populated for.
    populated: u64,
}

impl FrameLoop {
    /// Create the engine, install `registry` as its managed runtime and bind
    /// it to this thread.
    #[must_use]
    pub fn new(config: RuntimeConfig, registry: ScriptRegistry) -> Self {
        let engine_config =
            HeadlessConfig::new().with_fixed_dt(config.frame_time().as_secs_f32());
        let engine = Rc::new(HeadlessEngine::with_config(engine_config));
        engine.set_runtime(Rc::new(registry));
        let guard = interop::bind(engine.clone());

        Self {
            _guard: guard,
            engine,
            config,
            frame: 0,
            populated: 0,
        }
    }

    #[must_use]
    pub fn frame(&self) -> u64 {
        self.frame
    }

    #[must_use]
    pub fn engine(&self) -> &HeadlessEngine {
        &self.engine
    }

    /// Open `path` and start its scripts.
    pub fn open(&mut self, path: &str) -> Result<()> {
        self.engine.open_scene(path);
        self.enter_scene(path)
    }

    fn enter_scene(&mut self, path: &str) -> Result<()> {
        // Populate with the runtime stopped so every script sees its
        // components in on_create.
        self.engine.stop_runtime();
        scenes::populate(path)?;
        self.populated = self.engine.scene_switches();
        self.engine.start_runtime();
        Ok(())
    }

    /// Run one frame.
    pub fn tick(&mut self) -> Result<()> {
        self.frame += 1;
        debug!(frame = self.frame, "frame start");

        self.engine.step();

        if self.engine.scene_switches() != self.populated
            && let Some(path) = self.engine.active_scene()
        {
            info!(frame = self.frame, path = %path, "entering scene");
            self.enter_scene(&path)?;
        }
        Ok(())
    }

    /// Open the configured scene and run until a script quits or the frame
    /// limit is hit. Returns the number of frames run.
    pub fn run(&mut self) -> Result<u64> {
        let frame_time = self.config.frame_time();
        let scene = self.config.scene.clone();
        self.open(&scene)?;

        info!(
            frame_rate = self.config.frame_rate,
            max_frames = self.config.max_frames,
            scene = %scene,
            "starting frame loop"
        );

        loop {
            let start = Instant::now();
            self.tick()?;

            if self.engine.quit_requested() {
                info!(frames = self.frame, "quit requested");
                break;
            }
            if self.config.max_frames > 0 && self.frame >= self.config.max_frames {
                info!(frames = self.frame, "frame limit reached");
                break;
            }

            if !self.config.paced {
                continue;
            }
            let elapsed = start.elapsed();
            if elapsed < frame_time {
                std::thread::sleep(frame_time - elapsed);
            } else {
                warn!(
                    frame = self.frame,
                    elapsed_ms = elapsed.as_millis() as u64,
                    budget_ms = frame_time.as_millis() as u64,
                    "frame exceeded time budget"
                );
            }
        }

        self.engine.stop_runtime();
        Ok(self.frame)
    }
}
