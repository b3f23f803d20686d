//! Runtime host configuration.

use std::time::Duration;

use anyhow::{Result, ensure};

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "EVE_LOG";

/// Configuration for the frame loop.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Target frames per second.
    pub frame_rate: f64,
    /// Maximum number of frames to run (0 = until a script quits).
    pub max_frames: u64,
    /// Scene opened at startup.
    pub scene: String,
    /// Sleep out the rest of each frame's time budget.
    pub paced: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            frame_rate: 60.0,
            max_frames: 0,
            scene: crate::scenes::SANDBOX.to_owned(),
            paced: true,
        }
    }
}

impl RuntimeConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_frame_rate(mut self, frame_rate: f64) -> Self {
        self.frame_rate = frame_rate;
        self
    }

    #[must_use]
    pub fn with_max_frames(mut self, max_frames: u64) -> Self {
        self.max_frames = max_frames;
        self
    }

    #[must_use]
    pub fn with_scene(mut self, scene: impl Into<String>) -> Self {
        self.scene = scene.into();
        self
    }

    #[must_use]
    pub fn with_paced(mut self, paced: bool) -> Self {
        self.paced = paced;
        self
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.frame_rate.is_finite() && self.frame_rate > 0.0,
            "frame rate must be a positive number, got {}",
            self.frame_rate
        );
        ensure!(!self.scene.is_empty(), "scene path must not be empty");
        Ok(())
    }

    /// Wall-clock budget of one frame.
    #[must_use]
    pub fn frame_time(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.frame_rate)
    }
}
