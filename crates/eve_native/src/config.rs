//! Headless engine configuration.

/// Engine-side settings for a [`HeadlessEngine`](crate::HeadlessEngine).
#[derive(Debug, Clone)]
pub struct HeadlessConfig {
    /// Frame delta used by [`HeadlessEngine::step`](crate::HeadlessEngine::step).
    pub fixed_dt: f32,
    /// Soft limit: exceeding it logs a warning but never refuses a spawn.
    pub max_entities: usize,
    /// Number of client log lines kept for inspection.
    pub log_capacity: usize,
}

impl Default for HeadlessConfig {
    fn default() -> Self {
        Self {
            fixed_dt: 1.0 / 60.0,
            max_entities: 10_000,
            log_capacity: 256,
        }
    }
}

impl HeadlessConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_fixed_dt(mut self, dt: f32) -> Self {
        self.fixed_dt = dt;
        self
    }

    #[must_use]
    pub fn with_max_entities(mut self, max: usize) -> Self {
        self.max_entities = max;
        self
    }

    #[must_use]
    pub fn with_log_capacity(mut self, capacity: usize) -> Self {
        self.log_capacity = capacity;
        self
    }
}
