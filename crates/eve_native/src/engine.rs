//! The headless engine.
//!
//! [`HeadlessEngine`] owns the world and every engine service the bridge
//! exposes, and it drives the script lifecycle:
//!
//! 1. [`start_runtime`](HeadlessEngine::start_runtime) runs `on_create` for
//!    every bound script.
//! 2. [`update`](HeadlessEngine::update) runs `on_update(dt)` for every
//!    script alive at the start of the frame, then applies a pending scene
//!    switch and clears per-frame input.
//! 3. [`stop_runtime`](HeadlessEngine::stop_runtime) runs `on_destroy`.
//!
//! Scripts bound while the runtime is running get `on_create` at bind time.
//!
//! All state sits behind `RefCell`s. No borrow is ever held across a call
//! into script code, so hooks and trigger callbacks may call back into the
//! bridge freely, including destroying entities mid-frame.

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

use eve_interop::{
    AssetHandle, ColliderKind, CursorMode, EntityId, LogLevel, ManagedRuntime, ScriptHooks,
    TriggerCallback,
};
use glam::{Vec2, Vec3};
use tracing::{debug, error, info, trace, warn};

use crate::assets::{AssetEntry, AssetRegistry};
use crate::components::RigidbodyData;
use crate::config::HeadlessConfig;
use crate::input::InputState;
use crate::transform::Transform;
use crate::world::World;

/// A script-originated log line kept for inspection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub level: LogLevel,
    pub message: String,
    pub frame: u64,
}

/// One collider's trigger slot.
///
/// `revision` changes on every set or clear, which lets a delivery tell
/// whether the callback replaced or cleared its own slot while running.
#[derive(Default)]
pub(crate) struct TriggerSlot {
    pub(crate) revision: u64,
    pub(crate) callback: Option<TriggerCallback>,
}

type TriggerKey = (EntityId, ColliderKind);

pub struct HeadlessEngine {
    pub(crate) config: HeadlessConfig,
    pub(crate) world: RefCell<World>,
    pub(crate) runtime: RefCell<Option<Rc<dyn ManagedRuntime>>>,
    pub(crate) running: Cell<bool>,
    pub(crate) triggers: RefCell<HashMap<TriggerKey, TriggerSlot>>,
    pub(crate) assets: RefCell<AssetRegistry>,
    pub(crate) input: RefCell<InputState>,
    pub(crate) logs: RefCell<VecDeque<LogRecord>>,
    pub(crate) cursor_mode: Cell<CursorMode>,
    pub(crate) quit_requested: Cell<bool>,
    pub(crate) pending_scene: RefCell<Option<String>>,
    pub(crate) active_scene: RefCell<Option<String>>,
    pub(crate) scene_switches: Cell<u64>,
    pub(crate) frame: Cell<u64>,
}

impl Default for HeadlessEngine {
    fn default() -> Self {
        Self::with_config(HeadlessConfig::default())
    }
}

impl HeadlessEngine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: HeadlessConfig) -> Self {
        Self {
            config,
            world: RefCell::new(World::new()),
            runtime: RefCell::new(None),
            running: Cell::new(false),
            triggers: RefCell::new(HashMap::new()),
            assets: RefCell::new(AssetRegistry::new()),
            input: RefCell::new(InputState::new()),
            logs: RefCell::new(VecDeque::new()),
            cursor_mode: Cell::new(CursorMode::Normal),
            quit_requested: Cell::new(false),
            pending_scene: RefCell::new(None),
            active_scene: RefCell::new(None),
            scene_switches: Cell::new(0),
            frame: Cell::new(0),
        }
    }

    #[must_use]
    pub fn config(&self) -> &HeadlessConfig {
        &self.config
    }

    /// Install the managed runtime used to build script instances.
    pub fn set_runtime(&self, runtime: Rc<dyn ManagedRuntime>) {
        *self.runtime.borrow_mut() = Some(runtime);
    }

    pub(crate) fn runtime(&self) -> Option<Rc<dyn ManagedRuntime>> {
        self.runtime.borrow().clone()
    }

    /// Create an entity at the origin, as the editor would.
    pub fn create_entity(&self, name: &str, parent: EntityId) -> EntityId {
        self.spawn(name, parent, Transform::IDENTITY)
    }

    pub(crate) fn spawn(&self, name: &str, parent: EntityId, transform: Transform) -> EntityId {
        let mut world = self.world.borrow_mut();
        let id = world.spawn(name, parent, transform);
        if world.len() > self.config.max_entities {
            warn!(
                count = world.len(),
                max = self.config.max_entities,
                "entity count above configured maximum"
            );
        }
        debug!(entity = %id, name, parent = %parent, "entity spawned");
        id
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running.get()
    }

    /// Enter play mode and run `on_create` for every bound script.
    pub fn start_runtime(&self) {
        if self.running.replace(true) {
            return;
        }
        info!(entities = self.entity_count(), "runtime started");
        for (id, hooks) in self.bound_hooks() {
            if self.world.borrow().contains(id) {
                hooks.on_create();
            }
        }
    }

    /// Advance one frame.
    pub fn update(&self, dt: f32) {
        let frame = self.frame.get() + 1;
        self.frame.set(frame);
        trace!(frame, dt, "frame begin");

        if self.running.get() {
            for (id, hooks) in self.bound_hooks() {
                // Skip entities destroyed earlier in this frame.
                if self.world.borrow().contains(id) {
                    hooks.on_update(dt);
                }
            }
        }

        self.apply_pending_scene();
        self.input.borrow_mut().end_frame();
    }

    /// Advance one frame with the configured fixed delta.
    pub fn step(&self) {
        self.update(self.config.fixed_dt);
    }

    /// Leave play mode, running `on_destroy` for every bound script.
    pub fn stop_runtime(&self) {
        if !self.running.get() {
            return;
        }
        for (id, hooks) in self.bound_hooks() {
            if self.world.borrow().contains(id) {
                hooks.on_destroy();
            }
        }
        self.running.set(false);
        info!(frames = self.frame.get(), "runtime stopped");
    }

    /// Hooks of every bound script, in storage order.
    fn bound_hooks(&self) -> Vec<(EntityId, Rc<dyn ScriptHooks>)> {
        let world = self.world.borrow();
        world
            .ids()
            .filter_map(|id| {
                let instance = world.get(id)?.script.as_ref()?.instance.as_ref()?;
                Some((id, Rc::clone(&instance.hooks)))
            })
            .collect()
    }

    /// Destroy `id` and its descendants, children first.
    pub(crate) fn despawn(&self, id: EntityId) {
        let doomed = self.world.borrow().subtree_post_order(id);
        if doomed.is_empty() {
            debug!(entity = %id, "destroy of unknown entity ignored");
            return;
        }

        for entity in doomed {
            let hooks = self.world.borrow().get(entity).and_then(|r| {
                let instance = r.script.as_ref()?.instance.as_ref()?;
                Some(Rc::clone(&instance.hooks))
            });
            if let Some(hooks) = hooks
                && self.running.get()
            {
                hooks.on_destroy();
            }

            // Children left at this point were attached by an on_destroy hook.
            let late = self
                .world
                .borrow()
                .get(entity)
                .map(|r| r.children.clone())
                .unwrap_or_default();
            for child in late {
                self.despawn(child);
            }

            {
                let mut triggers = self.triggers.borrow_mut();
                triggers.remove(&(entity, ColliderKind::Box));
                triggers.remove(&(entity, ColliderKind::Circle));
            }
            let removed = self.world.borrow_mut().remove(entity);
            if removed.is_some() {
                debug!(entity = %entity, "entity removed");
            }
        }
    }

    pub(crate) fn set_trigger(&self, id: EntityId, kind: ColliderKind, callback: TriggerCallback) {
        let mut triggers = self.triggers.borrow_mut();
        let slot = triggers.entry((id, kind)).or_default();
        slot.revision += 1;
        slot.callback = Some(callback);
    }

    pub(crate) fn clear_trigger(&self, id: EntityId, kind: ColliderKind) {
        if let Some(slot) = self.triggers.borrow_mut().get_mut(&(id, kind)) {
            slot.revision += 1;
            slot.callback = None;
        }
    }

    /// Deliver a trigger contact between `entity`'s collider and `other`.
    ///
    /// Stands in for the physics step. Invokes the registered callback
    /// exactly once and returns whether one was registered.
    pub fn signal_trigger(&self, entity: EntityId, kind: ColliderKind, other: EntityId) -> bool {
        let taken = {
            let mut triggers = self.triggers.borrow_mut();
            triggers
                .get_mut(&(entity, kind))
                .and_then(|slot| Some((slot.revision, slot.callback.take()?)))
        };
        let Some((revision, mut callback)) = taken else {
            return false;
        };

        trace!(entity = %entity, other = %other, collider = ?kind, "trigger delivered");
        callback(other);

        // Put it back unless the slot was replaced, cleared or dropped.
        if let Some(slot) = self.triggers.borrow_mut().get_mut(&(entity, kind))
            && slot.revision == revision
        {
            slot.callback = Some(callback);
        }
        true
    }

    #[must_use]
    pub fn has_trigger(&self, entity: EntityId, kind: ColliderKind) -> bool {
        self.triggers
            .borrow()
            .get(&(entity, kind))
            .is_some_and(|slot| slot.callback.is_some())
    }

    pub(crate) fn push_log(&self, level: LogLevel, message: &str) {
        match level {
            LogLevel::Trace => trace!(target: "eve::client", "{message}"),
            LogLevel::Info => info!(target: "eve::client", "{message}"),
            LogLevel::Warning => warn!(target: "eve::client", "{message}"),
            LogLevel::Error => error!(target: "eve::client", "{message}"),
            LogLevel::Fatal => error!(target: "eve::client", fatal = true, "{message}"),
        }

        let mut logs = self.logs.borrow_mut();
        if self.config.log_capacity == 0 {
            return;
        }
        while logs.len() >= self.config.log_capacity {
            logs.pop_front();
        }
        logs.push_back(LogRecord {
            level,
            message: message.to_owned(),
            frame: self.frame.get(),
        });
    }

    /// Switch to the scene at `path` immediately. Host-side counterpart of
    /// the deferred switch scripts request.
    pub fn open_scene(&self, path: &str) {
        *self.pending_scene.borrow_mut() = Some(path.to_owned());
        self.apply_pending_scene();
    }

    fn apply_pending_scene(&self) {
        let Some(path) = self.pending_scene.borrow_mut().take() else {
            return;
        };
        let was_running = self.running.get();
        if was_running {
            self.stop_runtime();
        }

        let removed = self.world.borrow_mut().clear();
        self.triggers.borrow_mut().clear();
        let switches = self.scene_switches.get() + 1;
        self.scene_switches.set(switches);
        info!(path = %path, removed = removed.len(), switches, "scene switched");
        *self.active_scene.borrow_mut() = Some(path);
        drop(removed);

        if was_running {
            self.start_runtime();
        }
    }

    // Inspection

    #[must_use]
    pub fn entity_count(&self) -> usize {
        self.world.borrow().len()
    }

    #[must_use]
    pub fn frame(&self) -> u64 {
        self.frame.get()
    }

    #[must_use]
    pub fn quit_requested(&self) -> bool {
        self.quit_requested.get()
    }

    /// Path of the scene most recently switched to.
    #[must_use]
    pub fn active_scene(&self) -> Option<String> {
        self.active_scene.borrow().clone()
    }

    /// Number of scene switches applied so far, including reloads of the
    /// active scene.
    #[must_use]
    pub fn scene_switches(&self) -> u64 {
        self.scene_switches.get()
    }

    /// Scene switch requested for the end of the current frame.
    #[must_use]
    pub fn pending_scene(&self) -> Option<String> {
        self.pending_scene.borrow().clone()
    }

    /// Client log lines, oldest first.
    #[must_use]
    pub fn recent_logs(&self) -> Vec<LogRecord> {
        self.logs.borrow().iter().cloned().collect()
    }

    /// Rigidbody state including forces applied since the last step.
    #[must_use]
    pub fn rigidbody(&self, id: EntityId) -> Option<RigidbodyData> {
        self.world.borrow().get(id)?.rigidbody.clone()
    }

    #[must_use]
    pub fn asset(&self, handle: AssetHandle) -> Option<AssetEntry> {
        self.assets.borrow().get(handle).cloned()
    }

    // Host input

    pub fn press_key(&self, key: eve_interop::KeyCode) {
        self.input.borrow_mut().press_key(key);
    }

    pub fn release_key(&self, key: eve_interop::KeyCode) {
        self.input.borrow_mut().release_key(key);
    }

    pub fn press_mouse(&self, button: eve_interop::MouseCode) {
        self.input.borrow_mut().press_mouse(button);
    }

    pub fn release_mouse(&self, button: eve_interop::MouseCode) {
        self.input.borrow_mut().release_mouse(button);
    }

    pub fn set_mouse_position(&self, position: Vec2) {
        self.input.borrow_mut().set_mouse_position(position);
    }

    pub fn scroll(&self, delta: Vec2) {
        self.input.borrow_mut().scroll(delta);
    }

    /// Spawn with an explicit transform.
    pub fn spawn_at(&self, name: &str, parent: EntityId, position: Vec3) -> EntityId {
        self.spawn(name, parent, Transform::new(position, Vec3::ZERO, Vec3::ONE))
    }
}
