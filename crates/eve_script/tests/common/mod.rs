#![allow(dead_code)]

use std::rc::Rc;

use eve_native::HeadlessEngine;
use eve_script::ScriptRegistry;
use eve_script::interop::{self, BridgeGuard};

/// An engine bound to the current thread. Field order keeps the guard
/// dropping before the engine.
pub struct Harness {
    pub guard: BridgeGuard,
    pub engine: Rc<HeadlessEngine>,
}

pub fn harness() -> Harness {
    harness_with(ScriptRegistry::new())
}

pub fn harness_with(registry: ScriptRegistry) -> Harness {
    let engine = Rc::new(HeadlessEngine::new());
    engine.set_runtime(Rc::new(registry));
    let guard = interop::bind(engine.clone());
    Harness { guard, engine }
}

pub fn messages(engine: &HeadlessEngine) -> Vec<String> {
    engine.recent_logs().into_iter().map(|r| r.message).collect()
}
