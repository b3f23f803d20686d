mod common;

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::bail;
use eve_interop::ColliderKind;
use eve_script::prelude::*;
use eve_script::ScriptRegistry;

use common::{harness_with, messages};

struct Player {
    entity: Entity,
    created: u32,
    updates: u32,
    elapsed: f32,
    destroyed: u32,
}

impl Script for Player {
    const CLASS_NAME: &'static str = "Sandbox.Player";

    fn new(entity: Entity) -> Self {
        Self {
            entity,
            created: 0,
            updates: 0,
            elapsed: 0.0,
            destroyed: 0,
        }
    }

    fn entity(&self) -> Entity {
        self.entity
    }

    fn on_create(&mut self) -> anyhow::Result<()> {
        self.created += 1;
        Ok(())
    }

    fn on_update(&mut self, dt: f32) -> anyhow::Result<()> {
        self.updates += 1;
        self.elapsed += dt;
        Ok(())
    }

    fn on_destroy(&mut self) -> anyhow::Result<()> {
        self.destroyed += 1;
        debug::log_info(format_args!("{} destroyed", self.entity.name()));
        Ok(())
    }
}

struct Faulty {
    entity: Entity,
}

impl Script for Faulty {
    const CLASS_NAME: &'static str = "Sandbox.Faulty";

    fn new(entity: Entity) -> Self {
        Self { entity }
    }

    fn entity(&self) -> Entity {
        self.entity
    }

    fn on_create(&mut self) -> anyhow::Result<()> {
        bail!("missing sprite on {}", self.entity.name())
    }
}

struct Unregistered {
    entity: Entity,
}

impl Script for Unregistered {
    const CLASS_NAME: &'static str = "Sandbox.Unregistered";

    fn new(entity: Entity) -> Self {
        Self { entity }
    }

    fn entity(&self) -> Entity {
        self.entity
    }
}

struct LevelExit {
    entity: Entity,
}

impl Script for LevelExit {
    const CLASS_NAME: &'static str = "Sandbox.LevelExit";

    fn new(entity: Entity) -> Self {
        Self { entity }
    }

    fn entity(&self) -> Entity {
        self.entity
    }

    fn on_update(&mut self, _dt: f32) -> anyhow::Result<()> {
        scene_manager::load_scene("scenes/level2.escn");
        Ok(())
    }
}

struct Spawner {
    entity: Entity,
}

impl Script for Spawner {
    const CLASS_NAME: &'static str = "Sandbox.Spawner";

    fn new(entity: Entity) -> Self {
        Self { entity }
    }

    fn entity(&self) -> Entity {
        self.entity
    }

    fn on_update(&mut self, _dt: f32) -> anyhow::Result<()> {
        let origin = self.entity.transform().map(|t| t.position()).unwrap_or_default();
        Entity::instantiate::<Player>("bullet", (self.entity, origin));
        Ok(())
    }
}

/// Leaves an heir under itself when destroyed.
struct Founder {
    entity: Entity,
}

impl Script for Founder {
    const CLASS_NAME: &'static str = "Sandbox.Founder";

    fn new(entity: Entity) -> Self {
        Self { entity }
    }

    fn entity(&self) -> Entity {
        self.entity
    }

    fn on_destroy(&mut self) -> anyhow::Result<()> {
        Entity::instantiate::<Player>("heir", self.entity);
        Ok(())
    }
}

fn registry() -> ScriptRegistry {
    ScriptRegistry::new()
        .with::<Player>()
        .and_then(|r| r.with::<Faulty>())
        .and_then(|r| r.with::<LevelExit>())
        .and_then(|r| r.with::<Spawner>())
        .and_then(|r| r.with::<Founder>())
        .unwrap()
}

#[test]
fn test_instantiate_script_binds_instance() {
    let h = harness_with(registry());
    let player = Entity::instantiate::<Player>("X", Vector3::new(1.0, 2.0, 3.0)).unwrap();
    let entity = player.borrow().entity();

    assert_eq!(entity.name(), "X");
    assert_eq!(entity.transform().unwrap().position(), Vector3::new(1.0, 2.0, 3.0));
    assert_eq!(
        entity.get_component::<ScriptComponent>().unwrap().class_name(),
        "Sandbox.Player"
    );

    let again = entity.as_script::<Player>().unwrap();
    assert!(Rc::ptr_eq(&player, &again));
    assert!(entity.as_script::<Faulty>().is_none());

    // Not running yet: nothing has been created.
    assert_eq!(player.borrow().created, 0);
    h.engine.start_runtime();
    assert_eq!(player.borrow().created, 1);
}

#[test]
fn test_lifecycle_order() {
    let h = harness_with(registry());
    let player = Entity::instantiate::<Player>("p", Spawn::new()).unwrap();

    h.engine.start_runtime();
    h.engine.update(0.5);
    h.engine.update(0.25);
    h.engine.stop_runtime();

    let p = player.borrow();
    assert_eq!(p.created, 1);
    assert_eq!(p.updates, 2);
    assert_eq!(p.elapsed, 0.75);
    assert_eq!(p.destroyed, 1);
}

#[test]
fn test_instantiate_while_running_creates_immediately() {
    let h = harness_with(registry());
    h.engine.start_runtime();
    let player = Entity::instantiate::<Player>("late", Spawn::new()).unwrap();
    assert_eq!(player.borrow().created, 1);
}

#[test]
fn test_unregistered_class_yields_none() {
    let _h = harness_with(registry());
    assert!(Entity::instantiate::<Unregistered>("ghost", Spawn::new()).is_none());

    let ghost = Entity::find_by_name("ghost");
    assert!(ghost.is_valid());
    let script = ghost.get_component::<ScriptComponent>().unwrap();
    assert_eq!(script.class_name(), "Sandbox.Unregistered");
    assert!(ghost.as_script::<Unregistered>().is_none());
}

#[test]
fn test_failing_on_create_does_not_block_others() {
    let h = harness_with(registry());
    let faulty = Entity::instantiate::<Faulty>("faulty", Spawn::new()).unwrap();
    let player = Entity::instantiate::<Player>("player", Spawn::new()).unwrap();

    h.engine.start_runtime();
    h.engine.step();

    assert_eq!(player.borrow().created, 1);
    assert_eq!(player.borrow().updates, 1);
    assert!(faulty.borrow().entity().is_valid());
    assert_eq!(h.engine.entity_count(), 2);
}

#[test]
fn test_destroy_parent_runs_on_destroy_children_first() {
    let h = harness_with(registry());
    let parent = Entity::instantiate::<Player>("parent", Spawn::new()).unwrap();
    let parent_entity = parent.borrow().entity();
    let child = Entity::instantiate::<Player>("child", parent_entity).unwrap();

    h.engine.start_runtime();
    let mut doomed = parent_entity;
    doomed.destroy();

    assert_eq!(parent.borrow().destroyed, 1);
    assert_eq!(child.borrow().destroyed, 1);
    assert_eq!(messages(&h.engine), ["child destroyed", "parent destroyed"]);
    assert_eq!(h.engine.entity_count(), 0);

    // No further hooks for destroyed entities.
    h.engine.stop_runtime();
    assert_eq!(parent.borrow().destroyed, 1);
}

#[test]
fn test_children_added_by_on_destroy_go_with_parent() {
    let h = harness_with(registry());
    let founder = Entity::instantiate::<Founder>("founder", Spawn::new()).unwrap();
    let mut doomed = founder.borrow().entity();

    h.engine.start_runtime();
    doomed.destroy();

    assert_eq!(h.engine.entity_count(), 0);
    assert!(Entity::find_by_name("heir").is_none());
    assert_eq!(messages(&h.engine), ["heir destroyed"]);
}

#[test]
fn test_trigger_delivered_once_per_contact() {
    let h = harness_with(registry());
    let sensor = Entity::instantiate::<Entity>("sensor", Spawn::new()).unwrap();
    let visitor = Entity::instantiate::<Entity>("visitor", Spawn::new()).unwrap();
    let collider = sensor.add_component::<BoxCollider2D>().unwrap();
    collider.set_trigger(true);

    let hits = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&hits);
    collider.set_on_trigger(move |other| sink.borrow_mut().push(other));

    assert!(h.engine.signal_trigger(sensor.id(), ColliderKind::Box, visitor.id()));
    assert_eq!(*hits.borrow(), vec![visitor]);
    assert!(!h.engine.signal_trigger(sensor.id(), ColliderKind::Circle, visitor.id()));
    assert_eq!(hits.borrow().len(), 1);
}

#[test]
fn test_replaced_trigger_suppresses_old_callback() {
    let h = harness_with(registry());
    let sensor = Entity::instantiate::<Entity>("sensor", Spawn::new()).unwrap();
    let collider = sensor.add_component::<CircleCollider2D>().unwrap();

    let log = Rc::new(RefCell::new(Vec::new()));
    let first = Rc::clone(&log);
    collider.set_on_trigger(move |_| first.borrow_mut().push("first"));
    let second = Rc::clone(&log);
    collider.set_on_trigger(move |_| second.borrow_mut().push("second"));

    h.engine.signal_trigger(sensor.id(), ColliderKind::Circle, Entity::INVALID.id());
    assert_eq!(*log.borrow(), vec!["second"]);

    collider.clear_on_trigger();
    assert!(!h.engine.signal_trigger(sensor.id(), ColliderKind::Circle, Entity::INVALID.id()));
}

#[test]
fn test_trigger_callback_may_clear_itself_and_destroy() {
    let h = harness_with(registry());
    let sensor = Entity::instantiate::<Entity>("sensor", Spawn::new()).unwrap();
    let visitor = Entity::instantiate::<Entity>("visitor", Spawn::new()).unwrap();
    let collider = sensor.add_component::<BoxCollider2D>().unwrap();

    collider.set_on_trigger(move |mut other| {
        collider.clear_on_trigger();
        other.destroy();
    });

    assert!(h.engine.signal_trigger(sensor.id(), ColliderKind::Box, visitor.id()));
    assert!(!h.engine.has_trigger(sensor.id(), ColliderKind::Box));
    assert!(Entity::find_by_name("visitor").is_none());
}

#[test]
fn test_scene_switch_requested_from_script() {
    let h = harness_with(registry());
    let player = Entity::instantiate::<Player>("player", Spawn::new()).unwrap();
    Entity::instantiate::<LevelExit>("exit", Spawn::new()).unwrap();

    h.engine.start_runtime();
    h.engine.step();

    assert_eq!(h.engine.active_scene().as_deref(), Some("scenes/level2.escn"));
    assert_eq!(h.engine.entity_count(), 0);
    assert_eq!(player.borrow().updates, 1);
    assert_eq!(player.borrow().destroyed, 1);
    assert!(h.engine.is_running());
}

#[test]
fn test_scripts_spawned_during_update_start_next_frame() {
    let h = harness_with(registry());
    let spawner = Entity::instantiate::<Spawner>("spawner", Vector3::new(0.0, 5.0, 0.0)).unwrap();
    let spawner_entity = spawner.borrow().entity();

    h.engine.start_runtime();
    h.engine.step();
    assert_eq!(h.engine.entity_count(), 2);

    let bullet = Entity::find_by_name("bullet");
    assert_eq!(bullet.parent(), spawner_entity);
    let instance = bullet.as_script::<Player>().unwrap();
    assert_eq!(instance.borrow().created, 1);
    assert_eq!(instance.borrow().updates, 0);
    assert_eq!(
        bullet.transform().unwrap().position(),
        Vector3::new(0.0, 10.0, 0.0)
    );
}
