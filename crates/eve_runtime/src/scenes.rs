//! Demo scene content, built through the scripting API.

use anyhow::{Context, Result};
use eve_script::prelude::*;
use eve_script::ScriptRegistry;
use tracing::{info, warn};

use crate::scripts::{Caption, FxPlayer, Player, QuitTimer, SceneTimer};

pub const SANDBOX: &str = "scenes/sandbox.escn";
pub const CREDITS: &str = "scenes/credits.escn";

/// Every demo script class.
pub fn registry() -> Result<ScriptRegistry> {
    let registry = ScriptRegistry::new()
        .with::<Player>()?
        .with::<FxPlayer>()?
        .with::<Caption>()?
        .with::<SceneTimer>()?
        .with::<QuitTimer>()?;
    Ok(registry)
}

/// Fill the freshly opened scene at `path`. Returns `false` for a path with
/// no demo content.
pub fn populate(path: &str) -> Result<bool> {
    match path {
        SANDBOX => sandbox()?,
        CREDITS => credits()?,
        _ => {
            warn!(path, "no content for scene");
            return Ok(false);
        }
    }
    info!(path, "scene populated");
    Ok(true)
}

fn plain(name: &str, spawn: impl Into<Spawn>) -> Result<Entity> {
    Entity::instantiate::<Entity>(name, spawn)
        .filter(|entity| entity.is_valid())
        .with_context(|| format!("failed to create {name}"))
}

fn scripted<T: Script>(name: &str, spawn: impl Into<Spawn>) -> Result<Entity> {
    let script = Entity::instantiate::<T>(name, spawn)
        .with_context(|| format!("failed to create {name} as {}", T::CLASS_NAME))?;
    let entity = script.borrow().entity();
    Ok(entity)
}

fn sandbox() -> Result<()> {
    let camera = plain("Camera", Vector3::new(0.0, 0.0, 1.0))?;
    camera.add_component::<CameraComponent>()?;
    camera.add_component::<PostProcessVolume>()?.set_global(true);

    let player = scripted::<Player>("Player", Vector3::ZERO)?;
    let body = player.add_component::<Rigidbody2D>()?;
    body.set_body_type(BodyType::Dynamic);
    body.set_fixed_rotation(true);
    let collider = player.add_component::<BoxCollider2D>()?;
    collider.set_trigger(true);
    player.add_component::<PostProcessVolume>()?;
    let sprite = player.add_component::<SpriteRenderer>()?;
    sprite.set_texture(asset::load("textures/player.png", AssetType::Texture));

    let fx = scripted::<FxPlayer>("Explosion", (player, Vector3::new(0.0, 1.0, 0.0)))?;
    let sprite = fx.add_component::<SpriteRenderer>()?;
    sprite.set_texture(asset::load("textures/explosion.png", AssetType::Texture));
    sprite.set_tex_tiling(Vector2::new(8.0, 1.0));

    let label = scripted::<Caption>("Greeting", Vector3::new(-0.9, 0.8, 0.0))?;
    let text = label.add_component::<TextRenderer>()?;
    text.set_font(asset::load("fonts/mono.ttf", AssetType::Font));
    text.set_screen_space(true);

    scripted::<SceneTimer>("Director", Spawn::new())?;
    Ok(())
}

fn credits() -> Result<()> {
    let camera = plain("Camera", Vector3::new(0.0, 0.0, 1.0))?;
    camera.add_component::<CameraComponent>()?;

    let text = plain("Credits", Spawn::new())?.add_component::<TextRenderer>()?;
    text.set_text("Thanks for playing");

    scripted::<QuitTimer>("Director", Spawn::new())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use eve_native::HeadlessEngine;
    use eve_script::interop;

    use super::*;

    #[test]
    fn test_registry_holds_every_demo_class() {
        let registry = registry().unwrap();
        assert_eq!(registry.len(), 5);
        assert!(registry.contains("Sample.Player"));
    }

    #[test]
    fn test_sandbox_scene_contents() {
        let engine = Rc::new(HeadlessEngine::new());
        engine.set_runtime(Rc::new(registry().unwrap()));
        let _guard = interop::bind(engine.clone());

        assert!(populate(SANDBOX).unwrap());
        engine.start_runtime();

        let player = Entity::find_by_name("Player");
        assert!(player.has_component::<Rigidbody2D>());
        assert!(player.get_component::<PostProcessVolume>().unwrap().vignette().enabled);

        let greeting = Entity::find_by_name("Greeting");
        let text = greeting.get_component::<TextRenderer>().unwrap();
        assert_eq!(text.text(), "Hello, World!");

        let fx = Entity::find_by_name("Explosion");
        assert_eq!(fx.parent(), player);
    }

    #[test]
    fn test_unknown_scene_is_left_empty() {
        let engine = Rc::new(HeadlessEngine::new());
        let _guard = interop::bind(engine.clone());
        assert!(!populate("scenes/missing.escn").unwrap());
        assert_eq!(engine.entity_count(), 0);
    }
}
